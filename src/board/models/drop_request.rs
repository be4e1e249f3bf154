use serde::Serialize;

/// Body of the POST that moves a card into a column.
///
/// Field order is part of the wire format: the server receives
/// `{"column_id":"…","card_id":"…"}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DropPayload {
    pub column_id: String,
    pub card_id: String,
}

impl DropPayload {
    pub fn new(column_id: impl Into<String>, card_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            card_id: card_id.into(),
        }
    }

    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Everything a transport needs to send one drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    pub endpoint: String,
    pub payload: DropPayload,
    pub csrf_header: String,
    /// `None` when the CSRF cookie is absent; the header is then omitted.
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResponse {
    pub status: u16,
    pub status_text: String,
}

impl DropResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
