use thiserror::Error;

/// Ways a column drop can end without a page reload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DropError {
    /// Non-2xx reply. Displays as the text shown to the user.
    #[error("Error! {status_text}")]
    ServerRejected { status: u16, status_text: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("column element has no data-{attribute} attribute")]
    MissingColumnId { attribute: String },

    #[error("a drop for card {card_id} is already in flight")]
    AlreadyInFlight { card_id: String },
}

/// Failures while attaching handlers to the page.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("failed to register {event} listener: {reason}")]
    Listener { event: String, reason: String },
}

impl From<WireError> for wasm_bindgen::JsValue {
    fn from(err: WireError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

/// Renders a thrown JS value for logs and error messages.
pub fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_rejection_displays_as_alert_text() {
        let err = DropError::ServerRejected {
            status: 400,
            status_text: "Bad Request".to_string(),
        };
        assert_eq!(err.to_string(), "Error! Bad Request");
    }

    #[test]
    fn missing_column_names_the_attribute() {
        let err = DropError::MissingColumnId {
            attribute: "column-id".to_string(),
        };
        assert_eq!(err.to_string(), "column element has no data-column-id attribute");
    }
}
