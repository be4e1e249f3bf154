use std::cell::RefCell;
use std::collections::HashSet;

use crate::board::config::BoardConfig;
use crate::board::dom::{BoardElement, DragSignal};
use crate::board::error::DropError;
use crate::board::models::{DropPayload, DropRequest};
use crate::board::services::{CookieSource, DropTransport, PageActions};

/// Drag feedback and move persistence for the board's columns.
///
/// A drop is split in two: [`prepare_drop`](Self::prepare_drop) reads the
/// event and must run while it is being dispatched, since the browser empties
/// the drag transfer afterwards; [`complete_drop`](Self::complete_drop) sends
/// the request and reacts to the reply.
pub struct ColumnDropHandler<T, P, C> {
    config: BoardConfig,
    transport: T,
    page: P,
    cookies: C,
    in_flight: RefCell<HashSet<String>>,
}

impl<T, P, C> ColumnDropHandler<T, P, C>
where
    T: DropTransport,
    P: PageActions,
    C: CookieSource,
{
    pub fn new(config: &BoardConfig, transport: T, page: P, cookies: C) -> Self {
        Self {
            config: config.clone(),
            transport,
            page,
            cookies,
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    pub fn drag_over(&self, event: &impl DragSignal) {
        event.prevent_default();
    }

    pub fn drag_enter(&self, column: &impl BoardElement) {
        column.add_class(&self.config.drop_target_class);
    }

    pub fn drag_leave(&self, column: &impl BoardElement) {
        column.remove_class(&self.config.drop_target_class);
    }

    /// Clears the drop-target class and builds the request for this drop.
    pub fn prepare_drop(
        &self,
        event: &impl DragSignal,
        column: &impl BoardElement,
    ) -> Result<DropRequest, DropError> {
        column.remove_class(&self.config.drop_target_class);

        let column_id = column
            .data(&self.config.column_id_attribute)
            .ok_or_else(|| DropError::MissingColumnId {
                attribute: self.config.column_id_attribute.clone(),
            })?;
        let card_id = event.transfer_text(&self.config.transfer_format);

        if self.config.guard_in_flight && !self.in_flight.borrow_mut().insert(card_id.clone()) {
            return Err(DropError::AlreadyInFlight { card_id });
        }

        log::debug!("card {} dropped on column {}", card_id, column_id);

        Ok(DropRequest {
            endpoint: self.config.drop_endpoint.clone(),
            payload: DropPayload::new(column_id, card_id),
            csrf_header: self.config.csrf_header.clone(),
            csrf_token: self.cookies.cookie(&self.config.csrf_cookie),
        })
    }

    /// Sends the request; reloads on 2xx, alerts on any other status and
    /// only logs when the request fails to complete.
    pub async fn complete_drop(&self, request: DropRequest) -> Result<(), DropError> {
        if request.csrf_token.is_none() {
            log::warn!(
                "no {} cookie, sending drop without {}",
                self.config.csrf_cookie,
                request.csrf_header
            );
        }

        let result = self.transport.send(&request).await;

        if self.config.guard_in_flight {
            self.in_flight.borrow_mut().remove(&request.payload.card_id);
        }

        match result {
            Ok(response) if response.is_success() => {
                log::info!(
                    "moved card {} to column {}",
                    request.payload.card_id,
                    request.payload.column_id
                );
                self.page.reload();
                Ok(())
            }
            Ok(response) => {
                let err = DropError::ServerRejected {
                    status: response.status,
                    status_text: response.status_text,
                };
                log::warn!("drop rejected with status {}", response.status);
                self.page.alert(&err.to_string());
                Err(err)
            }
            Err(err) => {
                log::error!("drop request failed: {}", err);
                Err(err)
            }
        }
    }

    /// [`prepare_drop`](Self::prepare_drop) for event listeners: a drop that
    /// cannot be sent is logged and yields `None`.
    pub fn begin_drop(
        &self,
        event: &impl DragSignal,
        column: &impl BoardElement,
    ) -> Option<DropRequest> {
        match self.prepare_drop(event, column) {
            Ok(request) => Some(request),
            Err(err) => {
                log::warn!("drop ignored: {}", err);
                None
            }
        }
    }
}
