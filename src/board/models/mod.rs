pub mod drop_request;

// Wire types shared by the column drop feature and its transport
pub use drop_request::{DropPayload, DropRequest, DropResponse};
