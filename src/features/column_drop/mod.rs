pub mod handlers;
pub mod wiring;

pub use handlers::ColumnDropHandler;
pub use wiring::wire;
