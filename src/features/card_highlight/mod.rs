pub mod handlers;
pub mod wiring;

pub use handlers::CardHighlighter;
pub use wiring::wire;
