pub mod cookies;
pub mod http;
pub mod page;

pub use cookies::*;
pub use http::*;
pub use page::*;
