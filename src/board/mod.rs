pub mod config;
pub mod dom;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
