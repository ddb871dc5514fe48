pub mod app;
pub mod configs;
pub mod error;
pub mod http;
pub mod logger;
pub mod server;
pub mod utils;
