pub mod category;
pub mod config;
pub mod error;
pub mod ipv4;
