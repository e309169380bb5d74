pub mod config;
pub mod quote;
