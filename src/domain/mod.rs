pub mod quote;
pub mod types;
