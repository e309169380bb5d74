pub mod errors;
pub mod quotes;
pub mod rotation;

pub use errors::{ServiceError, ServiceResult};
