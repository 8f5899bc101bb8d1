//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the response-time survey domain.

mod errors;
mod intensity;
mod response_time;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use intensity::Intensity;
pub use response_time::ResponseTime;
pub use timestamp::Timestamp;
