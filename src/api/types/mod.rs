//! API request/response types

mod error;

pub use error::{ApiError, ApiErrorResponse, GENERIC_ERROR_MESSAGE};
