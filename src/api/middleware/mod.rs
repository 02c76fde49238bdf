//! API middleware components

pub mod logging;
pub mod timing;

pub use logging::logging_middleware;
pub use timing::{response_time_middleware, RESPONSE_TIME_HEADER};
