//! Utility module - shared error types and logging
//!
//! - [`AppError`] - application error taxonomy
//! - [`AppResponse`] - success response envelope
//! - [`logger`] - tracing subscriber setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult, ErrorResponse};
