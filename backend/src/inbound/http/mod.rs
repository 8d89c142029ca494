//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod jeeps;
pub mod schemas;
pub mod state;
pub(crate) mod validation;

pub use error::{ApiError, ApiResult, ErrorResponse};
