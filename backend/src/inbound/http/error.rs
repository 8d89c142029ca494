//! HTTP mapping for domain errors.
//!
//! Every failure leaves the service as the same JSON body:
//!
//! ```json
//! {
//!   "message": "No Jeeps found with model=WRANGLER and trim=Unknown",
//!   "status code": 404,
//!   "uri": "/jeeps",
//!   "timestamp": "2026-10-19T09:30:00Z",
//!   "reason": "Not Found"
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::state::HttpState;

const REDACTED_MESSAGE: &str = "Internal server error";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body returned on every failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    #[schema(example = "trim may only contain letters, numbers, or spaces")]
    pub message: String,
    /// Numeric HTTP status.
    #[serde(rename = "status code")]
    #[schema(example = 400)]
    pub status_code: u16,
    /// Request path, without the query string.
    #[schema(example = "/jeeps")]
    pub uri: String,
    /// When the error was produced, RFC 3339 in UTC.
    #[schema(value_type = String, format = DateTime, example = "2026-10-19T09:30:00Z")]
    pub timestamp: DateTime<Utc>,
    /// Canonical reason phrase for the status.
    #[schema(example = "Bad Request")]
    pub reason: String,
}

impl ErrorResponse {
    /// Build the body for `error`. Internal errors are redacted.
    pub fn new(error: &Error, uri: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let status = status_for(error.code());
        let message = if error.code() == ErrorCode::InternalError {
            REDACTED_MESSAGE.to_owned()
        } else {
            error.message().to_owned()
        };
        Self {
            message,
            status_code: status.as_u16(),
            uri: uri.into(),
            timestamp,
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }
}

/// A domain error bound to the request it failed.
#[derive(Debug, Clone)]
pub struct ApiError {
    error: Error,
    uri: String,
    timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(error: Error, uri: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            error,
            uri: uri.into(),
            timestamp,
        }
    }

    /// Bind `error` to `req`, stamping it with the application clock.
    pub fn from_request(error: Error, req: &HttpRequest) -> Self {
        let timestamp = req
            .app_data::<web::Data<HttpState>>()
            .map_or_else(|| DefaultClock.utc(), |state| state.now());
        Self::new(error, req.path(), timestamp)
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::new(&self.error, self.uri.as_str(), self.timestamp)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.uri)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                code = ?self.error.code(),
                message = self.error.message(),
                details = ?self.error.details(),
                uri = %self.uri,
                "request failed"
            );
        } else {
            info!(
                status = status.as_u16(),
                message = self.error.message(),
                details = ?self.error.details(),
                uri = %self.uri,
                "request rejected"
            );
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.body())
    }
}

/// `QueryConfig` error handler: malformed query strings become 400s.
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    ApiError::from_request(
        Error::invalid_request(format!("invalid query string: {err}")),
        req,
    )
    .into()
}

/// Fallback for requests that match no route.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::from_request(
        Error::not_found(format!("No resource found for {} {}", req.method(), req.path())),
        &req,
    ))
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::from_request(
        Error::method_not_allowed(format!(
            "Method {} is not supported for {}",
            req.method(),
            req.path()
        )),
        &req,
    ))
}
