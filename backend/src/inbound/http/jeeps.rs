//! Catalogue lookup endpoint.
//!
//! ```text
//! GET /jeeps?model=WRANGLER&trim=Sport
//! ```

use actix_web::{HttpRequest, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{Jeep, JeepQuery, JeepValidationError};
use crate::inbound::http::error::{ApiError, ApiResult, ErrorResponse};
use crate::inbound::http::schemas::JeepSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::jeep_query_error;

/// Raw query parameters; validated into a [`JeepQuery`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchJeepsParams {
    /// Catalogue model identifier.
    #[param(example = "WRANGLER")]
    pub model: Option<String>,
    /// Trim level: letters, digits and spaces, at most 30 characters.
    #[param(example = "Sport")]
    pub trim: Option<String>,
}

impl FetchJeepsParams {
    fn validate(&self) -> Result<JeepQuery, (JeepValidationError, Option<&str>)> {
        JeepQuery::new(self.model.as_deref(), self.trim.as_deref()).map_err(|err| {
            let value = match &err {
                JeepValidationError::MissingModel | JeepValidationError::UnknownModel { .. } => {
                    self.model.as_deref()
                }
                _ => self.trim.as_deref(),
            };
            (err, value)
        })
    }
}

/// List catalogue entries for a model and trim level.
///
/// Results are ordered by trim level then number of doors.
#[utoipa::path(
    get,
    path = "/jeeps",
    params(FetchJeepsParams),
    responses(
        (status = 200, description = "Matching catalogue entries", body = [JeepSchema]),
        (status = 400, description = "Invalid model or trim", body = ErrorResponse),
        (status = 404, description = "No entries for the model and trim", body = ErrorResponse),
        (status = 405, description = "Only GET is supported", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Catalogue store unavailable", body = ErrorResponse)
    ),
    tags = ["jeeps"],
    operation_id = "fetchJeeps"
)]
pub async fn fetch_jeeps(
    req: HttpRequest,
    state: web::Data<HttpState>,
    params: web::Query<FetchJeepsParams>,
) -> ApiResult<web::Json<Vec<Jeep>>> {
    let query = params
        .validate()
        .map_err(|(err, value)| ApiError::from_request(jeep_query_error(&err, value), &req))?;

    let jeeps = state
        .jeeps
        .fetch_jeeps(&query)
        .await
        .map_err(|err| ApiError::from_request(err, &req))?;

    debug!(count = jeeps.len(), "returning jeeps");
    Ok(web::Json(jeeps))
}
