//! OpenAPI documentation for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::{JeepModelSchema, JeepSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jeep sales API",
        description = "Look up Jeep catalogue entries by model and trim level.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::jeeps::fetch_jeeps,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(JeepSchema, JeepModelSchema, ErrorResponse)),
    tags(
        (name = "jeeps", description = "Catalogue lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
