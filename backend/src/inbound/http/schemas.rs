//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape inside the HTTP adapter.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::JeepModel`].
#[derive(ToSchema)]
#[schema(as = JeepModel)]
pub enum JeepModelSchema {
    #[schema(rename = "RENEGADE")]
    Renegade,
    #[schema(rename = "COMPASS")]
    Compass,
    #[schema(rename = "CHEROKEE")]
    Cherokee,
    #[schema(rename = "GRAND_CHEROKEE")]
    GrandCherokee,
    #[schema(rename = "WRANGLER")]
    Wrangler,
    #[schema(rename = "WRANGLER_4XE")]
    Wrangler4xe,
    #[schema(rename = "GLADIATOR")]
    Gladiator,
    #[schema(rename = "WAGONEER")]
    Wagoneer,
    #[schema(rename = "GRAND_WAGONEER")]
    GrandWagoneer,
}

/// OpenAPI schema for [`crate::domain::Jeep`].
#[derive(ToSchema)]
#[schema(as = Jeep)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct JeepSchema {
    model: JeepModelSchema,
    /// Trim level name.
    #[schema(example = "Sport", max_length = 30, pattern = "^[A-Za-z0-9 ]+$")]
    trim_level: String,
    #[schema(example = 2)]
    num_doors: i32,
    /// Wheel diameter in inches.
    #[schema(example = 17)]
    wheel_size: i32,
    /// Base price in US dollars.
    #[schema(example = 28475.0)]
    base_price: f64,
}
