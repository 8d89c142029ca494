//! Diesel row structs for the catalogue tables.

use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::models;

/// Row read from the `models` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = models)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JeepRow {
    pub model_id: String,
    pub trim_level: String,
    pub num_doors: i32,
    pub wheel_size: i32,
    pub base_price: Decimal,
}
