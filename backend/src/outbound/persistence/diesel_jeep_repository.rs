//! PostgreSQL-backed `JeepRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{JeepRepository, JeepRepositoryError};
use crate::domain::{Jeep, JeepDraft, JeepModel, TrimLevel};

use super::diesel_helpers::{collect_rows, map_diesel_error, map_pool_error};
use super::models::JeepRow;
use super::pool::DbPool;
use super::schema::models;

/// Diesel-backed implementation of the catalogue repository port.
#[derive(Clone)]
pub struct DieselJeepRepository {
    pool: DbPool,
}

impl DieselJeepRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_jeep(row: JeepRow) -> Result<Jeep, String> {
    let model = row
        .model_id
        .parse::<JeepModel>()
        .map_err(|err| err.to_string())?;
    Jeep::new(JeepDraft {
        model,
        trim_level: row.trim_level,
        num_doors: row.num_doors,
        wheel_size: row.wheel_size,
        base_price: row.base_price,
    })
    .map_err(|err| format!("invalid catalogue row for {model}: {err}"))
}

#[async_trait]
impl JeepRepository for DieselJeepRepository {
    async fn find_by_model_and_trim(
        &self,
        model: JeepModel,
        trim: &TrimLevel,
    ) -> Result<Vec<Jeep>, JeepRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JeepRow> = models::table
            .filter(models::model_id.eq(model.as_str()))
            .filter(models::trim_level.eq(trim.as_str()))
            .order_by((models::trim_level.asc(), models::num_doors.asc()))
            .select(JeepRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(rows = rows.len(), %model, "catalogue rows loaded");
        collect_rows(rows.into_iter().map(row_to_jeep), JeepRepositoryError::query)
    }
}
