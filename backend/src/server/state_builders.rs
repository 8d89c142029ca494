//! Builders wiring catalogue adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use crate::domain::JeepSalesService;
use crate::domain::ports::{JeepCatalogueQuery, JeepRepository};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::SeededJeepRepository;
use crate::outbound::persistence::DieselJeepRepository;

use super::ServerConfig;

/// Pick the catalogue adapter: PostgreSQL when a pool is configured,
/// otherwise the bundled seed catalogue.
fn build_repository(config: &ServerConfig) -> std::io::Result<Arc<dyn JeepRepository>> {
    match &config.db_pool {
        Some(pool) => {
            info!("serving jeep catalogue from PostgreSQL");
            Ok(Arc::new(DieselJeepRepository::new(pool.clone())))
        }
        None => {
            let repository = SeededJeepRepository::seeded().map_err(|err| {
                std::io::Error::other(format!("bundled jeep catalogue is invalid: {err}"))
            })?;
            info!(entries = repository.len(), "serving bundled jeep catalogue");
            Ok(Arc::new(repository))
        }
    }
}

/// Build the shared handler state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let repository = build_repository(config)?;
    let jeeps: Arc<dyn JeepCatalogueQuery> = Arc::new(JeepSalesService::new(repository));
    Ok(web::Data::new(HttpState::new(jeeps, Arc::new(DefaultClock))))
}
