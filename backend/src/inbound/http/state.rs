//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only depend on domain ports, so
//! they stay testable without I/O.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::ports::JeepCatalogueQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub jeeps: Arc<dyn JeepCatalogueQuery>,
    /// Source of error body timestamps.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    pub fn new(jeeps: Arc<dyn JeepCatalogueQuery>, clock: Arc<dyn Clock>) -> Self {
        Self { jeeps, clock }
    }

    /// Current UTC time according to the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}
