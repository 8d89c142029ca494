//! Driving port for catalogue lookups.

use async_trait::async_trait;

use crate::domain::{Error, Jeep, JeepQuery};

/// Use-case port called by inbound adapters to fetch catalogue entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JeepCatalogueQuery: Send + Sync {
    /// Fetch the entries matching a validated query.
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when nothing matches.
    async fn fetch_jeeps(&self, query: &JeepQuery) -> Result<Vec<Jeep>, Error>;
}
