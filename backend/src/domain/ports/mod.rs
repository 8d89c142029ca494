//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`JeepCatalogueQuery`) are what inbound adapters call;
//! driven ports (`JeepRepository`) are what outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod jeep_catalogue_query;
mod jeep_repository;

#[cfg(test)]
pub use jeep_catalogue_query::MockJeepCatalogueQuery;
pub use jeep_catalogue_query::JeepCatalogueQuery;
#[cfg(test)]
pub use jeep_repository::MockJeepRepository;
pub use jeep_repository::{JeepRepository, JeepRepositoryError};
