//! Jeep sales catalogue service.
//!
//! A hexagonal layout: [`domain`] holds the catalogue model and ports,
//! [`outbound`] the PostgreSQL and in-memory adapters, [`inbound`] the HTTP
//! adapter, and [`server`] wires them together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
