//! Outbound adapters implementing the catalogue repository port.
//!
//! - **persistence**: PostgreSQL via Diesel.
//! - **memory**: the bundled seed catalogue.

pub mod memory;
pub mod persistence;
