//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs and the table definitions stay private to this module; callers
//! only see domain types through [`DieselJeepRepository`].
//!
//! ```ignore
//! use jeep_sales::outbound::persistence::{DbPool, DieselJeepRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/jeeps")).await?;
//! let repository = DieselJeepRepository::new(pool);
//! ```

mod diesel_helpers;
mod diesel_jeep_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_jeep_repository::DieselJeepRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
