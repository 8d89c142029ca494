//! Read-side port for the jeep catalogue store.
//!
//! Keeps Diesel and the seeded in-memory catalogue behind the hexagonal
//! boundary; the domain only sees validated [`Jeep`] values.

use async_trait::async_trait;

use crate::domain::{Jeep, JeepModel, TrimLevel};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the jeep catalogue.
    pub enum JeepRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "jeep catalogue connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "jeep catalogue query failed: {message}",
    }
}

/// Port for looking up catalogue entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JeepRepository: Send + Sync {
    /// Return every entry for `model` whose trim level equals `trim`.
    ///
    /// Results are ordered by trim level then number of doors. No match is
    /// an empty vector, not an error.
    async fn find_by_model_and_trim(
        &self,
        model: JeepModel,
        trim: &TrimLevel,
    ) -> Result<Vec<Jeep>, JeepRepositoryError>;
}
