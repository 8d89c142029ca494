//! Error mapping shared by the Diesel adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::JeepRepositoryError;

use super::pool::PoolError;

/// Map pool failures to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> JeepRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            JeepRepositoryError::connection(message)
        }
    }
}

/// Map Diesel failures to repository errors.
///
/// Lost connections are reported as connection errors; everything else is a
/// query error with a generic message.
pub(crate) fn map_diesel_error(error: DieselError) -> JeepRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            JeepRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(..) => JeepRepositoryError::query("database error"),
        _ => JeepRepositoryError::query("database query error"),
    }
}

/// Collect row conversion results, mapping the first error through `map_err`.
pub(crate) fn collect_rows<T, E>(
    results: impl Iterator<Item = Result<T, String>>,
    map_err: impl FnOnce(String) -> E,
) -> Result<Vec<T>, E> {
    results.collect::<Result<Vec<_>, _>>().map_err(map_err)
}
