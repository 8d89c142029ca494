//! Jeep sales catalogue service.
//!
//! Implements the [`JeepCatalogueQuery`] driving port on top of a
//! [`JeepRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{JeepCatalogueQuery, JeepRepository, JeepRepositoryError};
use crate::domain::{Error, Jeep, JeepQuery};

fn map_repository_error(error: JeepRepositoryError) -> Error {
    match error {
        JeepRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("jeep catalogue unavailable: {message}"))
        }
        JeepRepositoryError::Query { message } => {
            Error::internal(format!("jeep catalogue error: {message}"))
        }
    }
}

/// Catalogue lookup service.
pub struct JeepSalesService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for JeepSalesService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> JeepSalesService<R> {
    /// Create a service reading from `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> JeepCatalogueQuery for JeepSalesService<R>
where
    R: JeepRepository + ?Sized,
{
    async fn fetch_jeeps(&self, query: &JeepQuery) -> Result<Vec<Jeep>, Error> {
        info!(model = %query.model(), trim = %query.trim(), "fetching jeeps");

        let jeeps = self
            .repository
            .find_by_model_and_trim(query.model(), query.trim())
            .await
            .map_err(|error| {
                warn!(%error, "jeep catalogue lookup failed");
                map_repository_error(error)
            })?;

        if jeeps.is_empty() {
            return Err(Error::not_found(format!(
                "No Jeeps found with model={} and trim={}",
                query.model(),
                query.trim()
            )));
        }

        debug!(count = jeeps.len(), "jeeps found");
        Ok(jeeps)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockJeepRepository;
    use crate::domain::{ErrorCode, JeepDraft, JeepModel};
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    fn jeep(num_doors: i32, cents: i64) -> Jeep {
        Jeep::new(JeepDraft {
            model: JeepModel::Wrangler,
            trim_level: "Sport".to_owned(),
            num_doors,
            wheel_size: 17,
            base_price: Decimal::new(cents, 2),
        })
        .expect("valid jeep")
    }

    #[fixture]
    fn sport_query() -> JeepQuery {
        JeepQuery::new(Some("WRANGLER"), Some("Sport")).expect("valid query")
    }

    fn service(repository: MockJeepRepository) -> JeepSalesService<MockJeepRepository> {
        JeepSalesService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn returns_repository_rows(sport_query: JeepQuery) {
        let expected = vec![jeep(2, 2_847_500), jeep(4, 3_197_500)];
        let rows = expected.clone();
        let mut repository = MockJeepRepository::new();
        repository
            .expect_find_by_model_and_trim()
            .with(eq(JeepModel::Wrangler), eq(sport_query.trim().clone()))
            .times(1)
            .return_once(move |_, _| Ok(rows));

        let jeeps = service(repository)
            .fetch_jeeps(&sport_query)
            .await
            .expect("jeeps found");
        assert_eq!(jeeps, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_result_is_not_found(sport_query: JeepQuery) {
        let mut repository = MockJeepRepository::new();
        repository
            .expect_find_by_model_and_trim()
            .return_once(|_, _| Ok(Vec::new()));

        let error = service(repository)
            .fetch_jeeps(&sport_query)
            .await
            .expect_err("no jeeps");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(
            error.message(),
            "No Jeeps found with model=WRANGLER and trim=Sport"
        );
    }

    #[rstest]
    #[case(JeepRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(JeepRepositoryError::query("bad column"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_failures_are_mapped(
        sport_query: JeepQuery,
        #[case] failure: JeepRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockJeepRepository::new();
        repository
            .expect_find_by_model_and_trim()
            .return_once(move |_, _| Err(failure));

        let error = service(repository)
            .fetch_jeeps(&sport_query)
            .await
            .expect_err("repository failure");
        assert_eq!(error.code(), expected);
    }
}
