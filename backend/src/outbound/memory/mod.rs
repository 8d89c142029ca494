//! In-memory catalogue adapter.
//!
//! Serves the bundled `fixtures/jeeps.json` catalogue when no database is
//! configured, and backs the HTTP integration tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{JeepRepository, JeepRepositoryError};
use crate::domain::{Jeep, JeepModel, TrimLevel};

const SEED_CATALOGUE: &str = include_str!("../../../fixtures/jeeps.json");

/// Read-only catalogue held in memory.
///
/// # Examples
/// ```
/// use jeep_sales::outbound::memory::SeededJeepRepository;
///
/// let repository = SeededJeepRepository::seeded().unwrap();
/// assert!(!repository.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SeededJeepRepository {
    jeeps: Arc<[Jeep]>,
}

impl SeededJeepRepository {
    /// Build a repository over the given records.
    pub fn new(jeeps: impl IntoIterator<Item = Jeep>) -> Self {
        let mut jeeps: Vec<Jeep> = jeeps.into_iter().collect();
        jeeps.sort_by(|a, b| {
            a.trim_level()
                .as_str()
                .cmp(b.trim_level().as_str())
                .then(a.num_doors().cmp(&b.num_doors()))
        });
        Self {
            jeeps: jeeps.into(),
        }
    }

    /// Load the bundled seed catalogue.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        Self::from_json(SEED_CATALOGUE)
    }

    /// Parse a JSON array of catalogue records.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let jeeps: Vec<Jeep> = serde_json::from_str(raw)?;
        Ok(Self::new(jeeps))
    }

    pub fn len(&self) -> usize {
        self.jeeps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jeeps.is_empty()
    }
}

#[async_trait]
impl JeepRepository for SeededJeepRepository {
    async fn find_by_model_and_trim(
        &self,
        model: JeepModel,
        trim: &TrimLevel,
    ) -> Result<Vec<Jeep>, JeepRepositoryError> {
        Ok(self
            .jeeps
            .iter()
            .filter(|jeep| jeep.model() == model && jeep.trim_level() == trim)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    #[fixture]
    fn repository() -> SeededJeepRepository {
        SeededJeepRepository::seeded().expect("bundled catalogue parses")
    }

    fn trim(raw: &str) -> TrimLevel {
        TrimLevel::new(raw).expect("valid trim")
    }

    #[rstest]
    #[tokio::test]
    async fn finds_both_wrangler_sport_configurations(repository: SeededJeepRepository) {
        let jeeps = repository
            .find_by_model_and_trim(JeepModel::Wrangler, &trim("Sport"))
            .await
            .expect("lookup succeeds");

        let summary: Vec<_> = jeeps
            .iter()
            .map(|j| (j.num_doors(), j.wheel_size(), j.base_price()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (2, 17, Decimal::new(2_847_500, 2)),
                (4, 17, Decimal::new(3_197_500, 2)),
            ]
        );
    }

    #[rstest]
    #[case(JeepModel::Wrangler, "Unknown trim name")]
    #[case(JeepModel::Wrangler, "sport")]
    #[case(JeepModel::Renegade, "Rubicon")]
    #[tokio::test]
    async fn unmatched_lookups_are_empty(
        repository: SeededJeepRepository,
        #[case] model: JeepModel,
        #[case] raw_trim: &str,
    ) {
        let jeeps = repository
            .find_by_model_and_trim(model, &trim(raw_trim))
            .await
            .expect("lookup succeeds");
        assert!(jeeps.is_empty());
    }

    #[rstest]
    fn every_model_is_stocked(repository: SeededJeepRepository) {
        for model in JeepModel::ALL {
            assert!(
                repository.jeeps.iter().any(|j| j.model() == model),
                "{model} missing from seed catalogue"
            );
        }
    }

    #[rstest]
    fn rejects_invalid_records() {
        let raw = r#"[{"model":"WRANGLER","trimLevel":"Sport","numDoors":0,"wheelSize":17,"basePrice":1.0}]"#;
        assert!(SeededJeepRepository::from_json(raw).is_err());
    }
}
