//! Diesel catalogue adapter against embedded PostgreSQL.
//!
//! Opt-in: run with `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

mod support;

use jeep_sales::domain::ports::{JeepRepository, JeepRepositoryError};
use jeep_sales::domain::{JeepModel, TrimLevel};
use jeep_sales::outbound::persistence::{
    DbPool, DieselJeepRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rust_decimal::Decimal;
use std::time::Duration;

use support::cluster_skip::{embedded_postgres_enabled, handle_cluster_setup_failure};

fn trim(raw: &str) -> TrimLevel {
    TrimLevel::new(raw).expect("valid trim")
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_repository_reads_seeded_catalogue() {
    if !embedded_postgres_enabled() {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return;
    }

    let cluster = match TestCluster::new() {
        Ok(cluster) => cluster,
        Err(err) => {
            let _: Option<()> = handle_cluster_setup_failure(format!("{err:?}"));
            return;
        }
    };
    let url = cluster.connection().database_url("postgres");
    let applied = run_pending_migrations(&url).expect("migrations apply");
    assert!(applied >= 2, "schema and seed migrations ran");

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(async {
        let pool = DbPool::new(PoolConfig::new(url.as_str()).with_max_size(2))
            .await
            .expect("pool builds");
        let repository = DieselJeepRepository::new(pool);

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

        let none = repository
            .find_by_model_and_trim(JeepModel::Wrangler, &trim("Unknown trim name"))
            .await
            .expect("lookup succeeds");
        assert!(none.is_empty());
    });

    assert_eq!(
        run_pending_migrations(&url).expect("second run is a no-op"),
        0
    );
}

#[test]
fn unreachable_database_is_a_connection_error() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(async {
        // Port 1 is never a PostgreSQL server.
        let config = PoolConfig::new("postgres://jeep@127.0.0.1:1/jeeps")
            .with_max_size(1)
            .with_min_idle(None)
            .with_connection_timeout(Duration::from_millis(200));
        let pool = DbPool::new(config).await.expect("lazy pool builds");
        let repository = DieselJeepRepository::new(pool);

        let err = repository
            .find_by_model_and_trim(JeepModel::Wrangler, &trim("Sport"))
            .await
            .expect_err("no database");
        assert!(matches!(err, JeepRepositoryError::Connection { .. }));
    });
}
