//! Test harness with testcontainers for integration testing.
//!
//! A single Postgres container is started once and shared by the whole test
//! run. Each test gets its own freshly migrated database on that container,
//! so tests are isolated and can rely on `no` numbering starting at 1.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    base_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

/// Per-test database counter.
static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG when running tests with --nocapture.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let base_url = format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port);

        Ok(Self {
            base_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test context holding a pool onto a database private to one test.
pub struct TestHarness {
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        let infra = SharedTestInfra::get().await;

        // Carve out a private database for this test and migrate it.
        let db_name = format!("pinboard_test_{}", DB_COUNTER.fetch_add(1, Ordering::SeqCst));

        let admin_pool = PgPool::connect(&format!("{}/postgres", infra.base_url))
            .await
            .expect("Failed to connect to admin database");
        sqlx::query(&format!(r#"CREATE DATABASE "{}""#, db_name))
            .execute(&admin_pool)
            .await
            .expect("Failed to create test database");
        admin_pool.close().await;

        let db_pool = PgPool::connect(&format!("{}/{}", infra.base_url, db_name))
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .expect("Failed to run migrations");

        TestHarness { db_pool }
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}
