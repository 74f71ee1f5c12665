// src/db/mod.rs

use sqlx::{Pool, Postgres};

use crate::config::Settings;

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod repository;

pub use postgres::PgStore;
pub use repository::{
    AverageRepository, DomainRepository, FileRepository, IndicatorRepository, RegionRepository,
    Store, SurveyRepository,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub async fn connect(settings: &Settings) -> anyhow::Result<Pool<Postgres>> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    if settings.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    tracing::info!(max_connections = settings.max_connections, "connected to PostgreSQL");
    Ok(pool)
}
