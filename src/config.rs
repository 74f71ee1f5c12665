// src/config.rs

use std::{env, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Public prefix icon files are served under, e.g. `/upload`.
    pub upload_url_prefix: String,
    pub request_timeout: Duration,
    pub run_migrations: bool,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL")
            .ok_or_else(|| anyhow!("DATABASE_URL must be set (environment or .env file)"))?;

        let upload_url_prefix = get("UPLOAD_URL_PREFIX").unwrap_or_else(|| "/upload".into());

        Ok(Self {
            database_url,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(get("PORT"), "PORT", 8080)?,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 10)?,
            upload_url_prefix: upload_url_prefix.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(parse_or(
                get("REQUEST_TIMEOUT_SECS"),
                "REQUEST_TIMEOUT_SECS",
                30,
            )?),
            run_migrations: parse_or(get("RUN_MIGRATIONS"), "RUN_MIGRATIONS", false)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(s) => s
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: '{s}'")),
        None => Ok(default),
    }
}
