use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    // Rate limiting
    pub rate_api_per_min: u32,

    // Store access
    pub store_retry_attempts: u32,
    pub store_retry_delay: Duration,
    pub report_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let port: u16 = parse_or("PORT", 5000)?;

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{port}")),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            rate_api_per_min: parse_or("RATE_API_PER_MIN", 600)?,

            store_retry_attempts: parse_or("STORE_RETRY_ATTEMPTS", 3)?,
            store_retry_delay: Duration::from_millis(parse_or("STORE_RETRY_DELAY_MS", 200)?),
            report_concurrency: parse_or::<usize>("REPORT_CONCURRENCY", 4)?.max(1),
        })
    }
}

/// Reads an optional numeric variable, failing on values that don't parse
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
