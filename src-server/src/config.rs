use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Server configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// SQLite file for the historical-values store. Absent means the
    /// in-memory store (nothing survives a restart).
    pub database_path: Option<String>,
    /// Requests allowed per client IP per window.
    pub rate_limit_quota: u32,
    pub rate_limit_window_secs: u64,
    /// HS256 secret for session tokens. Absent selects the static demo
    /// verifier.
    pub session_secret: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("SCENE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8480".to_string())
            .parse()
            .context("SCENE_BIND_ADDR must be a host:port address")?;

        Ok(ServerConfig {
            bind_addr,
            database_path: std::env::var("SCENE_DATABASE_PATH").ok(),
            rate_limit_quota: parse_env("SCENE_RATE_LIMIT_QUOTA", 10)?,
            rate_limit_window_secs: parse_env("SCENE_RATE_LIMIT_WINDOW_SECS", 60)?,
            session_secret: std::env::var("SCENE_SESSION_SECRET").ok(),
        })
    }
}

fn parse_env<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
