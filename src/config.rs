//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_LINK_BASE` - Prefix of fabricated short links (default: `https://localhost:3000`)
//! - `DEFAULT_THEME` - Initial theme: `light` or `dark` (default: `light`)
//! - `SUBMIT_DELAY_MS` - Simulated submission latency (default: 0)
//! - `REFRESH_DELAY_MS` - Simulated statistics refresh latency (default: 1000)
//! - `SESSION_IDLE_TIMEOUT` - Seconds before an idle form session is dropped (default: 1800)
//! - `SESSION_SWEEP_INTERVAL` - Seconds between idle session sweeps (default: 60)
//! - `MAX_SESSIONS` - Upper bound on live form sessions (default: 10000)
//! - `BEHIND_PROXY` - Read client IPs from forwarding headers (default: false)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::Theme;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub short_link_base: String,
    pub default_theme: Theme,
    pub submit_delay_ms: u64,
    pub refresh_delay_ms: u64,
    pub session_idle_timeout: u64,
    pub session_sweep_interval: u64,
    pub max_sessions: usize,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            short_link_base: "https://localhost:3000".to_string(),
            default_theme: Theme::Light,
            submit_delay_ms: 0,
            refresh_delay_ms: 1000,
            session_idle_timeout: 1800,
            session_sweep_interval: 60,
            max_sessions: 10_000,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let default_theme = match env::var("DEFAULT_THEME") {
            Ok(v) => Theme::from_str(&v).context("Invalid DEFAULT_THEME")?,
            Err(_) => defaults.default_theme,
        };

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            short_link_base: env::var("SHORT_LINK_BASE").unwrap_or(defaults.short_link_base),
            default_theme,
            submit_delay_ms: parse_var("SUBMIT_DELAY_MS", defaults.submit_delay_ms)?,
            refresh_delay_ms: parse_var("REFRESH_DELAY_MS", defaults.refresh_delay_ms)?,
            session_idle_timeout: parse_var(
                "SESSION_IDLE_TIMEOUT",
                defaults.session_idle_timeout,
            )?,
            session_sweep_interval: parse_var(
                "SESSION_SWEEP_INTERVAL",
                defaults.session_sweep_interval,
            )?,
            max_sessions: parse_var("MAX_SESSIONS", defaults.max_sessions)?,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `short_link_base` is not an absolute http(s) URL
    /// - a delay exceeds one minute
    /// - session limits are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = url::Url::parse(&self.short_link_base)
            .with_context(|| format!("SHORT_LINK_BASE is not a URL: '{}'", self.short_link_base))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "SHORT_LINK_BASE must start with 'http://' or 'https://', got '{}'",
                self.short_link_base
            );
        }

        if self.submit_delay_ms > 60_000 {
            anyhow::bail!(
                "SUBMIT_DELAY_MS is too large (max: 60000), got {}",
                self.submit_delay_ms
            );
        }

        if self.refresh_delay_ms > 60_000 {
            anyhow::bail!(
                "REFRESH_DELAY_MS is too large (max: 60000), got {}",
                self.refresh_delay_ms
            );
        }

        if self.session_idle_timeout == 0 {
            anyhow::bail!("SESSION_IDLE_TIMEOUT must be greater than 0");
        }

        if self.session_sweep_interval == 0 {
            anyhow::bail!("SESSION_SWEEP_INTERVAL must be greater than 0");
        }

        if self.max_sessions == 0 {
            anyhow::bail!("MAX_SESSIONS must be at least 1");
        }

        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short link base: {}", self.short_link_base);
        tracing::info!("  Default theme: {}", self.default_theme);
        tracing::info!(
            "  Delays: submit {}ms, refresh {}ms",
            self.submit_delay_ms,
            self.refresh_delay_ms
        );
        tracing::info!(
            "  Sessions: max {}, idle timeout {}s",
            self.max_sessions,
            self.session_idle_timeout
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, v)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
