//! Server configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use marquee_core::{Error, Result};

/// Default number of movies per list page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound for the per-request page size override.
pub const MAX_PAGE_SIZE: usize = 100;

/// CORS configuration for browser-based access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. Use `["*"]` to allow all origins (development only).
    /// Empty list disables CORS entirely.
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache (seconds).
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // Default: disabled (secure-by-default).
            allowed_origins: Vec::new(),
            max_age_seconds: 3600, // 1 hour
        }
    }
}

/// Configuration for the Marquee API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port.
    pub http_port: u16,

    /// Enable debug mode.
    ///
    /// When enabled, logs are pretty-printed and a wildcard CORS origin is
    /// permitted.
    pub debug: bool,

    /// Path to the seed file loaded at startup when the registry is empty.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Default number of movies per list page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            debug: false,
            seed_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Supported env vars:
    /// - `MARQUEE_HTTP_PORT`
    /// - `MARQUEE_DEBUG`
    /// - `MARQUEE_SEED_PATH`
    /// - `MARQUEE_PAGE_SIZE` (1-100, default: 10)
    /// - `MARQUEE_CORS_ALLOWED_ORIGINS` (comma-separated, or `*`)
    /// - `MARQUEE_CORS_MAX_AGE_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable is present but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = env_u16("MARQUEE_HTTP_PORT")? {
            config.http_port = port;
        }
        if let Some(debug) = env_bool("MARQUEE_DEBUG")? {
            config.debug = debug;
        }
        if let Some(path) = env_string("MARQUEE_SEED_PATH") {
            config.seed_path = Some(PathBuf::from(path));
        }
        if let Some(page_size) = env_usize("MARQUEE_PAGE_SIZE")? {
            config.page_size = validate_page_size(page_size)?;
        }
        if let Some(origins) = env_string("MARQUEE_CORS_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = parse_cors_allowed_origins(&origins);
        }
        if let Some(max_age) = env_u64("MARQUEE_CORS_MAX_AGE_SECONDS")? {
            config.cors.max_age_seconds = max_age;
        }

        Ok(config)
    }
}

fn validate_page_size(page_size: usize) -> Result<usize> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(Error::validation(format!(
            "MARQUEE_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    Ok(page_size)
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_u16(name: &str) -> Result<Option<u16>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<u16>()
        .map(Some)
        .map_err(|e| Error::validation(format!("{name} must be a u16: {e}")))
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<u64>()
        .map(Some)
        .map_err(|e| Error::validation(format!("{name} must be a u64: {e}")))
}

fn env_usize(name: &str) -> Result<Option<usize>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<usize>()
        .map(Some)
        .map_err(|e| Error::validation(format!("{name} must be a usize: {e}")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    let value = value.trim().to_ascii_lowercase();
    match value.as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(Error::validation(format!(
            "{name} must be a boolean (true/false/1/0)"
        ))),
    }
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    parse_bool(name, &v).map(Some)
}

fn parse_cors_allowed_origins(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed == "*" {
        return vec!["*".to_string()];
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_true_values() {
        assert!(parse_bool("TEST", "true").unwrap());
        assert!(parse_bool("TEST", "1").unwrap());
        assert!(parse_bool("TEST", "yes").unwrap());
        assert!(parse_bool("TEST", "TRUE").unwrap());
    }

    #[test]
    fn parse_bool_accepts_false_values() {
        assert!(!parse_bool("TEST", "false").unwrap());
        assert!(!parse_bool("TEST", "0").unwrap());
        assert!(!parse_bool("TEST", "no").unwrap());
        assert!(!parse_bool("TEST", "FALSE").unwrap());
    }

    #[test]
    fn parse_bool_rejects_invalid_values() {
        assert!(parse_bool("TEST", "maybe").is_err());
        assert!(parse_bool("TEST", "").is_err());
    }

    #[test]
    fn page_size_bounds_are_enforced() {
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(MAX_PAGE_SIZE + 1).is_err());
        assert_eq!(validate_page_size(1).unwrap(), 1);
        assert_eq!(validate_page_size(MAX_PAGE_SIZE).unwrap(), MAX_PAGE_SIZE);
    }

    #[test]
    fn cors_origins_parse_wildcard_and_lists() {
        assert_eq!(parse_cors_allowed_origins("*"), vec!["*".to_string()]);
        assert_eq!(
            parse_cors_allowed_origins("https://a.example, https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(parse_cors_allowed_origins("  ").is_empty());
    }

    #[test]
    fn default_page_size_is_ten() {
        assert_eq!(Config::default().page_size, 10);
    }
}
