//! Client configuration management.
//!
//! Consolidates environment variable reads, applies CLI overrides and
//! validates the result.

use std::path::PathBuf;
use virtual_poker::{PageLocation, QrOptions};

/// Edge length of the SVG QR code when nothing else is configured
pub const DEFAULT_QR_SIZE: u32 = 180;

/// How the client presents the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal table
    Tui,
    /// Deal once and print the summary
    Once,
    /// Deal once and print the hand as JSON
    Json,
    /// Deal once and write an HTML snapshot to the given file
    Html(PathBuf),
}

/// Values given on the command line. Each one beats its environment
/// variable.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub origin: Option<String>,
    pub path: Option<String>,
    pub humans: Option<String>,
    pub log_file: Option<PathBuf>,
    pub qr_size: Option<u32>,
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin and path the share link is built from
    pub location: PageLocation,
    /// Initial human-count input, normalized on the first deal
    pub humans: String,
    /// Log destination while the TUI owns the terminal
    pub log_file: PathBuf,
    /// Edge length in pixels of the SVG QR code
    pub qr_size: u32,
    pub mode: RunMode,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from CLI flags
    /// * `mode` - Presentation mode chosen on the command line
    pub fn from_env(overrides: ConfigOverrides, mode: RunMode) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), overrides, mode)
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides, mode: RunMode) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let origin = overrides.origin.or_else(|| lookup("VP_ORIGIN"));
        let path = overrides
            .path
            .or_else(|| lookup("VP_PATH"))
            .unwrap_or_else(|| "/".to_string());
        let humans = overrides
            .humans
            .or_else(|| lookup("VP_HUMANS"))
            .unwrap_or_else(|| "1".to_string());
        let log_file = overrides
            .log_file
            .or_else(|| lookup("VP_LOG_FILE").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("vp_client.log"));
        let qr_size = overrides
            .qr_size
            .or_else(|| lookup("VP_QR_SIZE").and_then(|s| s.parse().ok()))
            .unwrap_or(DEFAULT_QR_SIZE);

        ClientConfig {
            location: PageLocation::new(origin, path),
            humans,
            log_file,
            qr_size,
            mode,
        }
    }

    /// QR rendering options for the table, sized from the configuration
    pub fn qr_options(&self) -> QrOptions {
        QrOptions {
            size: self.qr_size,
            ..QrOptions::default()
        }
    }

    /// Validate configuration after loading
    ///
    /// The human count is never rejected; the table clamps it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.location.path.starts_with('/') {
            return Err(ConfigError::Invalid {
                var: "VP_PATH".to_string(),
                reason: format!("Must start with '/', got '{}'", self.location.path),
            });
        }

        if let Some(origin) = &self.location.origin
            && origin != "null"
            && !origin.is_empty()
            && !origin.contains("://")
        {
            return Err(ConfigError::Invalid {
                var: "VP_ORIGIN".to_string(),
                reason: format!("Must include a scheme (e.g. https://), got '{origin}'"),
            });
        }

        if self.qr_size == 0 {
            return Err(ConfigError::Invalid {
                var: "VP_QR_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if let RunMode::Html(path) = &self.mode
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid {
                var: "--html".to_string(),
                reason: "Output file must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
