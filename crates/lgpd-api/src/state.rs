//! # Application State
//!
//! Shared state passed to all route handlers via the `State` extractor.
//! Everything here is immutable after startup: the presentation config
//! and, when installed, the Prometheus handle used by `/metrics`.

use std::path::PathBuf;
use std::sync::Arc;

use lgpd_core::TriageConfig;
use metrics_exporter_prometheus::PrometheusHandle;

/// Process-level settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen port (`PORT`, default 8080).
    pub port: u16,
    /// Optional YAML config file (`LGPD_CONFIG`).
    pub config_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            config_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable ports fall back
    /// to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            config_path: lookup("LGPD_CONFIG")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub triage: Arc<TriageConfig>,
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("triage", &self.triage)
            .field("metrics", &self.metrics.as_ref().map(|_| "[installed]"))
            .finish()
    }
}

impl AppState {
    /// State with default links and no metrics recorder.
    pub fn new() -> Self {
        Self::with_config(TriageConfig::default(), None)
    }

    pub fn with_config(triage: TriageConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            triage: Arc::new(triage),
            metrics,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_from_lookup() {
        let c = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("9090".to_string()),
            "LGPD_CONFIG" => Some("/etc/lgpd.yaml".to_string()),
            _ => None,
        });
        assert_eq!(c.port, 9090);
        assert_eq!(c.config_path, Some(PathBuf::from("/etc/lgpd.yaml")));
    }

    #[test]
    fn app_config_bad_port_falls_back() {
        let c = AppConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(c, AppConfig::default());
    }
}
