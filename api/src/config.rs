use chrono::Local;
use std::{collections::HashMap, sync::Arc};

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_REGION: &str = "unknown";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Where configuration values come from.
///
/// Lookups happen on every call, nothing is cached.
pub trait ConfigSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

// ============================================================================
// SETTINGS - Named lookups with fixed defaults
// ============================================================================
/// Resolves each setting from its variable, falling back to a default
/// when the variable is absent or empty.
#[derive(Clone)]
pub struct Settings {
    source: Arc<dyn ConfigSource>,
}

impl Settings {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    pub fn from_env() -> Self {
        Self::new(Arc::new(ProcessEnv))
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.source.var(key).filter(|v| !v.is_empty())
    }

    /// PORT
    pub fn port(&self) -> String {
        self.lookup("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
    }

    /// REGION
    pub fn region(&self) -> String {
        self.lookup("REGION")
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// VERSION
    pub fn version(&self) -> String {
        self.lookup("VERSION")
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }

    /// ENVIRONMENT
    pub fn environment(&self) -> String {
        self.lookup("ENVIRONMENT")
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    /// BUILD_DATE, or today's local date when unset.
    pub fn build_date(&self) -> String {
        self.lookup("BUILD_DATE")
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::new(Arc::new(map))
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.port(), "8080");
        assert_eq!(s.region(), "unknown");
        assert_eq!(s.version(), "1.0.0");
        assert_eq!(s.environment(), "development");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let s = settings(&[("REGION", ""), ("VERSION", ""), ("ENVIRONMENT", "")]);
        assert_eq!(s.region(), "unknown");
        assert_eq!(s.version(), "1.0.0");
        assert_eq!(s.environment(), "development");
    }

    #[test]
    fn values_are_returned_verbatim() {
        let s = settings(&[
            ("PORT", "not-a-number"),
            ("REGION", " eu-west1 "),
            ("BUILD_DATE", "2024-01-31"),
        ]);
        assert_eq!(s.port(), "not-a-number");
        assert_eq!(s.region(), " eu-west1 ");
        assert_eq!(s.build_date(), "2024-01-31");
    }

    #[test]
    fn build_date_defaults_to_today() {
        let before = Local::now().format("%Y-%m-%d").to_string();
        let date = settings(&[]).build_date();
        let after = Local::now().format("%Y-%m-%d").to_string();
        assert!(date == before || date == after, "unexpected date {date}");
    }

    #[test]
    fn process_env_is_read_on_every_lookup() {
        let s = Settings::from_env();
        temp_env::with_var("REGION", Some("us-central1"), || {
            assert_eq!(s.region(), "us-central1");
        });
        temp_env::with_var("REGION", None::<&str>, || {
            assert_eq!(s.region(), "unknown");
        });
    }
}
