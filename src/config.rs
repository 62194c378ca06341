//! Framework settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (`E2E_CONFIG`, or `e2e.toml` in the working directory), then environment
//! variables of the form `E2E__SECTION__KEY` (e.g. `E2E__UI__HEADLESS=false`).

use crate::browser::LaunchOptions;
use crate::error::{E2eError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "E2E__";

/// Variable naming an explicit config file
pub const CONFIG_FILE_ENV: &str = "E2E_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub app_url: String,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,
    pub sandbox: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            app_url: "https://cism-ms.ru".to_string(),
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            chrome_path: None,
            sandbox: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout: f64,
    pub follow_redirects: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://cism-ms.ru".to_string(),
            api_version: "/api/v1".to_string(),
            timeout: 30.0,
            follow_redirects: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingSettings {
    pub results_dir: PathBuf,
    pub coverage_dir: PathBuf,
}

impl Default for ReportingSettings {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("allure-results"),
            coverage_dir: PathBuf::from("coverage-results"),
        }
    }
}

/// Wait windows in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutSettings {
    pub default_ms: u64,
    pub count_ms: u64,
    pub navigation_ms: u64,
    pub cookies_ms: u64,
    pub settle_ms: u64,
    pub hover_ms: u64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            default_ms: 5_000,
            count_ms: 10_000,
            navigation_ms: 50_000,
            cookies_ms: 10_000,
            settle_ms: 5_000,
            hover_ms: 1_000,
        }
    }
}

/// Resolved wait windows handed to page objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Element resolution and expect-style assertions
    pub default: Duration,
    /// Count-based waits (vacancy cards, menu visibility)
    pub count: Duration,
    pub navigation: Duration,
    pub cookies: Duration,
    /// Fixed pause before counting filtered results
    pub settle: Duration,
    /// Fixed pause after hovering, lets the CSS transition apply
    pub hover: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        TimeoutSettings::default().into()
    }
}

impl From<TimeoutSettings> for Timeouts {
    fn from(settings: TimeoutSettings) -> Self {
        Self {
            default: Duration::from_millis(settings.default_ms),
            count: Duration::from_millis(settings.count_ms),
            navigation: Duration::from_millis(settings.navigation_ms),
            cookies: Duration::from_millis(settings.cookies_ms),
            settle: Duration::from_millis(settings.settle_ms),
            hover: Duration::from_millis(settings.hover_ms),
        }
    }
}

impl Timeouts {
    /// Same window for every wait and no fixed pauses
    pub fn uniform(window: Duration) -> Self {
        Self {
            default: window,
            count: window,
            navigation: window,
            cookies: window,
            settle: Duration::ZERO,
            hover: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub environment: Environment,
    pub debug: bool,
    pub log_level: String,
    pub ui: UiSettings,
    pub api: ApiSettings,
    pub reporting: ReportingSettings,
    pub timeouts: TimeoutSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            debug: false,
            log_level: "info".to_string(),
            ui: UiSettings::default(),
            api: ApiSettings::default(),
            reporting: ReportingSettings::default(),
            timeouts: TimeoutSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default file location and the process environment
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("e2e.toml")).filter(|p| p.exists()));
        Self::from_sources(path.as_deref(), std::env::vars())
    }

    /// Load settings from an optional TOML file plus `(key, value)` overrides
    pub fn from_sources(
        file: Option<&Path>,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self> {
        let mut table = match file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    E2eError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                text.parse::<toml::Table>().map_err(|e| {
                    E2eError::Config(format!("Failed to parse {}: {}", path.display(), e))
                })?
            }
            None => toml::Table::new(),
        };

        let schema = toml::Value::try_from(Settings::default())
            .map_err(|e| E2eError::Config(format!("Failed to describe default settings: {}", e)))?;
        for (key, value) in vars {
            if let Some(path) = key.strip_prefix(ENV_PREFIX) {
                let segments: Vec<String> = path
                    .split("__")
                    .filter(|s| !s.is_empty())
                    .map(str::to_lowercase)
                    .collect();
                let scalar = typed_scalar(lookup(&schema, &segments), &value);
                apply_override(&mut table, &segments, scalar)?;
            }
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e| E2eError::Config(format!("Invalid settings: {}", e)))
    }

    /// Base URL of the UI, always ending with a slash
    pub fn ui_base_url(&self) -> String {
        format!("{}/", self.ui.app_url.trim_end_matches('/'))
    }

    /// Full API root: base URL plus API version
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), self.api.api_version)
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts.clone().into()
    }

    /// Browser launch options derived from the UI section
    pub fn launch_options(&self) -> LaunchOptions {
        let mut options = LaunchOptions::new()
            .headless(self.ui.headless)
            .window_size(self.ui.viewport_width, self.ui.viewport_height)
            .sandbox(self.ui.sandbox);
        if let Some(path) = &self.ui.chrome_path {
            options = options.chrome_path(path.clone());
        }
        options
    }

    /// Key/value pairs describing the run, written to the report environment file
    pub fn env_properties(&self) -> Vec<(String, String)> {
        vec![
            ("Environment".to_string(), self.environment.as_str().to_string()),
            ("UI_URL".to_string(), self.ui_base_url()),
            ("API_URL".to_string(), self.api_base_url()),
            ("Headless".to_string(), self.ui.headless.to_string()),
            ("Browser".to_string(), "chromium".to_string()),
            ("Debug".to_string(), self.debug.to_string()),
            ("Log_Level".to_string(), self.log_level.clone()),
        ]
    }

    /// Create the output directories used by reports and coverage
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.reporting.results_dir)?;
        std::fs::create_dir_all(&self.reporting.coverage_dir)?;
        Ok(())
    }
}

/// Set a nested key in the table, creating intermediate tables
fn apply_override(table: &mut toml::Table, segments: &[String], value: toml::Value) -> Result<()> {
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut current = table;
    for segment in parents {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        current = match entry {
            toml::Value::Table(inner) => inner,
            _ => {
                return Err(E2eError::Config(format!(
                    "Override for '{}' conflicts with a scalar value",
                    segments.join(".")
                )));
            }
        };
    }

    current.insert(last.clone(), value);
    Ok(())
}

/// Default value at a dotted path; `None` for keys without a default
fn lookup<'a>(schema: &'a toml::Value, segments: &[String]) -> Option<&'a toml::Value> {
    segments.iter().try_fold(schema, |value, segment| value.get(segment.as_str()))
}

/// Read `raw` as the type of the default it replaces.
/// String fields, optional fields and unparseable input keep the raw text.
fn typed_scalar(default: Option<&toml::Value>, raw: &str) -> toml::Value {
    let parsed = match default {
        Some(toml::Value::Boolean(_)) => raw.parse::<bool>().ok().map(toml::Value::Boolean),
        Some(toml::Value::Integer(_)) => raw.parse::<i64>().ok().map(toml::Value::Integer),
        Some(toml::Value::Float(_)) => raw.parse::<f64>().ok().map(toml::Value::Float),
        _ => None,
    };
    parsed.unwrap_or_else(|| toml::Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(None, Vec::new()).unwrap();
        assert_eq!(settings.environment, Environment::Local);
        assert!(settings.ui.headless);
        assert_eq!(settings.timeouts().count, Duration::from_secs(10));
        assert_eq!(settings.ui_base_url(), "https://cism-ms.ru/");
        assert_eq!(settings.api_base_url(), "https://cism-ms.ru/api/v1");
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        let settings = Settings::from_sources(
            None,
            vars(&[
                ("E2E__UI__HEADLESS", "false"),
                ("E2E__UI__APP_URL", "http://localhost:8080/"),
                ("E2E__TIMEOUTS__DEFAULT_MS", "250"),
                ("E2E__ENVIRONMENT", "staging"),
                ("UNRELATED", "ignored"),
            ]),
        )
        .unwrap();

        assert!(!settings.ui.headless);
        assert_eq!(settings.ui_base_url(), "http://localhost:8080/");
        assert_eq!(settings.timeouts().default, Duration::from_millis(250));
        assert_eq!(settings.environment, Environment::Staging);
    }

    #[test]
    fn test_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\n[api]\nbase_url = \"http://api.local\"\ntimeout = 5.0\n"
        )
        .unwrap();

        let settings = Settings::from_sources(
            Some(file.path()),
            vars(&[("E2E__API__API_VERSION", "/api/v2")]),
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.api.timeout, 5.0);
        assert_eq!(settings.api_base_url(), "http://api.local/api/v2");
    }

    #[test]
    fn test_overrides_follow_field_types() {
        let settings = Settings::from_sources(
            None,
            vars(&[
                ("E2E__API__API_VERSION", "2"),
                ("E2E__API__TIMEOUT", "5"),
                ("E2E__LOG_LEVEL", "nan"),
                ("E2E__UI__CHROME_PATH", "1234"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api.api_version, "2");
        assert_eq!(settings.api.timeout, 5.0);
        assert_eq!(settings.log_level, "nan");
        assert_eq!(settings.ui.chrome_path, Some(PathBuf::from("1234")));
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = Settings::from_sources(None, vars(&[("E2E__UI__VIEWPORT_WIDTH", "wide")]))
            .unwrap_err();
        assert!(matches!(err, E2eError::Config(_)));
    }

    #[test]
    fn test_env_properties() {
        let props = Settings::default().env_properties();
        assert!(props.iter().any(|(k, v)| k == "Environment" && v == "local"));
        assert!(props.iter().any(|(k, _)| k == "API_URL"));
    }
}
