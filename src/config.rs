use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub plan: PlanSettings,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanSettings {
    /// How many days each plan covers.
    pub days: usize,
    /// How many days of history the repeat-avoidance window spans.
    pub window_days: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Directory holding `catalog.json` and `plan.json`. Defaults to the
    /// XDG data dir (`~/.local/share/mealwheel`).
    #[serde(default)]
    pub data_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWHEEL__PLAN__DAYS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("plan.days", 10)?
            .set_default("plan.window_days", 15)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| default_config_path().to_string_lossy().into_owned());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (MEALWHEEL__PLAN__DAYS, etc.)
        builder = builder.add_source(
            Environment::with_prefix("MEALWHEEL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.plan.days == 0 {
            return Err("plan.days must be at least 1".to_string());
        }
        if self.plan.window_days == 0 {
            return Err("plan.window_days must be at least 1".to_string());
        }
        Ok(())
    }

    /// The plan dimensions in the engine's terms.
    pub fn plan_config(&self) -> mealwheel_planner::PlanConfig {
        mealwheel_planner::PlanConfig {
            days: self.plan.days,
            window_days: self.plan.window_days,
        }
    }

    /// Where the catalog and plan documents live.
    pub fn data_dir(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(),
        }
    }
}

/// The default config file: `$XDG_CONFIG_HOME/mealwheel/config.toml` or
/// `~/.config/mealwheel/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("mealwheel").join("config.toml");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mealwheel")
        .join("config.toml")
}

/// The default data directory: `$XDG_DATA_HOME/mealwheel` or
/// `~/.local/share/mealwheel`.
fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("mealwheel");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".local")
        .join("share")
        .join("mealwheel")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            plan: PlanSettings {
                days: 10,
                window_days: 15,
            },
            storage: StorageConfig {
                data_dir: Some("/tmp/mealwheel-test".to_string()),
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_days() {
        let mut config = valid_config();
        config.plan.days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_window() {
        let mut config = valid_config();
        config.plan.window_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_plan_config_carries_the_dimensions() {
        let plan = valid_config().plan_config();
        assert_eq!(plan.days, 10);
        assert_eq!(plan.window_days, 15);
        assert_eq!(plan.window(), 45);
    }

    #[test]
    fn test_data_dir_prefers_the_configured_path() {
        let config = valid_config();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/mealwheel-test"));
    }

    #[test]
    fn test_default_config_path_is_under_mealwheel() {
        assert!(default_config_path().ends_with("mealwheel/config.toml"));
    }
}
