use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::features::unit_converter::{Category, UnitId};
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AppSettings {
    pub preferences: UserPreferences,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UserPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
    pub default_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. "info" or "unit_converter_lib=debug"
    pub level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_category: "Length".to_string(),
            default_from_unit: "meter".to_string(),
            default_to_unit: "kilometer".to_string(),
            default_value: 1.0,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Settings("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory; defaults when no file exists
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load and validate settings from `path`. Nothing is written back.
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;

        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Resolve a load outcome, warning when the defaults have to stand in
    pub fn or_default(loaded: AppResult<Self>) -> Self {
        match loaded {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Default units must exist and belong to the default category
    pub fn validate(&self) -> AppResult<()> {
        let prefs = &self.preferences;
        let category: Category = prefs.default_category.parse()?;
        for unit in [&prefs.default_from_unit, &prefs.default_to_unit] {
            let unit: UnitId = unit.parse()?;
            if !category.contains(unit) {
                return Err(AppError::Settings(format!(
                    "Unit {} is not part of category {}",
                    unit, category
                )));
            }
        }
        if !prefs.default_value.is_finite() {
            return Err(AppError::Settings(format!(
                "Default value must be finite, got {}",
                prefs.default_value
            )));
        }
        Ok(())
    }
}
