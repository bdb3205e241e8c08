//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cattree/cattree.toml`
//! 3. Local config: `./.cattree.toml` (working directory)
//! 4. Environment variables: `CATTREE_*` prefix, `__` between nested keys
//! 5. Command line flags (applied by the caller)

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Which catalog `seed` writes by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Fixed four-level sample catalog
    #[default]
    Sample,
    /// Generated complete tree of `breadth` x `depth`
    Synthetic,
}

impl SeedMode {
    fn as_str(&self) -> &'static str {
        match self {
            SeedMode::Sample => "sample",
            SeedMode::Synthetic => "synthetic",
        }
    }
}

/// Seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedSettings {
    pub mode: SeedMode,
    /// Roots and children per node of the synthetic catalog
    pub breadth: usize,
    /// Levels of the synthetic catalog
    pub depth: usize,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            mode: SeedMode::Sample,
            breadth: 4,
            depth: 4,
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Names listed per level in the level breakdown
    pub preview: usize,
    /// Print both forests in `run`
    pub show_trees: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            preview: 3,
            show_trees: true,
        }
    }
}

/// Unified configuration for cattree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// SQLite database file (default: category.db in the working directory)
    pub database: PathBuf,
    pub seed: SeedSettings,
    pub display: DisplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from("category.db"),
            seed: SeedSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Get the XDG config directory for cattree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cattree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cattree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".cattree.toml")
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.cattree.toml` (usually the cwd)
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), local_dir)
    }

    /// Load settings from an explicit global config file and local directory.
    ///
    /// Missing files are skipped. Environment overrides are always applied.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut builder = Self::defaults_builder()?;

        if let Some(global) = global_path.filter(|p| p.exists()) {
            builder = builder.add_source(File::from(global.to_path_buf()).required(true));
        }
        if let Some(dir) = local_dir {
            let local = local_config_path(dir);
            if local.exists() {
                builder = builder.add_source(File::from(local).required(true));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("CATTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();

        Ok(settings)
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ApplicationError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("database", defaults.database.to_string_lossy().to_string())
            .map_err(config_err)?
            .set_default("seed.mode", defaults.seed.mode.as_str())
            .map_err(config_err)?
            .set_default("seed.breadth", defaults.seed.breadth as i64)
            .map_err(config_err)?
            .set_default("seed.depth", defaults.seed.depth as i64)
            .map_err(config_err)?
            .set_default("display.preview", defaults.display.preview as i64)
            .map_err(config_err)?
            .set_default("display.show_trees", defaults.display.show_trees)
            .map_err(config_err)
    }

    /// Expand shell variables and tilde in the database path.
    fn expand_paths(&mut self) {
        let expanded = expand_path(self.database.to_string_lossy().as_ref());
        self.database = PathBuf::from(expanded);
    }

    /// Override the database path (command line flag).
    pub fn with_database(mut self, database: Option<PathBuf>) -> Self {
        if let Some(db) = database {
            self.database = db;
            self.expand_paths();
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cattree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cattree/cattree.toml
#   Local:  ./.cattree.toml
#   Env:    CATTREE_* environment variables, e.g. CATTREE_SEED__BREADTH=6
#   Flags:  --database

# SQLite database file (~ and $VAR are expanded)
# database = "category.db"

[seed]
# Catalog written by `cattree seed` and `cattree run`: "sample" or "synthetic"
# mode = "sample"

# Shape of the synthetic catalog: breadth roots, breadth children per node
# breadth = 4
# depth = 4

[display]
# Category names listed per level in the level breakdown
# preview = 3

# Print both category trees in `cattree run`
# show_trees = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_files_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert_eq!(settings.seed, SeedSettings::default());
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn given_tilde_in_database_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            database: PathBuf::from("~/data/category.db"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let db = settings.database.to_string_lossy();
        assert!(db.starts_with(&home), "database should start with home dir: {}", db);
        assert!(!db.contains('~'), "database should not contain tilde: {}", db);
    }

    #[test]
    fn given_database_flag_when_applied_then_overrides_config() {
        let settings = Settings::default().with_database(Some(PathBuf::from("/tmp/other.db")));
        assert_eq!(settings.database, PathBuf::from("/tmp/other.db"));

        let untouched = Settings::default().with_database(None);
        assert_eq!(untouched.database, PathBuf::from("category.db"));
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).expect("parse template");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips() {
        let settings = Settings {
            database: PathBuf::from("bench.db"),
            seed: SeedSettings {
                mode: SeedMode::Synthetic,
                breadth: 6,
                depth: 5,
            },
            display: DisplaySettings {
                preview: 5,
                show_trees: false,
            },
        };

        let text = settings.to_toml().expect("serialize");
        assert!(text.contains("mode = \"synthetic\""));
        let parsed: Settings = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, settings);
    }
}
