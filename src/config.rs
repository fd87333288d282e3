use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// Directory name used under the platform config/data dirs and the project root.
pub const APP_DIR: &str = "ladder";
pub const PROJECT_DIR: &str = ".ladder";
pub const DB_FILE: &str = "ladder.db";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration: defaults, then the global and project files (or an
    /// explicit file instead of both), then `LADDER_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LADDER_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                LadderError::MissingConfig(format!("config file {}", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join(APP_DIR).join(CONFIG_FILE)),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = project_root.join(PROJECT_DIR).join(CONFIG_FILE);
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LadderError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw).map_err(|err| {
            LadderError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.database {
            self.database.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("LADDER_DB_PATH") {
            self.database.path = PathBuf::from(value);
        }
        if let Some(value) = parse_u64("LADDER_DB_BUSY_TIMEOUT_MS", lookup("LADDER_DB_BUSY_TIMEOUT_MS"))? {
            self.database.busy_timeout_ms = value;
        }
        if let Some(value) = parse_bool("LADDER_ROBOT", lookup("LADDER_ROBOT"))? {
            self.output.robot = value;
        }
        if let Some(value) = parse_bool("LADDER_COLOR", lookup("LADDER_COLOR"))? {
            self.output.color = value;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file; `:memory:` opens a throwaway in-memory store
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    fn merge(&mut self, patch: DatabasePatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
        if let Some(value) = patch.busy_timeout_ms {
            self.busy_timeout_ms = value;
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == ":memory:"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON envelopes instead of human output
    #[serde(default)]
    pub robot: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            robot: false,
            color: true,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.robot {
            self.robot = value;
        }
        if let Some(value) = patch.color {
            self.color = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub database: Option<DatabasePatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DatabasePatch {
    pub path: Option<PathBuf>,
    pub busy_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub robot: Option<bool>,
    pub color: Option<bool>,
}

/// `<data dir>/ladder/ladder.db`, or `./.ladder/ladder.db` without a data dir.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(PROJECT_DIR).join(DB_FILE),
        |dir| dir.join(APP_DIR).join(DB_FILE),
    )
}

const fn default_busy_timeout_ms() -> u64 {
    5_000
}

const fn default_true() -> bool {
    true
}

fn parse_bool(key: &str, value: Option<String>) -> Result<Option<bool>> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(LadderError::Config(format!(
            "invalid {key} value {value} (expected true|false)"
        ))),
    }
}

fn parse_u64(key: &str, value: Option<String>) -> Result<Option<u64>> {
    match value {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|err| LadderError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
