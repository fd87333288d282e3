//! Per-invocation application context

use std::time::Duration;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, DatabaseConfig};
use crate::error::Result;
use crate::matrix::LevelMatrix;
use crate::storage::Database;

/// Resolved configuration plus the open store, shared by every command.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub db: Database,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::open(cli, resolve_config(cli)?)
    }

    /// Open the store named by an already resolved config.
    pub fn open(cli: &Cli, config: Config) -> Result<Self> {
        let robot_mode = robot_mode(cli, &config);
        if robot_mode || !config.output.color {
            colored::control::set_override(false);
            console::set_colors_enabled(false);
        }

        let db = open_database(&config.database)?;
        debug!(
            path = %config.database.path.display(),
            schema_version = db.schema_version(),
            "opened database"
        );

        Ok(Self {
            config,
            db,
            robot_mode,
        })
    }

    /// Context over an already-open store, used by tests and embedders.
    pub fn with_database(config: Config, db: Database, robot_mode: bool) -> Self {
        Self {
            config,
            db,
            robot_mode,
        }
    }

    pub const fn matrix(&self) -> LevelMatrix<'_> {
        LevelMatrix::new(&self.db)
    }
}

/// Layered config for this invocation, with `--db` applied last.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::load(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &cli.db {
        config.database.path.clone_from(path);
    }
    Ok(config)
}

/// Robot output is on when either the flag or the resolved config asks for it.
pub fn robot_mode(cli: &Cli, config: &Config) -> bool {
    cli.robot || config.output.robot
}

/// Open the configured store, honouring `:memory:` and the busy timeout.
pub fn open_database(config: &DatabaseConfig) -> Result<Database> {
    let db = if config.is_in_memory() {
        Database::open_in_memory()?
    } else {
        Database::open(&config.path)?
    };
    db.set_busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
    Ok(db)
}
