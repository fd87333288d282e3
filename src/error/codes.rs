//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Level errors
//! - 3xx: Config errors
//! - 4xx: Input errors
//! - 6xx: Storage errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `LevelNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Level errors (1xx)
    // ========================================
    /// E101: Referenced engineering level does not exist
    LevelNotFound,
    /// E102: An engineering level with the same id already exists
    LevelConflict,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Input errors (4xx)
    // ========================================
    /// E401: Operation input failed boundary validation
    InvalidInput,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Database operation failed
    DatabaseError,
    /// E602: Serialization/deserialization failed
    SerializationError,
    /// E603: Filesystem operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric code.
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::LevelNotFound => 101,
            Self::LevelConflict => 102,

            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,

            Self::InvalidInput => 401,

            Self::DatabaseError => 601,
            Self::SerializationError => 602,
            Self::IoError => 603,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::LevelNotFound => {
                "Run `ladder list` to see existing level ids, or create the level first with `ladder add-level`"
            }
            Self::LevelConflict => {
                "Level ids are unique. Pick a different id or inspect the existing level with `ladder show <id>`"
            }
            Self::ConfigInvalid => "Check the config file and LADDER_* environment variables for typos",
            Self::ConfigMissingRequired => "Set the missing value in config.toml or via its LADDER_* variable",
            Self::InvalidInput => "Run the command with --help to see the accepted arguments",
            Self::DatabaseError => "Check that the database path is writable; run `ladder health` to verify the store",
            Self::SerializationError => "This is likely a bug; re-run with -vv and report the output",
            Self::IoError => "Check file permissions and available disk space",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::LevelNotFound
            | Self::LevelConflict
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::InvalidInput
            | Self::IoError => true,

            Self::DatabaseError | Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "level",
            3 => "config",
            4 => "input",
            6 => "storage",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::LevelNotFound,
            Self::LevelConflict,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::InvalidInput,
            Self::DatabaseError,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
