//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A single optional command-line argument overrides the items
//! file.
//!
//! | Variable            | Default | Meaning                          |
//! |---------------------|---------|----------------------------------|
//! | `TICKET_ITEMS_FILE` | (none)  | JSON array of items to ring up   |
//! | `TICKET_LOG`        | `warn`  | log filter, falls back to `RUST_LOG` |

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Log filter used when neither `TICKET_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Items file; the built-in sample cart is used when absent
    pub items_file: Option<PathBuf>,

    /// `tracing` filter directive
    pub log_filter: String,
}

impl DemoConfig {
    /// Load configuration from the process environment and arguments
    /// (program name already skipped).
    pub fn load(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), args)
    }

    /// Load configuration through `lookup` instead of the real environment.
    pub fn from_lookup<F>(
        lookup: F,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut args = args.into_iter();
        let arg_file = args.next();
        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        let items_file = arg_file
            .or_else(|| var("TICKET_ITEMS_FILE"))
            .map(PathBuf::from);

        let log_filter = var("TICKET_LOG")
            .or_else(|| var("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        EnvFilter::try_new(&log_filter)
            .map_err(|_| ConfigError::InvalidValue("TICKET_LOG".to_string()))?;

        Ok(DemoConfig {
            items_file,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unexpected argument: {0} (usage: ticket-demo [ITEMS_FILE])")]
    UnexpectedArgument(String),
}
