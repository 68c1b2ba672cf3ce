//! Record configuration

use crate::env::env_get_bool;

/// Enables the stderr reporter on records built with `from_env`.
pub const REPORTING_VAR: &str = "DC_ERROR_REPORTING";

/// Configuration for a new [`ErrorRecord`](crate::ErrorRecord)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordConfig {
    /// Report every raise to stderr (default: false)
    pub reporting: bool,
}

impl RecordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `DC_ERROR_REPORTING`, falling back to the defaults when unset.
    pub fn from_env() -> Self {
        Self {
            reporting: env_get_bool(REPORTING_VAR, false),
        }
    }

    /// Enable or disable reporting
    pub fn reporting(mut self, enable: bool) -> Self {
        self.reporting = enable;
        self
    }
}
