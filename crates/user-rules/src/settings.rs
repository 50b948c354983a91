//! Command-line defaults loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::{RuleError, SettingsError};
use crate::rule::CombineMode;

const PROGRAM_NAME: &str = "user-rules";

/// Settings layered from configuration files and `USER_RULES_*` variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_RULES")]
pub struct RulesSettings {
    /// Combination mode used when `check` is given no `--mode`.
    pub default_mode: Option<String>,
    /// Emit logs as JSON rather than human-readable lines.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl RulesSettings {
    /// Load settings from files and the environment only.
    ///
    /// Command-line flags belong to the `user-rules` parser, so only the
    /// program name is handed to OrthoConfig.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a source cannot be read or a value
    /// does not deserialize.
    pub fn from_environment() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| SettingsError {
            message: err.to_string(),
        })
    }

    /// Resolve the configured default mode, falling back to
    /// [`CombineMode::All`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownMode`] when the configured value is not a
    /// known mode.
    pub fn default_mode(&self) -> Result<CombineMode, RuleError> {
        self.default_mode
            .as_deref()
            .map_or(Ok(CombineMode::default()), str::parse)
    }
}
