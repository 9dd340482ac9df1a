use serde::{Deserialize, Serialize};

use crate::dashboard::{ViewMode, WorkspaceTab};

/// Delay before the summarizer step hands over to the details form.
pub const DEFAULT_SUMMARIZER_DELAY_MS: u64 = 1000;

/// Upload ceiling advertised in the intake copy ("PDF, max 20 MB").
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Settings for the case intake flow.
///
/// Every field has a default so a partial `[intake]` table is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeConfig {
    #[serde(default = "default_delay_ms")]
    pub summarizer_delay_ms: u64,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
    /// Reject "run summarizer" when neither text nor a document is present.
    #[serde(default)]
    pub require_input: bool,
}

fn default_delay_ms() -> u64 {
    DEFAULT_SUMMARIZER_DELAY_MS
}

fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            summarizer_delay_ms: DEFAULT_SUMMARIZER_DELAY_MS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            require_input: false,
        }
    }
}

/// Initial presentation state of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default)]
    pub default_tab: WorkspaceTab,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Parse a TOML document into an `AppConfig`.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Parse, falling back to defaults when the document is invalid.
    ///
    /// Returns the parse error message alongside so the caller can log it.
    pub fn from_toml_or_default(contents: &str) -> (Self, Option<String>) {
        match Self::from_toml_str(contents) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }
}
