//! Runtime Environment
//!
//! The deployment environment the process runs in, read from `NODE_ENV`.
//! It gates log verbosity and whether client handles are retained.

use serde::Deserialize;

/// Log categories the client reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
}

/// Deployment environment of the running process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum RuntimeEnv {
    Development,
    Production,
    Test,
    #[default]
    Unspecified,
}

impl RuntimeEnv {
    /// Parse an environment name; unknown names are `Unspecified`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Self::Development,
            "production" => Self::Production,
            "test" => Self::Test,
            _ => Self::Unspecified,
        }
    }

    /// Log categories the client emits in this environment
    #[must_use]
    pub fn log_levels(self) -> &'static [LogLevel] {
        match self {
            Self::Development => &[LogLevel::Error, LogLevel::Warn],
            _ => &[LogLevel::Error],
        }
    }

    /// Whether client and pool handles are kept for reuse within the process
    #[must_use]
    pub fn retains_handles(self) -> bool {
        !matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
            Self::Unspecified => "unspecified",
        }
    }
}

impl From<String> for RuntimeEnv {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl std::fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
