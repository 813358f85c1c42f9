//! Transformer configuration.

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

use crate::map::ErrorMap;
use crate::types::LogOptions;

/// Module label used when a transformer is built without one.
pub const UNKNOWN_MODULE: &str = "unknown_module";

/// Which outcomes the transformer prints to the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogVerbosity {
    #[default]
    Never,
    /// Outcomes of matched rules.
    Known,
    /// The fallback, when nothing matched.
    Unknown,
    All,
}

impl LogVerbosity {
    #[inline]
    pub fn logs_known(self) -> bool {
        matches!(self, Self::Known | Self::All)
    }

    #[inline]
    pub fn logs_unknown(self) -> bool {
        matches!(self, Self::Unknown | Self::All)
    }

    /// Whether an outcome is printed; `matched` is false for the fallback.
    #[inline]
    pub fn allows(self, matched: bool) -> bool {
        if matched { self.logs_known() } else { self.logs_unknown() }
    }
}

/// Error returned when parsing an unknown verbosity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogVerbosityError(String);

impl fmt::Display for ParseLogVerbosityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log verbosity `{}` (expected never, known, unknown or all)", self.0)
    }
}

impl std::error::Error for ParseLogVerbosityError {}

impl FromStr for LogVerbosity {
    type Err = ParseLogVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "known" => Ok(Self::Known),
            "unknown" => Ok(Self::Unknown),
            "all" => Ok(Self::All),
            _ => Err(ParseLogVerbosityError(s.to_owned())),
        }
    }
}

/// Optional transformer behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformerOptions {
    pub log: LogVerbosity,
    /// Layout used when an outcome is printed.
    pub log_options: LogOptions,
}

impl TransformerOptions {
    #[inline]
    pub fn log(mut self, log: LogVerbosity) -> Self {
        self.log = log;
        self
    }

    #[inline]
    pub fn log_options(mut self, log_options: LogOptions) -> Self {
        self.log_options = log_options;
        self
    }
}

/// Required transformer input.
#[derive(Debug, Clone)]
pub struct TransformerConfig {
    pub error_map: ErrorMap,
    /// Label recorded in every produced error's context.
    pub module_name: Option<String>,
}

impl TransformerConfig {
    pub fn new(error_map: impl Into<ErrorMap>) -> Self {
        Self { error_map: error_map.into(), module_name: None }
    }

    pub fn module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }
}
