//! Loading execution segments from configuration sources.
//!
//! Segments arrive as text, either in the `executionSegment` field of a JSON
//! options document or in the [`EXECUTION_SEGMENT_ENV`] environment variable.
//! Both use the grammar documented in the `segment` module. When both are
//! present the environment wins.

use core::fmt;
use std::env::{self, VarError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::segment::{ExecutionSegment, SegmentError};

/// Environment variable holding this instance's segment.
pub const EXECUTION_SEGMENT_ENV: &str = "EXEC_SEGMENT";

static FULL_SEGMENT: ExecutionSegment = ExecutionSegment::Full;

/// Errors raised while reading segment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The environment variable held an invalid segment.
    Env {
        /// Variable that was read.
        var: &'static str,
        /// Underlying segment error.
        source: SegmentError,
    },
    /// The environment variable was not valid unicode.
    EnvNotUnicode {
        /// Variable that was read.
        var: &'static str,
    },
    /// The JSON document was malformed or held an invalid segment.
    Json {
        /// Message reported by the JSON decoder.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Env { var, source } => write!(f, "invalid {var}: {source}"),
            ConfigError::EnvNotUnicode { var } => write!(f, "{var} is not valid unicode"),
            ConfigError::Json { message } => write!(f, "invalid segment options: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Env { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Segment-related options of a test run.
///
/// | Field | JSON key | Default |
/// |-------|----------|---------|
/// | `execution_segment` | `executionSegment` | unset, i.e. the full segment |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOptions {
    #[serde(default)]
    pub execution_segment: Option<ExecutionSegment>,
}

impl SegmentOptions {
    /// Decodes options from a JSON document. Unknown keys are ignored so the
    /// same document can carry unrelated options.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::Json {
            message: err.to_string(),
        })
    }

    /// Builds options from the raw value of [`EXECUTION_SEGMENT_ENV`].
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(text) = value else {
            return Ok(SegmentOptions::default());
        };
        let segment = text.parse().map_err(|source| ConfigError::Env {
            var: EXECUTION_SEGMENT_ENV,
            source,
        })?;
        Ok(SegmentOptions {
            execution_segment: Some(segment),
        })
    }

    /// Reads [`EXECUTION_SEGMENT_ENV`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(EXECUTION_SEGMENT_ENV) {
            Ok(value) => Self::from_env_value(Some(&value)),
            Err(VarError::NotPresent) => Ok(SegmentOptions::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::EnvNotUnicode {
                var: EXECUTION_SEGMENT_ENV,
            }),
        }
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn apply(self, overrides: SegmentOptions) -> SegmentOptions {
        SegmentOptions {
            execution_segment: overrides.execution_segment.or(self.execution_segment),
        }
    }

    /// Loads JSON options and applies the environment on top.
    pub fn load(json: Option<&str>) -> Result<Self, ConfigError> {
        let base = match json {
            Some(text) => Self::from_json(text)?,
            None => SegmentOptions::default(),
        };
        let env = Self::from_env()?;
        let source = if env.execution_segment.is_some() {
            "env"
        } else if base.execution_segment.is_some() {
            "json"
        } else {
            "default"
        };
        let options = base.apply(env);
        debug!(
            source,
            segment = %options.segment(),
            share = options.segment().float_length(),
            "resolved execution segment"
        );
        Ok(options)
    }

    /// The configured segment, or the full segment when unset.
    pub fn segment(&self) -> &ExecutionSegment {
        self.execution_segment.as_ref().unwrap_or(&FULL_SEGMENT)
    }
}
