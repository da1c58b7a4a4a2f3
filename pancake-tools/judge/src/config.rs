//! Judge Configuration
//!
//! Defines configuration options for the pancake judge.

use pancake::Encoding;
use serde::{Deserialize, Serialize};

use crate::{JudgeError, JudgeResult};

/// Configuration for a judge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix each result line with `Case #i: `.
    pub case_prefix: bool,

    /// Also log each result line at info level.
    pub echo: bool,

    /// Marker characters for face-up and face-down pancakes.
    pub encoding: Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_prefix: true,
            echo: false,
            encoding: Encoding::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> JudgeResult<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| JudgeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the marker characters can be told apart from each other
    /// and from integer literals.
    pub fn validate(&self) -> JudgeResult<()> {
        let Encoding { face_up, face_down } = self.encoding;
        if face_up == face_down {
            return Err(JudgeError::Config(format!(
                "face-up and face-down markers must differ, both are '{face_up}'"
            )));
        }
        for marker in [face_up, face_down] {
            if marker.is_ascii_digit() || marker.is_whitespace() || marker <= ' ' {
                return Err(JudgeError::Config(format!(
                    "'{}' cannot be used as a pancake marker",
                    marker.escape_default()
                )));
            }
        }
        Ok(())
    }

    /// Formats the output line for one case.
    pub fn format_line(&self, case_number: u64, result: &str) -> String {
        if self.case_prefix {
            format!("Case #{case_number}: {result}")
        } else {
            result.to_string()
        }
    }
}
