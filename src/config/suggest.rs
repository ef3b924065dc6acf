//! Suggestion configuration module.
//!
//! This module defines how raw input is turned into a trie query and how
//! many suggestions are shown.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Suggestion list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestConfig {
    /// Maximum number of suggestions to show (None for all matches)
    pub max_suggestions: Option<usize>,

    /// Whether surrounding whitespace is stripped from the input before searching
    pub trim_input: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_suggestions: None,
            trim_input: true,
        }
    }
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggest.max_suggestions".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
