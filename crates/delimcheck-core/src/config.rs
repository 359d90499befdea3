use serde::Deserialize;
use thiserror::Error;

use crate::check::{CommentMarkers, DelimiterTable};

/// What kind of delimiters to check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// Opener/closer pairs listed in `brackets` (default).
    #[default]
    Brackets,
    /// Markup tags `<name>` / `</name>` for each name in `tags`.
    Tags,
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Description of the validation error.
    pub message: String,
}

/// Checking configuration options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What kind of delimiters to check.
    pub mode: Mode,
    /// Flat opener/closer list used in brackets mode, e.g. `["(", ")"]`.
    pub brackets: Vec<String>,
    /// Tag names used in tags mode.
    pub tags: Vec<String>,
    /// Comment markers stripped before checking. Tags mode falls back to
    /// `<!--` / `-->` when unset.
    pub comment: Option<CommentMarkers>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiters for the configured mode do not
    /// form a valid table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table().map(|_| ())
    }

    /// Delimiter table for the configured mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiters do not form a valid table.
    pub fn table(&self) -> Result<DelimiterTable, ConfigError> {
        match self.mode {
            Mode::Brackets => {
                DelimiterTable::from_flat(self.brackets.as_slice()).map_err(|e| ConfigError {
                    message: format!("brackets: {e}"),
                })
            }
            Mode::Tags => {
                DelimiterTable::from_tag_names(self.tags.as_slice()).map_err(|e| ConfigError {
                    message: format!("tags: {e}"),
                })
            }
        }
    }

    /// Comment markers to strip in the configured mode.
    #[must_use]
    pub fn comment_markers(&self) -> Option<CommentMarkers> {
        match (self.mode, &self.comment) {
            (_, Some(markers)) => Some(markers.clone()),
            (Mode::Tags, None) => Some(CommentMarkers::html()),
            (Mode::Brackets, None) => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            brackets: ["(", ")", "[", "]", "{", "}"].map(String::from).to_vec(),
            tags: ["html", "head", "title", "body", "h1"]
                .map(String::from)
                .to_vec(),
            comment: None,
        }
    }
}
