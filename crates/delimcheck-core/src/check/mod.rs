//! Delimiter checking.
//!
//! Comments are stripped first, then the remaining text is scanned for
//! openers and closers from an ordered [`DelimiterTable`]. Markup tags are
//! checked the same way, using `<name>` / `</name>` pairs.

mod brackets;
mod comments;
mod error;
mod table;
mod tags;

pub use brackets::{check_brackets, debug_delimiters, scan};
pub use comments::{CommentMarkers, remove_comments};
pub use error::{CheckError, CommentError, ScanError, TableError};
pub use table::{DelimiterPair, DelimiterTable};
pub use tags::{TagPrefix, check_tags, get_tag_prefix, tag_scan};

use std::borrow::Cow;

use crate::{Config, ConfigError};

/// A delimiter table and optional comment markers, built once and reused.
#[derive(Debug, Clone)]
pub struct Checker {
    table: DelimiterTable,
    comments: Option<CommentMarkers>,
}

impl Checker {
    /// Create a checker from a table and optional comment markers.
    #[must_use]
    pub const fn new(table: DelimiterTable, comments: Option<CommentMarkers>) -> Self {
        Self { table, comments }
    }

    /// Create a checker for the configured mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not describe a valid
    /// delimiter table.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let table = config.table()?;
        Ok(Self::new(table, config.comment_markers()))
    }

    /// The delimiter table in priority order.
    #[must_use]
    pub const fn table(&self) -> &DelimiterTable {
        &self.table
    }

    /// Comment markers stripped before scanning, if any.
    #[must_use]
    pub const fn comments(&self) -> Option<&CommentMarkers> {
        self.comments.as_ref()
    }

    /// Strip comments from `text` and scan it.
    ///
    /// # Errors
    ///
    /// Returns an error if comments are unbalanced or delimiters are not
    /// properly nested.
    pub fn check(&self, text: &str) -> Result<(), CheckError> {
        scan(&self.stripped(text)?, &self.table)?;
        Ok(())
    }

    /// Debug listing of the delimiters [`Self::check`] scans. Offsets
    /// point into the text after comments are removed.
    ///
    /// # Errors
    ///
    /// Returns an error if comments are unbalanced.
    pub fn debug(&self, text: &str) -> Result<String, CheckError> {
        Ok(debug_delimiters(&self.stripped(text)?, &self.table))
    }

    fn stripped<'t>(&self, text: &'t str) -> Result<Cow<'t, str>, CheckError> {
        match &self.comments {
            Some(markers) => Ok(Cow::Owned(markers.strip(text)?)),
            None => Ok(Cow::Borrowed(text)),
        }
    }

    /// Whether `text` passes [`Self::check`].
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }
}
