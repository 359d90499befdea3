//! Delimiter nesting and markup tag validation library.
//!
//! This library checks that brackets and markup tags in text are properly
//! nested, after removing comment spans.

mod check;
mod config;

pub use check::{
    CheckError, Checker, CommentError, CommentMarkers, DelimiterPair, DelimiterTable, ScanError,
    TableError, TagPrefix, check_brackets, check_tags, debug_delimiters, get_tag_prefix,
    remove_comments, scan, tag_scan,
};
pub use config::{Config, ConfigError, Mode};
