//! Markup tag checking.

use super::brackets::scan;
use super::comments::CommentMarkers;
use super::error::CheckError;
use super::table::DelimiterTable;

/// Which tag, if any, a text starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPrefix<'a> {
    /// Starts with this opening tag.
    Open(&'a str),
    /// Starts with this closing tag.
    Close(&'a str),
    /// Starts with neither.
    None,
}

impl<'a> TagPrefix<'a> {
    /// `(opening, closing)` view; at most one side is set.
    #[must_use]
    pub const fn into_pair(self) -> (Option<&'a str>, Option<&'a str>) {
        match self {
            Self::Open(tag) => (Some(tag), None),
            Self::Close(tag) => (None, Some(tag)),
            Self::None => (None, None),
        }
    }
}

/// Find the first tag in `opening_tags`, then in `closing_tags`, that
/// `text` starts with.
pub fn get_tag_prefix<'a, S: AsRef<str>>(
    text: &str,
    opening_tags: &'a [S],
    closing_tags: &'a [S],
) -> TagPrefix<'a> {
    let starts = |tags: &'a [S]| {
        tags.iter()
            .map(S::as_ref)
            .find(|tag| text.starts_with(tag))
    };

    if let Some(tag) = starts(opening_tags) {
        return TagPrefix::Open(tag);
    }
    starts(closing_tags).map_or(TagPrefix::None, TagPrefix::Close)
}

/// Strip comments and check that the named tags are properly nested.
///
/// # Errors
///
/// Returns an error if `tag_names` cannot form a delimiter table, if
/// comments are unbalanced, or if the tags are not properly nested.
pub fn tag_scan<S: AsRef<str>>(
    full_text: &str,
    tag_names: &[S],
    comment_markers: &CommentMarkers,
) -> Result<(), CheckError> {
    let table = DelimiterTable::from_tag_names(tag_names)?;
    let text = comment_markers.strip(full_text)?;
    scan(&text, &table)?;
    Ok(())
}

/// Whether `full_text` has balanced comments and properly nested tags.
#[must_use]
pub fn check_tags<S: AsRef<str>>(
    full_text: &str,
    tag_names: &[S],
    comment_markers: &CommentMarkers,
) -> bool {
    match tag_scan(full_text, tag_names, comment_markers) {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(%error, "tag check failed");
            false
        }
    }
}
