//! Comment span removal.

use serde::Deserialize;

use super::error::CommentError;

/// Start and end markers of a comment span.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawMarkers")]
pub struct CommentMarkers {
    start: String,
    end: String,
}

#[derive(Deserialize)]
struct RawMarkers {
    start: String,
    end: String,
}

impl TryFrom<RawMarkers> for CommentMarkers {
    type Error = CommentError;

    fn try_from(raw: RawMarkers) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl CommentMarkers {
    /// Create markers, rejecting empty or identical ones.
    ///
    /// # Errors
    ///
    /// Returns an error if either marker is empty or both are the same.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, CommentError> {
        let start = start.into();
        let end = end.into();
        validate_markers(&start, &end)?;
        Ok(Self { start, end })
    }

    /// `<!--` ... `-->`
    #[must_use]
    pub fn html() -> Self {
        Self {
            start: "<!--".to_string(),
            end: "-->".to_string(),
        }
    }

    /// `/*` ... `*/`
    #[must_use]
    pub fn c_block() -> Self {
        Self {
            start: "/*".to_string(),
            end: "*/".to_string(),
        }
    }

    /// Start marker.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End marker.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Remove every comment span from `text`.
    ///
    /// # Errors
    ///
    /// See [`remove_comments`].
    pub fn strip(&self, text: &str) -> Result<String, CommentError> {
        strip_spans(text, &self.start, &self.end)
    }
}

fn validate_markers(start: &str, end: &str) -> Result<(), CommentError> {
    if start.is_empty() || end.is_empty() {
        return Err(CommentError::EmptyMarker);
    }
    if start == end {
        return Err(CommentError::SymmetricMarkers(start.to_string()));
    }
    Ok(())
}

/// Remove every comment span from `text`.
///
/// A span runs from the first remaining `comment_start` to the first
/// `comment_end` found at or after it, markers included. Spans are removed
/// one at a time until neither marker is left, so text joined by a removal
/// can form new markers that are removed in turn.
///
/// # Errors
///
/// Returns an error if the markers are empty or identical, if a start
/// marker has no end after it, or if an end marker is left with no start.
/// No partially stripped text is returned on failure.
pub fn remove_comments(
    text: &str,
    comment_start: &str,
    comment_end: &str,
) -> Result<String, CommentError> {
    validate_markers(comment_start, comment_end)?;
    strip_spans(text, comment_start, comment_end)
}

fn strip_spans(
    text: &str,
    comment_start: &str,
    comment_end: &str,
) -> Result<String, CommentError> {
    let mut text = text.to_string();

    while text.contains(comment_start) || text.contains(comment_end) {
        let Some(start) = text.find(comment_start) else {
            return Err(CommentError::Unopened {
                start: comment_start.to_string(),
                end: comment_end.to_string(),
            });
        };
        // The end marker may overlap the start marker, e.g. "<!-->".
        let Some(offset) = text[start..].find(comment_end) else {
            return Err(CommentError::Unterminated {
                start: comment_start.to_string(),
                end: comment_end.to_string(),
            });
        };

        let end = start + offset + comment_end.len();
        tracing::trace!(start, end, "removing comment span");
        text.replace_range(start..end, "");
    }

    Ok(text)
}
