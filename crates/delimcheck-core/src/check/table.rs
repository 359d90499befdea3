//! Ordered opener/closer pairs.

use super::error::TableError;

/// One opener and the closer that balances it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    /// Opening token, e.g. `(` or `<body>`.
    pub opener: String,
    /// Closing token, e.g. `)` or `</body>`.
    pub closer: String,
}

impl DelimiterPair {
    /// Create a pair.
    pub fn new(opener: impl Into<String>, closer: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
            closer: closer.into(),
        }
    }

    /// Pair for a markup element: `<name>` and `</name>`.
    #[must_use]
    pub fn tag(name: &str) -> Self {
        Self {
            opener: format!("<{name}>"),
            closer: format!("</{name}>"),
        }
    }
}

/// Delimiter pairs in priority order.
///
/// When several openers (or closers) match at the same position the one
/// listed first wins, so a token that is a prefix of another should come
/// after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterTable {
    pairs: Vec<DelimiterPair>,
}

impl DelimiterTable {
    /// Build a table from pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, a token is empty, or an
    /// opener is repeated.
    pub fn new(pairs: Vec<DelimiterPair>) -> Result<Self, TableError> {
        if pairs.is_empty() {
            return Err(TableError::Empty);
        }

        for (i, pair) in pairs.iter().enumerate() {
            if pair.opener.is_empty() {
                return Err(TableError::EmptyOpener(i));
            }
            if pair.closer.is_empty() {
                return Err(TableError::EmptyCloser(i));
            }
            if pairs[..i].iter().any(|p| p.opener == pair.opener) {
                return Err(TableError::DuplicateOpener(pair.opener.clone()));
            }
        }

        Ok(Self { pairs })
    }

    /// Build a table from a flat list where even entries are openers and
    /// each following odd entry is its closer.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has odd length or fails [`Self::new`].
    pub fn from_flat<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TableError> {
        if !tokens.len().is_multiple_of(2) {
            return Err(TableError::OddLength(tokens.len()));
        }

        let pairs = tokens
            .chunks_exact(2)
            .map(|pair| DelimiterPair::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect();
        Self::new(pairs)
    }

    /// Build `<name>` / `</name>` pairs, keeping the order of `names`.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or the list is empty.
    pub fn from_tag_names<S: AsRef<str>>(names: &[S]) -> Result<Self, TableError> {
        if let Some(i) = names.iter().position(|name| name.as_ref().is_empty()) {
            return Err(TableError::EmptyTagName(i));
        }

        let pairs = names
            .iter()
            .map(|name| DelimiterPair::tag(name.as_ref()))
            .collect();
        Self::new(pairs)
    }

    /// Pairs in priority order.
    #[must_use]
    pub fn pairs(&self) -> &[DelimiterPair] {
        &self.pairs
    }

    /// Openers in priority order.
    pub fn openers(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.opener.as_str())
    }

    /// Closers in priority order.
    pub fn closers(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.closer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_pairs_alternate_entries() {
        let table = DelimiterTable::from_flat(&["(", ")", "{", "}"]).unwrap();
        assert_eq!(
            table.pairs(),
            &[DelimiterPair::new("(", ")"), DelimiterPair::new("{", "}")]
        );
    }

    #[test]
    fn test_from_flat_odd_length() {
        let result = DelimiterTable::from_flat(&["(", ")", "{"]);
        assert_eq!(result, Err(TableError::OddLength(3)));
    }

    #[test]
    fn test_empty_table_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(DelimiterTable::from_flat(&empty), Err(TableError::Empty));
    }

    #[test]
    fn test_empty_tokens_rejected() {
        assert_eq!(
            DelimiterTable::from_flat(&["(", ")", "", "}"]),
            Err(TableError::EmptyOpener(1))
        );
        assert_eq!(
            DelimiterTable::from_flat(&["(", ""]),
            Err(TableError::EmptyCloser(0))
        );
    }

    #[test]
    fn test_duplicate_opener_rejected() {
        let result = DelimiterTable::from_flat(&["(", ")", "(", "]"]);
        assert_eq!(result, Err(TableError::DuplicateOpener("(".to_string())));
    }

    #[test]
    fn test_shared_closer_allowed() {
        assert!(DelimiterTable::from_flat(&["(", ")", "[", ")"]).is_ok());
    }

    #[test]
    fn test_tag_names_keep_order() {
        let table = DelimiterTable::from_tag_names(&["html", "h1"]).unwrap();
        let openers: Vec<_> = table.openers().collect();
        let closers: Vec<_> = table.closers().collect();
        assert_eq!(openers, ["<html>", "<h1>"]);
        assert_eq!(closers, ["</html>", "</h1>"]);
    }

    #[test]
    fn test_empty_tag_name_rejected() {
        let result = DelimiterTable::from_tag_names(&["html", ""]);
        assert_eq!(result, Err(TableError::EmptyTagName(1)));
    }
}
