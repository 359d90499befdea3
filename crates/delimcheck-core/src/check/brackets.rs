//! Stack-based delimiter matching.
//!
//! The scan visits every character position once. At each position it
//! looks for an opener and then, independently, for a closer. A match
//! does not advance the scan past the token, so the inner characters of
//! a multi-character delimiter are tested again as possible delimiter
//! starts. Tables whose tokens overlap depend on this.

use super::error::ScanError;
use super::table::DelimiterTable;

/// First token in `candidates` that `rest` starts with.
fn first_prefix<'t>(rest: &str, mut candidates: impl Iterator<Item = &'t str>) -> Option<&'t str> {
    candidates.find(|token| rest.starts_with(token))
}

/// Scan `text` and report why delimiters are not properly nested.
///
/// # Errors
///
/// Returns a [`ScanError`] for a mismatched closer, a closer with nothing
/// open, or openers left unclosed at the end of the text.
pub fn scan(text: &str, table: &DelimiterTable) -> Result<(), ScanError> {
    let mut expected: Vec<&str> = Vec::new();

    for (start, _) in text.char_indices() {
        let rest = &text[start..];

        if let Some(index) = table.openers().position(|opener| rest.starts_with(opener)) {
            expected.push(table.pairs()[index].closer.as_str());
        }

        if let Some(closer) = first_prefix(rest, table.closers()) {
            let Some(top) = expected.pop() else {
                return Err(ScanError::Underflow {
                    closer: closer.to_string(),
                });
            };
            if top != closer {
                return Err(ScanError::Mismatch {
                    expected: top.to_string(),
                    found: closer.to_string(),
                });
            }
        }
    }

    if expected.is_empty() {
        Ok(())
    } else {
        Err(ScanError::Unclosed {
            remaining: expected.len(),
        })
    }
}

/// Whether every opener in `text` is closed in properly nested order.
#[must_use]
pub fn check_brackets(text: &str, table: &DelimiterTable) -> bool {
    match scan(text, table) {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(%error, "delimiter scan failed");
            false
        }
    }
}

/// Debug listing of the delimiters a scan recognizes, with byte offsets.
#[must_use]
pub fn debug_delimiters(text: &str, table: &DelimiterTable) -> String {
    use std::fmt::Write;

    let mut output = format!("Text: {text:?} (len={})\n\nDelimiters:\n", text.len());

    for (start, _) in text.char_indices() {
        let rest = &text[start..];
        if let Some(opener) = first_prefix(rest, table.openers()) {
            let _ = writeln!(output, "  OPEN: {opener:?} ({start})");
        }
        if let Some(closer) = first_prefix(rest, table.closers()) {
            let _ = writeln!(output, "  CLOSE: {closer:?} ({start})");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brackets() -> DelimiterTable {
        DelimiterTable::from_flat(&["(", ")", "{", "}"]).unwrap()
    }

    #[test]
    fn test_sequential_groups() {
        assert!(check_brackets("(yeet){yeet}", &brackets()));
    }

    #[test]
    fn test_nested_groups() {
        assert!(check_brackets("({yeet})", &brackets()));
    }

    #[test]
    fn test_crossed_groups() {
        assert!(!check_brackets("({yeet)}", &brackets()));
        assert_eq!(
            scan("({yeet)}", &brackets()),
            Err(ScanError::Mismatch {
                expected: "}".to_string(),
                found: ")".to_string(),
            })
        );
    }

    #[test]
    fn test_unclosed_opener() {
        assert!(!check_brackets("(yeet", &brackets()));
        assert_eq!(
            scan("((yeet)", &brackets()),
            Err(ScanError::Unclosed { remaining: 1 })
        );
    }

    #[test]
    fn test_unmatched_closer_underflows() {
        assert!(!check_brackets("yeet)", &brackets()));
        assert_eq!(
            scan("()}", &brackets()),
            Err(ScanError::Underflow {
                closer: "}".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(check_brackets("", &brackets()));
    }

    #[test]
    fn test_text_without_delimiters() {
        assert!(check_brackets("plain words", &brackets()));
    }

    #[test]
    fn test_removing_one_opener_breaks_valid_text() {
        let valid = "a(b{c}d)[e]{(f)}";
        assert!(check_brackets(valid, &brackets()));
        for (i, c) in valid.char_indices() {
            if c == '(' || c == '{' {
                let mut broken = valid.to_string();
                broken.remove(i);
                assert!(!check_brackets(&broken, &brackets()), "{broken}");
            }
        }
    }

    #[test]
    fn test_multibyte_text() {
        assert!(check_brackets("(é{ü})", &brackets()));
        assert!(!check_brackets("(é{ü)", &brackets()));
    }

    #[test]
    fn test_multi_character_delimiters() {
        let table = DelimiterTable::from_flat(&["begin", "end"]).unwrap();
        assert!(check_brackets("begin x begin y end end", &table));
        assert!(!check_brackets("begin x end end", &table));
    }

    #[test]
    fn test_first_listed_opener_wins() {
        let table = DelimiterTable::from_flat(&["#{", "}", "#", ";"]).unwrap();
        assert!(check_brackets("#{x}", &table));
        let reversed = DelimiterTable::from_flat(&["#", ";", "#{", "}"]).unwrap();
        assert!(!check_brackets("#{x}", &reversed));
    }

    #[test]
    fn test_inner_characters_are_rescanned() {
        // "((" opens at offsets 0 and 1, "))" closes at 4 and 5.
        let table = DelimiterTable::from_flat(&["((", "))"]).unwrap();
        assert!(check_brackets("(((x)))", &table));
        assert_eq!(
            scan("(((x))", &table),
            Err(ScanError::Unclosed { remaining: 1 })
        );
    }

    #[test]
    fn test_same_token_opens_and_closes() {
        // Opener and closer tested at the same position: "|" pushes then pops.
        let table = DelimiterTable::from_flat(&["|", "|"]).unwrap();
        assert!(check_brackets("|a| |b|", &table));
    }

    #[test]
    fn test_debug_delimiters_lists_offsets() {
        let output = debug_delimiters("(a)", &brackets());
        assert!(output.contains("OPEN: \"(\" (0)"));
        assert!(output.contains("CLOSE: \")\" (2)"));
    }
}
