use delimcheck_core::{Checker, CommentMarkers, DelimiterTable};
use std::fs;
use std::path::Path;

fn checker_for(path: &Path) -> Checker {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => Checker::new(
            DelimiterTable::from_tag_names(&["html", "head", "title", "body", "h1"]).unwrap(),
            Some(CommentMarkers::html()),
        ),
        Some("c") => Checker::new(
            DelimiterTable::from_flat(&["(", ")", "[", "]", "{", "}"]).unwrap(),
            Some(CommentMarkers::c_block()),
        ),
        other => panic!("no checker for extension {other:?}"),
    }
}

fn test_fixture(file: &str, expected: bool) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file);

    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    let result = checker_for(&path).check(&text);
    assert_eq!(
        result.is_ok(),
        expected,
        "Fixture {file} gave {result:?}"
    );
}

macro_rules! fixture_tests {
    ($($name:ident => $file:literal, $expected:literal),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                test_fixture($file, $expected);
            }
        )*
    };
}

fixture_tests!(
    document => "document.html", true,
    empty => "empty.html", true,
    hidden_close => "hidden_close.html", false,
    stray_comment_end => "stray_comment_end.html", false,
    unclosed_comment => "unclosed_comment.html", false,
    nested => "nested.c", true,
    crossed => "crossed.c", false,
    unclosed_block => "unclosed_block.c", false,
);
