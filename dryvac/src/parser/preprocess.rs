use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Prepare one raw source line for classification.
///
/// Strips everything from the first `#`, trims, and compacts every run of
/// whitespace to a single space. Returns an empty string for blank and
/// comment-only lines.
pub fn clean_line(raw: &str) -> String {
    let line = match raw.find('#') {
        Some(comment_start) => &raw[..comment_start],
        None => raw,
    };
    WHITESPACE_RUN.replace_all(line.trim(), " ").into_owned()
}

/// Case-insensitive keyword a cleaned line starts with, if any
pub fn leading_keyword(line: &str) -> Option<&'static str> {
    const KEYWORDS: [&str; 5] = ["INVOCATION:", "LANG:", "INTENT:", "ENTITY:", "SLOT:"];
    KEYWORDS.into_iter().find(|keyword| {
        line.get(..keyword.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_strips_comment_and_compacts() {
        assert_eq!(clean_line("  a   (b |\tc)   # trailing"), "a (b | c)");
        assert_eq!(clean_line("# only a comment"), "");
        assert_eq!(clean_line("   "), "");
    }

    #[test]
    fn test_leading_keyword_is_case_insensitive() {
        assert_eq!(leading_keyword("intent: Foo"), Some("INTENT:"));
        assert_eq!(leading_keyword("Slot: x"), Some("SLOT:"));
        assert_eq!(leading_keyword("slotted things"), None);
        assert_eq!(leading_keyword("é"), None);
    }
}
