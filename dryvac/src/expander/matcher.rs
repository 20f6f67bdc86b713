//! Fragment classification
//!
//! Every fragment on the worklist falls into exactly one [`Fragment`] case.
//! The cases are tried in a fixed priority order: all-vanilla, variable
//! usage, round-bracket group, square-bracket group, and finally
//! unrecognized. Variables are substituted before any group is split so that
//! a variable's own alternations are expanded as part of the enclosing text.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `[A-Za-z_][A-Za-z0-9_-]*`
pub const IDENTIFIER: &str = "[a-zA-Z_][a-zA-Z0-9_-]*";

static ALL_VANILLA: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"^(?:[a-zA-Z0-9 '-]|<{}>)*$", IDENTIFIER))
});

static VARIABLE_USAGE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\$({})", IDENTIFIER)));

static ROUND_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"\(((?:[a-zA-Z0-9 '|-]|<{}>)*)\)", IDENTIFIER))
});

static SQUARE_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"\[((?:[a-zA-Z0-9 '|-]|<{}>)*)\]", IDENTIFIER))
});

/// `<identifier>`, capturing the slot name
pub static SLOT_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("<({})>", IDENTIFIER)));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("fragment grammar patterns are valid regexes")
}

/// Syntactic case of a fragment, with the span it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Only literal text and `<slot>` placeholders remain
    Vanilla,
    /// Leftmost `$name`
    VariableRef { span: Range<usize>, name: String },
    /// Leftmost resolvable `(a|b|...)`
    Alternation {
        span: Range<usize>,
        variants: Vec<String>,
    },
    /// Leftmost resolvable `[a|b|...]`
    Optional {
        span: Range<usize>,
        variants: Vec<String>,
    },
    /// Nothing above applies
    Unrecognized,
}

impl Fragment {
    pub fn name(&self) -> &'static str {
        match self {
            Fragment::Vanilla => "vanilla",
            Fragment::VariableRef { .. } => "variable",
            Fragment::Alternation { .. } => "alternation",
            Fragment::Optional { .. } => "optional",
            Fragment::Unrecognized => "unrecognized",
        }
    }
}

/// Classify a fragment into exactly one case
pub fn classify(fragment: &str) -> Fragment {
    if ALL_VANILLA.is_match(fragment) {
        return Fragment::Vanilla;
    }
    if let Some((span, name)) = first_capture(&VARIABLE_USAGE, fragment) {
        return Fragment::VariableRef { span, name };
    }
    if let Some((span, inner)) = first_capture(&ROUND_GROUP, fragment) {
        return Fragment::Alternation {
            span,
            variants: split_variants(&inner),
        };
    }
    if let Some((span, inner)) = first_capture(&SQUARE_GROUP, fragment) {
        return Fragment::Optional {
            span,
            variants: split_variants(&inner),
        };
    }
    Fragment::Unrecognized
}

/// A group without `|` is a single variant
fn split_variants(inner: &str) -> Vec<String> {
    inner.split('|').map(str::to_string).collect()
}

fn first_capture(re: &Regex, fragment: &str) -> Option<(Range<usize>, String)> {
    let captures = re.captures(fragment)?;
    let whole = captures.get(0)?;
    let inner = captures.get(1)?;
    Some((whole.range(), inner.as_str().to_string()))
}

/// Names of all `<slot>` placeholders in a sentence, in order of appearance
pub fn slot_placeholders(sentence: &str) -> impl Iterator<Item = &str> {
    SLOT_PLACEHOLDER
        .captures_iter(sentence)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str())
}
