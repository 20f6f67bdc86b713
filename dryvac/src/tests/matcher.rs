use crate::expander::matcher::{classify, slot_placeholders, Fragment};

#[test]
fn test_classify_plain_text_and_slots_as_vanilla() {
    assert_eq!(classify("turn on the light"), Fragment::Vanilla);
    assert_eq!(classify("it's a half-open door"), Fragment::Vanilla);
    assert_eq!(classify("play <song_name> by <artist-2>"), Fragment::Vanilla);
    assert_eq!(classify(""), Fragment::Vanilla);
}

#[test]
fn test_classify_variable_before_groups() {
    assert_eq!(
        classify("a $b (c|d)"),
        Fragment::VariableRef {
            span: 2..4,
            name: "b".to_string()
        }
    );
}

#[test]
fn test_classify_variable_name_with_hyphen() {
    assert_eq!(
        classify("($my-var)"),
        Fragment::VariableRef {
            span: 1..8,
            name: "my-var".to_string()
        }
    );
}

#[test]
fn test_classify_round_group_before_square() {
    assert_eq!(
        classify("x (a|b) [c]"),
        Fragment::Alternation {
            span: 2..7,
            variants: vec!["a".to_string(), "b".to_string()]
        }
    );
}

#[test]
fn test_classify_resolves_innermost_group_first() {
    assert_eq!(
        classify("((a|b))"),
        Fragment::Alternation {
            span: 1..6,
            variants: vec!["a".to_string(), "b".to_string()]
        }
    );
}

#[test]
fn test_classify_group_without_pipe_is_single_variant() {
    assert_eq!(
        classify("(hello)"),
        Fragment::Alternation {
            span: 0..7,
            variants: vec!["hello".to_string()]
        }
    );
}

#[test]
fn test_classify_empty_group() {
    assert_eq!(
        classify("(a () b)"),
        Fragment::Alternation {
            span: 3..5,
            variants: vec![String::new()]
        }
    );
}

#[test]
fn test_classify_optional_group_keeps_empty_variants() {
    assert_eq!(
        classify("x [c|] y"),
        Fragment::Optional {
            span: 2..6,
            variants: vec!["c".to_string(), String::new()]
        }
    );
}

#[test]
fn test_classify_unrecognized() {
    assert_eq!(classify("hello {world}"), Fragment::Unrecognized);
    assert_eq!(classify("hello <1bad>"), Fragment::Unrecognized);
    assert_eq!(classify("cost $ 5"), Fragment::Unrecognized);
    assert_eq!(classify("(unclosed"), Fragment::Unrecognized);
}

#[test]
fn test_slot_placeholders_in_order() {
    let names: Vec<&str> = slot_placeholders("from <from> to <to> via <from>").collect();
    assert_eq!(names, vec!["from", "to", "from"]);
}

#[test]
fn test_classify_empty_optional_group() {
    assert_eq!(
        classify("a [] b"),
        Fragment::Optional {
            span: 2..4,
            variants: vec![String::new()]
        }
    );
}
