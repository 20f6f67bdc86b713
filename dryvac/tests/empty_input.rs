use dryvac::{Engine, ExpansionOptions};

#[test]
fn test_empty_string() {
    let mut engine = Engine::new();
    let result = engine.add_dry_code("", "test.dry");
    println!("Empty string result: {:?}", result);
    assert!(result.is_ok());
}

#[test]
fn test_whitespace_only() {
    let mut engine = Engine::new();
    let result = engine.add_dry_code("   \n\t  \r\n", "test.dry");
    assert!(result.is_ok());
}

#[test]
fn test_comments_only() {
    let mut engine = Engine::new();
    engine
        .add_dry_code("# nothing here\n   # still nothing\n", "test.dry")
        .unwrap();
    assert!(engine.list_collections().is_empty());
    assert_eq!(engine.list_sources(), &["test.dry".to_string()]);
}

#[test]
fn test_compile_without_sources() {
    let engine = Engine::new();
    let compiled = engine.compile(&ExpansionOptions::default());
    assert!(compiled.intents.is_empty());
    assert!(compiled.entities.is_empty());
    assert_eq!(compiled.sentence_count(), 0);
    assert_eq!(compiled.lang, "en-US");
    assert_eq!(compiled.invocation_name, None);
}

#[test]
fn test_intent_without_sentences() {
    let mut engine = Engine::new();
    engine.add_dry_code("INTENT: Help\n", "test.dry").unwrap();

    let compiled = engine.compile(&ExpansionOptions::default());
    let help = compiled.get_intent("Help").unwrap();
    assert!(help.sentences.is_empty());
    assert!(help.diagnostics.is_empty());
}

#[test]
fn test_empty_template_expands_to_nothing() {
    let engine = Engine::new();
    let expansion = engine.expand_template("");
    assert!(expansion.sentences.is_empty());
    assert!(expansion.diagnostics.is_empty());
}
