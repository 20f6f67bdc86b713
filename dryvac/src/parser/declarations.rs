//! Turning parsed lines into source model updates

use super::Rule;
use crate::ast::Span;
use crate::error::DryError;
use crate::model::{CollectionKind, Slot, Template};
use crate::SourceModel;
use pest::iterators::Pair;
use std::sync::Arc;
use tracing::debug;

/// Loading state for one source file
pub(super) struct Loader<'m> {
    pub model: &'m mut SourceModel,
    /// Collection that sentence and slot lines attach to
    pub current: Option<(CollectionKind, usize)>,
    pub source_id: String,
    pub source_text: Arc<str>,
}

impl<'m> Loader<'m> {
    pub fn new(model: &'m mut SourceModel, source_id: String, source_text: Arc<str>) -> Self {
        Self {
            model,
            current: None,
            source_id,
            source_text,
        }
    }

    /// Apply one parsed `line` pair to the model
    pub fn apply(&mut self, line: Pair<Rule>, span: Span) -> Result<(), DryError> {
        for pair in line.into_inner() {
            match pair.as_rule() {
                Rule::invocation_decl => {
                    let name = inner_text(pair, Rule::text).unwrap_or_default();
                    debug!("Got invocation name: \"{}\"", name);
                    self.model.invocation_name = Some(name);
                }
                Rule::lang_decl => {
                    if let Some(lang) = inner_text(pair, Rule::lang_code) {
                        debug!("Got language: \"{}\"", lang);
                        self.model.lang = lang;
                    }
                }
                Rule::intent_decl => self.open(CollectionKind::Intent, pair),
                Rule::entity_decl => self.open(CollectionKind::Entity, pair),
                Rule::slot_decl => self.declare_slot(parse_slot(pair), span.clone())?,
                Rule::variable_decl => self.define_variable(pair),
                Rule::sentence => self.add_template(pair.as_str(), span.clone())?,
                _ => {}
            }
        }
        Ok(())
    }

    fn open(&mut self, kind: CollectionKind, pair: Pair<Rule>) {
        let name = inner_text(pair, Rule::identifier).unwrap_or_default();
        debug!("Got {}: \"{}\"", kind, name);
        let index = self.model.open_collection(kind, &name);
        self.current = Some((kind, index));
    }

    fn define_variable(&mut self, pair: Pair<Rule>) {
        let mut name = String::new();
        let mut definition = String::new();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::variable_name => name = inner.as_str().to_string(),
                Rule::definition => definition = inner.as_str().to_string(),
                _ => {}
            }
        }
        debug!("Got variable: \"{}\" = \"{}\"", name.to_lowercase(), definition);
        self.model.variables.define(&name, definition);
    }

    fn declare_slot(&mut self, slot: Slot, span: Span) -> Result<(), DryError> {
        let Some((CollectionKind::Intent, index)) = self.current else {
            return Err(DryError::parse_with_suggestion(
                format!("Slot '{}' declared outside of an intent", slot.name),
                span,
                self.source_id.clone(),
                self.source_text.clone(),
                "Declare slots after an `INTENT: Name` line",
            ));
        };
        let intent = &mut self.model.intents[index];
        let name = slot.name.clone();
        if !intent.declare_slot(slot) {
            debug!("Slot '{}' already declared on '{}'; keeping the first", name, intent.name);
        }
        Ok(())
    }

    fn add_template(&mut self, text: &str, span: Span) -> Result<(), DryError> {
        let Some((kind, index)) = self.current else {
            return Err(DryError::parse_with_suggestion(
                "Sentence appears before any intent or entity declaration",
                span,
                self.source_id.clone(),
                self.source_text.clone(),
                "Start a collection with `INTENT: Name` or `ENTITY: Name`",
            ));
        };
        let template = Template::new(text).with_location(self.source_id.clone(), span);
        self.model.collections_mut(kind)[index].templates.push(template);
        Ok(())
    }
}

fn parse_slot(pair: Pair<Rule>) -> Slot {
    let mut slot = Slot::new("");
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::identifier => slot.name = inner.as_str().to_string(),
            Rule::slot_type => {
                if let Some(slot_type) = inner_text(inner, Rule::type_name) {
                    slot.slot_type = Some(slot_type);
                }
            }
            Rule::slot_example => {
                if let Some(example) = inner_text(inner, Rule::text) {
                    slot.example = Some(example);
                }
            }
            _ => {}
        }
    }
    debug!("Got slot: \"{}:{}\"", slot.name, slot.type_name());
    slot
}

fn inner_text(pair: Pair<Rule>, rule: Rule) -> Option<String> {
    pair.into_inner()
        .find(|inner| inner.as_rule() == rule)
        .map(|inner| inner.as_str().to_string())
}
