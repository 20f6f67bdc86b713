use crate::diagnostics::Diagnostic;
use crate::model::{CollectionKind, Slot};
use serde::Serialize;

/// An intent or entity after expansion
///
/// Carries the finished sentences together with the slot list the
/// serializers need, plus the diagnostics raised by its templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedCollection {
    pub name: String,
    pub kind: CollectionKind,
    pub slots: Vec<Slot>,
    pub sentences: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExpandedCollection {
    pub fn get_slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name == name)
    }
}

/// Result of compiling a whole source model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledModel {
    pub invocation_name: Option<String>,
    pub lang: String,
    pub intents: Vec<ExpandedCollection>,
    pub entities: Vec<ExpandedCollection>,
}

impl CompiledModel {
    /// All diagnostics, intents first
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.intents
            .iter()
            .chain(self.entities.iter())
            .flat_map(|collection| collection.diagnostics.iter())
    }

    pub fn sentence_count(&self) -> usize {
        self.intents
            .iter()
            .chain(self.entities.iter())
            .map(|collection| collection.sentences.len())
            .sum()
    }

    pub fn get_intent(&self, name: &str) -> Option<&ExpandedCollection> {
        self.intents.iter().find(|c| c.name == name)
    }

    pub fn get_entity(&self, name: &str) -> Option<&ExpandedCollection> {
        self.entities.iter().find(|c| c.name == name)
    }

    /// Two-letter language code used in Dialogflow file names
    pub fn short_lang(&self) -> &str {
        self.lang.get(..2).unwrap_or(&self.lang)
    }
}
