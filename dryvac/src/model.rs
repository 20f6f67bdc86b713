//! Source model handed from the loader to the expansion engine
//!
//! A `SourceModel` is everything one compilation run knows about: the global
//! variable table plus the declared intents and entities, each owning its
//! templates in declaration order.

use crate::ast::Span;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Language used when the source never declares one
pub const DEFAULT_LANG: &str = "en-US";

/// One author-written sentence template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub text: String,
    pub source_id: Option<String>,
    pub span: Option<Span>,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_id: None,
            span: None,
        }
    }

    pub fn with_location(mut self, source_id: impl Into<String>, span: Span) -> Self {
        self.source_id = Some(source_id.into());
        self.span = Some(span);
        self
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A named placeholder usable inside an intent's templates as `<name>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Slot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot_type: None,
            example: None,
        }
    }

    pub fn with_type(mut self, slot_type: impl Into<String>) -> Self {
        self.slot_type = Some(slot_type.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// The declared type, falling back to the slot's own name
    pub fn type_name(&self) -> &str {
        self.slot_type.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Intent,
    Entity,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Intent => write!(f, "intent"),
            CollectionKind::Entity => write!(f, "entity"),
        }
    }
}

/// An intent or entity: an ordered set of templates, plus slots for intents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub name: String,
    pub kind: CollectionKind,
    pub templates: Vec<Template>,
    pub slots: Vec<Slot>,
}

impl Collection {
    pub fn new(name: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            templates: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn intent(name: impl Into<String>) -> Self {
        Self::new(name, CollectionKind::Intent)
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, CollectionKind::Entity)
    }

    pub fn add_template(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    pub fn add_slot(mut self, slot: Slot) -> Self {
        self.declare_slot(slot);
        self
    }

    /// Declare a slot; a second declaration of the same name is ignored.
    ///
    /// Returns `false` when the name was already declared.
    pub fn declare_slot(&mut self, slot: Slot) -> bool {
        if self.get_slot(&slot.name).is_some() {
            return false;
        }
        self.slots.push(slot);
        true
    }

    pub fn get_slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Slots to check placeholders against, `None` for entities
    pub fn slot_table(&self) -> Option<&[Slot]> {
        match self.kind {
            CollectionKind::Intent => Some(&self.slots),
            CollectionKind::Entity => None,
        }
    }
}

/// Variable name (lower-cased) to raw definition text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableTable {
    definitions: HashMap<String, String>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine a variable
    pub fn define(&mut self, name: &str, definition: impl Into<String>) {
        self.definitions
            .insert(name.to_lowercase(), definition.into());
    }

    /// Case-insensitive lookup of a variable's raw definition
    pub fn get(&self, name: &str) -> Option<&str> {
        self.definitions
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for (name, definition) in iter {
            table.define(name.as_ref(), definition);
        }
        table
    }
}

/// Everything loaded for one compilation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceModel {
    pub invocation_name: Option<String>,
    pub lang: String,
    pub variables: VariableTable,
    pub intents: Vec<Collection>,
    pub entities: Vec<Collection>,
}

impl Default for SourceModel {
    fn default() -> Self {
        Self {
            invocation_name: None,
            lang: DEFAULT_LANG.to_string(),
            variables: VariableTable::new(),
            intents: Vec::new(),
            entities: Vec::new(),
        }
    }
}

impl SourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an intent or entity by name, creating it on first use.
    ///
    /// Returns the collection's index within its kind's list.
    pub fn open_collection(&mut self, kind: CollectionKind, name: &str) -> usize {
        let collections = self.collections_mut(kind);
        if let Some(index) = collections.iter().position(|c| c.name == name) {
            return index;
        }
        collections.push(Collection::new(name, kind));
        collections.len() - 1
    }

    pub fn collections(&self, kind: CollectionKind) -> &[Collection] {
        match kind {
            CollectionKind::Intent => &self.intents,
            CollectionKind::Entity => &self.entities,
        }
    }

    pub fn collections_mut(&mut self, kind: CollectionKind) -> &mut Vec<Collection> {
        match kind {
            CollectionKind::Intent => &mut self.intents,
            CollectionKind::Entity => &mut self.entities,
        }
    }

    pub fn get_intent(&self, name: &str) -> Option<&Collection> {
        self.intents.iter().find(|c| c.name == name)
    }

    pub fn get_entity(&self, name: &str) -> Option<&Collection> {
        self.entities.iter().find(|c| c.name == name)
    }
}
