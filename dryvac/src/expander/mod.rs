//! Template expansion engine
//!
//! Expands DRY templates into every concrete sentence they denote:
//! 1. Seed a worklist with the template
//! 2. Classify each fragment (`matcher`)
//! 3. Rewrite it into successors (`rewrite`) until only sentences remain
//! 4. Validate slot references of finished intent sentences
//! 5. Aggregate per collection and sort

pub mod context;
pub mod matcher;
pub mod rewrite;
pub mod worklist;

use crate::diagnostics::Diagnostic;
use crate::model::{Collection, Slot, Template, VariableTable};
use crate::response::ExpandedCollection;
use context::ExpansionContext;
use tracing::info;

/// Options for expanding a collection
#[derive(Debug, Clone)]
pub struct ExpansionOptions {
    /// Sort each collection's sentences lexicographically
    pub sort: bool,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self { sort: true }
    }
}

/// Sentences and diagnostics produced by one template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub sentences: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Expands templates against a variable table
#[derive(Default)]
pub struct Expander;

impl Expander {
    pub fn new() -> Self {
        Self
    }

    /// Expand a single template.
    ///
    /// `slots` is the owning intent's slot table; pass `None` for entity
    /// templates, whose placeholders are taken as literal text.
    pub fn expand_template(
        &self,
        template: &Template,
        variables: &VariableTable,
        slots: Option<&[Slot]>,
    ) -> Expansion {
        self.expand_in(template, None, variables, slots)
    }

    /// Expand every template of a collection, in declaration order
    pub fn expand_collection(
        &self,
        collection: &Collection,
        variables: &VariableTable,
        options: &ExpansionOptions,
    ) -> ExpandedCollection {
        info!(
            "Processing {} '{}' ({} templates)",
            collection.kind,
            collection.name,
            collection.templates.len()
        );

        let mut sentences = Vec::new();
        let mut diagnostics = Vec::new();
        for template in &collection.templates {
            let expansion = self.expand_in(
                template,
                Some(&collection.name),
                variables,
                collection.slot_table(),
            );
            sentences.extend(expansion.sentences);
            diagnostics.extend(expansion.diagnostics);
        }

        if options.sort {
            sort_sentences(&mut sentences);
        }

        ExpandedCollection {
            name: collection.name.clone(),
            kind: collection.kind,
            slots: collection.slots.clone(),
            sentences,
            diagnostics,
        }
    }

    fn expand_in(
        &self,
        template: &Template,
        collection: Option<&str>,
        variables: &VariableTable,
        slots: Option<&[Slot]>,
    ) -> Expansion {
        let mut context = ExpansionContext::new(template, collection, variables, slots);
        worklist::run(&mut context);
        Expansion {
            sentences: context.sentences,
            diagnostics: context.diagnostics,
        }
    }
}

/// Deterministic order for a sentence set: byte-wise lexicographic
pub fn sort_sentences(sentences: &mut [String]) {
    sentences.sort();
}

/// Expand one template text without slot checks, returning sorted sentences
pub fn expand(template: &str, variables: &VariableTable) -> Vec<String> {
    let template = Template::new(template);
    let mut sentences = Expander::new()
        .expand_template(&template, variables, None)
        .sentences;
    sort_sentences(&mut sentences);
    sentences
}
