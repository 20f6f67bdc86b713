//! Expansion context for one template
//!
//! Borrows the read-only variable and slot tables of the run and owns the
//! sentences and diagnostics produced while expanding a single template.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::{Slot, Template, VariableTable};
use crate::validator;
use tracing::{debug, warn};

pub struct ExpansionContext<'a> {
    /// Template being expanded
    pub template: &'a Template,

    /// Owning collection's name, for diagnostics
    pub collection: Option<&'a str>,

    /// Variable definitions shared by the whole run
    pub variables: &'a VariableTable,

    /// Declared slots of the owning intent; `None` skips slot checks
    pub slots: Option<&'a [Slot]>,

    /// Finished sentences, in the order they were completed
    pub sentences: Vec<String>,

    /// Unique diagnostics raised for this template
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ExpansionContext<'a> {
    pub fn new(
        template: &'a Template,
        collection: Option<&'a str>,
        variables: &'a VariableTable,
        slots: Option<&'a [Slot]>,
    ) -> Self {
        Self {
            template,
            collection,
            variables,
            slots,
            sentences: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Record a fully concrete sentence, checking its slot references first
    pub fn finish(&mut self, sentence: String) {
        if sentence.is_empty() {
            debug!(template = %self.template, "discarding empty expansion");
            return;
        }
        if let Some(slots) = self.slots {
            if !validator::references_are_declared(&sentence, slots) {
                let undefined: Vec<String> = validator::undefined_slots(&sentence, slots)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                for slot in undefined {
                    self.warn(DiagnosticKind::UndefinedSlot {
                        slot,
                        sentence: sentence.clone(),
                    });
                }
            }
        }
        self.sentences.push(sentence);
    }

    /// Record a diagnostic unless this template already raised the same one
    pub fn warn(&mut self, kind: DiagnosticKind) {
        if self.diagnostics.iter().any(|existing| existing.kind == kind) {
            return;
        }
        let diagnostic = Diagnostic::new(kind, self.template, self.collection);
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
