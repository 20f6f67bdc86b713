use crate::ast::Span;
use crate::model::Template;
use serde::Serialize;
use std::fmt;

/// What went wrong while expanding a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A finished sentence references a `<slot>` its intent never declared
    UndefinedSlot { slot: String, sentence: String },
    /// A `$variable` with no definition; expanded as empty text
    UndefinedVariable { variable: String },
    /// A fragment matching no grammar case; dropped
    UnrecognizedFragment { fragment: String },
}

/// A non-fatal finding, tied to the template it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, template: &Template, collection: Option<&str>) -> Self {
        Self {
            kind,
            collection: collection.map(str::to_string),
            template: template.text.clone(),
            source_id: template.source_id.clone(),
            span: template.span.clone(),
        }
    }

    /// "file:line" when the template's origin is known
    pub fn location(&self) -> Option<String> {
        match (&self.source_id, &self.span) {
            (Some(source_id), Some(span)) => Some(format!("{}:{}", source_id, span.line)),
            (Some(source_id), None) => Some(source_id.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UndefinedSlot { slot, sentence } => {
                write!(f, "Undefined slot '{}' referenced by sentence \"{}\"", slot, sentence)
            }
            DiagnosticKind::UndefinedVariable { variable } => {
                write!(f, "Undefined variable '${}' expanded as empty text", variable)
            }
            DiagnosticKind::UnrecognizedFragment { fragment } => {
                write!(f, "Cannot parse fragment \"{}\"", fragment)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        write!(f, " (template \"{}\"", self.template)?;
        if let Some(collection) = &self.collection {
            write!(f, " in '{}'", collection)?;
        }
        if let Some(location) = self.location() {
            write!(f, " at {}", location)?;
        }
        write!(f, ")")
    }
}
