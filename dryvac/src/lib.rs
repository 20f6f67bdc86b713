//! # dryvac
//!
//! **Don't repeat yourself when writing voice assistant utterances.**
//!
//! dryvac compiles a compact template notation into the fully enumerated
//! sample-sentence lists that voice assistant platforms expect. One line
//! such as `[please] (turn|switch) on the $room light` stands for every
//! concrete sentence it denotes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dryvac::{Engine, ExpansionOptions, DryResult};
//!
//! fn main() -> DryResult<()> {
//!     let mut engine = Engine::new();
//!
//!     engine.add_dry_code(r#"
//!         room = kitchen|hall
//!         INTENT: LightOn
//!         SLOT: level :AMAZON.NUMBER
//!         [please] (turn|switch) on the $room light
//!         set the light to <level> percent
//!     "#, "lights.dry")?;
//!
//!     let compiled = engine.compile(&ExpansionOptions::default());
//!     for sentence in &compiled.intents[0].sentences {
//!         println!("{}", sentence);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Template syntax
//!
//! - `$name` substitutes a variable, as if its definition were in `( )`
//! - `(a|b)` expands to one sentence per variant
//! - `[a|b]` is the same with an extra empty variant
//! - `<slot>` is kept verbatim and checked against the intent's slots
//!
//! Problems inside templates never abort a run; they are collected as
//! [`Diagnostic`]s on the compiled output.

pub mod ast;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod expander;
pub mod model;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod serializers;
pub mod validator;

pub use ast::Span;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use engine::Engine;
pub use error::{DryError, ErrorDetails};
pub use expander::matcher::{classify, Fragment};
pub use expander::{expand, sort_sentences, Expander, Expansion, ExpansionOptions};
pub use model::{Collection, CollectionKind, Slot, SourceModel, Template, VariableTable};
pub use parser::{parse, parse_into};
pub use resource_limits::ResourceLimits;
pub use response::{CompiledModel, ExpandedCollection};

/// Result type for dryvac operations
pub type DryResult<T> = Result<T, DryError>;

#[cfg(test)]
mod tests;
