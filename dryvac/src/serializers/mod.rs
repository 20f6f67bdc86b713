//! Platform exports for compiled models
//!
//! Each serializer first shapes a [`CompiledModel`] into the platform's JSON
//! structures, then writes them below an existing output directory.

mod alexa;
mod dialogflow;

pub use alexa::{alexa_sample, to_alexa, write_alexa, AlexaModel};
pub use dialogflow::{
    entity_entries, intent_definition, user_says, user_says_parts, write_dialogflow,
    DialogflowEntity, DialogflowIntent, EntityEntry, UserSaysItem, UserSaysPart,
};

use crate::{DryError, DryResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Fail unless `dir` exists and is a directory
pub(crate) fn require_dir(dir: &Path) -> DryResult<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(DryError::Engine(format!(
            "Output folder does not exist: '{}'",
            dir.display()
        )))
    }
}

/// Write `value` as pretty-printed JSON with a trailing newline
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> DryResult<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
