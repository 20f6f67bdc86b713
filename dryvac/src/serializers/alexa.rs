use super::{require_dir, write_json};
use crate::expander::matcher::SLOT_PLACEHOLDER;
use crate::response::{CompiledModel, ExpandedCollection};
use crate::DryResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Alexa ASK interaction model file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaModel {
    pub interaction_model: InteractionModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionModel {
    pub language_model: LanguageModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageModel {
    pub invocation_name: String,
    pub intents: Vec<AlexaIntent>,
    pub types: Vec<AlexaType>,
}

/// Slots and samples are omitted for built-in intents that declare none
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlexaIntent {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<AlexaSlot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlexaSlot {
    pub name: String,
    #[serde(rename = "type")]
    pub slot_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlexaType {
    pub name: String,
    pub values: Vec<AlexaTypeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlexaTypeValue {
    pub name: AlexaValueName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlexaValueName {
    pub value: String,
}

/// Rewrite `<slot>` placeholders into Alexa's `{slot}` form
pub fn alexa_sample(sentence: &str) -> String {
    SLOT_PLACEHOLDER.replace_all(sentence, "{$1}").into_owned()
}

pub fn to_alexa(model: &CompiledModel) -> AlexaModel {
    let invocation_name = model.invocation_name.clone().unwrap_or_else(|| {
        warn!("No INVOCATION: declared; Alexa invocation name left empty");
        String::new()
    });

    AlexaModel {
        interaction_model: InteractionModel {
            language_model: LanguageModel {
                invocation_name,
                intents: model.intents.iter().map(alexa_intent).collect(),
                types: model.entities.iter().map(alexa_type).collect(),
            },
        },
    }
}

fn alexa_intent(intent: &ExpandedCollection) -> AlexaIntent {
    AlexaIntent {
        name: intent.name.clone(),
        slots: intent
            .slots
            .iter()
            .map(|slot| AlexaSlot {
                name: slot.name.clone(),
                slot_type: slot.type_name().to_string(),
            })
            .collect(),
        samples: intent
            .sentences
            .iter()
            .map(|sentence| alexa_sample(sentence))
            .collect(),
    }
}

fn alexa_type(entity: &ExpandedCollection) -> AlexaType {
    AlexaType {
        name: entity.name.clone(),
        values: entity
            .sentences
            .iter()
            .map(|value| AlexaTypeValue {
                name: AlexaValueName {
                    value: value.clone(),
                },
            })
            .collect(),
    }
}

/// Write `<dir>/<lang>.json`
pub fn write_alexa(model: &CompiledModel, dir: &Path) -> DryResult<PathBuf> {
    require_dir(dir)?;
    let path = dir.join(format!("{}.json", model.lang));
    write_json(&path, &to_alexa(model))?;
    info!("Writing to {}", path.display());
    Ok(path)
}
