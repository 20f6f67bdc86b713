use super::{require_dir, write_json};
use crate::expander::matcher::SLOT_PLACEHOLDER;
use crate::response::{CompiledModel, ExpandedCollection};
use crate::DryResult;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// `intents/<name>.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogflowIntent {
    pub name: String,
    pub auto: bool,
    pub responses: Vec<DialogflowResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogflowResponse {
    pub parameters: Vec<DialogflowParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogflowParameter {
    pub name: String,
    pub data_type: String,
    pub value: String,
    pub is_list: bool,
}

/// One example sentence in `intents/<name>_usersays_<lang>.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSaysItem {
    pub id: String,
    pub data: Vec<UserSaysPart>,
    pub is_template: bool,
    pub count: u32,
    pub updated: u64,
}

/// A literal run, or a slot run annotated with alias and entity type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSaysPart {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub user_defined: bool,
}

/// `entities/<name>.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogflowEntity {
    pub name: String,
    pub is_overridable: bool,
    pub is_enum: bool,
    pub automated_expansion: bool,
}

/// One value in `entities/<name>_entries_<lang>.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityEntry {
    pub value: String,
    pub synonyms: Vec<String>,
}

pub fn intent_definition(intent: &ExpandedCollection) -> DialogflowIntent {
    DialogflowIntent {
        name: intent.name.clone(),
        auto: true,
        responses: vec![DialogflowResponse {
            parameters: intent
                .slots
                .iter()
                .map(|slot| DialogflowParameter {
                    name: slot.name.clone(),
                    data_type: format!("@{}", slot.type_name()),
                    value: format!("${}", slot.name),
                    is_list: false,
                })
                .collect(),
        }],
    }
}

/// Split a sentence into literal and slot runs.
///
/// Slot runs carry the slot's example text when one was declared, otherwise
/// the slot name. Undeclared slots fall back to their own name as type.
pub fn user_says_parts(sentence: &str, intent: &ExpandedCollection) -> Vec<UserSaysPart> {
    let mut parts = Vec::new();
    let mut literal_start = 0;

    for captures in SLOT_PLACEHOLDER.captures_iter(sentence) {
        let (Some(placeholder), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if placeholder.start() > literal_start {
            parts.push(literal(&sentence[literal_start..placeholder.start()]));
        }

        let name = name.as_str();
        let slot = intent.get_slot(name);
        let slot_type = slot.map_or(name, |slot| slot.type_name());
        let text = slot
            .and_then(|slot| slot.example.as_deref())
            .unwrap_or(name);
        parts.push(UserSaysPart {
            text: text.to_string(),
            alias: Some(name.to_string()),
            meta: Some(format!("@{}", slot_type)),
            user_defined: true,
        });
        literal_start = placeholder.end();
    }

    if literal_start < sentence.len() {
        parts.push(literal(&sentence[literal_start..]));
    }
    parts
}

fn literal(text: &str) -> UserSaysPart {
    UserSaysPart {
        text: text.to_string(),
        alias: None,
        meta: None,
        user_defined: false,
    }
}

pub fn user_says(intent: &ExpandedCollection) -> Vec<UserSaysItem> {
    intent
        .sentences
        .iter()
        .map(|sentence| UserSaysItem {
            id: String::new(),
            data: user_says_parts(sentence, intent),
            is_template: false,
            count: 0,
            updated: 0,
        })
        .collect()
}

pub fn entity_entries(entity: &ExpandedCollection) -> Vec<EntityEntry> {
    entity
        .sentences
        .iter()
        .map(|value| EntityEntry {
            value: value.clone(),
            synonyms: vec![value.clone()],
        })
        .collect()
}

/// Write the `intents/` and `entities/` folders of a Dialogflow agent
pub fn write_dialogflow(model: &CompiledModel, dir: &Path) -> DryResult<Vec<PathBuf>> {
    require_dir(dir)?;
    let lang = model.short_lang();
    let mut written = Vec::new();

    if !model.intents.is_empty() {
        let intents_dir = dir.join("intents");
        fs::create_dir_all(&intents_dir)?;
        for intent in &model.intents {
            let definition_path = intents_dir.join(format!("{}.json", intent.name));
            write_json(&definition_path, &intent_definition(intent))?;
            written.push(definition_path);

            let user_says_path =
                intents_dir.join(format!("{}_usersays_{}.json", intent.name, lang));
            info!("Writing to {}", user_says_path.display());
            write_json(&user_says_path, &user_says(intent))?;
            written.push(user_says_path);
        }
    }

    if !model.entities.is_empty() {
        let entities_dir = dir.join("entities");
        fs::create_dir_all(&entities_dir)?;
        for entity in &model.entities {
            let definition_path = entities_dir.join(format!("{}.json", entity.name));
            write_json(
                &definition_path,
                &DialogflowEntity {
                    name: entity.name.clone(),
                    is_overridable: true,
                    is_enum: false,
                    automated_expansion: false,
                },
            )?;
            written.push(definition_path);

            let entries_path = entities_dir.join(format!("{}_entries_{}.json", entity.name, lang));
            info!("Writing to {}", entries_path.display());
            write_json(&entries_path, &entity_entries(entity))?;
            written.push(entries_path);
        }
    }

    Ok(written)
}
