use crate::expander::{Expander, Expansion, ExpansionOptions};
use crate::model::{Collection, CollectionKind, SourceModel, Template};
use crate::parser::parse_into;
use crate::response::{CompiledModel, ExpandedCollection};
use crate::{DryResult, ResourceLimits};
use tracing::info;

/// The dryvac compilation engine.
///
/// Accumulates DRY source from one or more files, then expands every intent
/// and entity into its concrete sentences.
pub struct Engine {
    model: SourceModel,
    sources: Vec<String>,
    expander: Expander,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            model: SourceModel::new(),
            sources: Vec::new(),
            expander: Expander,
            limits: ResourceLimits::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Load DRY source. A file with any malformed line is rejected as a whole.
    pub fn add_dry_code(&mut self, dry_code: &str, source: &str) -> DryResult<()> {
        parse_into(
            &mut self.model,
            dry_code,
            Some(source.to_string()),
            &self.limits,
        )?;
        self.sources.push(source.to_string());
        info!("Loaded source {}", source);
        Ok(())
    }

    pub fn model(&self) -> &SourceModel {
        &self.model
    }

    pub fn list_sources(&self) -> &[String] {
        &self.sources
    }

    pub fn list_collections(&self) -> Vec<&Collection> {
        self.model
            .intents
            .iter()
            .chain(self.model.entities.iter())
            .collect()
    }

    pub fn get_collection(&self, kind: CollectionKind, name: &str) -> Option<&Collection> {
        self.model.collections(kind).iter().find(|c| c.name == name)
    }

    /// Expand one collection against the loaded variables
    pub fn expand_collection(
        &self,
        collection: &Collection,
        options: &ExpansionOptions,
    ) -> ExpandedCollection {
        self.expander
            .expand_collection(collection, &self.model.variables, options)
    }

    /// Expand an ad hoc template against the loaded variables, without slot checks
    pub fn expand_template(&self, text: &str) -> Expansion {
        self.expander
            .expand_template(&Template::new(text), &self.model.variables, None)
    }

    /// Expand every intent and entity.
    ///
    /// With sorting enabled, collections are also ordered by name so the
    /// output is independent of declaration order.
    pub fn compile(&self, options: &ExpansionOptions) -> CompiledModel {
        let expand_all = |collections: &[Collection]| {
            let mut expanded: Vec<ExpandedCollection> = collections
                .iter()
                .map(|collection| self.expand_collection(collection, options))
                .collect();
            if options.sort {
                expanded.sort_by(|a, b| a.name.cmp(&b.name));
            }
            expanded
        };

        let compiled = CompiledModel {
            invocation_name: self.model.invocation_name.clone(),
            lang: self.model.lang.clone(),
            intents: expand_all(&self.model.intents),
            entities: expand_all(&self.model.entities),
        };

        info!(
            "Expanded {} intents and {} entities into {} sentences",
            compiled.intents.len(),
            compiled.entities.len(),
            compiled.sentence_count()
        );
        compiled
    }
}
