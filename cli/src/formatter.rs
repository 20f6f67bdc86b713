use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use dryvac::{Collection, CompiledModel, ExpandedCollection};
use std::path::PathBuf;

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// One sentence per line
    pub fn format_sentences(&self, sentences: &[String]) -> String {
        let mut output = String::new();
        for sentence in sentences {
            output.push_str(sentence);
            output.push('\n');
        }
        output
    }

    pub fn format_build_summary(
        &self,
        file_count: usize,
        compiled: &CompiledModel,
        written: &[PathBuf],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Compiled {} files: {} intents, {} entities, {} sentences\n",
            file_count,
            compiled.intents.len(),
            compiled.entities.len(),
            compiled.sentence_count()
        ));

        let warnings = compiled.diagnostics().count();
        if warnings > 0 {
            output.push_str(&format!("{} warnings\n", warnings));
        }

        for path in written {
            output.push_str(&format!("  wrote {}\n", path.display()));
        }
        output
    }

    pub fn format_workspace_summary(
        &self,
        file_count: usize,
        sources: &[String],
        rows: &[(&Collection, &ExpandedCollection)],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Workspace contains {} files, {} collections\n",
            file_count,
            rows.len()
        ));
        for source in sources {
            output.push_str(&format!("  {}\n", source));
        }

        if rows.is_empty() {
            return output;
        }

        output.push('\n');
        output.push_str(&self.format_collections_table(rows));
        output.push('\n');
        output
    }

    fn format_collections_table(&self, rows: &[(&Collection, &ExpandedCollection)]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Kind").set_alignment(CellAlignment::Left),
            Cell::new("Name").set_alignment(CellAlignment::Left),
            Cell::new("Templates").set_alignment(CellAlignment::Right),
            Cell::new("Slots").set_alignment(CellAlignment::Right),
            Cell::new("Sentences").set_alignment(CellAlignment::Right),
            Cell::new("Warnings").set_alignment(CellAlignment::Right),
        ]));

        for (collection, expanded) in rows {
            table.add_row(Row::from(vec![
                Cell::new(collection.kind),
                Cell::new(&collection.name),
                Cell::new(collection.templates.len()).set_alignment(CellAlignment::Right),
                Cell::new(collection.slots.len()).set_alignment(CellAlignment::Right),
                Cell::new(expanded.sentences.len()).set_alignment(CellAlignment::Right),
                Cell::new(expanded.diagnostics.len()).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}
