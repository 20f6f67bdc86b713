use crate::ast::Span;
use crate::error::DryError;
use crate::model::SourceModel;
use crate::resource_limits::ResourceLimits;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod declarations;
pub mod preprocess;

use declarations::Loader;
use preprocess::{clean_line, leading_keyword};

#[derive(Parser)]
#[grammar = "src/parser/dry.pest"]
pub struct DryParser;

/// Parse DRY source into a fresh source model
pub fn parse(
    content: &str,
    filename: Option<String>,
    limits: &ResourceLimits,
) -> Result<SourceModel, DryError> {
    let mut model = SourceModel::new();
    parse_into(&mut model, content, filename, limits)?;
    Ok(model)
}

/// Parse DRY source, adding its declarations to an existing model.
///
/// Variables and collections accumulate across calls; each file must open
/// its own intent or entity before its first sentence. Every malformed line
/// is reported, and the model is left unchanged when any line fails.
pub fn parse_into(
    model: &mut SourceModel,
    content: &str,
    filename: Option<String>,
    limits: &ResourceLimits,
) -> Result<(), DryError> {
    if content.len() > limits.max_file_size_bytes {
        return Err(DryError::ResourceLimitExceeded {
            limit_name: "max_file_size_bytes".to_string(),
            limit_value: format!(
                "{} bytes ({} MB)",
                limits.max_file_size_bytes,
                limits.max_file_size_bytes / (1024 * 1024)
            ),
            actual_value: format!(
                "{} bytes ({:.2} MB)",
                content.len(),
                content.len() as f64 / (1024.0 * 1024.0)
            ),
            suggestion: "Reduce file size or split into multiple source files".to_string(),
        });
    }

    let filename = filename.unwrap_or_else(|| "<input>".to_string());
    let normalized = content.replace("\r\n", "\n");
    let source_text: Arc<str> = Arc::from(normalized.as_str());

    let mut staged = model.clone();
    let mut loader = Loader::new(&mut staged, filename.clone(), source_text.clone());
    let mut errors = Vec::new();
    let mut line_start = 0;

    for (index, raw_line) in normalized.split('\n').enumerate() {
        let span = Span::for_line(line_start, raw_line, index + 1);
        line_start += raw_line.len() + 1;

        let line = clean_line(raw_line);
        if line.is_empty() {
            continue;
        }

        let parsed = DryParser::parse(Rule::line, &line)
            .map_err(|e| malformed_line(&line, e, span.clone(), &filename, &source_text))
            .and_then(|mut pairs| {
                pairs.next().ok_or_else(|| {
                    DryError::Engine(format!("No parse result for line {}", span.line))
                })
            });

        let applied = parsed.and_then(|pair| loader.apply(pair, span));
        if let Err(error) = applied {
            errors.push(error);
        }
    }

    match errors.len() {
        0 => {
            *model = staged;
            Ok(())
        }
        1 => Err(errors.remove(0)),
        _ => Err(DryError::MultipleErrors(errors)),
    }
}

fn malformed_line(
    line: &str,
    error: pest::error::Error<Rule>,
    span: Span,
    filename: &str,
    source_text: &Arc<str>,
) -> DryError {
    let Some(keyword) = leading_keyword(line) else {
        return DryError::parse(
            format!("Unrecognized line: {}", error.variant),
            span,
            filename,
            source_text.clone(),
        );
    };

    let form = match keyword {
        "INVOCATION:" => "INVOCATION: invocation name",
        "LANG:" => "LANG: en-US",
        "INTENT:" => "INTENT: IntentName",
        "ENTITY:" => "ENTITY: EntityName",
        _ => "SLOT: name [:Type] [~ example]",
    };

    DryError::parse_with_suggestion(
        format!("Malformed {} declaration: {}", keyword, error.variant),
        span,
        filename,
        source_text.clone(),
        format!("Expected `{}`", form),
    )
}
