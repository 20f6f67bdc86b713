use ariadne::{Color, Label, Report, ReportKind, Source};
use dryvac::DryError;

/// Format a DryError with fancy terminal output using Ariadne
pub fn format_error(error: &DryError) -> String {
    match error {
        DryError::Parse(details) => {
            let mut output = Vec::new();

            let enhanced_message = format!(
                "Parse error: {} (file {}:{})",
                details.message, details.source_id, details.span.line
            );

            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("this line")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        DryError::Engine(msg) => format!("Error: {}", msg),
        DryError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        DryError::Io(err) => format!("IO error: {}", err),
        DryError::Json(err) => format!("JSON error: {}", err),
        DryError::MultipleErrors(errors) => {
            let mut result = format!("{} errors occurred:\n\n", errors.len());
            for error in errors {
                result.push_str(&format_error(error));
                result.push_str("\n\n");
            }
            result
        }
    }
}
