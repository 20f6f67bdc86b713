//! The rewrite step: one classified fragment in, its successors out

use super::context::ExpansionContext;
use super::matcher::Fragment;
use crate::diagnostics::DiagnosticKind;
use std::iter;
use std::ops::Range;

/// Rewrite a classified fragment, returning the fragments still to expand.
///
/// Vanilla fragments are finished sentences and go straight into the
/// context. Variable references become exactly one successor, with the
/// definition wrapped in round brackets so that a top-level `|` inside it
/// stays scoped to the substitution. Alternations yield one successor per
/// variant; optional groups add one more with the group removed.
pub fn rewrite(
    fragment: String,
    classified: Fragment,
    context: &mut ExpansionContext<'_>,
) -> Vec<String> {
    match classified {
        Fragment::Vanilla => {
            context.finish(fragment);
            Vec::new()
        }
        Fragment::VariableRef { span, name } => {
            let variables = context.variables;
            let definition = match variables.get(&name) {
                Some(definition) => definition,
                None => {
                    context.warn(DiagnosticKind::UndefinedVariable { variable: name });
                    ""
                }
            };
            vec![splice(&fragment, span, &format!("({})", definition))]
        }
        Fragment::Alternation { span, variants } => variants
            .iter()
            .map(|variant| splice(&fragment, span.clone(), variant))
            .collect(),
        Fragment::Optional { span, variants } => variants
            .iter()
            .map(String::as_str)
            .chain(iter::once(""))
            .map(|variant| splice(&fragment, span.clone(), variant))
            .collect(),
        Fragment::Unrecognized => {
            context.warn(DiagnosticKind::UnrecognizedFragment { fragment });
            Vec::new()
        }
    }
}

/// Replace `span` of `fragment` with `replacement`
fn splice(fragment: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(fragment.len() - span.len() + replacement.len());
    out.push_str(&fragment[..span.start]);
    out.push_str(replacement);
    out.push_str(&fragment[span.end..]);
    out
}
