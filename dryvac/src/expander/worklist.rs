use super::context::ExpansionContext;
use super::matcher::classify;
use super::rewrite::rewrite;
use tracing::{debug, trace};

/// Expand the context's template until no partial fragments remain.
///
/// The template is seeded wrapped in one round-bracket pair so that a
/// top-level `|` splits the whole line. Each step resolves exactly one
/// construct of one fragment, so the loop ends once every branch is either
/// finished or dropped. Completion order follows the stack and carries no
/// meaning; callers sort.
pub fn run(context: &mut ExpansionContext<'_>) {
    let mut worklist = vec![format!("({})", context.template.text)];
    let mut steps = 0usize;

    while let Some(fragment) = worklist.pop() {
        let classified = classify(&fragment);
        trace!(fragment = %fragment, case = classified.name(), "rewriting fragment");
        worklist.extend(rewrite(fragment, classified, context));
        steps += 1;
    }

    debug!(
        template = %context.template,
        steps,
        sentences = context.sentences.len(),
        "template expanded"
    );
}
