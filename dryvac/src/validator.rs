//! Slot reference validation
//!
//! Finished intent sentences may only reference slots declared on their
//! intent. An unknown `<name>` is reported but never stops the sentence from
//! being emitted.

use crate::expander::matcher::slot_placeholders;
use crate::model::Slot;

/// Placeholders in `sentence` that name no slot in `slots`, in order of
/// appearance and without repeats
pub fn undefined_slots<'s>(sentence: &'s str, slots: &[Slot]) -> Vec<&'s str> {
    let mut undefined: Vec<&str> = Vec::new();
    for name in slot_placeholders(sentence) {
        let declared = slots.iter().any(|slot| slot.name == name);
        if !declared && !undefined.contains(&name) {
            undefined.push(name);
        }
    }
    undefined
}

/// True when every placeholder in `sentence` names a declared slot
pub fn references_are_declared(sentence: &str, slots: &[Slot]) -> bool {
    undefined_slots(sentence, slots).is_empty()
}
