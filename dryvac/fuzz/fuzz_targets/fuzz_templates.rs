#![no_main]

use dryvac::{expand, VariableTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if s.len() > 24 {
            return;
        }
        let variables: VariableTable = [("x", "a|b"), ("y", "[$x] c")].into_iter().collect();
        for sentence in expand(s, &variables) {
            assert!(!sentence.is_empty());
        }
    }
});
