#![no_main]

use dryvac::{Engine, ExpansionOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Keep the expansion small; group counts multiply
        if s.len() > 128 {
            return;
        }
        let mut engine = Engine::new();
        if engine.add_dry_code(s, "fuzz.dry").is_ok() {
            let _ = engine.compile(&ExpansionOptions::default());
        }
    }
});
