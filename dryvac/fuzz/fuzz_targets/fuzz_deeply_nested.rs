#![no_main]

use dryvac::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|depth: u8| {
    let engine = Engine::new();

    let depth = (depth as usize % 12) + 1;

    let mut template = String::from("x");
    for level in 0..depth {
        template = if level % 2 == 0 {
            format!("(a|{})", template)
        } else {
            format!("[{}]", template)
        };
    }

    let _ = engine.expand_template(&template);
});
