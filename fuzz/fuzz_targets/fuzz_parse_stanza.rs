#![no_main]

use libfuzzer_sys::fuzz_target;
use sshkem::{parse_stanzas, Stanza};

fuzz_target!(|data: &str| {
    // Parsing should never panic, and anything accepted must re-encode exactly
    if let Ok(stanzas) = parse_stanzas(data) {
        let text: String = stanzas.iter().map(ToString::to_string).collect();
        assert_eq!(text, data);
    }
    let _ = Stanza::try_from(data);
});
