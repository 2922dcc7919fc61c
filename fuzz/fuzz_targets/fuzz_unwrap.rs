#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use sshkem::{parse_stanzas, Identity};

fn identities() -> &'static [Identity] {
    static IDENTITIES: OnceLock<Vec<Identity>> = OnceLock::new();
    IDENTITIES.get_or_init(|| {
        let ed25519 = ed25519_dalek::SigningKey::from_bytes(&[0x42; 32]);
        let p256 = p256::SecretKey::from_slice(&[0x42; 32]).expect("valid scalar");
        vec![
            Identity::ed25519(ed25519).expect("ed25519 identity"),
            Identity::ecdsa(p256).expect("p256 identity"),
        ]
    })
}

fuzz_target!(|data: &str| {
    // Unwrapping attacker-controlled stanzas should never panic
    if let Ok(stanzas) = parse_stanzas(data) {
        for identity in identities() {
            let _ = identity.unwrap(&stanzas);
        }
    }
});
