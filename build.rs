//! Build script for sshkem.
//!
//! This emits compile-time warnings for security-sensitive feature flags.

fn main() {
    // Emit a compile-time warning when the rsa feature is enabled
    #[cfg(feature = "rsa")]
    {
        println!("cargo:warning=SECURITY WARNING: The 'rsa' feature is enabled.");
        println!("cargo:warning=ssh-rsa stanzas use the `rsa` crate which is vulnerable to RUSTSEC-2023-0071 (Marvin Attack).");
        println!("cargo:warning=Unwrapping with an RSA identity may leak the private key through timing if an attacker can submit stanzas and measure decryption.");
        println!("cargo:warning=Prefer ssh-ed25519 or ECDSA keys; build with default-features = false to exclude RSA.");
    }
}
