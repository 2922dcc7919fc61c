//! SSH wire-format marshalling of public keys (RFC 4253, RFC 5656, RFC 8709).
//!
//! Only the encoder lives here: the canonical blob is the fingerprint input.
//! Parsing key files is left to the caller's SSH tooling.

/// Appends an SSH `string`: a big-endian `u32` length followed by the bytes.
pub(crate) fn put_string(buf: &mut Vec<u8>, bytes: &[u8]) {
    // SSH limits strings to u32 lengths; public keys are far below that.
    let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(bytes);
}

/// Appends an SSH `mpint` for a non-negative integer given as big-endian
/// magnitude bytes.
///
/// Leading zero bytes are stripped, zero encodes as an empty string, and a
/// zero byte is prepended when the high bit is set so the value stays
/// positive in two's complement.
#[cfg(feature = "rsa")]
pub(crate) fn put_mpint(buf: &mut Vec<u8>, magnitude: &[u8]) {
    let start = magnitude
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(magnitude.len());
    let trimmed = &magnitude[start..];

    if trimmed.first().is_some_and(|&b| b & 0x80 != 0) {
        let mut padded = Vec::with_capacity(trimmed.len() + 1);
        padded.push(0);
        padded.extend_from_slice(trimmed);
        put_string(buf, &padded);
    } else {
        put_string(buf, trimmed);
    }
}
