//! Stanzas: the unit exchanged between recipients and identities.
//!
//! A stanza is a label, an ordered list of arguments and an opaque body.
//! Its text form, as embedded in an envelope header, is:
//!
//! ```text
//! -> {label} {arg} {arg}...
//! {base64 body, 64 columns per line, last line shorter than 64}
//! ```
//!
//! The body uses standard base64 without padding. A body whose encoding is a
//! multiple of 64 characters is followed by an empty line.

use core::fmt::{self, Display};

use base64::prelude::*;

use crate::core::error::{SshKemError, SshKemResult};

/// Prefix of a stanza header line.
const STANZA_PREFIX: &str = "-> ";

/// Width of a full body line.
const COLUMNS_PER_LINE: usize = 64;

/// A labelled, argument-carrying ciphertext block.
///
/// Stanzas are immutable once constructed. Equality is structural.
///
/// # Example
///
/// ```rust
/// use sshkem::Stanza;
///
/// let stanza = Stanza::new("example", ["arg"], vec![0x00, 0x01])?;
/// assert_eq!(stanza.to_string(), "-> example arg\nAAE\n");
///
/// let parsed = Stanza::try_from("-> example arg\nAAE\n")?;
/// assert_eq!(parsed, stanza);
/// # Ok::<(), sshkem::SshKemError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stanza {
    label: String,
    args: Vec<String>,
    body: Vec<u8>,
}

impl Stanza {
    /// Creates a stanza, validating the label and arguments.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::InvalidStanza` if the label or any argument is
    /// empty or contains bytes outside printable ASCII (`0x21..=0x7e`).
    pub fn new<L, A, S>(label: L, args: A, body: Vec<u8>) -> SshKemResult<Self>
    where
        L: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        if !is_valid_token(&label) {
            return Err(SshKemError::InvalidStanza("malformed label"));
        }

        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if !args.iter().all(|arg| is_valid_token(arg)) {
            return Err(SshKemError::InvalidStanza("malformed argument"));
        }

        Ok(Self { label, args, body })
    }

    /// Returns the stanza label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the ordered arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the opaque body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the first argument if the stanza carries `label` and exactly
    /// `arity` arguments.
    pub(crate) fn addressed(&self, label: &str, arity: usize) -> Option<&str> {
        if self.label != label || self.args.len() != arity {
            return None;
        }
        self.args.first().map(String::as_str)
    }
}

/// Returns true if `token` is non-empty printable ASCII with no whitespace.
fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| (0x21..=0x7e).contains(&b))
}

/// Splits off one newline-terminated line.
fn split_line(input: &str) -> SshKemResult<(&str, &str)> {
    input
        .split_once('\n')
        .ok_or(SshKemError::InvalidStanza("unterminated line"))
}

/// Parses one stanza from the front of `input`, returning the remainder.
fn parse_one(input: &str) -> SshKemResult<(Stanza, &str)> {
    let (header, mut rest) = split_line(input)?;
    let header = header
        .strip_prefix(STANZA_PREFIX)
        .ok_or(SshKemError::InvalidStanza("missing stanza prefix"))?;

    let mut fields = header.split(' ');
    let label = fields.next().unwrap_or_default();
    let args: Vec<&str> = fields.collect();

    let mut encoded = String::new();
    loop {
        let (line, next) = split_line(rest)?;
        rest = next;
        if line.len() > COLUMNS_PER_LINE {
            return Err(SshKemError::InvalidStanza("body line too long"));
        }
        encoded.push_str(line);
        if line.len() < COLUMNS_PER_LINE {
            break;
        }
    }

    let body = BASE64_STANDARD_NO_PAD.decode(encoded)?;
    Ok((Stanza::new(label, args, body)?, rest))
}

/// Parses a concatenation of stanzas.
///
/// # Errors
///
/// Returns `SshKemError::InvalidStanza` or `SshKemError::Base64Decode` if any
/// stanza is malformed. No partial result is returned.
pub fn parse_stanzas(mut input: &str) -> SshKemResult<Vec<Stanza>> {
    let mut stanzas = Vec::new();
    while !input.is_empty() {
        let (stanza, rest) = parse_one(input)?;
        stanzas.push(stanza);
        input = rest;
    }
    Ok(stanzas)
}

// =============================================================================
// Display (serialization to the text form)
// =============================================================================

impl Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{STANZA_PREFIX}{}", self.label)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        writeln!(f)?;

        let encoded = BASE64_STANDARD_NO_PAD.encode(&self.body);
        let mut remaining = encoded.as_str();
        while remaining.len() >= COLUMNS_PER_LINE {
            let (line, rest) = remaining.split_at(COLUMNS_PER_LINE);
            writeln!(f, "{line}")?;
            remaining = rest;
        }
        writeln!(f, "{remaining}")
    }
}

// =============================================================================
// TryFrom (parsing exactly one stanza)
// =============================================================================

impl TryFrom<&str> for Stanza {
    type Error = SshKemError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let (stanza, rest) = parse_one(text)?;
        if !rest.is_empty() {
            return Err(SshKemError::InvalidStanza("trailing data"));
        }
        Ok(stanza)
    }
}

impl TryFrom<String> for Stanza {
    type Error = SshKemError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::try_from(text.as_str())
    }
}
