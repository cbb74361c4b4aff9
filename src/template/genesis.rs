//! Genesis template compilation and candidate document building.

use serde_json::Value;

/// Name of the designated substitution field in the genesis document.
pub const CHAIN_ID_FIELD: &str = "initial_chain_id";

/// A genesis document compiled for seed substitution.
///
/// The document bytes are split once, at compile time, into the bytes
/// before and after the `initial_chain_id` value. Building a candidate is
/// then a single allocation and two copies, and every byte outside the
/// field value is preserved exactly.
#[derive(Debug, Clone)]
pub struct GenesisTemplate {
    /// Bytes up to and including the field value's opening quote
    head: Vec<u8>,
    /// Bytes from the field value's closing quote onward
    tail: Vec<u8>,
}

impl GenesisTemplate {
    /// Compiles a genesis document.
    ///
    /// The document must be well-formed JSON containing exactly one
    /// `"initial_chain_id": "<alphanumeric>"` field. A missing field is
    /// deterministic across attempts, so it is rejected here, before any
    /// hashing starts, rather than on the first loop iteration.
    pub fn compile(document: &[u8]) -> Result<Self, TemplateError> {
        serde_json::from_slice::<Value>(document)?;

        let spans = find_field_values(document);
        match spans.as_slice() {
            [] => Err(TemplateError::MissingField),
            [(start, end)] => Ok(Self {
                head: document[..*start].to_vec(),
                tail: document[*end..].to_vec(),
            }),
            _ => Err(TemplateError::DuplicateField(spans.len())),
        }
    }

    /// Builds the candidate document for `seed`.
    ///
    /// Deterministic: the same seed always yields the same bytes.
    #[inline]
    pub fn build(&self, seed: &str) -> Vec<u8> {
        let mut document = Vec::with_capacity(self.head.len() + seed.len() + self.tail.len());
        document.extend_from_slice(&self.head);
        document.extend_from_slice(seed.as_bytes());
        document.extend_from_slice(&self.tail);
        document
    }
}

/// Returns the byte spans of every `"initial_chain_id": "<alnum>"` value,
/// as `(value_start, value_end)` with `value_end` at the closing quote.
fn find_field_values(document: &[u8]) -> Vec<(usize, usize)> {
    let needle = format!("\"{}\"", CHAIN_ID_FIELD).into_bytes();
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(pos) = find(&document[from..], &needle) {
        let after_key = from + pos + needle.len();
        if let Some(span) = parse_field_value(document, after_key) {
            spans.push(span);
        }
        from = after_key;
    }
    spans
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Parses `: "<alnum>+"` starting at `pos`, returning the value span.
fn parse_field_value(document: &[u8], pos: usize) -> Option<(usize, usize)> {
    let mut i = pos;
    let skip_ws = |i: &mut usize| {
        while document.get(*i).is_some_and(|c| c.is_ascii_whitespace()) {
            *i += 1;
        }
    };

    skip_ws(&mut i);
    if document.get(i) != Some(&b':') {
        return None;
    }
    i += 1;
    skip_ws(&mut i);
    if document.get(i) != Some(&b'"') {
        return None;
    }
    i += 1;

    let value_start = i;
    while document.get(i).is_some_and(|c| c.is_ascii_alphanumeric()) {
        i += 1;
    }
    if i == value_start || document.get(i) != Some(&b'"') {
        return None;
    }
    Some((value_start, i))
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("genesis document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("genesis document has no \"initial_chain_id\" field to substitute")]
    MissingField,
    #[error("genesis document has {0} \"initial_chain_id\" fields, expected exactly one")]
    DuplicateField(usize),
}
