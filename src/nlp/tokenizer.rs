//! Whitespace tokenization
//!
//! Tokens are maximal runs of bytes outside the C-locale whitespace set
//! (space, `\t`, `\n`, `\v`, `\f`, `\r`). No other delimiters are
//! recognized and token text is kept verbatim. Input need not be UTF-8:
//! invalid sequences inside a token become U+FFFD.

use std::io::Read;

use crate::error::Result;

#[inline]
fn is_separator(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Split raw bytes into whitespace-delimited tokens
pub fn split_bytes(bytes: &[u8]) -> Vec<String> {
    bytes
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}

/// Split text into whitespace-delimited tokens
pub fn split_tokens(text: &str) -> Vec<String> {
    split_bytes(text.as_bytes())
}

/// Read a stream to its end and split it into tokens
///
/// Fails only on I/O errors.
pub fn read_tokens<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(split_bytes(&bytes))
}
