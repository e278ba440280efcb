//! Framing of a pairs document.
//!
//! A document wraps its records in `{"pairs":[` and `]}`. Workers only ever
//! see the body between the two, so the framing is checked once up front.

use core::ops::Range;

use thiserror::Error;

/// An error locating the body of a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The document does not open with `{"pairs":[`.
    #[error("Expected document to open with `{{\"pairs\":[` (at offset {0}).")]
    Prologue(usize),
    /// The document does not close with `]}`.
    #[error("Expected document to close with `]}}` (at offset {0}).")]
    Epilogue(usize),
}

/// Locate the body of a document, between its opening `[` and closing `]`.
pub fn body(r: &[u8]) -> Result<Range<usize>, DocumentError> {
    let prologue: [&[u8]; 4] = [b"{", b"\"pairs\"", b":", b"["];
    let mut i = 0;

    for token in prologue {
        i = skip_whitespace(r, i);
        if !r[i..].starts_with(token) {
            Err(DocumentError::Prologue(i))?;
        }
        i += token.len();
    }

    let mut j = r.len();

    for token in [b'}', b']'] {
        j = skip_whitespace_back(r, j);
        if j <= i || r[j - 1] != token {
            Err(DocumentError::Epilogue(j))?;
        }
        j -= 1;
    }

    Ok(i..j)
}

pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn skip_whitespace(r: &[u8], mut i: usize) -> usize {
    while i < r.len() && is_whitespace(r[i]) {
        i += 1;
    }
    i
}

fn skip_whitespace_back(r: &[u8], mut j: usize) -> usize {
    while j > 0 && is_whitespace(r[j - 1]) {
        j -= 1;
    }
    j
}
