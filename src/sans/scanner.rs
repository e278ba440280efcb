//! States scanning records out of a byte range.
//!
//! A record is `{"x0":<num>, "y0":<num>, "x1":<num>, "y1":<num>}`. The scanner
//! cycles through a `find` and a `parse` state for each of the four fields, in
//! that fixed order, only ever recording where each numeric value begins and
//! ends. Values are decoded once the record closes.

use core::{fmt, ops::Range};

use thiserror::Error;

use super::{
    aggregate::Partial,
    decimal::{self, DecimalError},
    document::is_whitespace,
    formula::distance,
};

/// A numeric field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X0,
    Y0,
    X1,
    Y1,
}

impl Field {
    /// The label preceding the field's value, including its quotes and colon.
    pub fn label(self) -> &'static [u8] {
        match self {
            Field::X0 => b"\"x0\":",
            Field::Y0 => b"\"y0\":",
            Field::X1 => b"\"x1\":",
            Field::Y1 => b"\"y1\":",
        }
    }

    /// The delimiter expected to end the field's value.
    pub fn delimiter(self) -> u8 {
        match self {
            Field::Y1 => b'}',
            _ => b',',
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::X0 => "x0",
            Field::Y0 => "y0",
            Field::X1 => "x1",
            Field::Y1 => "y1",
        })
    }
}

/// An error scanning a range. Offsets are absolute within the buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A byte other than whitespace or `,` found between records.
    #[error("Unexpected byte {byte:#04x} at offset {offset} while looking for a record.")]
    UnexpectedByte { offset: usize, byte: u8 },
    /// The label of a field is not where the record grammar puts it.
    #[error("Expected label for field `{field}` at offset {offset}.")]
    MissingLabel { field: Field, offset: usize },
    /// The value of a field runs to the end of the range.
    #[error("Value of field `{field}` starting at offset {offset} is not terminated.")]
    MissingDelimiter { field: Field, offset: usize },
    /// The value of a field ends on the wrong delimiter.
    #[error("Value of field `{field}` ends on unexpected byte {byte:#04x} at offset {offset}.")]
    WrongDelimiter { field: Field, offset: usize, byte: u8 },
    /// The value of a field is not a fixed-layout decimal.
    #[error("Malformed value of field `{field}` at offset {offset}: {source}")]
    Decimal {
        field: Field,
        offset: usize,
        source: DecimalError,
    },
}

/// State of the record scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    FindX0,
    ParseX0,
    FindY0,
    ParseY0,
    FindX1,
    ParseX1,
    FindY1,
    ParseY1,
}

/// The effect of a transition on the record being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No further record begins in the range.
    Exhausted,
    /// The value of a field begins at the offset.
    Start(Field, usize),
    /// The value of a field ends at the offset (exclusive).
    End(Field, usize),
    /// The value of the last field ends at the offset, closing the record.
    Emit(usize),
}

impl State {
    /// Initial state, expecting the opening of a record.
    pub const INITIAL: State = State::FindX0;

    /// Transition to another state by scanning forward from offset `i`.
    ///
    /// The scanner never looks past the end of `r`; callers confine it to a
    /// range by truncating the buffer. Returns the action to apply, the offset
    /// to resume scanning from, and the successor state.
    pub fn advance(self, r: &[u8], i: usize) -> Result<(Action, usize, State), ScanError> {
        use {Field::*, State::*};

        Ok(match self {
            FindX0 => match find_record(r, i)? {
                Some(start) => (Action::Start(X0, start), start, ParseX0),
                None => (Action::Exhausted, r.len(), FindX0),
            },
            ParseX0 => {
                let end = delimit(r, i, X0)?;
                (Action::End(X0, end), end + 1, FindY0)
            }
            FindY0 => {
                let start = find_label(r, i, Y0)?;
                (Action::Start(Y0, start), start, ParseY0)
            }
            ParseY0 => {
                let end = delimit(r, i, Y0)?;
                (Action::End(Y0, end), end + 1, FindX1)
            }
            FindX1 => {
                let start = find_label(r, i, X1)?;
                (Action::Start(X1, start), start, ParseX1)
            }
            ParseX1 => {
                let end = delimit(r, i, X1)?;
                (Action::End(X1, end), end + 1, FindY1)
            }
            FindY1 => {
                let start = find_label(r, i, Y1)?;
                (Action::Start(Y1, start), start, ParseY1)
            }
            ParseY1 => {
                let end = delimit(r, i, Y1)?;
                (Action::Emit(end), end + 1, FindX0)
            }
        })
    }
}

/// Scan every record in `range` of `r`, accumulating the distance between each
/// record's two points on a sphere of `radius`.
pub fn scan(r: &[u8], range: Range<usize>, radius: f64) -> Result<Partial, ScanError> {
    let r = &r[..range.end];
    let mut i = range.start;
    let mut state = State::INITIAL;

    // Value spans of the record being assembled, indexed by field.
    let mut spans = [(0, 0); 4];
    let mut partial = Partial::default();

    loop {
        let (action, next, successor) = state.advance(r, i)?;

        match action {
            Action::Exhausted => break,
            Action::Start(field, start) => spans[field as usize].0 = start,
            Action::End(field, end) => spans[field as usize].1 = end,
            Action::Emit(end) => {
                spans[Field::Y1 as usize].1 = end;

                let x0 = decode_span(r, spans[0], Field::X0)?;
                let y0 = decode_span(r, spans[1], Field::Y0)?;
                let x1 = decode_span(r, spans[2], Field::X1)?;
                let y1 = decode_span(r, spans[3], Field::Y1)?;

                partial.sum += distance(x0, y0, x1, y1, radius);
                partial.count += 1;
            }
        }

        i = next;
        state = successor;
    }

    Ok(partial)
}

fn decode_span(r: &[u8], (start, end): (usize, usize), field: Field) -> Result<f64, ScanError> {
    decimal::decode(&r[start..end]).map_err(|source| ScanError::Decimal {
        field,
        offset: start,
        source,
    })
}

/// Find the opening of the next record and the start of its first value.
fn find_record(r: &[u8], mut i: usize) -> Result<Option<usize>, ScanError> {
    while let Some(&b) = r.get(i) {
        match b {
            b'{' => return find_label(r, i + 1, Field::X0).map(Some),
            b',' => i += 1,
            b if is_whitespace(b) => i += 1,
            byte => Err(ScanError::UnexpectedByte { offset: i, byte })?,
        }
    }

    Ok(None)
}

/// Match the label of a field after any whitespace, returning the offset of
/// the value that follows it.
fn find_label(r: &[u8], mut i: usize, field: Field) -> Result<usize, ScanError> {
    while r.get(i).is_some_and(|&b| is_whitespace(b)) {
        i += 1;
    }

    let label = field.label();
    if !r[i..].starts_with(label) {
        Err(ScanError::MissingLabel { field, offset: i })?;
    }

    Ok(i + label.len())
}

/// Find the end of a value starting at offset `i`.
fn delimit(r: &[u8], i: usize, field: Field) -> Result<usize, ScanError> {
    let end = r[i..]
        .iter()
        .position(|&b| b == b',' || b == b'}')
        .map(|p| i + p)
        .ok_or(ScanError::MissingDelimiter { field, offset: i })?;

    let byte = r[end];
    if byte != field.delimiter() {
        Err(ScanError::WrongDelimiter {
            field,
            offset: end,
            byte,
        })?;
    }

    Ok(end)
}
