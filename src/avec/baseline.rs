//! Generic decoder implementation.
//!
//! Deserializes the whole document with `serde_json` and reduces it in a
//! single pass. It exists to check the specialized decoder against, and is
//! considerably slower.
//!
//! _Requires Cargo feature `baseline`._

use serde::Deserialize;

use crate::sans::{aggregate::Partial, formula::distance};

use super::{Error, Summary};

#[derive(Debug, Deserialize)]
struct Document {
    pairs: Vec<Pair>,
}

#[derive(Debug, Deserialize)]
struct Pair {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

/// Decode a document held in a slice with a general-purpose JSON parser.
pub fn decode(r: &[u8], radius: f64) -> Result<Summary, Error> {
    let Document { pairs } = serde_json::from_slice(r)?;

    let total = pairs
        .iter()
        .map(|p| Partial {
            sum: distance(p.x0, p.y0, p.x1, p.y1, radius),
            count: 1,
        })
        .sum::<Partial>();

    Ok(Summary {
        average: total.average()?,
        count: total.count,
        partitions: 1,
    })
}
