//! Partitioning of a buffer into record-aligned ranges.

use thiserror::Error;

/// An error partitioning a buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// At least one partition is required.
    #[error("Cannot split into zero partitions.")]
    NoPartitions,
    /// No line break between a candidate boundary and the end of the buffer.
    #[error("No line break after offset {offset} to end partition {partition}.")]
    NoLineBreak { partition: usize, offset: usize },
}

/// Split a buffer into `n` contiguous ranges that never divide a record.
///
/// Returns `n + 1` strictly increasing offsets, starting at `0` and ending at
/// `r.len()`, such that partition `i` is `offsets[i]..offsets[i + 1]`. Every
/// internal offset is the position of a line break, so each range after the
/// first opens on the line break ending the previous range's last record.
pub fn split(r: &[u8], n: usize) -> Result<Vec<usize>, SplitError> {
    if n == 0 {
        Err(SplitError::NoPartitions)?;
    }

    let mut offsets = Vec::with_capacity(n + 1);
    offsets.push(0);

    for partition in 1..n {
        let previous = offsets[partition - 1];
        let candidate = (partition * r.len() / n).max(previous + 1);

        let boundary = r
            .get(candidate..)
            .and_then(|tail| tail.iter().position(|&b| b == b'\n'))
            .map(|p| candidate + p)
            .ok_or(SplitError::NoLineBreak {
                partition,
                offset: candidate,
            })?;

        offsets.push(boundary);
    }

    offsets.push(r.len());

    Ok(offsets)
}

/// Largest partition count that `split` can always place on a buffer.
///
/// Any window at least as long as the buffer's longest line holds a line
/// break, so every `n` up to `r.len() / longest` succeeds. Never less than 1.
pub fn capacity(r: &[u8]) -> usize {
    let mut longest = 0;
    let mut start = 0;

    for (i, _) in r.iter().enumerate().filter(|&(_, &b)| b == b'\n') {
        longest = longest.max(i + 1 - start);
        start = i + 1;
    }

    // The run after the last break has no break of its own to land on.
    longest = longest.max(r.len() + 1 - start);

    (r.len() / longest).max(1)
}
