//! Slice-based decoder implementation.

use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::sans::{
    aggregate::{Partial, combine},
    document,
    scanner::scan,
    split::{self, SplitError, split},
};

use super::{Config, Error, Summary};

/// Decode a document held in a slice.
///
/// The body of the document is split into `config.partitions` ranges, or fewer
/// when its lines are too long to place that many boundaries, and every range
/// is scanned on its own worker. Partial results are combined only after all
/// workers have finished. The first error from any worker aborts the run.
///
/// This method is also re-exported as `haversine::avec::decode_slice`.
pub fn decode(r: &[u8], config: &Config) -> Result<Summary, Error> {
    let body = document::body(r)?;
    let ranges = partition(r, body, config.partitions)?;
    let partitions = ranges.len();
    let partials = scan_all(r, &ranges, config.radius)?;

    let count: u64 = partials.iter().map(|p| p.count).sum();
    let average = combine(&partials)?;

    info!(average, count, partitions, "Combined partial results.");

    Ok(Summary {
        average,
        count,
        partitions,
    })
}

/// Split the body of a document into absolute, record-aligned ranges.
///
/// Uses `n` ranges when the splitter can place them, otherwise as many as the
/// body's longest line allows.
fn partition(r: &[u8], body: Range<usize>, n: usize) -> Result<Vec<Range<usize>>, Error> {
    let offset = body.start;
    let body = &r[body];

    let offsets = match split(body, n) {
        Err(SplitError::NoLineBreak { .. }) => {
            let capped = n.min(split::capacity(body));
            debug!(requested = n, partitions = capped, "Capped partitions to body lines.");
            split(body, capped)?
        }
        offsets => offsets?,
    };

    Ok(offsets
        .windows(2)
        .map(|w| offset + w[0]..offset + w[1])
        .collect())
}

/// Scan each range on a dedicated worker, joining before returning.
fn scan_all(r: &[u8], ranges: &[Range<usize>], radius: f64) -> Result<Vec<Partial>, Error> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ranges.len())
        .thread_name(|i| format!("haversine-worker-{i}"))
        .build()?;

    debug!(workers = ranges.len(), "Starting workers.");

    // Each worker writes only its own slot; the collect is the join barrier.
    let partials = pool.install(|| {
        ranges
            .par_iter()
            .enumerate()
            .map(|(worker, range)| -> Result<Partial, Error> {
                let partial = scan(r, range.clone(), radius)?;
                debug!(
                    worker,
                    start = range.start,
                    end = range.end,
                    count = partial.count,
                    "Scanned partition."
                );
                Ok(partial)
            })
            .collect::<Result<Vec<_>, Error>>()
    })?;

    debug!("Joined workers.");

    Ok(partials)
}
