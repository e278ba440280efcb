//! Reader-based decoder implementation.

use std::io::Read;

use tracing::debug;

use super::{Config, Error, Summary};

/// Decode a document from a reader.
///
/// The reader is drained into one immutable buffer before any partition is
/// scanned.
///
/// This method is also re-exported as `haversine::avec::decode_reader`.
pub fn decode(r: &mut impl Read, config: &Config) -> Result<Summary, Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    debug!(len = buf.len(), "Read document.");

    super::slice::decode(&buf, config)
}
