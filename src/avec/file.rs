//! File-based decoder implementation.

use std::{fs::File, io::Read, path::Path};

use either::Either::{self, Left, Right};
use memmap2::Mmap;
use tracing::debug;

use super::{Config, Error, Source, Summary};

/// An immutable view of a whole file, either mapped or read into memory.
///
/// Dereferences to the file's bytes.
pub type Buffer = Either<Mmap, Vec<u8>>;

/// Bring the whole of a file into memory.
pub fn open(path: impl AsRef<Path>, source: Source) -> Result<Buffer, Error> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let buffer = match source {
        // SAFETY: The mapping is only ever read, and the file is not expected
        // to be modified for the lifetime of the run.
        Source::Map => Left(unsafe { Mmap::map(&file)? }),
        Source::Read => {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Right(buf)
        }
    };

    debug!(path = %path.display(), len = buffer.len(), ?source, "Opened document.");

    Ok(buffer)
}

/// Decode a document stored in a file.
///
/// This method is also re-exported as `haversine::avec::decode_file`.
pub fn decode(path: impl AsRef<Path>, config: &Config) -> Result<Summary, Error> {
    let buffer = open(path, config.source)?;
    super::slice::decode(&buffer, config)
}
