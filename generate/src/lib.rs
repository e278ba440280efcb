//! Random coordinate pair documents.
//!
//! Every document is framed as `{"pairs":[ ... ]}` with one record per line,
//! each coordinate written with six fractional digits. Longitudes (`x`) fall
//! in `[-180, 180)` and latitudes (`y`) in `[-90, 90)`.

use std::io::{self, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generate a reproducible document of `count` pairs in memory.
pub fn generate_seeded(count: usize, seed: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_pairs(&mut buf, count, &mut StdRng::seed_from_u64(seed))?;
    Ok(buf)
}

/// Write a document of `count` random pairs.
pub fn write_pairs(w: &mut impl Write, count: usize, rng: &mut impl Rng) -> io::Result<()> {
    writeln!(w, "{{\"pairs\":[")?;

    for i in 0..count {
        write_record(w, random_point(rng), random_point(rng))?;

        // The last record takes no trailing comma.
        if i + 1 < count {
            write!(w, ",")?;
        }
        writeln!(w)?;
    }

    writeln!(w, "]}}")
}

/// Write a single record line, without a trailing comma or line break.
pub fn write_record(w: &mut impl Write, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> io::Result<()> {
    write!(
        w,
        "\t{{\"x0\":{x0:.6}, \"y0\":{y0:.6}, \"x1\":{x1:.6}, \"y1\":{y1:.6}}}"
    )
}

fn random_point(rng: &mut impl Rng) -> (f64, f64) {
    (rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0))
}
