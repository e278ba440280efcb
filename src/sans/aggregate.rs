//! Reduction of per-partition results into one average.

use core::{iter::Sum, ops::Add};

use thiserror::Error;

/// An error combining partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// No records were found in any partition.
    #[error("Cannot average zero records.")]
    DivideByZero,
}

/// The running distance sum and record count of one partition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Partial {
    pub sum: f64,
    pub count: u64,
}

impl Add for Partial {
    type Output = Partial;

    fn add(self, rhs: Partial) -> Partial {
        Partial {
            sum: self.sum + rhs.sum,
            count: self.count + rhs.count,
        }
    }
}

impl Sum for Partial {
    fn sum<I: Iterator<Item = Partial>>(iter: I) -> Partial {
        iter.fold(Partial::default(), Add::add)
    }
}

impl Partial {
    /// The mean distance over all accumulated records.
    pub fn average(self) -> Result<f64, AggregateError> {
        if self.count == 0 {
            Err(AggregateError::DivideByZero)?;
        }

        Ok(self.sum / self.count as f64)
    }
}

/// Combine the results of every partition into the mean distance over all
/// records.
///
/// The order in which partition sums are added depends on the partition count,
/// so averages over different partitionings agree only to within rounding.
pub fn combine(partials: &[Partial]) -> Result<f64, AggregateError> {
    partials.iter().copied().sum::<Partial>().average()
}
