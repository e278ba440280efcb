//! IO-free core of the decoder.
//!
//! Nothing in this module reads files or spawns threads. It operates on a
//! borrowed, immutable buffer and is driven by the implementations in
//! [`crate::avec`].
//!
//! # Architecture
//!
//! Decoding a document runs in four stages:
//!
//! - [`document::body`] checks the framing `{"pairs":[ ... ]}` and locates the
//! records between it.
//!
//! - [`split::split`] partitions the body into ranges which begin on a line
//! break, so that no record straddles two ranges.
//!
//! - [`scanner::scan`] runs the record state machine over one range. Each
//! state is a variant of [`scanner::State`], and its `advance` method is the
//! whole transition table: it scans forward to the next label or delimiter,
//! and returns an action along with the successor state. Values are decoded by
//! [`decimal::decode`] and measured by [`formula::distance`] as each record
//! closes, accumulating into a [`aggregate::Partial`].
//!
//! - [`aggregate::combine`] reduces the partial results of all ranges.
//!
//! Ranges share nothing but the buffer, so the third stage may run on any
//! number of threads.

pub mod aggregate;
pub mod decimal;
pub mod document;
pub mod formula;
pub mod scanner;
pub mod split;

/// Entrypoint to the record state machine.
pub type Scanner = scanner::State;
