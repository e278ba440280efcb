//! A parallel, fixed-grammar decoder averaging great-circle distances.
//!
//! Haversine reads documents of coordinate pairs shaped like
//!
//! ```text
//! {"pairs":[
//! 	{"x0":-116.023599, "y0":55.237895, "x1":8.347589, "y1":-12.000001},
//! 	...
//! ]}
//! ```
//!
//! and reports the mean haversine distance between each pair's two points.
//! Rather than parsing JSON, it splits the document into line-aligned ranges
//! and runs a small state machine over each range on its own thread, decoding
//! every coordinate directly from its fixed six-digit layout.
//!
//! Most users should begin with the functions in the [`avec`] module. The
//! IO-free state machine and its helpers live in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `baseline`: enable the generic `serde_json` decoder used for comparison
//!   (default).

pub mod avec;
pub mod sans;
