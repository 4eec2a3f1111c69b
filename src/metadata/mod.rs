//! # LUT Metadata
//!
//! Each binary payload is described by a small text file listing its
//! dimensions, one per line, in serialization order:
//!
//! ```text
//! tau 0.0 0.25 0.5 1.0
//! alt 0 2
//! raa 0 90 180
//! vza 0 30 60
//! sza 0 30 60
//! ```
//!
//! The first token names the dimension; the rest are its coordinate labels.
//! The number of labels is the dimension size.

mod dimension;
mod reader;


pub use dimension::{shape_of, Dimension};
pub use reader::{parse_metadata, read_metadata};
