//! # luts - Radiative-Transfer Lookup Tables
//!
//! `luts` loads the binary Lookup Tables (LUTs) written by radiative-transfer
//! simulation chains and exposes each wavelength's table as a labeled
//! N-dimensional array, indexed by physical dimension names such as optical
//! depth, altitude or viewing and sun geometry.
//!
//! ## Dataset Layout
//!
//! A dataset root holds, per property and wavelength, a headerless binary
//! payload and a text file describing its dimensions:
//!
//! ```text
//! VENUS_zerodeuxSansAbsorption/
//! ├── refl_smac_VENUS_CONTINENTAL_aot_0.50_450       # float32 records
//! ├── refl_smac_VENUS_CONTINENTAL_aot_0.50_450.txt   # dimension schema
//! ├── refl_smac_VENUS_CONTINENTAL_aot_0.50_492
//! ├── refl_smac_VENUS_CONTINENTAL_aot_0.50_492.txt
//! └── albedo_smac_VENUS_CONTINENTAL_aot_0.50_450 ...
//! ```
//!
//! The file name carries property, sensor, aerosol model, proportion and
//! wavelength (see [`naming`]); the `.txt` file lists one dimension per line
//! with its coordinate labels (see [`metadata`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use luts::prelude::*;
//!
//! let refl = Collection::new("VENUS_zerodeuxSansAbsorption", Some("refl"))?;
//! println!("{:?} / {:?}: bands {:?}", refl.sensor(), refl.aerosol(), refl.band_names());
//!
//! let lut = refl.get("450").expect("band 450");
//! match lut.select(&[("tau", 0.2), ("vza", 30.0)])? {
//!     Selection::Scalar(v) => println!("value {v}"),
//!     Selection::Array(a) => println!("{:?} remain", a.dims()),
//! }
//! # Ok::<(), luts::LutError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`naming`]: file naming grammar and [`Band`](naming::Band) keys
//! - [`metadata`]: dimension schema files
//! - [`binary`]: payload decoding into `ndarray` arrays
//! - [`array`]: labeled arrays with label and positional selection
//! - [`lut`]: one decoded table
//! - [`collection`]: every table of one property under a root
//! - [`config`]: decoding and naming options, TOML loadable

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod binary;
pub mod collection;
pub mod config;
pub mod error;
pub mod lut;
pub mod metadata;
pub mod naming;

pub use error::{LutError, Result};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::array::{LabeledArray, Selection};
    pub use crate::binary::{BinaryDecoder, DecodeOptions, Endianness, Precision};
    pub use crate::collection::{Collection, CollectionWarning};
    pub use crate::config::CollectionConfig;
    pub use crate::error::{LutError, Result};
    pub use crate::lut::Lut;
    pub use crate::metadata::Dimension;
    pub use crate::naming::{Band, LutFileName, NamingGrammar};
}
