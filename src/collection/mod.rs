//! # LUT Collections
//!
//! A [`Collection`] gathers every per-wavelength table of one physical
//! property found directly under a dataset root, keyed by [`Band`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use luts::collection::Collection;
//!
//! let venus_refl = Collection::new("tests/VENUS_zerodeuxSansAbsorption", Some("refl"))?;
//! println!("{} bands: {:?}", venus_refl.len(), venus_refl.band_names());
//!
//! if let Some(lut) = venus_refl.get("450") {
//!     let value = lut.select(&[("tau", 0.2), ("alt", 0.0)])?;
//!     println!("{value:?}");
//! }
//! # Ok::<(), luts::LutError>(())
//! ```
//!
//! ## Reloading
//!
//! [`Collection::load`] builds the new state off to the side and swaps it in
//! only once every table has decoded; a failed load leaves the previous
//! bands and tables untouched.

mod load;
mod warning;


pub use warning::CollectionWarning;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::CollectionConfig;
use crate::error::Result;
use crate::lut::Lut;
use crate::naming::Band;

/// Everything a successful load produces
#[derive(Debug, Clone, Default)]
struct CollectionState {
    prop: Option<String>,
    sensor: Option<String>,
    aerosol: Option<String>,
    proportion: Option<f64>,
    bands: Vec<Band>,
    luts: BTreeMap<Band, Lut>,
    warnings: Vec<CollectionWarning>,
}

/// Wavelength-keyed set of lookup tables for one property
#[derive(Debug, Clone)]
pub struct Collection {
    path: PathBuf,
    config: CollectionConfig,
    state: CollectionState,
}

impl Collection {
    /// Create a collection rooted at `path`, loading `var` right away if given
    pub fn new<P: AsRef<Path>>(path: P, var: Option<&str>) -> Result<Self> {
        Self::with_config(path, var, CollectionConfig::default())
    }

    /// Create a collection with custom configuration
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        var: Option<&str>,
        config: CollectionConfig,
    ) -> Result<Self> {
        let mut collection = Self {
            path: path.as_ref().to_path_buf(),
            config,
            state: CollectionState::default(),
        };
        if let Some(var) = var.filter(|v| !v.is_empty()) {
            collection.load(var)?;
        }
        Ok(collection)
    }

    /// Dataset root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configuration in use
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Whether a load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.state.prop.is_some()
    }

    /// Property of the loaded tables
    pub fn prop(&self) -> Option<&str> {
        self.state.prop.as_deref()
    }

    /// Sensor taken from the first file in band order
    pub fn sensor(&self) -> Option<&str> {
        self.state.sensor.as_deref()
    }

    /// Aerosol model taken from the first file in band order
    pub fn aerosol(&self) -> Option<&str> {
        self.state.aerosol.as_deref()
    }

    /// Aerosol proportion taken from the first file in band order
    pub fn proportion(&self) -> Option<f64> {
        self.state.proportion
    }

    /// Discovered bands, ascending
    pub fn bands(&self) -> &[Band] {
        &self.state.bands
    }

    /// Discovered bands as canonical strings, ascending
    pub fn band_names(&self) -> Vec<String> {
        self.state.bands.iter().map(Band::to_string).collect()
    }

    /// All tables, keyed by band
    pub fn luts(&self) -> &BTreeMap<Band, Lut> {
        &self.state.luts
    }

    /// Table for a band given as text; `"0450"` and `"450"` are the same band
    pub fn get(&self, band: &str) -> Option<&Lut> {
        let band: Band = band.parse().ok()?;
        self.state.luts.get(&band)
    }

    /// Non-fatal findings of the last successful load
    pub fn warnings(&self) -> &[CollectionWarning] {
        &self.state.warnings
    }

    /// Number of loaded tables
    pub fn len(&self) -> usize {
        self.state.luts.len()
    }

    /// Whether no table is loaded
    pub fn is_empty(&self) -> bool {
        self.state.luts.is_empty()
    }
}
