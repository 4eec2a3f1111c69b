//! # Single-wavelength lookup table
//!
//! A [`Lut`] is one binary payload decoded into a [`LabeledArray`], together
//! with the metadata that shaped it.

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::array::{LabeledArray, Selection};
use crate::binary::{BinaryDecoder, DecodeOptions};
use crate::error::Result;
use crate::metadata::{read_metadata, shape_of};

/// One decoded lookup table
#[derive(Debug, Clone)]
pub struct Lut {
    data: LabeledArray,
    fmeta: PathBuf,
    binary_path: PathBuf,
    name: String,
}

impl Lut {
    /// Load the table described by the metadata file `fmeta`
    ///
    /// The payload is the metadata path with its extension removed
    /// (`refl_..._450.txt` describes `refl_..._450`).
    pub fn open<P: AsRef<Path>>(fmeta: P, name: &str, options: &DecodeOptions) -> Result<Self> {
        let fmeta = fmeta.as_ref().to_path_buf();
        let binary_path = binary_path_for(&fmeta);

        let dims = read_metadata(&fmeta)?;
        let values = BinaryDecoder::decode(&binary_path, &shape_of(&dims), options)?;
        let data = LabeledArray::new(values, dims)?;

        info!(
            "Loaded {} from {} with shape {:?}",
            name,
            binary_path.display(),
            data.shape()
        );
        for dim in data.dimensions() {
            debug!("  {}: {:?}", dim.name, dim.coords);
        }

        Ok(Self {
            data,
            fmeta,
            binary_path,
            name: name.to_string(),
        })
    }

    /// Labeled values
    pub fn data(&self) -> &LabeledArray {
        &self.data
    }

    /// Dimension names, in axis order
    pub fn dims(&self) -> Vec<String> {
        self.data.dims()
    }

    /// Dimension sizes, in axis order
    pub fn dims_len(&self) -> &[usize] {
        self.data.shape()
    }

    /// Coordinate vectors, in axis order
    pub fn coords(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.data
            .dimensions()
            .iter()
            .map(|d| (d.name.as_str(), d.coords.as_slice()))
    }

    /// Coordinate vector of one dimension
    pub fn coord(&self, dim: &str) -> Option<&[f64]> {
        self.data.coords(dim)
    }

    /// Metadata file this table was described by
    pub fn fmeta(&self) -> &Path {
        &self.fmeta
    }

    /// Binary payload this table was decoded from
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Variable label, `<prop>_<band>`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label-based selection, see [`LabeledArray::select`]
    pub fn select(&self, labels: &[(&str, f64)]) -> Result<Selection> {
        self.data.select(labels)
    }

    /// Value at a full multi-index
    pub fn value_at(&self, index: &[usize]) -> Option<f64> {
        self.data.value_at(index)
    }

    /// Row-major offset of a full multi-index in the binary payload
    pub fn flat_offset(&self, index: &[usize]) -> Option<usize> {
        self.data.flat_offset(index)
    }
}

impl fmt::Display for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {:?}", self.name, self.dims_len())?;
        writeln!(f, "  source: {}", self.binary_path.display())?;
        for dim in self.data.dimensions() {
            writeln!(f, "  {dim}")?;
        }
        Ok(())
    }
}

/// Payload path for a metadata path: the same path without its extension
pub fn binary_path_for(fmeta: &Path) -> PathBuf {
    fmeta.with_extension("")
}
