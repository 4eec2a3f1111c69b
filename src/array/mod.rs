//! # Labeled N-dimensional arrays
//!
//! [`LabeledArray`] pairs an `ndarray::ArrayD<f64>` with one [`Dimension`]
//! per axis, so values can be selected by dimension name and coordinate
//! label instead of raw positions:
//!
//! ```rust
//! use luts::array::{LabeledArray, Selection};
//! use luts::metadata::Dimension;
//! use ndarray::{ArrayD, IxDyn};
//!
//! let values = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![0., 1., 2., 3., 4., 5.])?;
//! let dims = vec![
//!     Dimension::new("tau", vec![0.1, 0.2]),
//!     Dimension::new("vza", vec![0.0, 30.0, 60.0]),
//! ];
//! let table = LabeledArray::new(values, dims)?;
//!
//! // Pin one axis: a 1-D array over `vza` remains
//! let row = table.select(&[("tau", 0.2)])?;
//! assert_eq!(row.as_array().map(|a| a.dims()), Some(vec!["vza".to_string()]));
//!
//! // Pin every axis: a scalar
//! assert_eq!(table.select(&[("tau", 0.2), ("vza", 30.0)])?.as_scalar(), Some(4.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod selection;


pub use selection::Selection;

use ndarray::{ArrayD, Axis};

use crate::binary::element_count;
use crate::error::{LutError, Result};
use crate::metadata::Dimension;

/// Relative tolerance when matching a requested label to a coordinate
pub const COORD_TOLERANCE: f64 = 1e-9;

/// N-dimensional array whose axes carry names and coordinate labels
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray {
    values: ArrayD<f64>,
    dims: Vec<Dimension>,
}

impl LabeledArray {
    /// Wrap `values` with one dimension per axis
    ///
    /// Fails with [`LutError::SizeMismatch`] if the array shape differs from
    /// the dimension sizes.
    pub fn new(values: ArrayD<f64>, dims: Vec<Dimension>) -> Result<Self> {
        let shape: Vec<usize> = dims.iter().map(Dimension::len).collect();
        if values.shape() != shape.as_slice() {
            return Err(LutError::SizeMismatch {
                path: Default::default(),
                expected: element_count(&shape),
                actual: values.len(),
            });
        }
        Ok(Self { values, dims })
    }

    /// Underlying values, in standard (row-major) layout
    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    /// Axis descriptions, in axis order
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dims
    }

    /// Axis names, in axis order
    pub fn dims(&self) -> Vec<String> {
        self.dims.iter().map(|d| d.name.clone()).collect()
    }

    /// Axis sizes, in axis order
    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.values.ndim()
    }

    /// Total number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinate vector of dimension `name`
    pub fn coords(&self, name: &str) -> Option<&[f64]> {
        self.dims
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.coords.as_slice())
    }

    /// Axis position of dimension `name`
    pub fn axis_of(&self, name: &str) -> Result<usize> {
        self.dims
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| LutError::UnknownDimension(name.to_string()))
    }

    /// Position of label `value` on dimension `name`
    pub fn index_of(&self, name: &str, value: f64) -> Result<usize> {
        let axis = self.axis_of(name)?;
        let coords = &self.dims[axis].coords;
        coords
            .iter()
            .position(|&c| c == value)
            .or_else(|| {
                coords.iter().position(|&c| {
                    (c - value).abs() <= COORD_TOLERANCE * c.abs().max(value.abs()).max(1.0)
                })
            })
            .ok_or_else(|| LutError::CoordinateNotFound {
                dim: name.to_string(),
                value,
            })
    }

    /// Select by coordinate label on any subset of dimensions
    ///
    /// Each selected dimension is dropped from the result; selecting every
    /// dimension yields [`Selection::Scalar`].
    pub fn select(&self, labels: &[(&str, f64)]) -> Result<Selection> {
        let positions = labels
            .iter()
            .map(|&(name, value)| Ok((name, self.index_of(name, value)?)))
            .collect::<Result<Vec<_>>>()?;
        self.isel(&positions)
    }

    /// Select by position on any subset of dimensions
    pub fn isel(&self, positions: &[(&str, usize)]) -> Result<Selection> {
        let mut picks: Vec<(usize, usize)> = Vec::with_capacity(positions.len());
        for &(name, index) in positions {
            let axis = self.axis_of(name)?;
            if picks.iter().any(|&(a, _)| a == axis) {
                return Err(LutError::DuplicateSelection(name.to_string()));
            }
            let len = self.dims[axis].len();
            if index >= len {
                return Err(LutError::IndexOutOfBounds {
                    dim: name.to_string(),
                    index,
                    len,
                });
            }
            picks.push((axis, index));
        }

        // Highest axis first so the remaining axis numbers stay valid
        picks.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        let mut view = self.values.view();
        for &(axis, index) in &picks {
            view = view.index_axis_move(Axis(axis), index);
        }

        let dims: Vec<Dimension> = self
            .dims
            .iter()
            .enumerate()
            .filter(|(axis, _)| !picks.iter().any(|&(a, _)| a == *axis))
            .map(|(_, d)| d.clone())
            .collect();

        if dims.is_empty() {
            let value = view.iter().next().copied().unwrap_or(f64::NAN);
            return Ok(Selection::Scalar(value));
        }
        Ok(Selection::Array(Self {
            values: view.to_owned(),
            dims,
        }))
    }

    /// Value at a full multi-index
    pub fn value_at(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.ndim() {
            return None;
        }
        self.values.get(index).copied()
    }

    /// Row-major flat offset of a full multi-index
    pub fn flat_offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.ndim() {
            return None;
        }
        let mut offset = 0;
        for (&i, &n) in index.iter().zip(self.shape()) {
            if i >= n {
                return None;
            }
            offset = offset * n + i;
        }
        Some(offset)
    }
}
