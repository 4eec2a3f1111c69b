//! Binary payload decoding for lookup tables
//!
//! A LUT payload is a headerless stream of fixed-width IEEE floats, written
//! row-major over the dimensions declared in its metadata file. Decoding:
//!
//! 1. Read the whole file
//! 2. Check the record count against the declared shape
//! 3. Interpret bytes as float32 or float64 in the configured byte order
//! 4. Reshape into an N-dimensional array (standard layout)

use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use log::debug;
use ndarray::{ArrayD, IxDyn};
use serde::Deserialize;

use crate::error::{LutError, Result};

/// Binary record precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit floating point (what the simulation chain writes)
    #[default]
    Float32,
    /// 64-bit floating point
    Float64,
}

impl Precision {
    /// Get the byte size per value
    pub fn byte_size(&self) -> usize {
        match self {
            Precision::Float32 => 4,
            Precision::Float64 => 8,
        }
    }
}

/// Byte order of the records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Byte order of the machine reading the file
    #[default]
    Native,
    /// Little-endian
    Little,
    /// Big-endian
    Big,
}

/// How raw payload bytes are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Width of one record
    pub precision: Precision,
    /// Byte order of one record
    pub endianness: Endianness,
}

/// Decoder for LUT binary payloads
pub struct BinaryDecoder;

impl BinaryDecoder {
    /// Decode the payload at `path` into an array of the given `shape`
    ///
    /// # Errors
    /// * [`LutError::Io`] if the file cannot be read
    /// * [`LutError::SizeMismatch`] if the payload does not hold exactly
    ///   `shape.iter().product()` whole records
    pub fn decode(path: &Path, shape: &[usize], options: &DecodeOptions) -> Result<ArrayD<f64>> {
        let bytes = std::fs::read(path).map_err(|e| LutError::io(path, e))?;
        let array = Self::decode_bytes(&bytes, shape, options).map_err(|e| match e {
            LutError::SizeMismatch {
                expected, actual, ..
            } => LutError::SizeMismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            },
            other => other,
        })?;
        debug!(
            "Decoded {} records of {:?} from {} into shape {:?}",
            array.len(),
            options.precision,
            path.display(),
            array.shape()
        );
        Ok(array)
    }

    /// Decode an in-memory payload; size errors carry an empty path
    pub fn decode_bytes(
        bytes: &[u8],
        shape: &[usize],
        options: &DecodeOptions,
    ) -> Result<ArrayD<f64>> {
        let expected = element_count(shape);
        let byte_size = options.precision.byte_size();
        let actual = bytes.len() / byte_size;

        if bytes.len() % byte_size != 0 || actual != expected {
            return Err(LutError::SizeMismatch {
                path: Default::default(),
                expected,
                actual,
            });
        }

        let values = match options.endianness {
            Endianness::Native => Self::bytes_to_floats::<NativeEndian>(bytes, options.precision),
            Endianness::Little => Self::bytes_to_floats::<LittleEndian>(bytes, options.precision),
            Endianness::Big => Self::bytes_to_floats::<BigEndian>(bytes, options.precision),
        };

        ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|_| LutError::SizeMismatch {
            path: Default::default(),
            expected,
            actual,
        })
    }

    /// Convert raw bytes to f64 values; `bytes` holds whole records
    fn bytes_to_floats<B: ByteOrder>(bytes: &[u8], precision: Precision) -> Vec<f64> {
        match precision {
            Precision::Float32 => bytes.chunks_exact(4).map(|c| B::read_f32(c) as f64).collect(),
            Precision::Float64 => bytes.chunks_exact(8).map(B::read_f64).collect(),
        }
    }
}

/// Product of the dimension sizes, saturating at `usize::MAX`
pub fn element_count(shape: &[usize]) -> usize {
    shape
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .unwrap_or(usize::MAX)
}
