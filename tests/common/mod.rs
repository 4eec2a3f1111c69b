//! Fixture writer shared by the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Dimension name and coordinate labels
pub type DimSpec = (&'static str, Vec<f64>);

/// Write a metadata file and its float32 payload; returns the metadata path
///
/// The metadata lines keep the trailing space the simulation chain writes.
pub fn write_lut(dir: &Path, stem: &str, dims: &[DimSpec], values: &[f32]) -> PathBuf {
    let meta: String = dims
        .iter()
        .map(|(name, coords)| {
            let labels: Vec<String> = coords.iter().map(|c| c.to_string()).collect();
            format!("{} {} \n", name, labels.join(" "))
        })
        .collect();
    let fmeta = dir.join(format!("{stem}.txt"));
    fs::write(&fmeta, meta).unwrap();

    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    fs::write(dir.join(stem), bytes).unwrap();
    fmeta
}

/// tau(3) x alt(2) x raa(2) x vza(3) x sza(2)
pub fn geometry_dims() -> Vec<DimSpec> {
    vec![
        ("tau", vec![0.0, 0.2, 0.8]),
        ("alt", vec![0.0, 2.0]),
        ("raa", vec![0.0, 180.0]),
        ("vza", vec![0.0, 30.0, 60.0]),
        ("sza", vec![20.0, 40.0]),
    ]
}

/// Product of the dimension sizes
pub fn record_count(dims: &[DimSpec]) -> usize {
    dims.iter().map(|(_, c)| c.len()).product()
}
