//! Property tests: decoded tables agree with the raw row-major stream

mod common;

use luts::binary::DecodeOptions;
use luts::lut::Lut;
use proptest::prelude::*;
use tempfile::tempdir;

/// Visit every multi-index of `shape` in row-major order
fn for_each_index(shape: &[usize], mut f: impl FnMut(&[usize])) {
    let total: usize = shape.iter().product();
    let mut index = vec![0usize; shape.len()];
    for _ in 0..total {
        f(&index);
        for axis in (0..shape.len()).rev() {
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Selecting every axis at once yields the value at the row-major offset
    #[test]
    fn test_full_selection_matches_flat_offset(
        shape in prop::collection::vec(1usize..4, 1..5),
        seed in any::<u32>(),
    ) {
        let names = ["tau", "alt", "raa", "vza", "sza"];
        let dims: Vec<common::DimSpec> = shape
            .iter()
            .enumerate()
            .map(|(axis, &n)| {
                let coords = (0..n).map(|i| axis as f64 * 100.0 + i as f64 * 0.5).collect();
                (names[axis], coords)
            })
            .collect();
        let count = common::record_count(&dims);
        let values: Vec<f32> = (0..count)
            .map(|i| (seed % 1000) as f32 + i as f32 * 0.25)
            .collect();

        let dir = tempdir().unwrap();
        let fmeta = common::write_lut(dir.path(), "refl_smac_VENUS_URBAN_aot_0.1_550", &dims, &values);
        let lut = Lut::open(&fmeta, "refl_550", &DecodeOptions::default()).unwrap();

        prop_assert_eq!(lut.dims_len(), shape.as_slice());
        prop_assert_eq!(lut.data().len(), count);

        let mut visited = 0usize;
        for_each_index(&shape, |index| {
            let labels: Vec<(&str, f64)> = index
                .iter()
                .zip(&dims)
                .map(|(&i, (name, coords))| (*name, coords[i]))
                .collect();
            let selected = lut.select(&labels).unwrap().as_scalar();
            let offset = lut.flat_offset(index).unwrap();
            assert_eq!(offset, visited);
            assert_eq!(selected, Some(values[offset] as f64));
            visited += 1;
        });
        prop_assert_eq!(visited, count);
    }

    /// Any payload shorter than the declared shape is rejected
    #[test]
    fn test_truncated_payload_rejected(
        shape in prop::collection::vec(1usize..4, 1..4),
        missing in 1usize..4,
    ) {
        let names = ["tau", "vza", "sza"];
        let dims: Vec<common::DimSpec> = shape
            .iter()
            .enumerate()
            .map(|(axis, &n)| (names[axis], (0..n).map(|i| i as f64).collect()))
            .collect();
        let count = common::record_count(&dims);
        let kept = count.saturating_sub(missing);
        let values = vec![1.0f32; kept];

        let dir = tempdir().unwrap();
        let fmeta = common::write_lut(dir.path(), "refl_smac_VENUS_URBAN_aot_0.1_550", &dims, &values);
        let result = Lut::open(&fmeta, "refl_550", &DecodeOptions::default());
        let is_size_mismatch = matches!(
            result,
            Err(luts::LutError::SizeMismatch { expected, actual, .. })
                if expected == count && actual == kept
        );
        prop_assert!(is_size_mismatch);
    }
}
