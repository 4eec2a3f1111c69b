use super::*;
use crate::error::LutError;
use std::fs;
use tempfile::tempdir;

const META: &str = "tau 0.0 0.5 \nalt 0 2 4 \nvza 0 30 \n";

fn write_payload(path: &Path, values: &[f32]) {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_open_builds_labeled_table() {
    let dir = tempdir().unwrap();
    let fmeta = dir.path().join("refl_smac_VENUS_CONTINENTAL_aot_0.50_450.txt");
    fs::write(&fmeta, META).unwrap();
    let values: Vec<f32> = (0..12).map(|i| i as f32).collect();
    write_payload(&binary_path_for(&fmeta), &values);

    let lut = Lut::open(&fmeta, "refl_450", &DecodeOptions::default()).unwrap();

    assert_eq!(lut.name(), "refl_450");
    assert_eq!(lut.fmeta(), fmeta.as_path());
    assert_eq!(
        lut.binary_path(),
        dir.path().join("refl_smac_VENUS_CONTINENTAL_aot_0.50_450")
    );
    assert_eq!(lut.dims(), vec!["tau", "alt", "vza"]);
    assert_eq!(lut.dims_len(), &[2, 3, 2]);

    let coords: Vec<(&str, &[f64])> = lut.coords().collect();
    assert_eq!(coords.len(), lut.dims().len());
    for ((name, coord), &len) in coords.iter().zip(lut.dims_len()) {
        assert_eq!(coord.len(), len, "coords of {name}");
    }
    assert_eq!(lut.coord("alt"), Some(&[0.0, 2.0, 4.0][..]));

    // tau=0.5 (1), alt=4 (2), vza=30 (1) -> 1*6 + 2*2 + 1
    let v = lut
        .select(&[("tau", 0.5), ("alt", 4.0), ("vza", 30.0)])
        .unwrap()
        .as_scalar();
    assert_eq!(v, Some(11.0));
    assert_eq!(lut.flat_offset(&[1, 2, 1]), Some(11));

    let text = lut.to_string();
    assert!(text.starts_with("refl_450 [2, 3, 2]"));
    assert!(text.contains("alt (3): 0 .. 4"));
}

#[test]
fn test_open_propagates_size_mismatch_with_payload_path() {
    let dir = tempdir().unwrap();
    let fmeta = dir.path().join("refl_smac_VENUS_CONTINENTAL_aot_0.50_450.txt");
    fs::write(&fmeta, META).unwrap();
    let payload = binary_path_for(&fmeta);
    write_payload(&payload, &[0.0; 10]);

    match Lut::open(&fmeta, "refl_450", &DecodeOptions::default()) {
        Err(LutError::SizeMismatch {
            path,
            expected,
            actual,
        }) => {
            assert_eq!(path, payload);
            assert_eq!(expected, 12);
            assert_eq!(actual, 10);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_open_missing_metadata() {
    let dir = tempdir().unwrap();
    let fmeta = dir.path().join("refl_smac_VENUS_CONTINENTAL_aot_0.50_450.txt");
    write_payload(&binary_path_for(&fmeta), &[0.0; 12]);

    assert!(matches!(
        Lut::open(&fmeta, "refl_450", &DecodeOptions::default()),
        Err(LutError::MissingMetadataFile { .. })
    ));
}
