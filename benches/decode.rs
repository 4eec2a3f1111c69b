use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use luts::binary::{BinaryDecoder, DecodeOptions};
use luts::collection::Collection;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// tau x alt x raa x vza x sza, as produced for one band
const SHAPES: [[usize; 5]; 3] = [[4, 2, 7, 7, 7], [8, 4, 13, 13, 13], [16, 4, 19, 19, 19]];

fn payload(count: usize) -> Vec<u8> {
    (0..count).flat_map(|i| (i as f32 * 1e-3).to_ne_bytes()).collect()
}

fn write_band(dir: &Path, band: u32, shape: &[usize]) {
    let names = ["tau", "alt", "raa", "vza", "sza"];
    let meta: String = names
        .iter()
        .zip(shape)
        .map(|(name, &n)| {
            let labels: Vec<String> = (0..n).map(|i| (i * 10).to_string()).collect();
            format!("{} {} \n", name, labels.join(" "))
        })
        .collect();
    let stem = format!("refl_smac_VENUS_CONTINENTAL_aot_0.50_{band}");
    fs::write(dir.join(format!("{stem}.txt")), meta).unwrap();
    fs::write(dir.join(stem), payload(shape.iter().product())).unwrap();
}

fn bench_decode_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_bytes");
    let options = DecodeOptions::default();

    for shape in SHAPES {
        let count: usize = shape.iter().product();
        let bytes = payload(count);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| BinaryDecoder::decode_bytes(black_box(bytes), &shape, &options).unwrap())
        });
    }
    group.finish();
}

fn bench_collection_load(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    for band in [412, 443, 490, 555, 620, 665, 702, 742, 782, 865, 910] {
        write_band(dir.path(), band, &SHAPES[1]);
    }

    c.bench_function("collection_load_11_bands", |b| {
        b.iter(|| Collection::new(black_box(dir.path()), Some("refl")).unwrap())
    });
}

criterion_group!(benches, bench_decode_bytes, bench_collection_load);
criterion_main!(benches);
