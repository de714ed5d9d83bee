mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use geojson_utils::decode_feature_collection;
use utils::make_feature_collection;

pub fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_feature_collection");

    for count in [10, 100, 1000].iter() {
        let document = make_feature_collection(*count, 128, 7);
        println!("Benchmarking {} features, {} bytes", count, document.len());
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &document, |b, doc| {
            b.iter(|| black_box(decode_feature_collection(doc.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
