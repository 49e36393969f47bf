//! # OCR Config Generator Benchmarks
//!
//! | Stage | Input |
//! |-------|-------|
//! | Identity decoding | 4 to 31 nodes |
//! | Full generation (reference synthesizer) | 4 to 31 nodes, every plugin |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ocr_config_gen::{
    decode_identities, ConfigGenerationApi, ConfigGenerationService, GeneratorConfig,
    KeyLengthPolicy, ReferenceSynthesizer,
};
use ocr_tests::fixtures::random_request;

const COMMITTEE_SIZES: [usize; 4] = [4, 7, 16, 31];

fn bench_identity_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity-decoding");
    for n in COMMITTEE_SIZES {
        let request = random_request(1, n, "commit");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &request, |b, req| {
            b.iter(|| black_box(decode_identities(&req.nodes, KeyLengthPolicy::Strict)))
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let service =
        ConfigGenerationService::new(ReferenceSynthesizer::new(), GeneratorConfig::default());

    let mut group = c.benchmark_group("generation");
    for plugin in ["automation", "commit", "exec"] {
        for n in COMMITTEE_SIZES {
            let request = random_request(2, n, plugin);
            group.bench_with_input(BenchmarkId::new(plugin, n), &request, |b, req| {
                b.iter(|| black_box(service.generate(req)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_identity_decoding, bench_generation);
criterion_main!(benches);
