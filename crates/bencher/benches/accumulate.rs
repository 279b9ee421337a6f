use std::hint::black_box;
use bencher::{StreamShape, TestCase};
use bytes::Bytes;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_accumulate::chunk::Chunk;
use micro_accumulate::context::{RequestContext, ResponseContext};
use micro_accumulate::handler::StreamHandler;
use micro_accumulate::plugin::{init, Config};

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::small("few_small_chunks", StreamShape::new(64, 8)),
        TestCase::normal("many_small_chunks", StreamShape::new(64, 512)),
        TestCase::large("few_large_chunks", StreamShape::new(64 * 1024, 16)),
    ]
}

fn benchmark_accumulate_request(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("accumulate_request");

    for case in test_cases {
        let shape = *case.shape();
        group.throughput(Throughput::Bytes(shape.total_len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &shape, |b, shape| {
            let plugin = init(Config::default());
            let payload = Bytes::from(vec![b'a'; shape.chunk_len()]);
            b.iter_batched_ref(
                || (RequestContext::new(), ResponseContext::default()),
                |(req, resp)| {
                    for _ in 0..shape.chunk_count() {
                        plugin
                            .on_data(req, resp, Chunk::Bytes(payload.clone()))
                            .expect("fragment should be accepted");
                    }
                    let body = plugin.on_end(req, resp, None).expect("finalization should succeed");
                    black_box(body);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(accumulate, benchmark_accumulate_request);
criterion_main!(accumulate);
