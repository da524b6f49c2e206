//! Criterion benchmarks for idiom-embeddings.
//!
//! - Hashed provider, single query (1024 dims)
//! - Engine encode with a warm query cache
//! - Engine encode_many over 256 passages

use criterion::{criterion_group, criterion_main, Criterion};

use idiom_core::traits::IEmbeddingProvider;
use idiom_embeddings::{EmbeddingEngine, HashedNgramProvider, PrefixConvention};

fn engine() -> EmbeddingEngine {
    EmbeddingEngine::with_provider(
        Box::new(HashedNgramProvider::new(1024)),
        PrefixConvention::e5(),
        1024,
        32,
    )
    .unwrap()
}

fn bench_hashed_embed(c: &mut Criterion) {
    let provider = HashedNgramProvider::new(1024);
    c.bench_function("hashed_embed_single_query", |bench| {
        bench.iter(|| provider.embed("a plan that collapses at the first obstacle 功亏一篑"))
    });
}

fn bench_cached_encode(c: &mut Criterion) {
    let engine = engine();
    engine.encode("warm query").unwrap();
    c.bench_function("engine_encode_cache_hit", |bench| {
        bench.iter(|| engine.encode("warm query"))
    });
}

fn bench_encode_many(c: &mut Criterion) {
    let engine = engine();
    let passages: Vec<String> = (0..256)
        .map(|i| format!("成语{i}: an idiom definition number {i}"))
        .collect();
    c.bench_function("engine_encode_many_256", |bench| {
        bench.iter(|| engine.encode_many(&passages))
    });
}

criterion_group!(
    benches,
    bench_hashed_embed,
    bench_cached_encode,
    bench_encode_many
);
criterion_main!(benches);
