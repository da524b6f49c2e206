use std::collections::HashSet;
use std::sync::Arc;

use idiom_core::config::RetrievalConfig;
use idiom_core::errors::IdiomResult;
use idiom_core::traits::IReranker;
use idiom_core::IdiomRecord;
use idiom_corpus::CorpusIndex;
use idiom_embeddings::{EmbeddingEngine, HashedNgramProvider, PrefixConvention};
use idiom_retrieval::{rerank, LexicalReranker, RetrievalEngine};
use proptest::prelude::*;

struct Preset(Vec<f32>);

impl IReranker for Preset {
    fn score(&self, _query: &str, _candidates: &[&str]) -> IdiomResult<Vec<f32>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &str {
        "preset"
    }
}

fn golden_engine() -> RetrievalEngine {
    let encoder = Arc::new(
        EmbeddingEngine::with_provider(
            Box::new(HashedNgramProvider::new(128)),
            PrefixConvention::e5(),
            64,
            8,
        )
        .unwrap(),
    );
    let records = test_fixtures::golden_corpus()
        .iter()
        .map(|e| IdiomRecord::from_flat(e))
        .collect();
    let corpus = Arc::new(CorpusIndex::build(records, &encoder).unwrap());
    RetrievalEngine::new(
        corpus,
        encoder,
        Some(Box::new(LexicalReranker::new())),
        &RetrievalConfig::default(),
    )
}

proptest! {
    #[test]
    fn retrieve_count_and_uniqueness(query in "[a-z 画蛇添足一石二鸟]{0,40}", top_k in 0usize..24) {
        let engine = golden_engine();
        let results = engine.retrieve(&query, top_k).unwrap();
        prop_assert_eq!(results.len(), top_k.min(16));
        let unique: HashSet<&str> = results.iter().map(|r| r.idiom.as_str()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn rerank_is_a_permutation(scores in prop::collection::vec(-10.0f32..10.0, 0..20)) {
        let n = scores.len();
        let texts: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let ranked = rerank(&Preset(scores), "q", &refs, n).unwrap();
        let mut indices: Vec<usize> = ranked.iter().map(|r| r.input_index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn rerank_output_is_sorted(scores in prop::collection::vec(-10.0f32..10.0, 1..20), top_k in 1usize..25) {
        let n = scores.len();
        let texts: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let ranked = rerank(&Preset(scores), "q", &refs, top_k).unwrap();
        prop_assert_eq!(ranked.len(), top_k.min(n));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].input_index < pair[1].input_index);
            }
        }
    }
}
