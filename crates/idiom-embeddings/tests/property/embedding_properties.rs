use idiom_embeddings::{EmbeddingEngine, HashedNgramProvider, PrefixConvention};
use proptest::prelude::*;

fn engine() -> EmbeddingEngine {
    EmbeddingEngine::with_provider(
        Box::new(HashedNgramProvider::new(128)),
        PrefixConvention::e5(),
        64,
        16,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn encoded_vectors_are_unit_or_zero(s in ".{0,80}") {
        let v = engine().encode(&s).unwrap();
        let norm = v.norm();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4, "norm {}", norm);
    }

    #[test]
    fn encoding_is_deterministic(s in "[a-z 画蛇添足对症下药]{0,40}") {
        let a = engine().encode(&s).unwrap();
        let b = engine().encode(&s).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn self_similarity_is_maximal(s in "[a-z]{2,10}( [a-z]{2,10}){0,4}") {
        let e = engine();
        let v = e.encode(&s).unwrap();
        prop_assert!((v.cosine(&v) - 1.0).abs() < 1e-4);
    }
}
