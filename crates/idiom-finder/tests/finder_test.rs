//! Facade wiring: builder, config-driven construction, both strategies.

use std::sync::Arc;

use idiom_core::config::{IdiomConfig, RetrievalConfig};
use idiom_core::errors::{ConfigError, IdiomError, RetrievalError};
use idiom_core::IdiomRecord;
use idiom_corpus::CorpusIndex;
use idiom_embeddings::{EmbeddingEngine, HashedNgramProvider, PrefixConvention};
use idiom_finder::{Answer, IdiomFinder, Strategy};
use idiom_generation::MockOracle;
use idiom_retrieval::{LexicalReranker, RetrievalEngine};
use idiom_verification::{OfflineDictionary, ReferenceSet, VerificationCache, VerificationChain};

const DIMS: usize = 256;

fn encoder() -> Arc<EmbeddingEngine> {
    Arc::new(
        EmbeddingEngine::with_provider(
            Box::new(HashedNgramProvider::new(DIMS)),
            PrefixConvention::e5(),
            64,
            8,
        )
        .unwrap(),
    )
}

fn golden_records() -> Vec<IdiomRecord> {
    test_fixtures::golden_corpus()
        .iter()
        .map(|e| IdiomRecord::from_flat(e))
        .collect()
}

fn golden_retrieval() -> RetrievalEngine {
    let encoder = encoder();
    let corpus = Arc::new(CorpusIndex::build(golden_records(), &encoder).unwrap());
    RetrievalEngine::new(
        corpus,
        encoder,
        Some(Box::new(LexicalReranker::new())),
        &RetrievalConfig::default(),
    )
}

fn reference_chain() -> Arc<VerificationChain> {
    Arc::new(VerificationChain::new(
        ReferenceSet::from_iter(test_fixtures::golden_reference_set()),
        OfflineDictionary::empty(),
        None,
        VerificationCache::unbounded(),
    ))
}

fn fixture(path: &str) -> Option<String> {
    Some(test_fixtures::fixture_path(path).display().to_string())
}

#[test]
fn builder_requires_an_oracle() {
    let err = IdiomFinder::builder().build().err().unwrap();
    assert!(matches!(
        err,
        IdiomError::ConfigError(ConfigError::MissingSetting { .. })
    ));
}

#[test]
fn retrieve_without_corpus_is_no_corpus() {
    let finder = IdiomFinder::builder()
        .oracle(Box::new(MockOracle::new()))
        .build()
        .unwrap();
    assert!(!finder.has_corpus());
    let err = finder.retrieve("anything", 3).err().unwrap();
    assert!(matches!(err, IdiomError::RetrievalError(RetrievalError::NoCorpus)));
    assert!(finder.answer("anything", Strategy::Retrieval).is_err());
}

#[test]
fn generation_strategy_uses_the_shared_chain() {
    let finder = IdiomFinder::builder()
        .oracle(Box::new(MockOracle::new()))
        .verification_chain(reference_chain())
        .max_attempts(1)
        .build()
        .unwrap();

    let answer = finder.answer("I found the root cause", Strategy::Generation).unwrap();
    assert_eq!(answer.top_idiom(), Some("对症下药"));
    assert!(finder.verify("对症下药"));
    assert!(!finder.verify("临危不乱"));
}

#[test]
fn without_a_chain_the_bundled_tiers_verify() {
    let finder = IdiomFinder::builder()
        .oracle(Box::new(MockOracle::new()))
        .build()
        .unwrap();
    assert_eq!(finder.find_idiom("anything", 2).idiom, "对症下药");
    assert!(!finder.verify("完全不存在的成语"));
}

#[test]
fn empty_chain_never_verifies() {
    let finder = IdiomFinder::builder()
        .oracle(Box::new(MockOracle::new()))
        .verification_chain(Arc::new(VerificationChain::new(
            ReferenceSet::empty(),
            OfflineDictionary::empty(),
            None,
            VerificationCache::unbounded(),
        )))
        .build()
        .unwrap();
    assert!(finder.find_idiom("anything", 2).is_sentinel());
}

#[test]
fn retrieval_strategy_returns_default_top_k() {
    let finder = IdiomFinder::builder()
        .oracle(Box::new(MockOracle::new()))
        .retrieval(golden_retrieval())
        .build()
        .unwrap();
    match finder.answer("overdoing a fix", Strategy::Retrieval).unwrap() {
        Answer::Retrieval { idioms } => {
            assert_eq!(idioms.len(), RetrievalConfig::default().default_top_k);
        }
        other => panic!("unexpected answer: {other:?}"),
    }
}

#[test]
fn retrieve_verified_drops_unattested_idioms() {
    let finder = IdiomFinder::builder()
        .oracle(Box::new(MockOracle::new()))
        .retrieval(golden_retrieval())
        .verification_chain(reference_chain())
        .build()
        .unwrap();

    let all = finder.retrieve("staying calm in danger", 16).unwrap();
    assert_eq!(all.len(), 16);
    let verified = finder.retrieve_verified("staying calm in danger", 16).unwrap();
    assert_eq!(verified.len(), 14);
    assert!(verified.iter().all(|r| r.idiom != "临危不乱" && r.idiom != "举棋不定"));
}

#[test]
fn from_config_wires_every_component() {
    let dir = tempfile::tempdir().unwrap();
    CorpusIndex::build(golden_records(), &encoder())
        .unwrap()
        .save(dir.path())
        .unwrap();

    let mut config = IdiomConfig::default();
    config.corpus.artifact_dir = Some(dir.path().display().to_string());
    config.corpus.download_on_first_use = false;
    config.embedding.provider = "hashed".to_string();
    config.embedding.dimensions = DIMS;
    config.retrieval.reranker = "lexical".to_string();
    config.verification.reference_set_path = fixture("golden/verification/reference_set.json");
    config.verification.dictionary_path = fixture("golden/verification/cedict_sample.u8");
    config.verification.remote_enabled = false;
    config.generation.provider = "mock".to_string();

    let finder = IdiomFinder::from_config(&config).unwrap();
    assert!(finder.has_corpus());

    let results = finder.retrieve("overdoing a fix", 3).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| !r.pinyin.is_empty()));

    assert!(finder.verify("举棋不定"));
    assert!(!finder.verify("完全不存在的成语"));
    assert_eq!(finder.find_idiom("I found the root cause", 1).idiom, "对症下药");
}

#[test]
fn from_config_without_corpus_still_generates() {
    let mut config = IdiomConfig::default();
    config.verification.reference_set_path = fixture("golden/verification/reference_set.json");
    config.verification.remote_enabled = false;
    config.generation.provider = "mock".to_string();

    let finder = IdiomFinder::from_config(&config).unwrap();
    assert!(!finder.has_corpus());
    let answer = finder.answer("I found the root cause", Strategy::Generation).unwrap();
    assert_eq!(answer.top_idiom(), Some("对症下药"));
}

#[test]
fn from_config_rejects_encoder_that_disagrees_with_corpus() {
    let dir = tempfile::tempdir().unwrap();
    CorpusIndex::build(golden_records(), &encoder())
        .unwrap()
        .save(dir.path())
        .unwrap();

    let mut config = IdiomConfig::default();
    config.corpus.artifact_dir = Some(dir.path().display().to_string());
    config.corpus.download_on_first_use = false;
    config.embedding.provider = "hashed".to_string();
    config.embedding.dimensions = 128;
    config.verification.remote_enabled = false;
    config.generation.provider = "mock".to_string();

    assert!(IdiomFinder::from_config(&config).is_err());
}
