mod embedding;
mod existence_oracle;
mod generation_oracle;
mod reranker;

pub use embedding::IEmbeddingProvider;
pub use existence_oracle::IExistenceOracle;
pub use generation_oracle::IGenerationOracle;
pub use reranker::IReranker;
