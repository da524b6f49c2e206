// Single source of truth for all default values.

// --- Corpus ---
pub const DEFAULT_MANIFEST_FILE: &str = "corpus.manifest.json";
pub const DEFAULT_DOWNLOAD_ON_FIRST_USE: bool = true;
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";
pub const DEFAULT_EMBEDDING_MODEL: &str = "multilingual-e5-large";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1024;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_024;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// --- Retrieval ---
pub const DEFAULT_CANDIDATE_POOL: usize = 30;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_RERANKER: &str = "cross-encoder";

// --- Verification ---
pub const DEFAULT_REMOTE_ENABLED: bool = true;
pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://en.wiktionary.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "IdiomFinder/0.1 (https://github.com/chinese-enthusiasts/idiom-finder)";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CACHE_UNKNOWN: bool = true;

// --- Generation ---
pub const DEFAULT_GENERATION_PROVIDER: &str = "chat";
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.cerebras.ai/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-oss-120b";
pub const DEFAULT_GENERATION_API_KEY_ENV: &str = "CEREBRAS_API_KEY";
pub const DEFAULT_MAX_OUTPUT_TOKENS: usize = 1024;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
