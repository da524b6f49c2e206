pub mod dictionary;
pub mod reference_set;
pub mod remote;

pub use dictionary::OfflineDictionary;
pub use reference_set::ReferenceSet;
pub use remote::WiktionaryClient;
