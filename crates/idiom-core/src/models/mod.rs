mod answer;
mod existence;
mod idiom_record;
mod retrieved_idiom;
mod unit_vector;

pub use answer::IdiomAnswer;
pub use existence::{Existence, Verdict, VerificationTier};
pub use idiom_record::IdiomRecord;
pub use retrieved_idiom::RetrievedIdiom;
pub use unit_vector::UnitVector;
