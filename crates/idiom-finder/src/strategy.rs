use idiom_core::models::RetrievedIdiom;
use idiom_core::IdiomAnswer;
use serde::{Deserialize, Serialize};

/// Which path answers a situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Embedding search over the corpus, then rerank.
    Retrieval,
    /// Generate-then-verify loop around the oracle.
    Generation,
}

/// Result of [`crate::IdiomFinder::answer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Answer {
    Retrieval { idioms: Vec<RetrievedIdiom> },
    Generation { answer: IdiomAnswer },
}

impl Answer {
    /// Best idiom, if any. The sentinel counts as no idiom.
    pub fn top_idiom(&self) -> Option<&str> {
        match self {
            Answer::Retrieval { idioms } => idioms.first().map(|r| r.idiom.as_str()),
            Answer::Generation { answer } if answer.is_sentinel() => None,
            Answer::Generation { answer } => Some(answer.idiom.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_has_no_top_idiom() {
        let answer = Answer::Generation {
            answer: IdiomAnswer::sentinel(),
        };
        assert_eq!(answer.top_idiom(), None);
        let answer = Answer::Generation {
            answer: IdiomAnswer::new("对症下药", "duì zhèng xià yào"),
        };
        assert_eq!(answer.top_idiom(), Some("对症下药"));
    }

    #[test]
    fn empty_retrieval_has_no_top_idiom() {
        assert_eq!(Answer::Retrieval { idioms: vec![] }.top_idiom(), None);
    }

    #[test]
    fn strategy_names() {
        let s: Strategy = serde_json::from_str("\"retrieval\"").unwrap();
        assert_eq!(s, Strategy::Retrieval);
        assert_eq!(serde_json::to_string(&Strategy::Generation).unwrap(), "\"generation\"");
    }
}
