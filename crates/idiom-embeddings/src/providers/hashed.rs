//! Hashed n-gram provider.
//!
//! Deterministic dense vectors from hashed term frequencies. Latin-script
//! words become whole-word terms; Han text becomes character unigrams and
//! bigrams, since Chinese has no whitespace to split on. No model files,
//! no network.

use std::collections::HashMap;

use idiom_core::errors::IdiomResult;
use idiom_core::traits::IEmbeddingProvider;

/// Model identifier recorded in manifests built with this provider.
pub const HASHED_MODEL_NAME: &str = "hashed-ngram-v1";

/// Hashed n-gram embedding provider.
pub struct HashedNgramProvider {
    dimensions: usize,
}

impl HashedNgramProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn term_vector(&self, text: &str) -> Vec<f32> {
        let terms = terms(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for t in &terms {
            *tf.entry(t.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in tf {
            // Longer terms carry more signal than short function words.
            let idf = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::hash_term(term, self.dimensions)] += (count / total) * idf;
        }
        vec
    }
}

/// Whether `c` is a CJK unified ideograph.
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{F900}'..='\u{FAFF}')
}

/// Split text into lowercase words (2+ chars) and Han unigrams/bigrams.
pub fn terms(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut word = String::new();
    let mut prev_han: Option<char> = None;

    let flush = |word: &mut String, out: &mut Vec<String>| {
        if word.chars().count() >= 2 {
            out.push(word.to_lowercase());
        }
        word.clear();
    };

    for c in text.chars() {
        if is_han(c) {
            flush(&mut word, &mut out);
            out.push(c.to_string());
            if let Some(p) = prev_han {
                out.push(format!("{p}{c}"));
            }
            prev_han = Some(c);
        } else if c.is_alphanumeric() || c == '\'' {
            prev_han = None;
            word.push(c);
        } else {
            prev_han = None;
            flush(&mut word, &mut out);
        }
    }
    flush(&mut word, &mut out);
    out
}

impl IEmbeddingProvider for HashedNgramProvider {
    fn embed(&self, text: &str) -> IdiomResult<Vec<f32>> {
        Ok(self.term_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> IdiomResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.term_vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        HASHED_MODEL_NAME
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        dot / (na * nb)
    }

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashedNgramProvider::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn han_text_yields_unigrams_and_bigrams() {
        assert_eq!(terms("画蛇添"), vec!["画", "蛇", "画蛇", "添", "蛇添"]);
    }

    #[test]
    fn mixed_text_splits_scripts() {
        assert_eq!(
            terms("对症: Right medicine a"),
            vec!["对", "症", "对症", "right", "medicine"]
        );
    }

    #[test]
    fn deterministic() {
        let p = HashedNgramProvider::new(256);
        assert_eq!(p.embed("欲速则不达").unwrap(), p.embed("欲速则不达").unwrap());
    }

    #[test]
    fn shared_characters_raise_similarity() {
        let p = HashedNgramProvider::new(1024);
        let a = p.embed("画蛇添足").unwrap();
        let b = p.embed("画蛇").unwrap();
        let c = p.embed("对症下药").unwrap();
        assert!(cosine(&a, &b) > cosine(&a, &c));
    }
}
