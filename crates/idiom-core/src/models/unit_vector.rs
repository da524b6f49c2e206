use crate::errors::EmbeddingError;

/// An L2-normalized embedding.
///
/// The only way to obtain one is [`UnitVector::normalize`], so every vector
/// that reaches similarity scoring shares the same normalization convention
/// and cosine similarity reduces to a dot product. An input with no energy
/// stays the zero vector and scores 0 against everything.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitVector(Vec<f32>);

impl UnitVector {
    /// L2-normalize a raw embedding.
    ///
    /// # Errors
    /// Returns `EmbeddingError::NonFinite` if any component is NaN or infinite.
    pub fn normalize(mut raw: Vec<f32>) -> Result<Self, EmbeddingError> {
        if let Some(index) = raw.iter().position(|x| !x.is_finite()) {
            return Err(EmbeddingError::NonFinite { index });
        }
        let norm = l2_norm(&raw);
        if norm > 0.0 {
            for v in &mut raw {
                *v = (f64::from(*v) / norm) as f32;
            }
        }
        Ok(Self(raw))
    }

    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Euclidean norm; 1.0 or 0.0 by construction, up to rounding.
    pub fn norm(&self) -> f32 {
        l2_norm(&self.0) as f32
    }

    /// Cosine similarity with another unit vector, in `[-1, 1]`.
    ///
    /// Callers must check dimensions first; mismatched lengths are a bug.
    pub fn cosine(&self, other: &UnitVector) -> f32 {
        debug_assert_eq!(self.0.len(), other.0.len());
        let dot: f32 = self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum();
        dot.clamp(-1.0, 1.0)
    }
}

// f64 accumulation: squares of large finite f32 components overflow f32.
fn l2_norm(values: &[f32]) -> f64 {
    values
        .iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_unit_length() {
        let v = UnitVector::normalize(vec![3.0, 4.0]).unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.as_slice()[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_stays_zero() {
        let v = UnitVector::normalize(vec![0.0; 4]).unwrap();
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn large_components_do_not_overflow() {
        let v = UnitVector::normalize(vec![3.0e30, 4.0e30]).unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.as_slice()[1] - 0.8).abs() < 1e-6);

        let max = UnitVector::normalize(vec![f32::MAX, f32::MAX]).unwrap();
        assert!((max.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tiny_components_still_normalize() {
        let v = UnitVector::normalize(vec![1e-30, 0.0]).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn rejects_nan() {
        let err = UnitVector::normalize(vec![1.0, f32::NAN]).unwrap_err();
        assert!(matches!(err, EmbeddingError::NonFinite { index: 1 }));
    }

    #[test]
    fn cosine_of_identical_is_one() {
        let v = UnitVector::normalize(vec![1.0, 2.0, 3.0]).unwrap();
        assert!((v.cosine(&v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_opposite_is_minus_one() {
        let a = UnitVector::normalize(vec![1.0, 0.0]).unwrap();
        let b = UnitVector::normalize(vec![-2.0, 0.0]).unwrap();
        assert!((a.cosine(&b) + 1.0).abs() < 1e-6);
    }
}
