//! Property tests for UnitVector and phonetic annotation.

use idiom_core::phonetic;
use idiom_core::UnitVector;
use proptest::prelude::*;

fn raw_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, 1..64)
}

fn common_han() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '举', '棋', '不', '定', '风', '画', '蛇', '添', '足', '水', '滴', '石', '穿', '守', '株', '待', '兔',
    ])
}

proptest! {
    #[test]
    fn normalized_vectors_have_unit_or_zero_norm(raw in raw_vector()) {
        let v = UnitVector::normalize(raw).unwrap();
        let norm = v.norm();
        prop_assert!((norm - 1.0).abs() < 1e-4 || norm == 0.0);
    }

    #[test]
    fn large_magnitudes_still_normalize(raw in prop::collection::vec(-1.0e38f32..1.0e38, 1..64)) {
        let norm = UnitVector::normalize(raw).unwrap().norm();
        prop_assert!((norm - 1.0).abs() < 1e-4 || norm == 0.0);
    }

    #[test]
    fn cosine_is_bounded_and_symmetric(pair in (1usize..32).prop_flat_map(|n| {
        (prop::collection::vec(-10.0f32..10.0, n), prop::collection::vec(-10.0f32..10.0, n))
    })) {
        let a = UnitVector::normalize(pair.0).unwrap();
        let b = UnitVector::normalize(pair.1).unwrap();
        let ab = a.cosine(&b);
        prop_assert!((-1.0..=1.0).contains(&ab));
        prop_assert!((ab - b.cosine(&a)).abs() < 1e-5);
    }

    #[test]
    fn dimensions_are_preserved(raw in raw_vector()) {
        let len = raw.len();
        prop_assert_eq!(UnitVector::normalize(raw).unwrap().dimensions(), len);
    }

    #[test]
    fn one_syllable_per_han_character(chars in prop::collection::vec(common_han(), 1..8)) {
        let text: String = chars.into_iter().collect();
        let annotated = phonetic::annotate(&text);
        prop_assert_eq!(annotated.split(' ').count(), text.chars().count());
    }
}
