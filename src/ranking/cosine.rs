use crate::core::{EncodedHotel, UserPreference};
use crate::error::{RecommenderError, Result};
use crate::ranking::{RankedCandidate, Ranker};

/// Cosine similarity, 0.0 when either vector is all zeros.
///
/// Both vectors are divided by their largest magnitude first, so very large
/// or very small weights neither overflow nor underflow the norms.
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> f64 {
    let scale_u = max_abs(u);
    let scale_v = max_abs(v);

    if scale_u == 0.0 || scale_v == 0.0 {
        return 0.0;
    }

    let dot: f64 = u.iter().zip(v.iter()).map(|(a, b)| (a / scale_u) * (b / scale_v)).sum();
    let norm_u = u.iter().map(|a| (a / scale_u).powi(2)).sum::<f64>().sqrt();
    let norm_v = v.iter().map(|b| (b / scale_v).powi(2)).sum::<f64>().sqrt();

    dot / (norm_u * norm_v)
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
}

/// Ranks hotels by cosine similarity between preference and amenity vectors
pub struct CosineRanker;

impl CosineRanker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CosineRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for CosineRanker {
    fn rank(&self, preference: &UserPreference, candidates: &[EncodedHotel]) -> Result<Vec<RankedCandidate>> {
        let u = preference.as_slice();

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .map(|hotel| {
                if hotel.vector.len() != u.len() {
                    return Err(RecommenderError::DimensionMismatch {
                        expected: u.len(),
                        got: hotel.vector.len(),
                    });
                }
                let score = cosine_similarity(u, &hotel.vector);
                Ok(RankedCandidate::new(hotel.clone(), score))
            })
            .collect::<Result<_>>()?;

        // Stable sort: ties keep candidate order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked)
    }

    fn name(&self) -> &str {
        "cosine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NormalizedHotel;

    fn encoded(name: &str, vector: &[f64]) -> EncodedHotel {
        EncodedHotel {
            hotel: NormalizedHotel {
                hotel_name: name.to_string(),
                city: "Paris".to_string(),
                tokens: Default::default(),
                rating: 4.0,
                price: 100.0,
            },
            vector: vector.to_vec(),
        }
    }

    fn names(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|r| r.hotel.hotel.hotel_name.as_str()).collect()
    }

    #[test]
    fn test_cosine_basics() {
        assert!((cosine_similarity(&[1.0, 1.0], &[1.0, 1.0]) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        let half = cosine_similarity(&[1.0, 1.0, 0.0, 0.0], &[1.0, 0.0, 1.0, 0.0]);
        assert!((half - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_rank_descending() {
        let ranker = CosineRanker::new();
        let pref = UserPreference::from_toggles(&[true, true, true]);
        let candidates = vec![
            encoded("One", &[1.0, 0.0, 0.0]),
            encoded("None", &[0.0, 0.0, 0.0]),
            encoded("All", &[1.0, 1.0, 1.0]),
            encoded("Two", &[1.0, 1.0, 0.0]),
        ];

        let ranked = ranker.rank(&pref, &candidates).unwrap();
        assert_eq!(names(&ranked), vec!["All", "Two", "One", "None"]);
        assert_eq!(ranked[3].score, 0.0);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranker = CosineRanker::new();
        let pref = UserPreference::from_toggles(&[true, false]);
        let candidates = vec![
            encoded("B", &[1.0, 0.0]),
            encoded("A", &[1.0, 0.0]),
            encoded("C", &[0.0, 1.0]),
            encoded("D", &[1.0, 0.0]),
        ];

        let ranked = ranker.rank(&pref, &candidates).unwrap();
        assert_eq!(names(&ranked), vec!["B", "A", "D", "C"]);
    }

    #[test]
    fn test_scaling_preference_keeps_order() {
        let ranker = CosineRanker::new();
        let pref = UserPreference::from_weights(vec![1.0, 0.0, 1.0, 1.0]).unwrap();
        let candidates = vec![
            encoded("H1", &[1.0, 1.0, 0.0, 0.0]),
            encoded("H2", &[1.0, 0.0, 1.0, 1.0]),
            encoded("H3", &[0.0, 1.0, 0.0, 0.0]),
            encoded("H4", &[0.0, 0.0, 1.0, 0.0]),
        ];

        let base = ranker.rank(&pref, &candidates).unwrap();
        for factor in [0.5, 2.0, 17.0] {
            let scaled = ranker.rank(&pref.scaled(factor).unwrap(), &candidates).unwrap();
            assert_eq!(names(&scaled), names(&base));
        }
    }

    #[test]
    fn test_extreme_scales_keep_order() {
        let ranker = CosineRanker::new();
        let pref = UserPreference::from_toggles(&[true, false]);
        let candidates = vec![encoded("B", &[0.0, 1.0]), encoded("A", &[1.0, 0.0])];

        for factor in [1.0, 1e200, 1e-200] {
            let ranked = ranker.rank(&pref.scaled(factor).unwrap(), &candidates).unwrap();
            assert_eq!(names(&ranked), vec!["A", "B"], "factor {}", factor);
            assert_eq!(ranked[0].score, 1.0);
            assert_eq!(ranked[1].score, 0.0);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let ranker = CosineRanker::new();
        let pref = UserPreference::from_toggles(&[true, false, true]);
        let candidates = vec![encoded("Short", &[1.0, 0.0])];

        let err = ranker.rank(&pref, &candidates).unwrap_err();
        assert!(matches!(err, RecommenderError::DimensionMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn test_name() {
        assert_eq!(CosineRanker::new().name(), "cosine");
    }
}
