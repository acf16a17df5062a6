//! The Tversky index itself.
//!
//! ```text
//! S(A, B) = |A ∩ B| / (|A ∩ B| + α|A \ B| + β|B \ A|)
//! ```
//!
//! With α = β = 1 this is the Tanimoto (Jaccard) coefficient, with
//! α = β = 0.5 it is Dice's coefficient. The symmetric variant replaces the
//! two complement terms with `β(α·min + (1 - α)·max)` over the complement sizes,
//! so the order of the arguments no longer matters.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::config::{TverskyConfig, TverskyOptions};
use crate::error::{Result, TverskyError};
use crate::sequence::{tokenize, Sequence};

/// Set sizes the index is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetOverlap {
    /// `|A ∩ B|`
    pub intersection: usize,
    /// `|A \ B|`
    pub first_only: usize,
    /// `|B \ A|`
    pub second_only: usize,
}

/// Unique elements of `items`, in order of first occurrence.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().unique().collect()
}

/// Reduces both inputs to sets and counts their intersection and relative complements.
pub fn set_overlap<T, I, J>(first: I, second: J) -> SetOverlap
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    let first = unique(first);
    let second = unique(second);
    let second_set: HashSet<&T> = second.iter().collect();
    let intersection = first.iter().filter(|item| second_set.contains(item)).count();
    trace!(
        first_unique = first.len(),
        second_unique = second.len(),
        "reduced sequences to sets"
    );
    SetOverlap {
        intersection,
        first_only: first.len() - intersection,
        second_only: second.len() - intersection,
    }
}

/// Applies the asymmetric or symmetric formula to precomputed set sizes.
///
/// Plain IEEE arithmetic: two empty sets give `0 / 0`, and an infinite
/// weight on an empty complement gives `inf * 0`, both NaN.
pub fn tversky_ratio(overlap: &SetOverlap, config: &TverskyConfig) -> f64 {
    let intersection = overlap.intersection as f64;
    let first_only = overlap.first_only as f64;
    let second_only = overlap.second_only as f64;

    let complement = if config.symmetric() {
        let min = first_only.min(second_only);
        let max = first_only.max(second_only);
        config.beta() * (config.alpha() * min + (1.0 - config.alpha()) * max)
    } else {
        config.alpha() * first_only + config.beta() * second_only
    };
    intersection / (intersection + complement)
}

/// Computes the Tversky index between two sequences of the same kind.
///
/// Strings are tokenized according to `config`; `ignore_case` and
/// `tokenization` have no effect on item lists.
pub fn score<T>(first: Sequence<'_, T>, second: Sequence<'_, T>, config: &TverskyConfig) -> Result<f64>
where
    T: Eq + Hash,
{
    let overlap = match (first, second) {
        (Sequence::Items(a), Sequence::Items(b)) => set_overlap(a.iter(), b.iter()),
        (Sequence::Text(a), Sequence::Text(b)) => set_overlap(
            tokenize(a, config.tokenization(), config.ignore_case()),
            tokenize(b, config.tokenization(), config.ignore_case()),
        ),
        (a, b) => {
            return Err(TverskyError::TypeMismatch {
                first: a.kind(),
                second: b.kind(),
            })
        }
    };
    let index = tversky_ratio(&overlap, config);
    debug!(
        intersection = overlap.intersection,
        first_only = overlap.first_only,
        second_only = overlap.second_only,
        alpha = config.alpha(),
        beta = config.beta(),
        symmetric = config.symmetric(),
        index,
        "computed tversky index"
    );
    Ok(index)
}

/// Named call form: `score(a, b, {alpha, beta, symmetric, ignoreCase})`.
pub fn score_with_options<T>(
    first: Sequence<'_, T>,
    second: Sequence<'_, T>,
    options: &TverskyOptions,
) -> Result<f64>
where
    T: Eq + Hash,
{
    check_same_kind(&first, &second)?;
    score(first, second, &TverskyConfig::from_options(options)?)
}

/// Positional call form: `score(a, b, alpha, beta)`, always asymmetric.
pub fn score_with_weights<T>(
    first: Sequence<'_, T>,
    second: Sequence<'_, T>,
    alpha: f64,
    beta: f64,
) -> Result<f64>
where
    T: Eq + Hash,
{
    check_same_kind(&first, &second)?;
    score(first, second, &TverskyConfig::from_weights(alpha, beta)?)
}

// Kind mismatches are reported before any option problem.
fn check_same_kind<T>(first: &Sequence<'_, T>, second: &Sequence<'_, T>) -> Result<()> {
    if first.kind() != second.kind() {
        return Err(TverskyError::TypeMismatch {
            first: first.kind(),
            second: second.kind(),
        });
    }
    Ok(())
}

/// Tversky index of two item lists.
pub fn tversky<T: Eq + Hash>(first: &[T], second: &[T], config: &TverskyConfig) -> f64 {
    tversky_ratio(&set_overlap(first.iter(), second.iter()), config)
}

/// Tversky index of two strings.
pub fn tversky_str(first: &str, second: &str, config: &TverskyConfig) -> f64 {
    let overlap = set_overlap(
        tokenize(first, config.tokenization(), config.ignore_case()),
        tokenize(second, config.tokenization(), config.ignore_case()),
    );
    tversky_ratio(&overlap, config)
}

// --------------------------------------------------
// Tests for the index computation
#[cfg(test)]
mod similarity_tests {
    use crate::config::{Tokenization, TverskyConfig, TverskyOptions};
    use crate::error::TverskyError;
    use crate::sequence::Sequence;
    use crate::similarity::{
        score, score_with_options, score_with_weights, set_overlap, tversky, tversky_ratio,
        tversky_str, unique, SetOverlap,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(vec![3, 1, 2], unique(vec![3, 1, 3, 2, 1]));
        assert_eq!(Vec::<i32>::new(), unique(Vec::<i32>::new()));
    }

    #[test]
    fn test_set_overlap() {
        let overlap = set_overlap(vec![2, 5, 7, 9, 9], vec![3, 5, 7, 11, 5]);
        assert_eq!(
            SetOverlap {
                intersection: 2,
                first_only: 2,
                second_only: 2
            },
            overlap
        );
    }

    #[test]
    fn test_default_weights() {
        let index = tversky(&[2, 5, 7, 9], &[3, 5, 7, 11], &TverskyConfig::default());
        assert_eq!(2.0 / 6.0, index);
        assert_eq!(0.3333333333333333, index);
    }

    #[test]
    fn test_dice_weights() {
        let config = TverskyConfig::from_weights(0.5, 0.5).unwrap();
        assert_eq!(0.5, tversky(&[2, 5, 7, 9], &[3, 5, 7, 11], &config));
    }

    #[test]
    fn test_zero_weights() {
        let config = TverskyConfig::from_weights(0.0, 0.0).unwrap();
        assert_eq!(1.0, tversky(&[2, 5, 7, 9], &[3, 5, 7, 11], &config));
        assert!(tversky(&[1, 2], &[3, 4], &config).is_nan());
    }

    #[test]
    fn test_infinite_alpha() {
        let config = TverskyConfig::from_weights(f64::INFINITY, 0.0).unwrap();
        assert_eq!(0.0, tversky(&[2, 5, 7, 9], &[3, 5, 7, 11], &config));
        // inf * 0 on the empty first complement
        assert!(tversky(&[5, 7], &[3, 5, 7, 11], &config).is_nan());
    }

    #[test]
    fn test_infinite_alpha_symmetric() {
        let config = TverskyConfig::default()
            .with_alpha(f64::INFINITY)
            .unwrap()
            .with_symmetric(true);
        assert!(tversky(&[1, 2, 3], &[1, 2, 3, 4], &config).is_nan());
    }

    #[test]
    fn test_empty_sets_are_nan() {
        assert!(tversky::<i32>(&[], &[], &TverskyConfig::default()).is_nan());
        assert!(tversky_str("", "", &TverskyConfig::default()).is_nan());
        assert_eq!(0.0, tversky(&[], &[1], &TverskyConfig::default()));
    }

    #[test]
    fn test_strings() {
        assert_eq!(2.0 / 6.0, tversky_str("Harry", "Hans", &TverskyConfig::default()));
        let config = TverskyConfig::from_weights(0.5, 0.5).unwrap();
        assert_eq!(0.5, tversky_str("Harry", "Hans", &config));
    }

    #[test]
    fn test_ignore_case() {
        let config = TverskyConfig::default();
        assert_eq!(0.0, tversky_str("ABC", "abc", &config));
        assert_eq!(1.0, tversky_str("ABC", "abc", &config.with_ignore_case(true)));
    }

    #[test]
    fn test_bigrams() {
        // {ni, ig, gh, ht} vs {na, ac, ch, ht}
        let config = TverskyConfig::default().with_tokenization(Tokenization::Bigrams);
        assert_eq!(1.0 / 7.0, tversky_str("night", "nacht", &config));
    }

    #[test]
    fn test_symmetric() {
        let config = TverskyConfig::from_weights(0.5, 0.5)
            .unwrap()
            .with_symmetric(true);
        let a = [2, 3, 5, 7, 9];
        let b = [2, 3, 5, 7, 11, 4];
        assert_eq!(4.0 / 4.75, tversky(&a, &b, &config));
        assert_eq!(0.8421052631578947, tversky(&b, &a, &config));
    }

    #[test]
    fn test_tversky_ratio_symmetric_alpha_one() {
        // alpha = 1 keeps only the smaller complement
        let config = TverskyConfig::default().with_symmetric(true);
        let overlap = SetOverlap {
            intersection: 3,
            first_only: 1,
            second_only: 5,
        };
        assert_eq!(3.0 / 4.0, tversky_ratio(&overlap, &config));
    }

    #[test]
    fn test_score_type_mismatch() {
        let items = vec!['a', 'b'];
        let result = score(Sequence::from(&items), Sequence::from("ab"), &TverskyConfig::default());
        assert_eq!(
            Err(TverskyError::TypeMismatch {
                first: "array",
                second: "string"
            }),
            result
        );
    }

    #[test]
    fn test_mismatch_reported_before_bad_weight() {
        let items = vec!['a'];
        let result = score_with_weights(Sequence::from("a"), Sequence::from(&items), -1.0, 1.0);
        assert!(matches!(result, Err(TverskyError::TypeMismatch { .. })));
    }

    #[test]
    fn test_score_with_options() {
        let options = TverskyOptions {
            alpha: Some(0.5),
            beta: Some(0.5),
            symmetric: Some(true),
            ..TverskyOptions::default()
        };
        let a = vec![2, 3, 5, 7, 9];
        let b = vec![2, 3, 5, 7, 11, 4];
        let index = score_with_options(Sequence::from(&a), Sequence::from(&b), &options).unwrap();
        assert_eq!(4.0 / 4.75, index);
    }

    #[test]
    fn test_score_with_weights_rejects_negative() {
        let result = score_with_weights(Sequence::from("abc"), Sequence::from("cde"), 0.3, -0.3);
        assert_eq!(
            Err(TverskyError::InvalidRange {
                argument: "beta",
                value: -0.3
            }),
            result
        );
    }
}
