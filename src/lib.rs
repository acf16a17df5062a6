//! The Tversky index: a tunable, optionally asymmetric similarity between two
//! finite collections of discrete items.
//!
//! ```text
//! S(A, B) = |A ∩ B| / (|A ∩ B| + α|A \ B| + β|B \ A|)
//! ```
//!
//! Inputs are either item lists or strings (compared per character, or per
//! bigram). Each input is reduced to its set of unique items before scoring.
//!
//! ```
//! use tversky_index::{tversky, tversky_str, TverskyConfig};
//!
//! let index = tversky(&[2, 5, 7, 9], &[3, 5, 7, 11], &TverskyConfig::default());
//! assert_eq!(index, 2.0 / 6.0);
//!
//! let dice = TverskyConfig::from_weights(0.5, 0.5).unwrap();
//! assert_eq!(tversky_str("Harry", "Hans", &dice), 0.5);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod sequence;
pub mod simulation;
pub mod similarity;

pub use config::{Tokenization, TverskyConfig, TverskyOptions};
pub use error::{Result, TverskyError};
pub use json::{score_json, score_json_weights, score_json_with_config};
pub use sequence::Sequence;
pub use similarity::{
    score, score_with_options, score_with_weights, set_overlap, tversky, tversky_ratio,
    tversky_str, SetOverlap,
};
