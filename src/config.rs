//! Tuning weights and mode flags for a single Tversky index computation.
//!
//! Both call forms, the named [`TverskyOptions`] record and the positional
//! `(alpha, beta)` shorthand, end up in one validated [`TverskyConfig`].

use std::{fmt, str::FromStr};

use serde_json::{Map, Value};

use crate::error::{Result, TverskyError};

pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 1.0;

/// How a string is turned into a sequence of comparable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenization {
    /// One item per character.
    #[default]
    Chars,
    /// One item per overlapping 2-character window.
    Bigrams,
}

impl FromStr for Tokenization {
    type Err = TverskyError;

    fn from_str(input: &str) -> Result<Tokenization> {
        match input {
            "chars" => Ok(Tokenization::Chars),
            "bigrams" => Ok(Tokenization::Bigrams),
            _ => Err(TverskyError::InvalidType {
                argument: "tokenization",
                expected: "one of `chars` or `bigrams`",
                value: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Tokenization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tokenization::Chars => "chars",
            Tokenization::Bigrams => "bigrams",
        };
        write!(f, "{}", name)
    }
}

/// The named-option call form. `None` means "use the default"; an explicit
/// `Some(0.0)` is a real weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TverskyOptions {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub symmetric: Option<bool>,
    pub ignore_case: Option<bool>,
    pub tokenization: Option<Tokenization>,
}

impl TverskyOptions {
    /// Reads an options record from an untyped JSON value.
    ///
    /// Checks run in a fixed order (record shape, `alpha`, `beta`, `symmetric`,
    /// `ignoreCase`, `tokenization`) and the first failure is returned.
    /// Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<TverskyOptions> {
        let record = match value {
            Value::Object(record) => record,
            other => {
                return Err(TverskyError::InvalidConfig {
                    value: other.to_string(),
                })
            }
        };
        let options = TverskyOptions {
            alpha: weight_field(record, "alpha")?,
            beta: weight_field(record, "beta")?,
            symmetric: bool_field(record, "symmetric")?,
            ignore_case: bool_field(record, "ignoreCase")?,
            tokenization: match record.get("tokenization") {
                None => None,
                Some(Value::String(name)) => Some(name.parse()?),
                Some(other) => {
                    return Err(TverskyError::InvalidType {
                        argument: "tokenization",
                        expected: "one of `chars` or `bigrams`",
                        value: other.to_string(),
                    })
                }
            },
        };
        Ok(options)
    }
}

fn weight_field(record: &Map<String, Value>, name: &'static str) -> Result<Option<f64>> {
    match record.get(name) {
        None => Ok(None),
        Some(value) => weight_from_value(name, value).map(Some),
    }
}

fn bool_field(record: &Map<String, Value>, name: &'static str) -> Result<Option<bool>> {
    match record.get(name) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(TverskyError::InvalidType {
            argument: name,
            expected: "a boolean",
            value: other.to_string(),
        }),
    }
}

/// Extracts and validates a tuning weight from an untyped JSON value.
pub(crate) fn weight_from_value(name: &'static str, value: &Value) -> Result<f64> {
    match value.as_f64() {
        Some(weight) => validate_weight(name, weight),
        None => Err(TverskyError::InvalidType {
            argument: name,
            expected: "a nonnegative number",
            value: value.to_string(),
        }),
    }
}

/// The shared weight check behind every call form: NaN is not a number,
/// negatives are out of range, `+inf` is allowed.
pub fn validate_weight(name: &'static str, weight: f64) -> Result<f64> {
    if weight.is_nan() {
        return Err(TverskyError::InvalidType {
            argument: name,
            expected: "a nonnegative number",
            value: weight.to_string(),
        });
    }
    if weight < 0.0 {
        return Err(TverskyError::InvalidRange {
            argument: name,
            value: weight,
        });
    }
    Ok(weight)
}

/// A validated configuration. Construct it through [`TverskyConfig::from_options`],
/// [`TverskyConfig::from_weights`] or the `with_*` builders; every path
/// re-checks the weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TverskyConfig {
    alpha: f64,
    beta: f64,
    symmetric: bool,
    ignore_case: bool,
    tokenization: Tokenization,
}

impl Default for TverskyConfig {
    fn default() -> Self {
        TverskyConfig {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            symmetric: false,
            ignore_case: false,
            tokenization: Tokenization::Chars,
        }
    }
}

impl TverskyConfig {
    /// Named call form.
    pub fn from_options(options: &TverskyOptions) -> Result<TverskyConfig> {
        let defaults = TverskyConfig::default();
        Ok(TverskyConfig {
            alpha: validate_weight("alpha", options.alpha.unwrap_or(defaults.alpha))?,
            beta: validate_weight("beta", options.beta.unwrap_or(defaults.beta))?,
            symmetric: options.symmetric.unwrap_or(defaults.symmetric),
            ignore_case: options.ignore_case.unwrap_or(defaults.ignore_case),
            tokenization: options.tokenization.unwrap_or(defaults.tokenization),
        })
    }

    /// Positional call form, equivalent to `{alpha, beta}` with `symmetric = false`.
    pub fn from_weights(alpha: f64, beta: f64) -> Result<TverskyConfig> {
        TverskyConfig::from_options(&TverskyOptions {
            alpha: Some(alpha),
            beta: Some(beta),
            ..TverskyOptions::default()
        })
    }

    pub fn with_alpha(self, alpha: f64) -> Result<TverskyConfig> {
        Ok(TverskyConfig {
            alpha: validate_weight("alpha", alpha)?,
            ..self
        })
    }

    pub fn with_beta(self, beta: f64) -> Result<TverskyConfig> {
        Ok(TverskyConfig {
            beta: validate_weight("beta", beta)?,
            ..self
        })
    }

    pub fn with_symmetric(self, symmetric: bool) -> TverskyConfig {
        TverskyConfig { symmetric, ..self }
    }

    pub fn with_ignore_case(self, ignore_case: bool) -> TverskyConfig {
        TverskyConfig {
            ignore_case,
            ..self
        }
    }

    pub fn with_tokenization(self, tokenization: Tokenization) -> TverskyConfig {
        TverskyConfig {
            tokenization,
            ..self
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn tokenization(&self) -> Tokenization {
        self.tokenization
    }
}
