//! Untyped entry points for inputs that arrive as JSON.
//!
//! Here nothing is guaranteed by the type system, so every argument goes
//! through the full validation sequence: first sequence, second sequence,
//! matching kinds, options record, then the individual options.

use serde_json::Value;

use crate::config::{weight_from_value, TverskyConfig, TverskyOptions};
use crate::error::{Result, TverskyError};
use crate::sequence::{ItemKey, Sequence};
use crate::similarity::score;

enum JsonSequence<'a> {
    Items(&'a [Value]),
    Text(&'a str),
}

impl JsonSequence<'_> {
    fn kind(&self) -> &'static str {
        match self {
            JsonSequence::Items(_) => "array",
            JsonSequence::Text(_) => "string",
        }
    }
}

fn json_sequence<'a>(argument: &'static str, value: &'a Value) -> Result<JsonSequence<'a>> {
    match value {
        Value::Array(items) => Ok(JsonSequence::Items(items)),
        Value::String(text) => Ok(JsonSequence::Text(text)),
        other => Err(TverskyError::InvalidType {
            argument,
            expected: "either an array or a string",
            value: other.to_string(),
        }),
    }
}

fn json_sequences<'a>(first: &'a Value, second: &'a Value) -> Result<(JsonSequence<'a>, JsonSequence<'a>)> {
    let first = json_sequence("a", first)?;
    let second = json_sequence("b", second)?;
    if first.kind() != second.kind() {
        return Err(TverskyError::TypeMismatch {
            first: first.kind(),
            second: second.kind(),
        });
    }
    Ok((first, second))
}

fn score_sequences(first: JsonSequence<'_>, second: JsonSequence<'_>, config: &TverskyConfig) -> Result<f64> {
    match (first, second) {
        (JsonSequence::Items(a), JsonSequence::Items(b)) => {
            let a: Vec<ItemKey> = a.iter().map(ItemKey::from).collect();
            let b: Vec<ItemKey> = b.iter().map(ItemKey::from).collect();
            score(Sequence::Items(a.as_slice()), Sequence::Items(b.as_slice()), config)
        }
        (JsonSequence::Text(a), JsonSequence::Text(b)) => {
            score::<char>(Sequence::Text(a), Sequence::Text(b), config)
        }
        (a, b) => Err(TverskyError::TypeMismatch {
            first: a.kind(),
            second: b.kind(),
        }),
    }
}

/// Named call form over JSON values. `options` may be omitted; when given it
/// must be an object.
pub fn score_json(first: &Value, second: &Value, options: Option<&Value>) -> Result<f64> {
    let (first, second) = json_sequences(first, second)?;
    let config = match options {
        Some(options) => TverskyConfig::from_options(&TverskyOptions::from_value(options)?)?,
        None => TverskyConfig::default(),
    };
    score_sequences(first, second, &config)
}

/// Scores JSON sequences with an already validated configuration.
pub fn score_json_with_config(first: &Value, second: &Value, config: &TverskyConfig) -> Result<f64> {
    let (first, second) = json_sequences(first, second)?;
    score_sequences(first, second, config)
}

/// Positional call form over JSON values: `(a, b, alpha, beta)`.
pub fn score_json_weights(first: &Value, second: &Value, alpha: &Value, beta: &Value) -> Result<f64> {
    let (first, second) = json_sequences(first, second)?;
    let alpha = weight_from_value("alpha", alpha)?;
    let beta = weight_from_value("beta", beta)?;
    score_sequences(first, second, &TverskyConfig::from_weights(alpha, beta)?)
}
