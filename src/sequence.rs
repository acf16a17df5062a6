//! Input representations and their normalization into comparable items.

use itertools::Itertools;
use serde_json::Value;

use crate::config::Tokenization;

/// One side of a comparison: either a list of items or a string that is
/// compared character by character (or bigram by bigram).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sequence<'a, T = char> {
    Items(&'a [T]),
    Text(&'a str),
}

impl<'a, T> Sequence<'a, T> {
    /// Name of the representation, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Sequence::Items(_) => "array",
            Sequence::Text(_) => "string",
        }
    }
}

impl<'a> From<&'a str> for Sequence<'a, char> {
    fn from(text: &'a str) -> Self {
        Sequence::Text(text)
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Sequence::Items(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Sequence<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Sequence::Items(items.as_slice())
    }
}

/// Splits a string into the items that get compared, lowercasing first when asked.
///
/// Bigrams are overlapping 2-character windows. A one-character string has no
/// window, so it yields itself as its only token.
pub fn tokenize(text: &str, tokenization: Tokenization, ignore_case: bool) -> Vec<String> {
    let chars: Vec<char> = if ignore_case {
        text.to_lowercase().chars().collect()
    } else {
        text.chars().collect()
    };
    match tokenization {
        Tokenization::Chars => chars.iter().map(|c| c.to_string()).collect(),
        Tokenization::Bigrams => {
            if chars.len() == 1 {
                return vec![chars[0].to_string()];
            }
            chars
                .iter()
                .tuple_windows()
                .map(|(first, second)| [*first, *second].iter().collect())
                .collect()
        }
    }
}

/// Hashable identity of a JSON array element.
///
/// Numbers compare by value (`5` and `5.0` are one item, so are `0` and `-0`),
/// strings by content, and a number never equals a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Null,
    Bool(bool),
    Number(u64),
    Text(String),
    Composite(String),
}

impl From<&Value> for ItemKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ItemKey::Null,
            Value::Bool(flag) => ItemKey::Bool(*flag),
            Value::Number(number) => match number.as_f64() {
                Some(float) if float == 0.0 => ItemKey::Number(0.0_f64.to_bits()),
                Some(float) => ItemKey::Number(float.to_bits()),
                None => ItemKey::Composite(number.to_string()),
            },
            Value::String(text) => ItemKey::Text(text.clone()),
            other => ItemKey::Composite(other.to_string()),
        }
    }
}
