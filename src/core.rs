//! Core types for natural ordering.
//!
//! This module defines:
//! - [`Token`] and [`TokenSequence`]: the decomposition of a string into digit and
//!   non-digit runs, produced by [`tokenize`].
//! - [`FieldValue`]: what a record accessor hands back for one record.
//! - [`Record`]: field access by name, for use with [`naturally_sorted`](crate::naturally_sorted).
//! - [`KeyAccessor`]: index-based key access over a whole collection, for use with
//!   [`natural_indices`](crate::natural_indices).

use std::collections::VecDeque;
use std::fmt;

/// A maximal run of either ASCII digits or non-digit characters.
///
/// Both variants borrow the original substring, so no characters are lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// A run of `0`-`9`. `leading_zeros` counts the zeros in front of the
    /// first significant digit (a run of only zeros counts all of them).
    Numeric { digits: &'a str, leading_zeros: usize },
    /// A run of anything else, compared by character code.
    Text(&'a str),
}

impl<'a> Token<'a> {
    fn numeric(digits: &'a str) -> Self {
        let leading_zeros = digits.bytes().take_while(|&b| b == b'0').count();
        Token::Numeric {
            digits,
            leading_zeros,
        }
    }

    /// The original substring this token covers.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::Numeric { digits, .. } => digits,
            Token::Text(text) => text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Token::Numeric { .. })
    }

    /// Digits of a numeric token with leading zeros stripped.
    ///
    /// Empty for a run made only of zeros, and for text tokens.
    pub fn significant_digits(&self) -> &'a str {
        match *self {
            Token::Numeric {
                digits,
                leading_zeros,
            } => &digits[leading_zeros..],
            Token::Text(_) => "",
        }
    }
}

/// A string split into alternating [`Token::Numeric`] and [`Token::Text`] runs.
///
/// Ordering follows [`compare`](crate::algo::compare). Two sequences compare
/// equal only when they were produced from identical strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenSequence<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenSequence<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

// Concatenating the tokens gives back the tokenized string.
impl fmt::Display for TokenSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens
            .iter()
            .try_for_each(|token| f.write_str(token.as_str()))
    }
}

impl Ord for TokenSequence<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        crate::algo::compare(self, other)
    }
}

impl PartialOrd for TokenSequence<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits `value` into digit and non-digit runs, left to right.
///
/// Only ASCII `0`-`9` count as digits. No case or whitespace normalization is
/// applied. An empty string yields an empty sequence.
///
/// ```
/// use natorder::{tokenize, Token};
///
/// let tokens = tokenize("img007.png");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens.tokens()[0], Token::Text("img"));
/// assert_eq!(tokens.tokens()[1].significant_digits(), "7");
/// assert_eq!(tokens.to_string(), "img007.png");
/// ```
pub fn tokenize(value: &str) -> TokenSequence<'_> {
    let bytes = value.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let numeric = bytes[start].is_ascii_digit();
        // ASCII digits never occur inside a multi-byte UTF-8 sequence, so every
        // class change is a char boundary.
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_digit() != numeric)
            .map_or(bytes.len(), |run| start + run);

        let run = &value[start..end];
        tokens.push(if numeric {
            Token::numeric(run)
        } else {
            Token::Text(run)
        });
        start = end;
    }

    TokenSequence { tokens }
}

/// The value an accessor extracted from one record.
///
/// Only [`Text`](FieldValue::Text) and [`Null`](FieldValue::Null) can be
/// ordered. Any other kind makes the sort fail with
/// [`NatSortError::InvalidFieldValue`](crate::NatSortError::InvalidFieldValue)
/// instead of being coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Missing or absent value.
    Null,
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    /// Name of the value kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Null => "null",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl<'a> From<Option<&'a String>> for FieldValue<'a> {
    fn from(value: Option<&'a String>) -> Self {
        value.map_or(FieldValue::Null, |text| FieldValue::Text(text))
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Field access by name, so records can be sorted with
/// [`naturally_sorted`](crate::naturally_sorted)`(records, "title")`.
///
/// # Examples
///
/// ```
/// use natorder::{FieldValue, Record};
///
/// struct Sample {
///     title: String,
///     subtitle: Option<String>,
///     price: i64,
/// }
///
/// impl Record for Sample {
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "title" => FieldValue::from(&self.title),
///             "subtitle" => FieldValue::from(self.subtitle.as_ref()),
///             "price" => FieldValue::from(self.price),
///             _ => FieldValue::Null,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of `field`, or [`FieldValue::Null`] when the record
    /// has no such field.
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        (**self).field_value(field)
    }
}

/// Index-based access to the sort keys of a whole collection.
///
/// This lets [`natural_indices`](crate::natural_indices) order any indexable
/// collection without copying or moving its elements.
///
/// ```
/// use natorder::{FieldValue, KeyAccessor};
///
/// struct Titles {
///     data: Vec<Option<String>>,
/// }
///
/// impl KeyAccessor for Titles {
///     fn get_key(&self, index: usize) -> FieldValue<'_> {
///         FieldValue::from(self.data[index].as_ref())
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns the sort key at the given index.
    fn get_key(&self, index: usize) -> FieldValue<'_>;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<str>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> FieldValue<'_> {
        FieldValue::Text(self[index].as_ref())
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<str>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> FieldValue<'_> {
        FieldValue::Text(self[index].as_ref())
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<str>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> FieldValue<'_> {
        FieldValue::Text(self[index].as_ref())
    }

    fn len(&self) -> usize {
        self.len()
    }
}
