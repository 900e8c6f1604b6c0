//! Natural ordering policy and sorting entry points.
//!
//! Keys are tokenized once per record, then ordered with a stable sort using
//! [`compare`]:
//! - **Numeric runs** compare by magnitude without parsing, so digit runs of any
//!   length are ordered correctly. Equal magnitudes put fewer leading zeros first.
//! - **Text runs** compare by character code.
//! - At a position where one key has a numeric run and the other a text run, the
//!   numeric run sorts first. A key that runs out of tokens sorts first.
//!
//! The record-level entry points are [`naturally_sorted`], [`naturally_sorted_by`]
//! and [`naturally_sorted_with`]. [`natural_indices`] is the index-based form they
//! are built on, and [`natural_sort_mut`] sorts plain strings in place.

use crate::config::{NullsOrder, SortOptions};
use crate::core::{FieldValue, KeyAccessor, Record, Token, TokenSequence, tokenize};
use crate::error::{NatSortError, Result};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Compares two tokenized keys in natural order.
///
/// This is a total order: it returns `Equal` only for sequences tokenized from
/// identical strings.
///
/// ```
/// use natorder::{compare, tokenize};
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&tokenize("img2"), &tokenize("img10")), Ordering::Less);
/// assert_eq!(compare(&tokenize("9"), &tokenize("09")), Ordering::Less);
/// assert_eq!(compare(&tokenize(""), &tokenize("a")), Ordering::Less);
/// ```
pub fn compare(a: &TokenSequence<'_>, b: &TokenSequence<'_>) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| compare_tokens(x, y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compares two strings in natural order.
///
/// Tokenizes both sides on every call; when sorting, prefer the entry points
/// below, which tokenize each key once.
///
/// ```
/// use natorder::natural_cmp;
///
/// let mut files = vec!["img12.png", "img10.png", "img2.png", "img1.png"];
/// files.sort_by(|a, b| natural_cmp(a, b));
/// assert_eq!(files, vec!["img1.png", "img2.png", "img10.png", "img12.png"]);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    compare(&tokenize(a), &tokenize(b))
}

fn compare_tokens(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (
            Token::Numeric {
                leading_zeros: zeros_a,
                ..
            },
            Token::Numeric {
                leading_zeros: zeros_b,
                ..
            },
        ) => compare_magnitude(a.significant_digits(), b.significant_digits())
            .then(zeros_a.cmp(zeros_b)),
        (Token::Text(a), Token::Text(b)) => a.cmp(b),
        (Token::Numeric { .. }, Token::Text(_)) => Ordering::Less,
        (Token::Text(_), Token::Numeric { .. }) => Ordering::Greater,
    }
}

/// Compares digit strings that carry no leading zeros: a longer run is a larger
/// number, equal lengths compare digit by digit.
#[inline]
fn compare_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural sort wrapper: `Natural<T>` orders by [`natural_cmp`] on `T::as_ref()`.
///
/// Useful with `sort_by_key`, `BinaryHeap` or `BTreeMap`. Each comparison
/// tokenizes both sides.
///
/// ```
/// use natorder::Natural;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<_> = ["v10", "v9", "v1"].into_iter().map(Natural).collect();
/// let ordered: Vec<_> = set.into_iter().map(|n| n.0).collect();
/// assert_eq!(ordered, vec!["v1", "v9", "v10"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural<T>(pub T);

impl<T: AsRef<str>> PartialEq for Natural<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl<T: AsRef<str>> Eq for Natural<T> {}

impl<T: AsRef<str>> PartialOrd for Natural<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: AsRef<str>> Ord for Natural<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(self.0.as_ref(), other.0.as_ref())
    }
}

/// A non-null key with the position it came from.
struct SortKey<'a> {
    index: usize,
    tokens: TokenSequence<'a>,
}

/// Stable sort of precomputed keys. Equal keys keep input order in both
/// directions.
fn sort_keys(keys: &mut [SortKey<'_>], options: &SortOptions) {
    keys.sort_by(|a, b| options.direction.apply(compare(&a.tokens, &b.tokens)));
}

/// Computes the natural order of a collection as a list of indices.
///
/// The collection is not modified. `indices[i]` is the position in `provider`
/// of the element that belongs at position `i`. Null keys are placed according
/// to `options.nulls` and keep their input order.
///
/// # Errors
///
/// Returns [`NatSortError::InvalidFieldValue`] for the first key (in input
/// order) that is neither text nor null.
///
/// # Examples
///
/// ```
/// use natorder::{natural_indices, SortOptions};
///
/// let data = vec!["10", "1", "9"];
/// let indices = natural_indices(&data, &SortOptions::default()).unwrap();
///
/// assert_eq!(indices, vec![1, 2, 0]); // 1, 9, 10
/// ```
pub fn natural_indices<T: KeyAccessor + ?Sized>(
    provider: &T,
    options: &SortOptions,
) -> Result<Vec<usize>> {
    let len = provider.len();
    if len == 0 {
        return Ok(vec![]);
    }

    let mut keys: Vec<SortKey<'_>> = Vec::with_capacity(len);
    let mut nulls: Vec<usize> = Vec::new();

    for index in 0..len {
        match provider.get_key(index) {
            FieldValue::Text(text) => keys.push(SortKey {
                index,
                tokens: tokenize(text),
            }),
            FieldValue::Null => nulls.push(index),
            other => {
                let found = other.kind();
                debug!(index, found, "refusing to order non-text field value");
                return Err(NatSortError::InvalidFieldValue { index, found });
            }
        }
    }
    trace!(nulls = nulls.len(), keys = keys.len(), "partitioned null keys");

    sort_keys(&mut keys, options);

    let sorted = keys.into_iter().map(|key| key.index);
    Ok(match options.nulls {
        NullsOrder::First => nulls.into_iter().chain(sorted).collect(),
        NullsOrder::Last => sorted.chain(nulls).collect(),
    })
}

/// Adapts a record slice plus accessor function to [`KeyAccessor`].
struct ByAccessor<'r, R, F> {
    records: &'r [R],
    accessor: F,
}

impl<R, F> KeyAccessor for ByAccessor<'_, R, F>
where
    F: for<'a> Fn(&'a R) -> FieldValue<'a>,
{
    fn get_key(&self, index: usize) -> FieldValue<'_> {
        (self.accessor)(&self.records[index])
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Orders records naturally by the named field, ascending with nulls last.
///
/// `records` may be any iterator; it is collected before sorting. The returned
/// vector holds the same items (typically references) in natural order. Records
/// with identical field values keep their input order.
///
/// # Errors
///
/// Returns [`NatSortError::InvalidFieldValue`] if a record's field is neither
/// text nor null.
///
/// # Examples
///
/// ```
/// use natorder::{naturally_sorted, FieldValue, Record};
///
/// struct Sample {
///     id: u32,
///     title: String,
/// }
///
/// impl Record for Sample {
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "title" => FieldValue::from(&self.title),
///             _ => FieldValue::Null,
///         }
///     }
/// }
///
/// let samples = vec![
///     Sample { id: 1, title: "10".to_string() },
///     Sample { id: 2, title: "1".to_string() },
/// ];
///
/// let sorted = naturally_sorted(&samples, "title").unwrap();
/// assert_eq!(sorted[0].id, 2);
/// ```
pub fn naturally_sorted<I>(records: I, field: &str) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Record,
{
    naturally_sorted_with(
        records,
        |record: &I::Item| record.field_value(field),
        &SortOptions::default(),
    )
}

/// Orders records naturally by the key returned from `accessor`, ascending with
/// nulls last.
///
/// # Errors
///
/// Returns [`NatSortError::InvalidFieldValue`] if `accessor` returns a value
/// that is neither text nor null.
///
/// # Examples
///
/// ```
/// use natorder::{naturally_sorted_by, FieldValue};
///
/// let names = vec!["img10", "img2", "img1"];
/// let sorted = naturally_sorted_by(names, |name| FieldValue::Text(name)).unwrap();
/// assert_eq!(sorted, vec!["img1", "img2", "img10"]);
/// ```
pub fn naturally_sorted_by<I, F>(records: I, accessor: F) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    F: for<'a> Fn(&'a I::Item) -> FieldValue<'a>,
{
    naturally_sorted_with(records, accessor, &SortOptions::default())
}

/// Orders records naturally by the key returned from `accessor`, using
/// `options` for direction and null placement.
///
/// # Errors
///
/// Returns [`NatSortError::InvalidFieldValue`] if `accessor` returns a value
/// that is neither text nor null. No partial result is produced.
///
/// # Examples
///
/// ```
/// use natorder::{naturally_sorted_with, FieldValue, SortOptions};
///
/// let titles = vec![Some("2"), None, Some("10")];
/// let options = SortOptions::new().descending().nulls_first();
/// let sorted = naturally_sorted_with(titles, |t| FieldValue::from(*t), &options).unwrap();
/// assert_eq!(sorted, vec![None, Some("10"), Some("2")]);
/// ```
pub fn naturally_sorted_with<I, F>(
    records: I,
    accessor: F,
    options: &SortOptions,
) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    F: for<'a> Fn(&'a I::Item) -> FieldValue<'a>,
{
    let mut records: Vec<I::Item> = records.into_iter().collect();
    debug!(
        records = records.len(),
        direction = %options.direction,
        nulls = %options.nulls,
        "natural sort"
    );

    let indices = natural_indices(
        &ByAccessor {
            records: &records,
            accessor,
        },
        options,
    )?;

    apply_permutation(&mut records, indices);
    Ok(records)
}

/// Sorts a slice of strings in natural order, in place.
///
/// The sort is stable. Each element is tokenized once.
///
/// ```
/// use natorder::natural_sort_mut;
///
/// let mut data = vec!["track10.mp3", "track9.mp3", "Track1.mp3"];
/// natural_sort_mut(&mut data);
///
/// // No case folding: "T" sorts before "t".
/// assert_eq!(data, vec!["Track1.mp3", "track9.mp3", "track10.mp3"]);
/// ```
pub fn natural_sort_mut<T: AsRef<str>>(data: &mut [T]) {
    let indices: Vec<usize> = {
        let mut keys: Vec<SortKey<'_>> = data
            .iter()
            .enumerate()
            .map(|(index, item)| SortKey {
                index,
                tokens: tokenize(item.as_ref()),
            })
            .collect();
        sort_keys(&mut keys, &SortOptions::default());
        keys.into_iter().map(|key| key.index).collect()
    };

    apply_permutation(data, indices);
}

/// Reorders `data` so that position `i` holds the element previously at
/// `indices[i]`, following each permutation cycle with swaps.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }
}
