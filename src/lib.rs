//! # Natorder
//!
//! `natorder` orders records by a string field in **natural order**: embedded runs
//! of digits compare by numeric value, everything else compares by character code.
//! Under natural order `"1" < "9" < "10"`, where plain lexical order gives
//! `"1" < "10" < "9"`.
//!
//! ## Key Features
//!
//! - **Lossless tokenization**: [`tokenize`] splits a string into alternating digit
//!   and non-digit runs that concatenate back to the input.
//! - **Total order**: [`compare`] only returns `Equal` for identical strings.
//!   Numerically equal runs such as `"9"` and `"09"` are ordered by leading zeros.
//! - **No overflow**: digit runs are compared by length and digits, never parsed,
//!   so arbitrarily long numbers are ordered correctly.
//! - **Stable**: records with identical keys keep their input order.
//! - **Record-agnostic**: sort by field name through the [`Record`] trait, by an
//!   accessor closure, or by index through [`KeyAccessor`].
//!
//! ## Usage
//!
//! ### Plain strings
//!
//! ```rust
//! use natorder::natural_sort_mut;
//!
//! let mut data = vec!["img12", "img10", "img2", "img1"];
//! natural_sort_mut(&mut data);
//!
//! assert_eq!(data, vec!["img1", "img2", "img10", "img12"]);
//! ```
//!
//! ### Records
//!
//! ```rust
//! use natorder::{naturally_sorted, naturally_sorted_with, FieldValue, Record, SortOptions};
//!
//! struct Sample {
//!     id: u64,
//!     title: Option<String>,
//! }
//!
//! impl Record for Sample {
//!     fn field_value(&self, field: &str) -> FieldValue<'_> {
//!         match field {
//!             "title" => FieldValue::from(self.title.as_ref()),
//!             _ => FieldValue::Null,
//!         }
//!     }
//! }
//!
//! let samples = vec![
//!     Sample { id: 1, title: Some("10".to_string()) },
//!     Sample { id: 2, title: None },
//!     Sample { id: 3, title: Some("1".to_string()) },
//! ];
//!
//! // Input order is untouched; the result holds references in natural order.
//! let sorted = naturally_sorted(&samples, "title")?;
//! let ids: Vec<u64> = sorted.iter().map(|s| s.id).collect();
//! assert_eq!(ids, vec![3, 1, 2]); // nulls last
//!
//! let options = SortOptions::new().descending().nulls_first();
//! let sorted = naturally_sorted_with(&samples, |s| FieldValue::from(s.title.as_ref()), &options)?;
//! let ids: Vec<u64> = sorted.iter().map(|s| s.id).collect();
//! assert_eq!(ids, vec![2, 1, 3]);
//! # Ok::<(), natorder::NatSortError>(())
//! ```
//!
//! ## Errors
//!
//! Keys must be text or null. An accessor that returns a number or boolean makes
//! the sort fail with [`NatSortError::InvalidFieldValue`] rather than coercing it.
//!
//! ## Logging
//!
//! Entry points emit [`tracing`] events at `debug` and `trace` level. No
//! subscriber is installed by this crate.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub use algo::{
    Natural, compare, natural_cmp, natural_indices, natural_sort_mut, naturally_sorted,
    naturally_sorted_by, naturally_sorted_with,
};
pub use config::{Direction, NullsOrder, SortOptions};
pub use crate::core::{FieldValue, KeyAccessor, Record, Token, TokenSequence, tokenize};
pub use error::{NatSortError, Result};

pub mod prelude {
    pub use crate::algo::{
        Natural, natural_cmp, natural_indices, natural_sort_mut, naturally_sorted,
        naturally_sorted_by, naturally_sorted_with,
    };
    pub use crate::config::{Direction, NullsOrder, SortOptions};
    pub use crate::core::{FieldValue, KeyAccessor, Record, tokenize};
    pub use crate::error::NatSortError;
}
