//! Sort options: direction and placement of null keys.

use std::cmp::Ordering;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl Direction {
    /// Applies this direction to an ordering of two keys.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where records with a null (missing) key end up.
///
/// Null placement is independent of [`Direction`]: `Last` means last for both
/// ascending and descending sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullsOrder {
    First,
    #[default]
    Last,
}

impl NullsOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            NullsOrder::First => "nulls first",
            NullsOrder::Last => "nulls last",
        }
    }
}

impl fmt::Display for NullsOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling a natural sort.
///
/// The default is ascending with nulls last.
///
/// ```
/// use natorder::{Direction, NullsOrder, SortOptions};
///
/// let options = SortOptions::new().descending().nulls_first();
/// assert_eq!(options.direction, Direction::Desc);
/// assert_eq!(options.nulls, NullsOrder::First);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOptions {
    /// Direction applied to non-null keys.
    pub direction: Direction,
    /// Placement of null keys.
    pub nulls: NullsOrder,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ascending(mut self) -> Self {
        self.direction = Direction::Asc;
        self
    }

    pub fn descending(mut self) -> Self {
        self.direction = Direction::Desc;
        self
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = NullsOrder::First;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = NullsOrder::Last;
        self
    }
}
