use num_traits::{Num, Zero};
use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::SpaceParseError;

/// A numeric range given by a start offset and a size.
///
/// The end is derived as `start + size` and never stored. The size is
/// expected to be non-negative, but nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space<N>
where
    N: Num + PartialOrd + Copy,
{
    pub start: N,
    pub size: N,
}

/// Returns `a` unless `b` is strictly smaller.
#[inline]
fn pmin<N: PartialOrd + Copy>(a: N, b: N) -> N {
    if b < a { b } else { a }
}

/// Returns `a` unless `b` is strictly larger.
#[inline]
fn pmax<N: PartialOrd + Copy>(a: N, b: N) -> N {
    if b > a { b } else { a }
}

impl<N> Space<N>
where
    N: Num + PartialOrd + Copy,
{
    pub fn new(start: N, size: N) -> Self {
        Space { start, size }
    }

    ///
    /// Build a space from its two bounds, `size = end - start`.
    ///
    pub fn from_bounds(start: N, end: N) -> Self {
        Space {
            start,
            size: end - start,
        }
    }

    #[inline]
    pub fn end(&self) -> N {
        self.start + self.size
    }

    /// True for a zero sized space, which behaves like a single point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.size == N::zero()
    }

    /// Check if two spaces overlap or touch. See [`can_merge`].
    #[inline]
    pub fn can_merge(&self, other: &Space<N>) -> bool {
        can_merge(self, other)
    }

    /// Bounding space of `self` and `other`. See [`merge`].
    #[inline]
    pub fn merge(&self, other: &Space<N>) -> Space<N> {
        merge(self, other)
    }

    ///
    /// Merge only if the two spaces overlap or touch.
    ///
    /// Returns `None` for disjoint spaces instead of bridging the gap.
    ///
    pub fn try_merge(&self, other: &Space<N>) -> Option<Space<N>> {
        if self.can_merge(other) {
            Some(self.merge(other))
        } else {
            None
        }
    }
}

///
/// Check if the closed ranges `[a.start, a.end]` and `[b.start, b.end]`
/// intersect. Touching endpoints count as overlapping.
///
/// # Examples
///
/// ```
/// use spacemerge_core::{Space, can_merge};
///
/// let a = Space::new(0, 5);
/// let b = Space::new(5, 3);
/// assert!(can_merge(&a, &b));
/// assert!(!can_merge(&Space::new(6, 3), &Space::new(10, 8)));
/// ```
#[inline]
pub fn can_merge<N>(a: &Space<N>, b: &Space<N>) -> bool
where
    N: Num + PartialOrd + Copy,
{
    let left = a.start;
    let right = a.end();

    let other_left = b.start;
    let other_right = b.end();

    left <= other_right && right >= other_left
}

///
/// Compute the smallest space containing both `a` and `b`.
///
/// This does not check [`can_merge`] first: two disjoint spaces produce a
/// space spanning the gap between them.
///
/// # Examples
///
/// ```
/// use spacemerge_core::{Space, merge};
///
/// let merged = merge(&Space::new(6, 3), &Space::new(10, 8));
/// assert_eq!(merged, Space::new(6, 12));
/// ```
pub fn merge<N>(a: &Space<N>, b: &Space<N>) -> Space<N>
where
    N: Num + PartialOrd + Copy,
{
    let start = pmin(b.start, a.start);
    let end = pmax(a.end(), b.end());

    Space {
        start,
        size: end - start,
    }
}

impl<N> Display for Space<N>
where
    N: Num + PartialOrd + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.size)
    }
}

impl<N> FromStr for Space<N>
where
    N: Num + PartialOrd + Copy + FromStr,
{
    type Err = SpaceParseError;

    /// Parse `"<start>,<size>"`, e.g. `"6,3"` or `" 10 , 8 "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',');

        let start_str = fields
            .next()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .ok_or(SpaceParseError::MissingField("start"))?;
        let size_str = fields
            .next()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .ok_or(SpaceParseError::MissingField("size"))?;

        if fields.next().is_some() {
            return Err(SpaceParseError::TooManyFields(s.to_string()));
        }

        let start = start_str
            .parse::<N>()
            .map_err(|_| SpaceParseError::InvalidNumber(start_str.to_string()))?;
        let size = size_str
            .parse::<N>()
            .map_err(|_| SpaceParseError::InvalidNumber(size_str.to_string()))?;

        Ok(Space { start, size })
    }
}
