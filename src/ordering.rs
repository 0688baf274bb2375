//! Multi-key ordering shared by in-place sorts and pipeline sort stages.
//!
//! A sort is described by a non-empty list of [`KeySelector`]s applied in
//! priority order: the first selector is the primary key and every later
//! selector only breaks ties left by the ones before it.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::ordering::{by_key, compare_composite, validate_keys};
//! use std::cmp::Ordering;
//!
//! let keys = validate_keys([
//!     by_key(|pair: &(u8, &str)| pair.0),
//!     by_key(|pair: &(u8, &str)| pair.1),
//! ])
//! .unwrap();
//!
//! assert_eq!(compare_composite(&keys, &(1, "b"), &(1, "a")), Ordering::Greater);
//! assert_eq!(compare_composite(&keys, &(0, "z"), &(1, "a")), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Inline capacity for key lists; sorts rarely use more keys than this.
const INLINE_KEYS: usize = 4;

/// A validated, non-empty list of key selectors.
pub type KeyList<'a, T> = SmallVec<[KeySelector<'a, T>; INLINE_KEYS]>;

/// Sort direction of a composite ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest composite key first.
    Ascending,
    /// The exact reverse of [`Direction::Ascending`].
    Descending,
}

impl Direction {
    /// Applies this direction to an ascending comparison result.
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A key extractor erased into a comparator.
///
/// The selected key may be of any [`Ord`] type; selectors with different key
/// types can be mixed in one key list.
pub struct KeySelector<'a, T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
}

impl<'a, T> KeySelector<'a, T> {
    /// Wraps a key extraction function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::ordering::KeySelector;
    /// use std::cmp::Ordering;
    ///
    /// let by_length = KeySelector::new(|word: &&str| word.len());
    /// assert_eq!(by_length.compare(&"ab", &"abc"), Ordering::Less);
    /// ```
    pub fn new<K, F>(selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            compare: Box::new(move |left, right| selector(left).cmp(&selector(right))),
        }
    }

    /// Compares two elements by the selected key.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.compare)(left, right)
    }
}

impl<T> fmt::Debug for KeySelector<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("KeySelector")
    }
}

/// Shorthand for [`KeySelector::new`].
pub fn by_key<'a, T, K, F>(selector: F) -> KeySelector<'a, T>
where
    K: Ord,
    F: Fn(&T) -> K + 'a,
{
    KeySelector::new(selector)
}

/// Collects key selectors, rejecting an empty list.
///
/// # Errors
///
/// Returns [`Error::EmptyKeyList`] if `keys` yields nothing.
pub fn validate_keys<'a, T, I>(keys: I) -> Result<KeyList<'a, T>>
where
    I: IntoIterator<Item = KeySelector<'a, T>>,
{
    let keys: KeyList<'a, T> = keys.into_iter().collect();
    if keys.is_empty() {
        return Err(Error::EmptyKeyList);
    }
    Ok(keys)
}

/// Compares two elements key by key until one key differs.
pub fn compare_composite<T>(keys: &[KeySelector<'_, T>], left: &T, right: &T) -> Ordering {
    keys.iter()
        .map(|key| key.compare(left, right))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable in-place sort of `elements` by a composite key in `direction`.
pub(crate) fn sort_slice<T>(elements: &mut [T], keys: &[KeySelector<'_, T>], direction: Direction) {
    elements.sort_by(|left, right| direction.apply(compare_composite(keys, left, right)));
}
