//! Lazy, chainable query pipelines.
//!
//! This module provides [`Enumerable`], a thin wrapper around any iterator
//! that exposes LINQ-style stages and terminal operators:
//!
//! - **Stages** (lazy): [`filter`](Enumerable::filter),
//!   [`select`](Enumerable::select), [`select_many`](Enumerable::select_many),
//!   [`concat`](Enumerable::concat), [`order_by`](Enumerable::order_by),
//!   [`order_by_descending`](Enumerable::order_by_descending)
//! - **Terminals** (force evaluation): [`count`](Enumerable::count),
//!   [`find_first`](Enumerable::find_first), [`max`](Enumerable::max),
//!   [`min`](Enumerable::min), [`sum`](Enumerable::sum),
//!   [`to_list`](Enumerable::to_list),
//!   [`to_collection`](Enumerable::to_collection),
//!   [`group_by`](Enumerable::group_by)
//!
//! # Pipeline Lifecycle
//!
//! A pipeline is either *built* or *consumed*. Every terminal operator takes
//! the pipeline by value, so the transition is a move and a consumed
//! pipeline cannot be pulled again:
//!
//! ```text
//!               stage (filter, select, ...)
//!     Built ◄──────────────────────────────┐
//!       │                                  │
//!       └──────────────────────────────────┘
//!       │
//!       │ terminal (count, to_list, ...)
//!       ▼
//!    Consumed
//! ```
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let tens: Vec<i32> = vec![1, 2, 3, 4, 5]
//!     .into_enumerable()
//!     .filter(|value| value % 2 == 0)
//!     .select(|value| value * 10)
//!     .to_list();
//! assert_eq!(tens, vec![20, 40]);
//!
//! let names = ["carol", "al", "bob"]
//!     .into_enumerable()
//!     .order_by([by_key(|name: &&str| name.len())])
//!     .unwrap()
//!     .to_list();
//! assert_eq!(names, vec!["al", "bob", "carol"]);
//! ```

mod ordered;
mod target;

use std::hash::Hash;
use std::iter::{Chain, Empty, Filter, FlatMap, Map};

use crate::error::Result;
use crate::ordering::{Direction, KeySelector, validate_keys};

pub use ordered::Ordered;
pub use target::{GroupHasher, GroupMap, TargetCollection};

/// A lazy query pipeline over an upstream iterator.
///
/// Stages wrap the upstream without pulling from it. Terminal operators
/// consume the pipeline.
#[derive(Clone, Debug)]
#[must_use = "pipelines are lazy and do nothing unless a terminal operator is called"]
pub struct Enumerable<I> {
    source: I,
}

/// Adapts any [`IntoIterator`] into an [`Enumerable`].
///
/// # Examples
///
/// ```rust
/// use enumerable::IntoEnumerable;
///
/// let total = vec![1, 2, 3].into_enumerable().sum(|value| value, 0, |left, right| left + right);
/// assert_eq!(total, 6);
/// ```
pub trait IntoEnumerable: IntoIterator + Sized {
    /// Wraps this sequence in a pipeline.
    fn into_enumerable(self) -> Enumerable<Self::IntoIter> {
        Enumerable::new(self)
    }
}

impl<S: IntoIterator> IntoEnumerable for S {}

impl<T> Enumerable<Empty<T>> {
    /// Creates a pipeline that yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::Enumerable;
    ///
    /// assert_eq!(Enumerable::<std::iter::Empty<i32>>::empty().count(), 0);
    /// ```
    pub fn empty() -> Self {
        Self {
            source: std::iter::empty(),
        }
    }
}

impl<I: Iterator> Enumerable<I> {
    /// Creates a pipeline over `source`.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
        }
    }

    // =========================================================================
    // Stages
    // =========================================================================

    /// Keeps only the elements satisfying `predicate`.
    #[doc(alias = "where")]
    pub fn filter<P>(self, predicate: P) -> Enumerable<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Enumerable {
            source: self.source.filter(predicate),
        }
    }

    /// Transforms every element one-to-one.
    #[doc(alias = "map")]
    pub fn select<R, F>(self, transform: F) -> Enumerable<Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        Enumerable {
            source: self.source.map(transform),
        }
    }

    /// Expands every element into zero or more elements.
    ///
    /// The output holds the expansion of the first element, then the
    /// expansion of the second, and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::IntoEnumerable;
    ///
    /// let letters = vec!["ab", "", "c"]
    ///     .into_enumerable()
    ///     .select_many(|word| word.chars().collect::<Vec<_>>())
    ///     .to_list();
    /// assert_eq!(letters, vec!['a', 'b', 'c']);
    /// ```
    #[doc(alias = "flat_map")]
    pub fn select_many<C, F>(self, transform: F) -> Enumerable<FlatMap<I, C, F>>
    where
        C: IntoIterator,
        F: FnMut(I::Item) -> C,
    {
        Enumerable {
            source: self.source.flat_map(transform),
        }
    }

    /// Yields every element of this pipeline, then every element of `other`.
    pub fn concat<S>(self, other: S) -> Enumerable<Chain<I, S::IntoIter>>
    where
        S: IntoIterator<Item = I::Item>,
    {
        Enumerable {
            source: self.source.chain(other),
        }
    }

    /// Sorts by one or more keys, ascending.
    ///
    /// The first key is the primary key; later keys break ties. The sort is
    /// stable. The upstream is buffered on the first pull, not here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKeyList`](crate::Error::EmptyKeyList) if `keys`
    /// is empty.
    pub fn order_by<'a, K>(self, keys: K) -> Result<Enumerable<Ordered<'a, I>>>
    where
        K: IntoIterator<Item = KeySelector<'a, I::Item>>,
    {
        self.ordered(keys, Direction::Ascending)
    }

    /// Sorts by one or more keys, descending.
    ///
    /// The result is the reverse of the composite ascending order; keys are
    /// not reversed one by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKeyList`](crate::Error::EmptyKeyList) if `keys`
    /// is empty.
    pub fn order_by_descending<'a, K>(self, keys: K) -> Result<Enumerable<Ordered<'a, I>>>
    where
        K: IntoIterator<Item = KeySelector<'a, I::Item>>,
    {
        self.ordered(keys, Direction::Descending)
    }

    fn ordered<'a, K>(self, keys: K, direction: Direction) -> Result<Enumerable<Ordered<'a, I>>>
    where
        K: IntoIterator<Item = KeySelector<'a, I::Item>>,
    {
        let keys = validate_keys(keys)?;
        Ok(Enumerable {
            source: Ordered::new(self.source, keys, direction),
        })
    }

    // =========================================================================
    // Terminals
    // =========================================================================

    /// Counts the elements reaching this point.
    pub fn count(self) -> usize {
        self.source.count()
    }

    /// Returns the first element, if any.
    pub fn find_first(mut self) -> Option<I::Item> {
        self.source.next()
    }

    /// Returns the first element satisfying `predicate`, if any.
    pub fn find_first_by<P>(mut self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source.find(predicate)
    }

    /// Returns the first element, or `Default::default()` when there is none.
    pub fn find_first_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        self.find_first().unwrap_or_default()
    }

    /// Returns the first element satisfying `predicate`, or
    /// `Default::default()` when there is none.
    pub fn find_first_or_default_by<P>(self, predicate: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.find_first_by(predicate).unwrap_or_default()
    }

    /// Returns the greatest selected key, or `None` for an empty pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::IntoEnumerable;
    ///
    /// let words = vec!["pear", "fig", "banana"];
    /// assert_eq!(words.clone().into_enumerable().max(|word| word.len()), Some(6));
    /// assert_eq!(Vec::<&str>::new().into_enumerable().max(|word| word.len()), None);
    /// ```
    pub fn max<K, F>(self, key: F) -> Option<K>
    where
        K: Ord,
        F: FnMut(I::Item) -> K,
    {
        self.source.map(key).max()
    }

    /// Returns the smallest selected key, or `None` for an empty pipeline.
    pub fn min<K, F>(self, key: F) -> Option<K>
    where
        K: Ord,
        F: FnMut(I::Item) -> K,
    {
        self.source.map(key).min()
    }

    /// Maps every element and folds the results left to right.
    ///
    /// This is a general reduction: the caller supplies the identity and the
    /// combiner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::IntoEnumerable;
    ///
    /// let sentence = vec!["a", "b", "c"]
    ///     .into_enumerable()
    ///     .sum(str::to_uppercase, String::new(), |left, right| left + &right);
    /// assert_eq!(sentence, "ABC");
    /// ```
    pub fn sum<R, M, C>(self, mapper: M, identity: R, combiner: C) -> R
    where
        M: FnMut(I::Item) -> R,
        C: FnMut(R, R) -> R,
    {
        self.source.map(mapper).fold(identity, combiner)
    }

    /// Collects the elements into a `Vec`.
    pub fn to_list(self) -> Vec<I::Item> {
        self.source.collect()
    }

    /// Collects the elements into a caller-chosen container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiation`](crate::Error::Instantiation) if the
    /// container cannot be constructed, or the first error the container
    /// raises while accepting an element. Elements are not rolled back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::IntoEnumerable;
    /// use std::collections::VecDeque;
    ///
    /// let queue: VecDeque<i32> = vec![3, 1].into_enumerable().to_collection().unwrap();
    /// assert_eq!(queue, VecDeque::from(vec![3, 1]));
    /// ```
    pub fn to_collection<C>(self) -> Result<C>
    where
        C: TargetCollection<I::Item>,
    {
        let mut target = C::instantiate()?;
        for element in self.source {
            target.append(element)?;
        }
        Ok(target)
    }

    /// Partitions the elements into buckets by `key`.
    ///
    /// Each bucket keeps the relative input order of its elements. The
    /// iteration order of the map itself is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::IntoEnumerable;
    ///
    /// let groups = vec![1, 2, 3, 4, 5].into_enumerable().group_by(|value| value % 2);
    /// assert_eq!(groups[&1], vec![1, 3, 5]);
    /// assert_eq!(groups[&0], vec![2, 4]);
    /// ```
    pub fn group_by<K, F>(self, mut key: F) -> GroupMap<K, Vec<I::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        let mut groups: GroupMap<K, Vec<I::Item>> = GroupMap::default();
        for element in self.source {
            groups.entry(key(&element)).or_default().push(element);
        }
        groups
    }
}

impl<I: Iterator> IntoIterator for Enumerable<I> {
    type Item = I::Item;
    type IntoIter = I;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.source
    }
}

// =============================================================================
// Tests
// =============================================================================
