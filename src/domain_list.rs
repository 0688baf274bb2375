//! Ordered, duplicate-free collection of identity-bearing elements.
//!
//! This module provides [`DomainList`], a list that keys its elements by
//! [`Identified::id`] and remembers every element removed from it.
//!
//! # Overview
//!
//! A `DomainList` owns two partitions:
//! - **live**: the current elements, in insertion order, unique by identifier
//! - **removed**: elements evicted from the live partition
//!
//! An element is in at most one partition. Removing moves it from live to
//! removed; adding an element whose identifier is in removed moves that
//! identity back to live, appended at the end.
//!
//! # Lifecycle
//!
//! ```text
//!              add                        remove / remove_at / remove_by_id
//!     (new) ────────► Live ─────────────────────────────────────► Removed
//!                      ▲                                             │
//!                      └──────────────── add (same id) ──────────────┘
//!
//!     clear(): Live = Removed = []
//! ```
//!
//! # Examples
//!
//! ```rust
//! use enumerable::{DomainList, Identified};
//!
//! #[derive(Debug, Clone, PartialEq, Identified)]
//! struct Account {
//!     id: u32,
//!     owner: &'static str,
//! }
//!
//! let mut accounts = DomainList::new();
//! accounts.add(Account { id: 1, owner: "ada" }).unwrap();
//! accounts.add(Account { id: 2, owner: "bob" }).unwrap();
//! accounts.add(Account { id: 3, owner: "cy" }).unwrap();
//!
//! assert!(accounts.remove_by_id(&2));
//! assert!(accounts.is_id_removed(&2));
//!
//! accounts.add(Account { id: 2, owner: "bob" }).unwrap();
//! let order: Vec<u32> = accounts.iter().map(|account| account.id).collect();
//! assert_eq!(order, vec![1, 3, 2]);
//! assert!(accounts.removed_items().is_empty());
//! ```
//!
//! # Batch Operations
//!
//! [`DomainList::add_all`] and [`DomainList::remove_all`] apply their single
//! element counterparts in order. They are not atomic: when `add_all` fails,
//! the elements before the failing one stay inserted.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::enumerable::{Enumerable, IntoEnumerable, TargetCollection};
use crate::error::{Error, Result};
use crate::identity::Identified;
use crate::ordering::{Direction, KeySelector, sort_slice, validate_keys};

/// An ordered, duplicate-free list of identity-bearing elements that
/// remembers removed elements.
///
/// Only the operations below mutate the list; the partitions are never
/// exposed mutably, so uniqueness and mutual exclusion always hold.
#[derive(Clone)]
pub struct DomainList<T> {
    live: Vec<T>,
    removed: Vec<T>,
}

impl<T> DomainList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::DomainList;
    ///
    /// let list: DomainList<String> = DomainList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if there are no live elements.
    ///
    /// Removed elements do not count.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns the live element at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live.get(index)
    }

    /// Live elements in order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.live
    }

    /// Elements removed from the live partition and not re-added since.
    #[inline]
    #[must_use]
    pub fn removed_items(&self) -> &[T] {
        &self.removed
    }

    /// Iterates over the live elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.live.iter()
    }

    /// Starts a query pipeline over the live elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::{DomainList, Identified};
    ///
    /// #[derive(Identified)]
    /// struct Order {
    ///     id: u32,
    ///     total: u32,
    /// }
    ///
    /// let orders = DomainList::from_collection([
    ///     Order { id: 1, total: 30 },
    ///     Order { id: 2, total: 5 },
    ///     Order { id: 3, total: 70 },
    /// ])
    /// .unwrap();
    ///
    /// let large = orders.enumerable().filter(|order| order.total > 10).count();
    /// assert_eq!(large, 2);
    /// ```
    #[inline]
    pub fn enumerable(&self) -> Enumerable<std::slice::Iter<'_, T>> {
        self.live.iter().into_enumerable()
    }

    /// Returns the live elements followed by the removed elements.
    ///
    /// The view is read-only and meant for auditing.
    #[must_use]
    pub fn all_items(&self) -> Vec<&T> {
        self.live.iter().chain(self.removed.iter()).collect()
    }

    /// Empties both the live and the removed partitions.
    pub fn clear(&mut self) {
        tracing::debug!(
            live = self.live.len(),
            removed = self.removed.len(),
            "DomainList cleared"
        );
        self.live.clear();
        self.removed.clear();
    }

    /// Sorts the live elements in place with `comparator`.
    ///
    /// The sort is stable.
    pub fn sort_by<F>(&mut self, comparator: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.live.sort_by(comparator);
        self
    }

    /// Sorts the live elements in place by one or more keys, ascending.
    ///
    /// The first key is the primary key; later keys break ties. The sort is
    /// stable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKeyList`] if `keys` is empty; the list is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::{DomainList, Identified, by_key};
    ///
    /// #[derive(Identified)]
    /// struct Task {
    ///     id: u32,
    ///     priority: u8,
    /// }
    ///
    /// let mut tasks = DomainList::from_collection([
    ///     Task { id: 1, priority: 2 },
    ///     Task { id: 2, priority: 1 },
    ///     Task { id: 3, priority: 2 },
    /// ])
    /// .unwrap();
    ///
    /// tasks
    ///     .sort_ascending([by_key(|task: &Task| task.priority), by_key(|task: &Task| task.id)])
    ///     .unwrap();
    /// let ids: Vec<u32> = tasks.iter().map(|task| task.id).collect();
    /// assert_eq!(ids, vec![2, 1, 3]);
    /// ```
    pub fn sort_ascending<'a, K>(&mut self, keys: K) -> Result<&mut Self>
    where
        K: IntoIterator<Item = KeySelector<'a, T>>,
        T: 'a,
    {
        self.sort_with(keys, Direction::Ascending)
    }

    /// Sorts the live elements in place by one or more keys, descending.
    ///
    /// The result is the reverse of the composite ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKeyList`] if `keys` is empty; the list is left
    /// untouched.
    pub fn sort_descending<'a, K>(&mut self, keys: K) -> Result<&mut Self>
    where
        K: IntoIterator<Item = KeySelector<'a, T>>,
        T: 'a,
    {
        self.sort_with(keys, Direction::Descending)
    }

    fn sort_with<'a, K>(&mut self, keys: K, direction: Direction) -> Result<&mut Self>
    where
        K: IntoIterator<Item = KeySelector<'a, T>>,
        T: 'a,
    {
        let keys = validate_keys(keys)?;
        sort_slice(&mut self.live, &keys, direction);
        Ok(self)
    }

    /// Builds a list from elements already known to be unique.
    const fn from_unique(live: Vec<T>) -> Self {
        Self {
            live,
            removed: Vec::new(),
        }
    }
}

impl<T: Identified> DomainList<T> {
    /// Builds a list by adding every element of `elements` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] for the first element whose identifier
    /// was already added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::{DomainList, Error, Identified};
    ///
    /// #[derive(Debug, Identified)]
    /// struct Sku {
    ///     id: &'static str,
    /// }
    ///
    /// let list = DomainList::from_collection([Sku { id: "a" }, Sku { id: "b" }]).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// let error = DomainList::from_collection([Sku { id: "a" }, Sku { id: "a" }]).unwrap_err();
    /// assert!(matches!(error, Error::DuplicateKey { .. }));
    /// ```
    pub fn from_collection<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.add_all(elements)?;
        Ok(list)
    }

    /// Returns `true` if a live element has the identifier of `element`.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.contains_id(element.id())
    }

    /// Returns `true` if a live element has identifier `id`.
    #[inline]
    #[must_use]
    pub fn contains_id(&self, id: &T::Id) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns `true` if an element with the identifier of `element` is in
    /// the removed partition.
    #[inline]
    #[must_use]
    pub fn is_item_removed(&self, element: &T) -> bool {
        self.is_id_removed(element.id())
    }

    /// Returns `true` if an element with identifier `id` is in the removed
    /// partition.
    #[inline]
    #[must_use]
    pub fn is_id_removed(&self, id: &T::Id) -> bool {
        self.removed.iter().any(|removed| removed.id() == id)
    }

    /// Appends `element` to the live partition.
    ///
    /// If an element with the same identifier is in the removed partition,
    /// it is evicted from there first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if an element with the same identifier
    /// is live. The list is left unchanged.
    ///
    /// # Returns
    ///
    /// Always `Ok(true)`: duplicates are rejected, never ignored.
    pub fn add(&mut self, element: T) -> Result<bool> {
        if self.contains(&element) {
            return Err(Error::duplicate_key(element.id()));
        }
        if let Some(index) = self.removed_position_of(element.id()) {
            self.removed.remove(index);
            tracing::debug!(id = ?element.id(), "DomainList restored removed item");
        }
        tracing::debug!(id = ?element.id(), live = self.live.len() + 1, "DomainList item added");
        self.live.push(element);
        Ok(true)
    }

    /// Appends an element that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullElement`] for `None`, otherwise whatever
    /// [`add`](Self::add) returns.
    pub fn add_nullable(&mut self, element: Option<T>) -> Result<bool> {
        element.map_or(Err(Error::NullElement), |element| self.add(element))
    }

    /// Adds every element of `elements` in order.
    ///
    /// Not atomic: on error, the elements before the failing one remain
    /// added.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected element.
    pub fn add_all<I>(&mut self, elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.add(element)?;
        }
        Ok(changed)
    }

    /// Moves the live element with the identifier of `element` to the
    /// removed partition.
    ///
    /// Matching is by identifier; `element` itself need not be the stored
    /// value. Returns whether a removal occurred.
    pub fn remove(&mut self, element: &T) -> bool {
        self.remove_by_id(element.id())
    }

    /// Moves the live element with identifier `id` to the removed partition.
    ///
    /// Returns `false` if no live element has that identifier.
    pub fn remove_by_id(&mut self, id: &T::Id) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.record_removal(index);
                true
            }
            None => false,
        }
    }

    /// Removes a candidate of unknown type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `candidate` is not a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::{DomainList, Error, Identified};
    ///
    /// #[derive(Identified)]
    /// struct Node {
    ///     id: u8,
    /// }
    ///
    /// let mut nodes = DomainList::from_collection([Node { id: 1 }]).unwrap();
    /// assert_eq!(nodes.remove_any(&Node { id: 1 }), Ok(true));
    /// assert!(matches!(nodes.remove_any(&"node 1"), Err(Error::InvalidArgument { .. })));
    /// ```
    pub fn remove_any(&mut self, candidate: &dyn Any) -> Result<bool>
    where
        T: 'static,
    {
        candidate
            .downcast_ref::<T>()
            .map(|element| self.remove(element))
            .ok_or(Error::InvalidArgument {
                expected: std::any::type_name::<T>(),
            })
    }

    /// Removes and returns the live element at `index`.
    ///
    /// The element is also recorded in the removed partition, so the
    /// returned value is a clone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        if index >= self.live.len() {
            return Err(Error::IndexOutOfRange {
                index,
                length: self.live.len(),
            });
        }
        Ok(self.record_removal(index).clone())
    }

    /// Removes every element of `elements` by identifier.
    ///
    /// Returns `true` if at least one removal occurred.
    pub fn remove_all<'e, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'e T>,
        T: 'e,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.remove(element);
        }
        changed
    }

    /// Returns a new list holding the first `min(count, len())` live
    /// elements.
    ///
    /// The removed partition is not consulted or copied.
    #[must_use]
    pub fn first_n(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let count = count.min(self.live.len());
        Self::from_unique(self.live[..count].to_vec())
    }

    /// Returns a new list holding the live elements matching `predicate`, in
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::{DomainList, Identified};
    ///
    /// #[derive(Clone, Identified)]
    /// struct Member {
    ///     id: u32,
    ///     active: bool,
    /// }
    ///
    /// let members = DomainList::from_collection([
    ///     Member { id: 1, active: true },
    ///     Member { id: 2, active: false },
    ///     Member { id: 3, active: true },
    /// ])
    /// .unwrap();
    ///
    /// let active = members.find(|member| member.active);
    /// assert_eq!(active.iter().map(|member| member.id).collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let matches = self
            .enumerable()
            .filter(|element| predicate(*element))
            .select(T::clone)
            .to_list();
        Self::from_unique(matches)
    }

    fn position_of(&self, id: &T::Id) -> Option<usize> {
        self.live.iter().position(|element| element.id() == id)
    }

    fn removed_position_of(&self, id: &T::Id) -> Option<usize> {
        self.removed.iter().position(|element| element.id() == id)
    }

    /// Moves the live element at `index` to the removed partition.
    ///
    /// Every removal goes through here.
    fn record_removal(&mut self, index: usize) -> &T {
        let element = self.live.remove(index);
        tracing::debug!(
            id = ?element.id(),
            live = self.live.len(),
            removed = self.removed.len() + 1,
            "DomainList item removed"
        );
        self.removed.push(element);
        &self.removed[self.removed.len() - 1]
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for DomainList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DomainList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DomainList")
            .field("live", &self.live)
            .field("removed", &self.removed)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DomainList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live == other.live && self.removed == other.removed
    }
}

impl<T: Eq> Eq for DomainList<T> {}

impl<T: Identified> TryFrom<Vec<T>> for DomainList<T> {
    type Error = Error;

    fn try_from(elements: Vec<T>) -> Result<Self> {
        Self::from_collection(elements)
    }
}

impl<T: Identified> TargetCollection<T> for DomainList<T> {
    #[inline]
    fn instantiate() -> Result<Self> {
        Ok(Self::new())
    }

    #[inline]
    fn append(&mut self, element: T) -> Result<()> {
        self.add(element).map(|_| ())
    }
}

impl<'a, T> IntoIterator for &'a DomainList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consumes the list, yielding the live elements. Removed elements are
/// dropped.
impl<T> IntoIterator for DomainList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.live.into_iter()
    }
}

static_assertions::assert_impl_all!(DomainList<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(DomainList<std::rc::Rc<String>>: Send, Sync);

/// Builds a [`DomainList`] from a literal list of elements.
///
/// Expands to [`DomainList::from_collection`] and therefore returns a
/// `Result`.
///
/// # Examples
///
/// ```rust
/// use enumerable::{Identified, domain_list};
///
/// #[derive(Identified)]
/// struct Port {
///     id: u16,
/// }
///
/// let ports = domain_list![Port { id: 80 }, Port { id: 443 }].unwrap();
/// assert_eq!(ports.len(), 2);
///
/// assert!(domain_list![Port { id: 80 }, Port { id: 80 }].is_err());
/// ```
#[macro_export]
macro_rules! domain_list {
    () => {
        ::core::result::Result::<_, $crate::Error>::Ok($crate::DomainList::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DomainList::from_collection([$($element),+])
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct DomainListRef<'a, T> {
    live: &'a [T],
    removed: &'a [T],
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DomainListRepr<T> {
    live: Vec<T>,
    #[serde(default = "Vec::new")]
    removed: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Identified> TryFrom<DomainListRepr<T>> for DomainList<T> {
    type Error = Error;

    /// Rebuilds both partitions, rejecting any repeated identifier across
    /// live and removed.
    fn try_from(repr: DomainListRepr<T>) -> Result<Self> {
        let mut list = Self::from_collection(repr.live)?;
        for element in repr.removed {
            if list.contains(&element) || list.is_item_removed(&element) {
                return Err(Error::duplicate_key(element.id()));
            }
            list.removed.push(element);
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DomainList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(
            &DomainListRef {
                live: &self.live,
                removed: &self.removed,
            },
            serializer,
        )
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for DomainList<T>
where
    T: serde::Deserialize<'de> + Identified,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = <DomainListRepr<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(repr).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Record {
        id: u32,
        label: String,
    }

    impl Identified for Record {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[rstest]
    fn test_serialize_shape() {
        let mut list = DomainList::from_collection([
            Record { id: 1, label: "a".to_string() },
            Record { id: 2, label: "b".to_string() },
        ])
        .unwrap();
        list.remove_by_id(&1);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"{"live":[{"id":2,"label":"b"}],"removed":[{"id":1,"label":"a"}]}"#
        );
    }

    #[rstest]
    fn test_deserialize_without_removed() {
        let list: DomainList<Record> =
            serde_json::from_str(r#"{"live":[{"id":2,"label":"b"}]}"#).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.removed_items().is_empty());
    }

    #[rstest]
    #[case(r#"{"live":[{"id":1,"label":"a"},{"id":1,"label":"b"}],"removed":[]}"#)]
    #[case(r#"{"live":[{"id":1,"label":"a"}],"removed":[{"id":1,"label":"b"}]}"#)]
    #[case(r#"{"live":[],"removed":[{"id":1,"label":"a"},{"id":1,"label":"b"}]}"#)]
    fn test_deserialize_rejects_broken_invariants(#[case] json: &str) {
        let error = serde_json::from_str::<DomainList<Record>>(json).unwrap_err();
        assert!(error.to_string().contains("same key"));
    }
}
