//! Materialization targets for pipelines.

use std::collections::{HashMap, LinkedList, VecDeque};

use smallvec::SmallVec;

use crate::error::Result;

/// Hasher used by [`GroupMap`].
///
/// Selected by feature flag: `fxhash` uses `rustc_hash::FxBuildHasher`,
/// `ahash` uses `ahash::RandomState`, otherwise the std `RandomState`.
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`GroupMap`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// Hasher used by [`GroupMap`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::collections::hash_map::RandomState;

/// Key-to-bucket map returned by [`Enumerable::group_by`](super::Enumerable::group_by).
pub type GroupMap<K, V> = HashMap<K, V, GroupHasher>;

/// A container a pipeline can be materialized into.
///
/// Both construction and insertion may fail; the pipeline propagates the
/// first failure.
///
/// # Examples
///
/// ```rust
/// use enumerable::{Error, IntoEnumerable, Result, TargetCollection};
///
/// /// A bag that only accepts even numbers.
/// #[derive(Debug, Default)]
/// struct Evens(Vec<u32>);
///
/// impl TargetCollection<u32> for Evens {
///     fn instantiate() -> Result<Self> {
///         Ok(Self::default())
///     }
///
///     fn append(&mut self, element: u32) -> Result<()> {
///         if element % 2 == 1 {
///             return Err(Error::InvalidArgument { expected: "even u32" });
///         }
///         self.0.push(element);
///         Ok(())
///     }
/// }
///
/// let evens: Evens = vec![2, 4].into_enumerable().to_collection().unwrap();
/// assert_eq!(evens.0, vec![2, 4]);
/// assert!(vec![2, 3].into_enumerable().to_collection::<Evens>().is_err());
/// ```
pub trait TargetCollection<T>: Sized {
    /// Creates an empty container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiation`](crate::Error::Instantiation) if the
    /// container cannot be constructed without arguments.
    fn instantiate() -> Result<Self>;

    /// Appends one element at the end.
    ///
    /// # Errors
    ///
    /// Returns whatever contract violation the container detects.
    fn append(&mut self, element: T) -> Result<()>;
}

impl<T> TargetCollection<T> for Vec<T> {
    #[inline]
    fn instantiate() -> Result<Self> {
        Ok(Self::new())
    }

    #[inline]
    fn append(&mut self, element: T) -> Result<()> {
        self.push(element);
        Ok(())
    }
}

impl<T> TargetCollection<T> for VecDeque<T> {
    #[inline]
    fn instantiate() -> Result<Self> {
        Ok(Self::new())
    }

    #[inline]
    fn append(&mut self, element: T) -> Result<()> {
        self.push_back(element);
        Ok(())
    }
}

impl<T> TargetCollection<T> for LinkedList<T> {
    #[inline]
    fn instantiate() -> Result<Self> {
        Ok(Self::new())
    }

    #[inline]
    fn append(&mut self, element: T) -> Result<()> {
        self.push_back(element);
        Ok(())
    }
}

impl<T, const N: usize> TargetCollection<T> for SmallVec<[T; N]> {
    #[inline]
    fn instantiate() -> Result<Self> {
        Ok(Self::new())
    }

    #[inline]
    fn append(&mut self, element: T) -> Result<()> {
        self.push(element);
        Ok(())
    }
}
