//! Error types for domain lists and query pipelines.
//!
//! Every failure in this crate is a local contract violation that is
//! reported to the caller immediately. Nothing is retried and batch
//! operations are not rolled back.

use thiserror::Error;

/// Errors raised by [`DomainList`](crate::DomainList) mutations and
/// [`Enumerable`](crate::Enumerable) stages.
///
/// # Examples
///
/// ```rust
/// use enumerable::Error;
///
/// let error = Error::IndexOutOfRange { index: 5, length: 3 };
/// assert_eq!(error.to_string(), "index 5 is out of range for length 3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An absent element was offered for insertion.
    #[error("element must not be absent")]
    NullElement,

    /// An element with the same identifier is already live.
    #[error("an item with the same key has already been added: {id}")]
    DuplicateKey {
        /// Debug rendering of the conflicting identifier.
        id: String,
    },

    /// A removal candidate is not an element of the list's element type.
    #[error("not an identity-bearing element of type {expected}")]
    InvalidArgument {
        /// Name of the element type the list expected.
        expected: &'static str,
    },

    /// Positional access outside the current bounds.
    #[error("index {index} is out of range for length {length}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length at the time of the request.
        length: usize,
    },

    /// A sort was requested without any key selector.
    #[error("key selectors may not be empty")]
    EmptyKeyList,

    /// A target collection could not be constructed without arguments.
    #[error("cannot instantiate target collection `{type_name}`")]
    Instantiation {
        /// Name of the collection type.
        type_name: &'static str,
    },
}

impl Error {
    /// Builds a [`Error::DuplicateKey`] from any debuggable identifier.
    pub(crate) fn duplicate_key<K: std::fmt::Debug + ?Sized>(id: &K) -> Self {
        Self::DuplicateKey {
            id: format!("{id:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
