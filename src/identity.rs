//! The identity-bearing element contract.
//!
//! A [`DomainList`](crate::DomainList) decides membership by identifier, not
//! by structural equality: two values with the same [`Identified::id`] are
//! the same logical entity even if every other field differs.

use std::fmt::Debug;

/// A value exposing a stable, comparable identifier.
///
/// # Examples
///
/// ```rust
/// use enumerable::Identified;
///
/// struct Customer {
///     number: u32,
///     name: String,
/// }
///
/// impl Identified for Customer {
///     type Id = u32;
///
///     fn id(&self) -> &u32 {
///         &self.number
///     }
/// }
///
/// let first = Customer { number: 7, name: "Ada".to_string() };
/// let renamed = Customer { number: 7, name: "Ada L.".to_string() };
/// assert!(first.same_identity(&renamed));
/// ```
///
/// With the `derive` feature the implementation can be generated:
///
/// ```rust
/// use enumerable::Identified;
///
/// #[derive(Identified)]
/// struct Invoice {
///     #[id]
///     reference: String,
///     total: u64,
/// }
///
/// let invoice = Invoice { reference: "INV-1".to_string(), total: 10 };
/// assert_eq!(invoice.id(), "INV-1");
/// ```
pub trait Identified {
    /// The identifier type.
    type Id: Eq + Debug;

    /// Returns the identifier of this element.
    fn id(&self) -> &Self::Id;

    /// Returns `true` if `other` denotes the same logical entity.
    #[inline]
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Box<T> {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for std::rc::Rc<T> {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for std::sync::Arc<T> {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}
