//! Derive macro for the `enumerable` crate.
//!
//! # Available Derive Macros
//!
//! - [`Identified`]: implements `enumerable::Identified` from an identifier
//!   field
//!
//! # Example
//!
//! ```rust,ignore
//! use enumerable::{DomainList, Identified};
//!
//! #[derive(Identified)]
//! struct Customer {
//!     #[id]
//!     number: u64,
//!     name: String,
//! }
//!
//! let mut customers = DomainList::new();
//! customers.add(Customer { number: 1, name: "Ada".to_string() }).unwrap();
//! assert!(customers.contains_id(&1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod identified;

use proc_macro::TokenStream;

/// Derive macro implementing `enumerable::Identified`.
///
/// The identifier field is chosen as follows:
///
/// - the field marked `#[id]`, if any (at most one field may carry it)
/// - otherwise, for structs with named fields, the field named `id`
/// - otherwise, for tuple structs with exactly one field, that field
///
/// The field type becomes `Identified::Id` and must implement `Eq + Debug`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::enumerable::Identified for StructName {
///     type Id = FieldType;
///
///     fn id(&self) -> &FieldType {
///         &self.field
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use enumerable::Identified;
///
/// #[derive(Identified)]
/// struct Ticket {
///     id: u32,
///     title: String,
/// }
///
/// #[derive(Identified)]
/// struct Pair(#[id] char, u8);
///
/// assert_eq!(Ticket { id: 4, title: String::new() }.id(), &4);
/// assert_eq!(Pair('x', 1).id(), &'x');
/// ```
///
/// # Generics
///
/// Generic structs are supported; the bounds of the struct are carried over
/// unchanged:
///
/// ```rust,ignore
/// #[derive(Identified)]
/// struct Keyed<K> {
///     id: K,
///     payload: Vec<u8>,
/// }
///
/// assert_eq!(Keyed { id: "k", payload: vec![] }.id(), &"k");
/// ```
#[proc_macro_derive(Identified, attributes(id))]
pub fn derive_identified(input: TokenStream) -> TokenStream {
    identified::derive_identified_impl(input)
}
