//! # enumerable
//!
//! Lazy, LINQ-style query pipelines over in-memory sequences, plus an
//! identity-tracking list that remembers what was removed from it.
//!
//! ## Overview
//!
//! - **[`Enumerable`]**: a deferred pipeline of stages (`filter`, `select`,
//!   `select_many`, `concat`, `order_by`) evaluated by terminal operators
//!   (`count`, `find_first`, `min`, `max`, `sum`, `to_list`, `group_by`).
//!   Any [`IntoIterator`] becomes a pipeline through [`IntoEnumerable`].
//! - **[`DomainList`]**: an ordered list of [`Identified`] elements, unique
//!   by identifier, with a removed partition that supports restoring
//!   elements and auditing removals.
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Identified)]`
//! - `serde`: `Serialize`/`Deserialize` for `DomainList`
//! - `fxhash` / `ahash`: faster hasher for [`GroupMap`]
//! - `full`: `derive`, `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! #[derive(Debug, Clone, Identified)]
//! struct Employee {
//!     id: u32,
//!     team: &'static str,
//!     salary: u32,
//! }
//!
//! let mut staff = domain_list![
//!     Employee { id: 1, team: "core", salary: 120 },
//!     Employee { id: 2, team: "web", salary: 90 },
//!     Employee { id: 3, team: "core", salary: 100 },
//! ]
//! .unwrap();
//!
//! staff.remove_by_id(&3);
//!
//! let payroll = staff.enumerable().sum(|employee| employee.salary, 0, |left, right| left + right);
//! assert_eq!(payroll, 210);
//!
//! let teams = staff.enumerable().group_by(|employee| employee.team);
//! assert_eq!(teams["core"].len(), 1);
//! assert!(staff.is_id_removed(&3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use enumerable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::domain_list;
    pub use crate::domain_list::DomainList;
    pub use crate::enumerable::{Enumerable, IntoEnumerable, TargetCollection};
    pub use crate::error::{Error, Result};
    pub use crate::identity::Identified;
    pub use crate::ordering::{KeySelector, by_key};

    #[cfg(feature = "derive")]
    pub use enumerable_derive::Identified;
}

pub mod domain_list;
pub mod enumerable;
pub mod error;
pub mod identity;
pub mod ordering;

pub use domain_list::DomainList;
pub use enumerable::{Enumerable, GroupMap, IntoEnumerable, Ordered, TargetCollection};
pub use error::{Error, Result};
pub use identity::Identified;
pub use ordering::{KeySelector, by_key};

#[cfg(feature = "derive")]
pub use enumerable_derive::Identified;
