//! # hashset-algebra
//!
//! A generic, unordered set with membership tests, in-place mutation,
//! set algebra and short-circuitable enumeration.
//!
//! ## Overview
//!
//! - **Construction**: [`Set::new`], [`Set::from_items`], `collect()`
//! - **Mutation**: [`Set::insert`], [`Set::insert_one`], [`Set::remove`], [`Set::clear`]
//! - **Queries**: [`Set::contains`], [`Set::len`], [`Set::to_vec`], [`sorted_items`]
//! - **Enumeration**: [`Set::range`] (push, callback returns `false` to stop)
//!   and [`Set::iter`] (pull, drop to stop)
//! - **Algebra**: [`Set::union`], [`Set::intersection`], [`Set::difference`],
//!   [`Set::symmetric_difference`], each returning a new independent set
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`] as a sequence
//! - `fxhash`: back the table with `rustc-hash`
//! - `ahash`: back the table with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use hashset_algebra::prelude::*;
//!
//! let greeting = Set::from_items(["hello", "set"]);
//! let farewell = Set::from_items(["bye", "set"]);
//!
//! assert_eq!(greeting.intersection(&farewell), Set::from_items(["set"]));
//! assert_eq!(sorted_items(&greeting.union(&farewell)), vec!["bye", "hello", "set"]);
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
/// use hashset_algebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hasher::DefaultHashBuilder;
    pub use crate::set::{Set, sorted_items};
}

pub mod hasher;
pub mod set;

pub use hasher::DefaultHashBuilder;
pub use set::{IntoIter, Iter, Set, sorted_items};
