//! Hasher selection for the membership table.
//!
//! The hash builder backing every [`Set`](crate::Set) is chosen at compile
//! time through Cargo features:
//!
//! | Feature  | Hash builder                    |
//! |----------|---------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState` |
//! | `fxhash` | `rustc_hash::FxBuildHasher`     |
//! | `ahash`  | `ahash::RandomState`            |
//!
//! `fxhash` takes precedence when both fast-hash features are enabled.
//!
//! The std builder is randomly seeded and resistant to HashDoS. The fast
//! builders trade that resistance for throughput, which is usually the right
//! call for sets of small integer or short string keys that do not come from
//! untrusted input.

#[cfg(feature = "fxhash")]
/// The hash builder used by [`Set`](crate::Set).
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The hash builder used by [`Set`](crate::Set).
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The hash builder used by [`Set`](crate::Set).
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Returns the name of the hash builder compiled into this build.
///
/// # Examples
///
/// ```rust
/// use hashset_algebra::hasher::hasher_name;
///
/// assert!(["std", "fxhash", "ahash"].contains(&hasher_name()));
/// ```
#[must_use]
pub const fn hasher_name() -> &'static str {
    if cfg!(feature = "fxhash") {
        "fxhash"
    } else if cfg!(feature = "ahash") {
        "ahash"
    } else {
        "std"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_default_builder_hashes_deterministically_within_instance() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
    }

    #[rstest]
    #[cfg(not(any(feature = "fxhash", feature = "ahash")))]
    fn test_hasher_name_without_features() {
        assert_eq!(hasher_name(), "std");
    }

    #[rstest]
    #[cfg(feature = "fxhash")]
    fn test_hasher_name_fxhash() {
        assert_eq!(hasher_name(), "fxhash");
    }
}
