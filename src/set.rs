//! Mutable hash set with set algebra.
//!
//! This module provides [`Set`], an unordered collection of distinct
//! elements backed by [`std::collections::HashSet`].
//!
//! # Overview
//!
//! - O(1) expected `contains`, `insert_one` and `remove`
//! - O(1) `len` and `is_empty`
//! - `union`, `intersection`, `difference` and `symmetric_difference`
//!   allocate a fresh set and leave both operands untouched
//! - `range` and `iter` enumerate members in unspecified order and can be
//!   stopped early
//! - [`sorted_items`] gives a deterministic ascending view for `Ord` elements
//!
//! # Examples
//!
//! ```rust
//! use hashset_algebra::Set;
//!
//! let mut set = Set::from_items(["hello", "set"]);
//! set.insert(["hello", "world"]);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains("world"));
//! assert!(set.remove("world"));
//! assert!(!set.remove("world"));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use hashset_algebra::Set;
//!
//! let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
//!
//! let union = set_a.union(&set_b);                        // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);          // {2, 3}
//! let difference = set_a.difference(&set_b);              // {1}
//! let symmetric_diff = set_a.symmetric_difference(&set_b); // {1, 4}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! assert_eq!(symmetric_diff.len(), 2);
//! ```
//!
//! # Mutation During Enumeration
//!
//! [`Set::range`] and [`Set::iter`] hold a shared borrow of the set for as
//! long as they run, so structural mutation from inside the callback or
//! while an iterator is alive is rejected by the compiler. Sharing a set
//! between threads for mutation requires an external lock.

use std::borrow::Borrow;
use std::collections::{HashSet, hash_set};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::hasher::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of distinct elements.
///
/// `Set` is a thin owner of a hash table keyed by the element itself. Every
/// algebra operation builds its result in a freshly allocated table, so a
/// derived set never shares storage with its operands.
///
/// # Time Complexity
///
/// | Operation              | Complexity          |
/// |------------------------|---------------------|
/// | `new`                  | O(1)                |
/// | `contains`             | O(1) expected       |
/// | `insert_one`           | O(1) amortized      |
/// | `remove`               | O(1) expected       |
/// | `len`                  | O(1)                |
/// | `union`                | O(n + m)            |
/// | `intersection`         | O(min(n, m))        |
/// | `difference`           | O(n)                |
/// | `symmetric_difference` | O(n + m)            |
/// | `sorted_items`         | O(n log n)          |
///
/// # Examples
///
/// ```rust
/// use hashset_algebra::Set;
///
/// let set = Set::from_items([42, 42, 7]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashSet<T, DefaultHashBuilder>,
}

// Thread safety follows the element type; mutation still needs `&mut`.
static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set: Set<String> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set: Set<u8> = Set::with_capacity(16);
    /// assert!(set.capacity() >= 16);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Removes every element, keeping the allocated storage.
    ///
    /// Calling this on an empty set is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let mut set = Set::from_items([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns a lazy iterator over the elements of the set.
    ///
    /// Each call starts a new, independent pass in unspecified order.
    /// Dropping the iterator early is fine: the remaining elements are
    /// simply not visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set = Set::from_items(["your", "mom", "is", "hot"]);
    /// assert_eq!(set.iter().count(), 4);
    ///
    /// let first_two: Vec<_> = set.iter().take(2).collect();
    /// assert_eq!(first_two.len(), 2);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Calls `callback` once per element until it returns `false`.
    ///
    /// Enumeration order is unspecified. As soon as the callback returns
    /// `false` no further elements are visited; if it always returns `true`
    /// every element is visited exactly once.
    ///
    /// The set is borrowed for the whole call, so the callback cannot
    /// insert or remove elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set = Set::from_items([1, 2, 3, 4, 5]);
    ///
    /// let mut visited = 0;
    /// set.range(|_| {
    ///     visited += 1;
    ///     visited < 2
    /// });
    /// assert_eq!(visited, 2);
    /// ```
    pub fn range<F>(&self, mut callback: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in &self.inner {
            if !callback(element) {
                return;
            }
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set holding the distinct values of `items`.
    ///
    /// Duplicates collapse to a single entry and input order is irrelevant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set = Set::from_items(["hello", "set", "hello"]);
    /// assert_eq!(set.len(), 2);
    ///
    /// let empty: Set<i32> = Set::from_items([]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.insert(items);
        set
    }

    /// Adds every item of `items` to the set.
    ///
    /// Items already present are left as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert([4u8, 3, 2, 1]);
    /// set.insert([1u8]);
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn insert<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend(items);
    }

    /// Adds a single element.
    ///
    /// Returns `true` if the element was not present before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert_one(1));
    /// assert!(!set.insert_one(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert_one(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present and is now gone, `false`
    /// if it was absent, in which case the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let mut set = Set::from_items([1, 2]);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set = Set::from_items(["hello".to_string(), "set".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("set"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let mut set = Set::from_items(1..=6);
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, Set::from_items([2, 4, 6]));
    /// ```
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
    }

    /// Shrinks the backing storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let subset = Set::from_items([1, 2]);
    /// let superset = Set::from_items([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = ordered_by_len(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Copies every element into a new `Vec`, in unspecified order.
    ///
    /// The vector owns its storage: changing it never affects the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set = Set::from_items([3, 1, 2]);
    /// let mut items = set.to_vec();
    /// items.push(10);
    ///
    /// assert_eq!(items.len(), 4);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set_a = Set::from_items(["hello", "set"]);
    /// let set_b = Set::from_items(["testing", "union", "set"]);
    /// let set_c = Set::from_items(["hello", "sets"]);
    ///
    /// let union = set_a.union(&set_b).union(&set_c);
    /// assert_eq!(union.len(), 5);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = ordered_by_len(self, other);

        let mut result = Self::with_capacity(larger.len());
        result.inner.extend(larger.iter().cloned());
        result.inner.extend(smaller.iter().cloned());
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    /// The smaller operand is iterated and each element is probed in the
    /// larger one, so the work is bounded by the smaller size.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set_a = Set::from_items(["hello", "set"]);
    /// let set_b = Set::from_items(["bye", "set"]);
    ///
    /// let intersection = set_a.intersection(&set_b);
    /// assert_eq!(intersection, Set::from_items(["set"]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = ordered_by_len(self, other);

        let mut result = Self::with_capacity(smaller.len());
        for element in smaller {
            if larger.contains(element) {
                result.inner.insert(element.clone());
            }
        }
        result
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in
    /// `other`. Only the probing direction depends on the operand sizes;
    /// the result is always `self` minus `other`.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let populated = Set::from_items(["hello", "new", "set"]);
    /// let empty: Set<&str> = Set::new();
    ///
    /// assert_eq!(populated.difference(&empty), populated);
    /// assert!(empty.difference(&populated).is_empty());
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if other.len() < self.len() {
            // Copy the receiver and strip the argument's members: |other| probes.
            let mut result = self.clone();
            for element in other {
                result.inner.remove(element);
            }
            result
        } else {
            let mut result = Self::with_capacity(self.len());
            for element in self {
                if !other.contains(element) {
                    result.inner.insert(element.clone());
                }
            }
            result
        }
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains elements that are in either set
    /// but not in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_algebra::Set;
    ///
    /// let set_a = Set::from_items([1, 2, 3]);
    /// let set_b = Set::from_items([2, 3, 4]);
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), Set::from_items([1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        for element in other {
            if !self.contains(element) {
                result.inner.insert(element.clone());
            }
        }
        result
    }
}

impl<T: Hash + Eq + Ord + Clone> Set<T> {
    /// Returns the elements in ascending order.
    ///
    /// Method form of [`sorted_items`].
    #[must_use]
    pub fn sorted_items(&self) -> Vec<T> {
        sorted_items(self)
    }
}

/// Returns the elements of `set` in strictly ascending order.
///
/// Only this operation needs `T: Ord`; sets of unordered element types
/// support everything else.
///
/// # Examples
///
/// ```rust
/// use hashset_algebra::{Set, sorted_items};
///
/// let mut set = Set::new();
/// set.insert([4u8, 3, 2, 1]);
///
/// assert_eq!(sorted_items(&set), vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn sorted_items<T: Ord + Clone>(set: &Set<T>) -> Vec<T> {
    let mut items: Vec<T> = set.iter().cloned().collect();
    // Elements are distinct, so stability is irrelevant.
    items.sort_unstable();
    items
}

/// Orders two sets as `(smaller, larger)`, preferring `first` on ties.
fn ordered_by_len<'a, T>(first: &'a Set<T>, second: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if first.len() <= second.len() {
        (first, second)
    } else {
        (second, first)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
pub struct Iter<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T: Hash + Eq, S: BuildHasher> From<HashSet<T, S>> for Set<T> {
    fn from(items: HashSet<T, S>) -> Self {
        let mut set = Self::with_capacity(items.len());
        set.insert(items);
        set
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Hash + Eq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// `&a | &b` is [`Set::union`].
    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// `&a & &b` is [`Set::intersection`].
    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// `&a - &b` is [`Set::difference`]: elements of `a` not in `b`.
    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// `&a ^ &b` is [`Set::symmetric_difference`].
    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Size hints are untrusted input; cap the up-front reservation.
        let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            set.insert_one(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
