//! Finite sets of opaque elements.
//!
//! [`FiniteSet`] is the universe every relation and lottery is defined over.
//! Membership is answered by a hash lookup; iteration follows insertion order
//! so that scans over a universe (choice functions, lottery sampling) are
//! reproducible.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::slice;

/// Anything that can live in a [`FiniteSet`].
///
/// Identity is value equality. The blanket impl means callers never implement
/// this by hand.
pub trait Element: Clone + Eq + Hash + fmt::Debug {}

impl<T> Element for T where T: Clone + Eq + Hash + fmt::Debug {}

/// A set whose membership is decided by [`Membership::contains`] alone.
///
/// Physical sets implement it by lookup; [`Predicate`] implements it with a
/// closure, which lets an infinite set (the primes, the even numbers) answer
/// membership questions without enumerating anything.
pub trait Membership<E> {
    fn contains(&self, element: &E) -> bool;
}

/// A set defined by a predicate rather than by its elements.
pub struct Predicate<F>(F);

impl<F> Predicate<F> {
    #[must_use]
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<E, F> Membership<E> for Predicate<F>
where
    F: Fn(&E) -> bool,
{
    fn contains(&self, element: &E) -> bool {
        (self.0)(element)
    }
}

/// An unordered collection of unique elements.
///
/// # Invariants
///
/// - `cardinality() == elements().len()`
/// - `order` holds exactly the members of `members`, each once
#[derive(Clone)]
pub struct FiniteSet<E: Element> {
    members: HashSet<E>,
    order: Vec<E>,
}

impl<E: Element> FiniteSet<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Build a set from a sequence, dropping repeated elements.
    pub fn with_elements(elements: impl IntoIterator<Item = E>) -> Self {
        let mut set = Self::new();
        for element in elements {
            set.add(element);
        }
        set
    }

    /// Include `element` in the set.
    ///
    /// Returns `true` if the element was already a member, in which case the
    /// set is unchanged.
    pub fn add(&mut self, element: E) -> bool {
        if self.members.contains(&element) {
            return true;
        }
        self.members.insert(element.clone());
        self.order.push(element);
        false
    }

    /// Exclude `element` from the set.
    ///
    /// Returns `true` if the element was a member before the call.
    pub fn remove(&mut self, element: &E) -> bool {
        if !self.members.remove(element) {
            return false;
        }
        self.order.retain(|e| e != element);
        true
    }

    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.members.contains(element)
    }

    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Snapshot of the members. Mutating the returned vector does not touch
    /// the set.
    #[must_use]
    pub fn elements(&self) -> Vec<E> {
        self.order.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.order.iter()
    }
}

impl<E: Element> Default for FiniteSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Membership<E> for FiniteSet<E> {
    fn contains(&self, element: &E) -> bool {
        self.members.contains(element)
    }
}

/// Sets are equal when they hold the same elements; insertion order is ignored.
impl<E: Element> PartialEq for FiniteSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<E: Element> Eq for FiniteSet<E> {}

impl<E: Element> fmt::Debug for FiniteSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.order.iter()).finish()
    }
}

impl<E: Element> FromIterator<E> for FiniteSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::with_elements(iter)
    }
}

impl<'a, E: Element> IntoIterator for &'a FiniteSet<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
