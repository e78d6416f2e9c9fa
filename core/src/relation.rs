//! Binary relations over a single finite universe.
//!
//! A relation `B` on a set `S` is a subset of `S × S`. Only homogeneous
//! relations are modelled: both components of every pair come from the same
//! universe.
//!
//! [`BinaryRelation`] is the read capability every variant provides.
//! [`PhysicalRelation`] adds piecewise construction for the variants that
//! actually store their pairs. The property checks in
//! [`crate::properties`] are written once against [`BinaryRelation`].

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;
use welfare_types::{Element, FiniteSet};

/// Which component of an ordered pair failed a universe check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::First => f.write_str("first"),
            Position::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    #[error("{position} element {element} is not contained in the universe")]
    NotInUniverse { position: Position, element: String },
}

impl RelationError {
    fn not_in_universe<E: fmt::Debug>(position: Position, element: &E) -> Self {
        Self::NotInUniverse {
            position,
            element: format!("{element:?}"),
        }
    }
}

/// Read access to a relation over `universe()`.
///
/// Implementors provide [`relates`](Self::relates), a raw lookup that treats
/// any pair it does not know about as unrelated. Callers holding elements of
/// unknown provenance should use [`contains_relation`](Self::contains_relation),
/// which checks universe membership first.
pub trait BinaryRelation<E: Element> {
    fn universe(&self) -> &FiniteSet<E>;

    /// Whether `x` relates to `y`, without checking membership.
    fn relates(&self, x: &E, y: &E) -> bool;

    /// Whether `x` relates to `y`.
    ///
    /// Fails if either element lies outside the universe.
    fn contains_relation(&self, x: &E, y: &E) -> Result<bool, RelationError> {
        check_pair(self.universe(), x, y)?;
        Ok(self.relates(x, y))
    }
}

/// A relation whose pairs are stored and can be edited one at a time.
pub trait PhysicalRelation<E: Element>: BinaryRelation<E> {
    /// Record `(x, y)`. Idempotent.
    fn add_relation(&mut self, x: E, y: E) -> Result<(), RelationError>;

    /// Forget `(x, y)`. Removing an absent pair is a no-op.
    fn remove_relation(&mut self, x: &E, y: &E) -> Result<(), RelationError>;
}

pub(crate) fn check_pair<E: Element>(
    universe: &FiniteSet<E>,
    x: &E,
    y: &E,
) -> Result<(), RelationError> {
    if !universe.contains(x) {
        return Err(RelationError::not_in_universe(Position::First, x));
    }
    if !universe.contains(y) {
        return Err(RelationError::not_in_universe(Position::Second, y));
    }
    Ok(())
}

impl<E: Element, R: BinaryRelation<E> + ?Sized> BinaryRelation<E> for &R {
    fn universe(&self) -> &FiniteSet<E> {
        (**self).universe()
    }

    fn relates(&self, x: &E, y: &E) -> bool {
        (**self).relates(x, y)
    }
}

impl<E: Element, R: BinaryRelation<E> + ?Sized> BinaryRelation<E> for Box<R> {
    fn universe(&self) -> &FiniteSet<E> {
        (**self).universe()
    }

    fn relates(&self, x: &E, y: &E) -> bool {
        (**self).relates(x, y)
    }
}

// ============================================================================
// Stored relation
// ============================================================================

/// A finite relation stored as an adjacency map `x -> {y | x relates to y}`.
///
/// Directionality is explicit: recording `(x, y)` says nothing about `(y, x)`.
#[derive(Clone)]
pub struct Relation<E: Element> {
    universe: FiniteSet<E>,
    successors: HashMap<E, HashSet<E>>,
}

impl<E: Element> Relation<E> {
    /// An empty relation over `universe`.
    #[must_use]
    pub fn new(universe: FiniteSet<E>) -> Self {
        Self {
            universe,
            successors: HashMap::new(),
        }
    }

    /// Snapshot any relation into stored form by querying every ordered pair
    /// of its universe.
    #[must_use]
    pub fn from_relation<R: BinaryRelation<E> + ?Sized>(relation: &R) -> Self {
        Self::from_fn(relation.universe().clone(), |x, y| relation.relates(x, y))
    }

    /// Build a stored relation by evaluating `related` on every ordered pair.
    #[must_use]
    pub fn from_fn(universe: FiniteSet<E>, mut related: impl FnMut(&E, &E) -> bool) -> Self {
        let mut successors: HashMap<E, HashSet<E>> = HashMap::new();
        for x in &universe {
            for y in &universe {
                if related(x, y) {
                    successors.entry(x.clone()).or_default().insert(y.clone());
                }
            }
        }
        Self {
            universe,
            successors,
        }
    }

    /// Every stored pair, ordered by the universe's iteration order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(E, E)> {
        let mut pairs = Vec::new();
        for x in &self.universe {
            let Some(bucket) = self.successors.get(x) else {
                continue;
            };
            for y in &self.universe {
                if bucket.contains(y) {
                    pairs.push((x.clone(), y.clone()));
                }
            }
        }
        pairs
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.successors.values().map(HashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Element> BinaryRelation<E> for Relation<E> {
    fn universe(&self) -> &FiniteSet<E> {
        &self.universe
    }

    fn relates(&self, x: &E, y: &E) -> bool {
        self.successors
            .get(x)
            .is_some_and(|bucket| bucket.contains(y))
    }
}

impl<E: Element> PhysicalRelation<E> for Relation<E> {
    fn add_relation(&mut self, x: E, y: E) -> Result<(), RelationError> {
        check_pair(&self.universe, &x, &y)?;
        self.successors.entry(x).or_default().insert(y);
        Ok(())
    }

    fn remove_relation(&mut self, x: &E, y: &E) -> Result<(), RelationError> {
        check_pair(&self.universe, x, y)?;
        if let Some(bucket) = self.successors.get_mut(x) {
            bucket.remove(y);
            if bucket.is_empty() {
                self.successors.remove(x);
            }
        }
        Ok(())
    }
}

impl<E: Element> fmt::Debug for Relation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("universe", &self.universe)
            .field("pairs", &self.pairs())
            .finish()
    }
}

// ============================================================================
// Function-backed relation
// ============================================================================

/// A relation defined by a predicate over pairs rather than stored pairs.
pub struct FunctionRelation<E: Element, F> {
    universe: FiniteSet<E>,
    related: F,
}

impl<E: Element, F> FunctionRelation<E, F>
where
    F: Fn(&E, &E) -> bool,
{
    #[must_use]
    pub fn new(universe: FiniteSet<E>, related: F) -> Self {
        Self { universe, related }
    }
}

impl<E: Element, F> BinaryRelation<E> for FunctionRelation<E, F>
where
    F: Fn(&E, &E) -> bool,
{
    fn universe(&self) -> &FiniteSet<E> {
        &self.universe
    }

    fn relates(&self, x: &E, y: &E) -> bool {
        (self.related)(x, y)
    }
}

// ============================================================================
// Converse view
// ============================================================================

/// The converse of another relation: `(x, y)` holds iff `(y, x)` holds in the
/// wrapped relation.
#[derive(Debug, Clone)]
pub struct Reverse<R>(R);

impl<R> Reverse<R> {
    #[must_use]
    pub fn new(relation: R) -> Self {
        Self(relation)
    }
}

impl<E: Element, R: BinaryRelation<E>> BinaryRelation<E> for Reverse<R> {
    fn universe(&self) -> &FiniteSet<E> {
        self.0.universe()
    }

    fn relates(&self, x: &E, y: &E) -> bool {
        self.0.relates(y, x)
    }
}
