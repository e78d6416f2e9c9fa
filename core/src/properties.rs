//! Structural properties of binary relations.
//!
//! Each check is a free function over [`BinaryRelation`] so the same algorithm
//! serves stored, function-backed, converse and utility relations alike.
//! Results are computed fresh from the current state on every call.
//!
//! These are the textbook quadratic and cubic scans. They are meant for the
//! small universes social-choice examples live in.

use welfare_types::Element;

use crate::relation::BinaryRelation;

/// Every element relates to itself.
#[must_use]
pub fn reflexive<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    b.universe().iter().all(|e| b.relates(e, e))
}

/// Every pair is comparable in at least one direction.
#[must_use]
pub fn complete<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    let universe = b.universe();
    for x in universe {
        for y in universe {
            if !b.relates(x, y) && !b.relates(y, x) {
                return false;
            }
        }
    }
    true
}

/// `x R y` and `y R z` imply `x R z`.
///
/// An incomplete relation is never transitive in this model, so completeness
/// is checked first.
#[must_use]
pub fn transitive<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    if !complete(b) {
        return false;
    }

    let universe = b.universe();
    for x in universe {
        for y in universe {
            if !b.relates(x, y) {
                continue;
            }
            for z in universe {
                if b.relates(y, z) && !b.relates(x, z) {
                    return false;
                }
            }
        }
    }

    true
}

/// `x R y` implies `y R x`.
#[must_use]
pub fn symmetric<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    let universe = b.universe();
    for x in universe {
        for y in universe {
            if b.relates(x, y) && !b.relates(y, x) {
                return false;
            }
        }
    }
    true
}

/// `x R y` and `y R x` imply `x == y`.
#[must_use]
pub fn antisymmetric<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    let universe = b.universe();
    for x in universe {
        for y in universe {
            if x != y && b.relates(x, y) && b.relates(y, x) {
                return false;
            }
        }
    }
    true
}

/// Complete and transitive.
#[must_use]
pub fn weak_order<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    complete(b) && transitive(b)
}

/// A weak order with no ties between distinct elements.
#[must_use]
pub fn strict_order<E: Element, R: BinaryRelation<E> + ?Sized>(b: &R) -> bool {
    weak_order(b) && antisymmetric(b)
}

/// All relations are defined over equal universes.
///
/// Universes are compared element for element. An empty slice is trivially
/// composable.
#[must_use]
pub fn composable<E: Element, R: BinaryRelation<E>>(relations: &[R]) -> bool {
    match relations.split_first() {
        Some((first, rest)) => rest.iter().all(|r| r.universe() == first.universe()),
        None => true,
    }
}
