//! Utility functions, the relations they induce, and expected utility.

use welfare_types::{Element, FiniteSet, Utility};

use crate::lottery::Lottery;
use crate::relation::BinaryRelation;

/// A relation synthesized from a utility function: `x` relates to `y` iff
/// `u(x) >= u(y)`.
///
/// Nothing is stored. For any total real-valued `u` the relation is
/// reflexive, complete and transitive (von Neumann–Morgenstern). Ties relate
/// in both directions.
pub struct UtilityRelation<E: Element, F> {
    alternatives: FiniteSet<E>,
    utility: F,
}

impl<E: Element, F> UtilityRelation<E, F>
where
    F: Fn(&E) -> Utility,
{
    #[must_use]
    pub fn new(alternatives: FiniteSet<E>, utility: F) -> Self {
        Self {
            alternatives,
            utility,
        }
    }

    #[must_use]
    pub fn utility_of(&self, alternative: &E) -> Utility {
        (self.utility)(alternative)
    }
}

impl<E: Element, F> BinaryRelation<E> for UtilityRelation<E, F>
where
    F: Fn(&E) -> Utility,
{
    fn universe(&self) -> &FiniteSet<E> {
        &self.alternatives
    }

    fn relates(&self, x: &E, y: &E) -> bool {
        (self.utility)(x) >= (self.utility)(y)
    }
}

/// `Σ u(o) · p(o)` over the lottery's recorded outcomes.
///
/// Partial lotteries are accepted and yield a partial expectation. Compound
/// lotteries are not flattened: a utility over
/// [`Alternative`](crate::lottery::Alternative) recurses into nested lotteries
/// itself.
#[must_use]
pub fn expected_utility<A, F>(lottery: &Lottery<A>, utility: F) -> Utility
where
    A: Element,
    F: Fn(&A) -> Utility,
{
    lottery
        .outcomes()
        .map(|o| utility(o) * lottery.probability_of(o))
        .sum()
}
