//! Preference aggregation.
//!
//! A [`PreferenceProfile`] is an ordered list of individual preferences over
//! one shared universe. A [`SocialWelfareFunction`] turns a profile into a
//! single collective preference, and [`most_preferred`] picks a winner from
//! any preference.
//!
//! Aggregates are materialized into stored [`Relation`]s, so the result owns
//! its pairs and does not borrow the profile it came from.

use std::fmt;

use thiserror::Error;
use welfare_types::{Element, FiniteSet, Individual};

use crate::properties::{composable, weak_order};
use crate::relation::{BinaryRelation, Relation, RelationError, Reverse, check_pair};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialChoiceError {
    #[error("preference profile is empty")]
    EmptyProfile,
    #[error("preference of individual {individual} is not defined over the profile's universe")]
    IncomposableProfile { individual: Individual },
    #[error("no individual {individual} in a profile of {size}")]
    NoSuchIndividual { individual: Individual, size: usize },
    #[error("cannot choose from an empty universe")]
    EmptyUniverse,
    #[error(transparent)]
    Relation(#[from] RelationError),
}

/// A preference is rational when it is a weak order.
#[must_use]
pub fn rational<E: Element, R: BinaryRelation<E> + ?Sized>(preference: &R) -> bool {
    weak_order(preference)
}

/// The universe shared by every preference in `preferences`.
///
/// Fails if there are no preferences or if any of them is defined over a
/// different universe than the first.
pub fn profile_universe<E: Element, R: BinaryRelation<E>>(
    preferences: &[R],
) -> Result<&FiniteSet<E>, SocialChoiceError> {
    let (first, rest) = preferences
        .split_first()
        .ok_or(SocialChoiceError::EmptyProfile)?;
    if !composable(preferences) {
        let offender = rest
            .iter()
            .position(|p| p.universe() != first.universe())
            .map_or(0, |i| i + 1);
        return Err(SocialChoiceError::IncomposableProfile {
            individual: Individual::new(offender),
        });
    }
    Ok(first.universe())
}

/// A non-empty, composable, ordered list of preferences.
///
/// The position of a preference is the identity of the individual holding it.
pub struct PreferenceProfile<'a, E: Element> {
    preferences: Vec<&'a dyn BinaryRelation<E>>,
}

impl<'a, E: Element> PreferenceProfile<'a, E> {
    pub fn new(preferences: Vec<&'a dyn BinaryRelation<E>>) -> Result<Self, SocialChoiceError> {
        profile_universe(&preferences)?;
        Ok(Self { preferences })
    }

    #[must_use]
    pub fn universe(&self) -> &'a FiniteSet<E> {
        self.preferences[0].universe()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    pub fn get(
        &self,
        individual: Individual,
    ) -> Result<&'a dyn BinaryRelation<E>, SocialChoiceError> {
        self.preferences
            .get(individual.index())
            .copied()
            .ok_or(SocialChoiceError::NoSuchIndividual {
                individual,
                size: self.preferences.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Individual, &'a dyn BinaryRelation<E>)> + '_ {
        self.preferences
            .iter()
            .enumerate()
            .map(|(i, p)| (Individual::new(i), *p))
    }

    fn check(&self, x: &E, y: &E) -> Result<(), SocialChoiceError> {
        check_pair(self.universe(), x, y)?;
        Ok(())
    }
}

impl<E: Element> fmt::Debug for PreferenceProfile<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceProfile")
            .field("universe", self.universe())
            .field("individuals", &self.len())
            .finish()
    }
}

// ============================================================================
// Counting
// ============================================================================

fn tally<E: Element>(
    x: &E,
    y: &E,
    profile: &PreferenceProfile<'_, E>,
    weight: &impl Fn(Individual) -> f64,
) -> f64 {
    profile
        .iter()
        .filter(|(_, p)| p.relates(x, y))
        .map(|(i, _)| weight(i))
        .sum()
}

fn borda<E: Element, R: BinaryRelation<E> + ?Sized>(x: &E, preference: &R) -> usize {
    preference
        .universe()
        .iter()
        .filter(|y| preference.relates(x, y))
        .count()
}

/// Total weight of the individuals who relate `x` to `y`.
pub fn count_weighted_preference_of<E: Element>(
    x: &E,
    y: &E,
    profile: &PreferenceProfile<'_, E>,
    weight: impl Fn(Individual) -> f64,
) -> Result<f64, SocialChoiceError> {
    profile.check(x, y)?;
    Ok(tally(x, y, profile, &weight))
}

/// Number of individuals who relate `x` to `y`.
pub fn count_preference_of<E: Element>(
    x: &E,
    y: &E,
    profile: &PreferenceProfile<'_, E>,
) -> Result<f64, SocialChoiceError> {
    count_weighted_preference_of(x, y, profile, |_| 1.0)
}

/// Number of alternatives `x` is preferred or tied to under `preference`,
/// itself included when the preference is reflexive.
pub fn borda_count<E: Element, R: BinaryRelation<E> + ?Sized>(
    x: &E,
    preference: &R,
) -> Result<usize, RelationError> {
    check_pair(preference.universe(), x, x)?;
    Ok(borda(x, preference))
}

/// Sum of [`borda_count`] over every individual in the profile.
pub fn profile_borda_count<E: Element>(
    x: &E,
    profile: &PreferenceProfile<'_, E>,
) -> Result<usize, SocialChoiceError> {
    profile.check(x, x)?;
    Ok(profile.iter().map(|(_, p)| borda(x, p)).sum())
}

// ============================================================================
// Social welfare functions
// ============================================================================

/// `x` is collectively preferred to `y` when at least as many individuals
/// prefer `x` to `y` as the other way round.
///
/// Ties include both directions, so the result is always complete. It need
/// not be transitive: majority rule admits Condorcet cycles.
#[must_use]
pub fn pairwise_majority<E: Element>(profile: &PreferenceProfile<'_, E>) -> Relation<E> {
    weighted_majority(profile, |_| 1.0)
}

/// [`pairwise_majority`] with an arbitrary weight per individual.
#[must_use]
pub fn weighted_majority<E: Element>(
    profile: &PreferenceProfile<'_, E>,
    weight: impl Fn(Individual) -> f64,
) -> Relation<E> {
    let aggregate = Relation::from_fn(profile.universe().clone(), |x, y| {
        tally(x, y, profile, &weight) >= tally(y, x, profile, &weight)
    });
    tracing::debug!(
        individuals = profile.len(),
        pairs = aggregate.len(),
        "aggregated profile by majority"
    );
    aggregate
}

/// Rank alternatives by their total Borda score; ties include both directions.
#[must_use]
pub fn borda_counting<E: Element>(profile: &PreferenceProfile<'_, E>) -> Relation<E> {
    let universe = profile.universe();
    let scores: Vec<usize> = universe
        .iter()
        .map(|x| profile.iter().map(|(_, p)| borda(x, p)).sum())
        .collect();
    let score_of = |x: &E| {
        universe
            .iter()
            .position(|e| e == x)
            .map_or(0, |i| scores[i])
    };

    let aggregate = Relation::from_fn(universe.clone(), |x, y| score_of(x) >= score_of(y));
    tracing::debug!(
        individuals = profile.len(),
        ?scores,
        "aggregated profile by Borda count"
    );
    aggregate
}

/// Individual `individual` decides for everyone.
pub fn dictatorship<'a, E: Element>(
    profile: &PreferenceProfile<'a, E>,
    individual: Individual,
) -> Result<&'a dyn BinaryRelation<E>, SocialChoiceError> {
    profile.get(individual)
}

/// Society adopts the exact opposite of `individual`'s preference.
pub fn anti_dictatorship<'a, E: Element>(
    profile: &PreferenceProfile<'a, E>,
    individual: Individual,
) -> Result<Reverse<&'a dyn BinaryRelation<E>>, SocialChoiceError> {
    profile.get(individual).map(Reverse::new)
}

/// Ignore the profile entirely.
#[must_use]
pub fn constant<'r, E: Element, R: BinaryRelation<E> + ?Sized>(
    _profile: &PreferenceProfile<'_, E>,
    fixed: &'r R,
) -> &'r R {
    fixed
}

/// A rule that maps a preference profile to one collective preference.
pub trait SocialWelfareFunction<E: Element> {
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseMajority;

#[derive(Debug, Clone, Copy, Default)]
pub struct BordaCounting;

#[derive(Debug, Clone, Copy)]
pub struct Dictatorship(pub Individual);

#[derive(Debug, Clone, Copy)]
pub struct AntiDictatorship(pub Individual);

#[derive(Debug, Clone)]
pub struct Constant<E: Element>(pub Relation<E>);

#[derive(Debug, Clone, Copy)]
pub struct WeightedMajority<W>(pub W);

impl<E: Element> SocialWelfareFunction<E> for PairwiseMajority {
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        Ok(pairwise_majority(profile))
    }
}

impl<E: Element> SocialWelfareFunction<E> for BordaCounting {
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        Ok(borda_counting(profile))
    }
}

impl<E: Element> SocialWelfareFunction<E> for Dictatorship {
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        dictatorship(profile, self.0).map(Relation::from_relation)
    }
}

impl<E: Element> SocialWelfareFunction<E> for AntiDictatorship {
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        anti_dictatorship(profile, self.0).map(|r| Relation::from_relation(&r))
    }
}

impl<E: Element> SocialWelfareFunction<E> for Constant<E> {
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        Ok(constant(profile, &self.0).clone())
    }
}

impl<E: Element, W> SocialWelfareFunction<E> for WeightedMajority<W>
where
    W: Fn(Individual) -> f64,
{
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        Ok(weighted_majority(profile, &self.0))
    }
}

impl<E: Element, F> SocialWelfareFunction<E> for F
where
    F: Fn(&PreferenceProfile<'_, E>) -> Result<Relation<E>, SocialChoiceError>,
{
    fn aggregate(
        &self,
        profile: &PreferenceProfile<'_, E>,
    ) -> Result<Relation<E>, SocialChoiceError> {
        self(profile)
    }
}

// ============================================================================
// Choice
// ============================================================================

/// Single-elimination scan for the most preferred alternative.
///
/// The first element of the universe starts as the incumbent. A challenger
/// replaces it only if the challenger is preferred to the incumbent and the
/// incumbent is not also preferred to the challenger, so ties keep the
/// incumbent.
pub fn most_preferred<E: Element, R: BinaryRelation<E> + ?Sized>(
    preference: &R,
) -> Result<E, SocialChoiceError> {
    let mut candidates = preference.universe().iter();
    let mut best = candidates.next().ok_or(SocialChoiceError::EmptyUniverse)?;
    for challenger in candidates {
        if preference.relates(challenger, best) && !preference.relates(best, challenger) {
            best = challenger;
        }
    }
    tracing::trace!(winner = ?best, "most preferred alternative");
    Ok(best.clone())
}
