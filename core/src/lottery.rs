//! Lotteries: probability distributions over a finite set of alternatives.
//!
//! A lottery may be partial (support below 1) while it is being built. Only a
//! fully supported lottery can be composed or simulated. Alternatives may
//! themselves be lotteries, see [`Alternative`].

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::rc::Rc;

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use thiserror::Error;
use welfare_types::{Element, FiniteSet, Probability, ProbabilityError};

/// Slack allowed when comparing a support sum against 1.
///
/// Without it `1/n` uniform lotteries whose terms round to `0.999…` would
/// never count as fully supported.
pub const SUPPORT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LotteryError {
    #[error(transparent)]
    Probability(#[from] ProbabilityError),
    #[error("{0} is not one of the lottery's alternatives")]
    NotAnAlternative(String),
    #[error("a uniform lottery needs at least one alternative")]
    EmptyAlternatives,
    #[error("lottery is already fully supported")]
    AlreadyFullySupported,
    #[error("adding probability {probability} to support {support} would exceed 1")]
    OverSupported { support: f64, probability: f64 },
    #[error("lottery is not fully supported (support {support})")]
    NotFullySupported { support: f64 },
    #[error("lotteries are defined over different alternatives")]
    MismatchedAlternatives,
}

/// A (possibly partial) distribution over `alternatives`.
///
/// # Invariants
///
/// - Every outcome key is a member of `alternatives`
/// - `support() <= 1` (up to [`SUPPORT_TOLERANCE`])
/// - `order` lists each outcome key once, in the order it was first recorded
#[derive(Clone)]
pub struct Lottery<A: Element> {
    alternatives: FiniteSet<A>,
    outcomes: HashMap<A, Probability>,
    order: Vec<A>,
}

impl<A: Element> Lottery<A> {
    /// A lottery with no outcomes yet.
    #[must_use]
    pub fn new(alternatives: FiniteSet<A>) -> Self {
        Self {
            alternatives,
            outcomes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Every alternative with probability `1 / |alternatives|`.
    pub fn uniform(alternatives: FiniteSet<A>) -> Result<Self, LotteryError> {
        if alternatives.is_empty() {
            return Err(LotteryError::EmptyAlternatives);
        }
        let share = Probability::new(1.0 / alternatives.cardinality() as f64)?;
        let mut lottery = Self::new(alternatives);
        for a in lottery.alternatives.elements() {
            lottery.record(a, share);
        }
        Ok(lottery)
    }

    /// The lottery that yields `alternative` with certainty.
    pub fn degenerate(alternatives: FiniteSet<A>, alternative: A) -> Result<Self, LotteryError> {
        let mut lottery = Self::new(alternatives);
        lottery.add_outcome(alternative, Probability::CERTAIN.value())?;
        Ok(lottery)
    }

    /// Record `probability` for `alternative`, overwriting any previous value.
    ///
    /// Fails without mutating if `probability` is outside `[0, 1]`, if the
    /// alternative is unknown, if the lottery is already fully supported, or
    /// if the new support would exceed 1.
    pub fn add_outcome(&mut self, alternative: A, probability: f64) -> Result<(), LotteryError> {
        let probability = Probability::new(probability)?;
        if !self.alternatives.contains(&alternative) {
            return Err(LotteryError::NotAnAlternative(format!("{alternative:?}")));
        }
        if self.fully_supported() {
            return Err(LotteryError::AlreadyFullySupported);
        }
        let support = self.support();
        if support + probability.value() > 1.0 + SUPPORT_TOLERANCE {
            return Err(LotteryError::OverSupported {
                support,
                probability: probability.value(),
            });
        }
        self.record(alternative, probability);
        Ok(())
    }

    fn record(&mut self, alternative: A, probability: Probability) {
        let previous = self.outcomes.insert(alternative.clone(), probability);
        if previous.is_none() {
            self.order.push(alternative);
        }
    }

    /// Probability of `alternative`; 0 when nothing was recorded for it.
    #[must_use]
    pub fn probability_of(&self, alternative: &A) -> f64 {
        self.outcomes.get(alternative).map_or(0.0, |p| p.value())
    }

    /// Recorded outcomes in recording order, including explicit zeros.
    pub fn outcomes(&self) -> impl Iterator<Item = &A> {
        self.order.iter()
    }

    #[must_use]
    pub fn alternatives(&self) -> &FiniteSet<A> {
        &self.alternatives
    }

    /// Number of recorded outcomes.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.order.len()
    }

    /// Sum of all recorded probabilities.
    #[must_use]
    pub fn support(&self) -> f64 {
        self.order.iter().map(|a| self.probability_of(a)).sum()
    }

    #[must_use]
    pub fn fully_supported(&self) -> bool {
        (self.support() - 1.0).abs() <= SUPPORT_TOLERANCE
    }

    /// Exactly one outcome, at probability 1.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match self.order.as_slice() {
            [only] => self.probability_of(only) == 1.0,
            _ => false,
        }
    }
}

impl<A: Element> fmt::Debug for Lottery<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.order.iter().map(|a| (a, self.probability_of(a))))
            .finish()
    }
}

/// The mixture `alpha * p + (1 - alpha) * q`.
///
/// Both lotteries must be fully supported and defined over equal alternative
/// sets. Alternatives whose mixed probability is exactly 0 are left out.
pub fn compose<A: Element>(
    p: &Lottery<A>,
    q: &Lottery<A>,
    alpha: f64,
) -> Result<Lottery<A>, LotteryError> {
    let alpha = Probability::new(alpha)?;
    for lottery in [p, q] {
        if !lottery.fully_supported() {
            return Err(LotteryError::NotFullySupported {
                support: lottery.support(),
            });
        }
    }
    if p.alternatives != q.alternatives {
        return Err(LotteryError::MismatchedAlternatives);
    }

    let mut mixed = Lottery::new(p.alternatives.clone());
    let keys = p
        .outcomes()
        .chain(q.outcomes().filter(|a| !p.outcomes.contains_key(*a)));
    for a in keys {
        let value = alpha.value() * p.probability_of(a)
            + alpha.complement().value() * q.probability_of(a);
        if value == 0.0 {
            continue;
        }
        mixed.record(a.clone(), Probability::new(value.min(1.0))?);
    }

    tracing::trace!(
        alpha = alpha.value(),
        outcomes = mixed.cardinality(),
        "composed lotteries"
    );
    Ok(mixed)
}

/// Draw one outcome using the thread-local generator.
pub fn simulate<A: Element>(lottery: &Lottery<A>) -> Result<A, LotteryError> {
    select(lottery, rand::random::<f64>())
}

/// Draw one outcome from a caller-supplied generator, for reproducible runs.
pub fn simulate_with<A: Element>(
    lottery: &Lottery<A>,
    rng: &mut StdRng,
) -> Result<A, LotteryError> {
    let draw: f64 = StandardUniform.sample(rng);
    select(lottery, draw)
}

/// Pick the first outcome whose cumulative probability exceeds `draw`.
///
/// Rounding can leave the cumulative sum just short of a draw close to 1; the
/// last outcome is returned in that case.
fn select<A: Element>(lottery: &Lottery<A>, draw: f64) -> Result<A, LotteryError> {
    if !lottery.fully_supported() {
        return Err(LotteryError::NotFullySupported {
            support: lottery.support(),
        });
    }

    let mut cumulative = 0.0;
    let mut last = None;
    for a in lottery.outcomes() {
        let p = lottery.probability_of(a);
        if p == 0.0 {
            continue;
        }
        cumulative += p;
        if cumulative > draw {
            return Ok(a.clone());
        }
        last = Some(a);
    }

    // Full support guarantees at least one outcome with positive probability.
    last.cloned().ok_or(LotteryError::NotFullySupported {
        support: lottery.support(),
    })
}

// ============================================================================
// Compound lotteries
// ============================================================================

/// An alternative that is either a plain value or itself a lottery.
///
/// Nested lotteries are shared through `Rc` and compare by identity, so two
/// separately built lotteries with identical distributions are distinct
/// alternatives. Nothing flattens compound lotteries automatically; utility
/// functions match on [`Alternative::Lottery`] and recurse themselves.
pub enum Alternative<V: Element> {
    Outcome(V),
    Lottery(Rc<Lottery<Alternative<V>>>),
}

impl<V: Element> Alternative<V> {
    #[must_use]
    pub fn lottery(lottery: Lottery<Alternative<V>>) -> Self {
        Self::Lottery(Rc::new(lottery))
    }

    #[must_use]
    pub fn as_outcome(&self) -> Option<&V> {
        match self {
            Alternative::Outcome(v) => Some(v),
            Alternative::Lottery(_) => None,
        }
    }
}

impl<V: Element> Clone for Alternative<V> {
    fn clone(&self) -> Self {
        match self {
            Alternative::Outcome(v) => Alternative::Outcome(v.clone()),
            Alternative::Lottery(l) => Alternative::Lottery(Rc::clone(l)),
        }
    }
}

impl<V: Element> PartialEq for Alternative<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Alternative::Outcome(a), Alternative::Outcome(b)) => a == b,
            (Alternative::Lottery(a), Alternative::Lottery(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<V: Element> Eq for Alternative<V> {}

impl<V: Element> Hash for Alternative<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Alternative::Outcome(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            Alternative::Lottery(l) => {
                1u8.hash(state);
                ptr::hash(Rc::as_ptr(l), state);
            }
        }
    }
}

impl<V: Element> fmt::Debug for Alternative<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::Outcome(v) => v.fmt(f),
            Alternative::Lottery(l) => write!(f, "Lottery{l:?}"),
        }
    }
}

impl<V: Element> From<V> for Alternative<V> {
    fn from(value: V) -> Self {
        Alternative::Outcome(value)
    }
}
