//! Core domain logic for welfare.
//!
//! Binary relations over a finite universe and their structural properties,
//! relations induced by utility functions, lotteries and expected utility,
//! and social welfare functions that aggregate individual preferences.
//!
//! Everything here is synchronous and in-memory. Precondition violations
//! (an element outside the universe, a probability outside `[0, 1]`, an empty
//! profile) are reported as typed errors before any state changes.

pub mod lottery;
pub mod properties;
pub mod relation;
pub mod social;
pub mod utility;

pub use lottery::{
    Alternative, Lottery, LotteryError, SUPPORT_TOLERANCE, compose, simulate, simulate_with,
};
pub use properties::{
    antisymmetric, complete, composable, reflexive, strict_order, symmetric, transitive, weak_order,
};
pub use relation::{
    BinaryRelation, FunctionRelation, PhysicalRelation, Position, Relation, RelationError, Reverse,
};
pub use social::{
    AntiDictatorship, BordaCounting, Constant, Dictatorship, PairwiseMajority, PreferenceProfile,
    SocialChoiceError, SocialWelfareFunction, WeightedMajority, anti_dictatorship, borda_count,
    borda_counting, constant, count_preference_of, count_weighted_preference_of, dictatorship,
    most_preferred, pairwise_majority, profile_borda_count, profile_universe, rational,
    weighted_majority,
};
pub use utility::{UtilityRelation, expected_utility};
pub use welfare_types::{
    Element, FiniteSet, Individual, Membership, Predicate, Probability, ProbabilityError, Utility,
};
