//! Core domain types for welfare.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the finite sets every structure is built over, validated probabilities,
//! and the identity of individuals inside a preference profile.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod ids;
mod probability;
mod set;

pub use ids::Individual;
pub use probability::{Probability, ProbabilityError};
pub use set::{Element, FiniteSet, Membership, Predicate};

/// Real-valued desirability of an alternative.
pub type Utility = f64;
