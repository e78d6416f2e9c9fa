//! Shared test fixtures
//!
//! Universes, preferences and lotteries reused across the integration suite.

#![allow(dead_code)]

use welfare_core::{FiniteSet, Lottery, PhysicalRelation, Relation};

pub const EPS: f64 = 1e-6;

/// {1, ..., 9, 0} in that order.
pub fn digits() -> FiniteSet<i32> {
    FiniteSet::with_elements([1, 2, 3, 4, 5, 6, 7, 8, 9, 0])
}

/// The successor pairs of "greater than" on the digits, without closure.
pub fn greater_than_chain() -> Relation<i32> {
    let mut b = Relation::new(digits());
    for (x, y) in [
        (2, 1),
        (3, 2),
        (4, 3),
        (5, 4),
        (6, 5),
        (7, 6),
        (8, 7),
        (9, 8),
        (1, 0),
    ] {
        b.add_relation(x, y).expect("digits are in the universe");
    }
    b
}

pub fn activities() -> FiniteSet<&'static str> {
    FiniteSet::with_elements(["pushups", "reading", "sleep"])
}

/// A preference over the activities holding exactly `pairs`.
pub fn activity_preference(pairs: &[(&'static str, &'static str)]) -> Relation<&'static str> {
    let mut r = Relation::new(activities());
    for (x, y) in pairs {
        r.add_relation(*x, *y).expect("activity universe");
    }
    r
}

/// The health / philosophy / humanity profile.
pub fn elos() -> [Relation<&'static str>; 3] {
    [
        activity_preference(&[("sleep", "pushups"), ("pushups", "reading")]),
        activity_preference(&[("reading", "pushups"), ("pushups", "sleep")]),
        activity_preference(&[("reading", "sleep"), ("sleep", "pushups")]),
    ]
}

pub fn abcd() -> FiniteSet<&'static str> {
    FiniteSet::with_elements(["A", "B", "C", "D"])
}

/// A lottery over {A, B, C, D} with the given probabilities in that order.
pub fn abcd_lottery(probabilities: [f64; 4]) -> Lottery<&'static str> {
    let mut l = Lottery::new(abcd());
    for (a, p) in ["A", "B", "C", "D"].into_iter().zip(probabilities) {
        l.add_outcome(a, p).expect("support at most 1");
    }
    l
}
