//! Lottery construction, composition, simulation and expected utility

use rand::SeedableRng;
use rand::rngs::StdRng;
use welfare_core::{
    Alternative, FiniteSet, Lottery, LotteryError, Utility, compose, expected_utility, simulate,
    simulate_with,
};

use crate::common::{EPS, abcd, abcd_lottery};

#[test]
fn uniform_over_two_alternatives() {
    let l = Lottery::uniform(FiniteSet::with_elements(["A", "B"])).unwrap();
    assert_eq!(l.probability_of(&"A"), 0.5);
    assert_eq!(l.probability_of(&"B"), 0.5);
    assert!(l.fully_supported());
}

#[test]
fn compose_at_half_is_pointwise_average() {
    let p = abcd_lottery([0.2, 0.3, 0.4, 0.1]);
    let q = abcd_lottery([0.1, 0.4, 0.3, 0.2]);
    let mixed = compose(&p, &q, 0.5).unwrap();
    for a in ["A", "B", "C", "D"] {
        let expected = (p.probability_of(&a) + q.probability_of(&a)) / 2.0;
        assert!((mixed.probability_of(&a) - expected).abs() < EPS);
    }
    assert!(mixed.fully_supported());
}

#[test]
fn add_outcome_after_full_support_fails() {
    let mut l = abcd_lottery([0.2, 0.3, 0.4, 0.1]);
    assert_eq!(
        l.add_outcome("B", 0.1),
        Err(LotteryError::AlreadyFullySupported)
    );
}

#[test]
fn expected_utility_is_three_point_three() {
    let l = abcd_lottery([0.2, 0.3, 0.4, 0.1]);
    let u = |a: &&str| -> Utility {
        match *a {
            "A" => 1.0,
            "B" => 3.0,
            "C" => 5.0,
            _ => 2.0,
        }
    };
    assert!((expected_utility(&l, u) - 3.3).abs() < EPS);
}

fn letters(a: &Alternative<&'static str>) -> Utility {
    match a {
        Alternative::Outcome("X" | "A") => 4.0,
        Alternative::Outcome("Y") => 8.0,
        Alternative::Outcome(_) => 0.0,
        Alternative::Lottery(inner) => expected_utility(&**inner, letters),
    }
}

#[test]
fn nested_lottery_expected_utility_is_five() {
    let inner = Lottery::uniform(FiniteSet::with_elements([
        Alternative::from("X"),
        Alternative::from("Y"),
    ]))
    .unwrap();
    assert!((expected_utility(&inner, letters) - 6.0).abs() < EPS);

    let outer = Lottery::uniform(FiniteSet::with_elements([
        Alternative::from("A"),
        Alternative::lottery(inner),
    ]))
    .unwrap();
    assert!((expected_utility(&outer, letters) - 5.0).abs() < EPS);
}

#[test]
fn simulate_returns_recorded_outcomes() {
    let mut l = Lottery::new(abcd());
    l.add_outcome("A", 0.6).unwrap();
    l.add_outcome("D", 0.4).unwrap();
    for _ in 0..500 {
        let drawn = simulate(&l).unwrap();
        assert!(drawn == "A" || drawn == "D", "drew {drawn}");
    }
}

#[test]
fn simulate_rejects_partial_lottery() {
    let mut l = Lottery::new(abcd());
    l.add_outcome("A", 0.6).unwrap();
    assert!(matches!(
        simulate(&l),
        Err(LotteryError::NotFullySupported { .. })
    ));
}

#[test]
fn seeded_draws_roughly_follow_the_distribution() {
    let l = abcd_lottery([0.5, 0.0, 0.0, 0.5]);
    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 2000;
    let hits = (0..draws)
        .filter(|_| simulate_with(&l, &mut rng).unwrap() == "A")
        .count();
    let share = hits as f64 / f64::from(draws);
    assert!((0.4..0.6).contains(&share), "share of A was {share}");
}
