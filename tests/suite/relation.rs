//! Binary relation construction and structural properties

use welfare_core::{
    BinaryRelation, FiniteSet, FunctionRelation, PhysicalRelation, Relation, RelationError, Reverse,
    UtilityRelation, antisymmetric, complete, reflexive, strict_order, symmetric, transitive,
    weak_order,
};

use crate::common::{digits, greater_than_chain};

#[test]
fn greater_than_chain_scenario() {
    let s = digits();
    let mut b = greater_than_chain();

    assert_eq!(b.universe(), &s);
    assert!(b.contains_relation(&3, &2).unwrap());
    assert!(!complete(&b), "9 and 0 are unrelated both ways");

    assert!(b.contains_relation(&1, &0).unwrap());
    b.remove_relation(&1, &0).unwrap();
    assert!(!b.contains_relation(&1, &0).unwrap());
}

#[test]
fn membership_violations_leave_relation_untouched() {
    let mut b = greater_than_chain();
    let before = b.pairs();
    assert!(matches!(
        b.add_relation(10, 0),
        Err(RelationError::NotInUniverse { .. })
    ));
    assert!(b.remove_relation(&2, &-1).is_err());
    assert_eq!(b.pairs(), before);
}

#[test]
fn closing_the_chain_makes_a_strict_order() {
    let mut b = greater_than_chain();
    for x in digits().iter() {
        for y in digits().iter() {
            if x >= y {
                b.add_relation(*x, *y).unwrap();
            }
        }
    }
    assert!(reflexive(&b));
    assert!(weak_order(&b));
    assert!(strict_order(&b));
    assert!(!symmetric(&b));
}

#[test]
fn converse_of_weak_order_is_weak_order() {
    let ge = FunctionRelation::new(digits(), |x: &i32, y: &i32| x >= y);
    let le = Reverse::new(&ge);
    assert!(weak_order(&le));
    assert!(le.contains_relation(&0, &9).unwrap());
}

#[test]
fn utility_relation_is_complete_and_transitive() {
    let s = FiniteSet::with_elements(["one", "two", "three", "zero"]);
    let u = UtilityRelation::new(s, |a: &&str| match *a {
        "one" => 1.0,
        "two" => 2.0,
        "three" => 3.0,
        _ => 0.0,
    });
    assert!(complete(&u));
    assert!(transitive(&u));
    assert!(antisymmetric(&u));
}

#[test]
fn stored_snapshot_matches_source_relation() {
    let ge = FunctionRelation::new(digits(), |x: &i32, y: &i32| x >= y);
    let snapshot = Relation::from_relation(&ge);
    for x in digits().iter() {
        for y in digits().iter() {
            assert_eq!(snapshot.relates(x, y), ge.relates(x, y));
        }
    }
}
