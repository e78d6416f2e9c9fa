//! Preference aggregation over the activity profile

use welfare_core::{
    BinaryRelation, BordaCounting, FiniteSet, Individual, PairwiseMajority, PhysicalRelation,
    PreferenceProfile, Relation, SocialChoiceError, SocialWelfareFunction, WeightedMajority,
    anti_dictatorship, borda_counting, complete, count_preference_of, dictatorship, most_preferred,
    pairwise_majority, profile_borda_count, rational, transitive,
};

use crate::common::{activities, activity_preference, elos};

fn profile_of<'a>(prefs: &'a [Relation<&'static str>; 3]) -> PreferenceProfile<'a, &'static str> {
    let members: Vec<&dyn BinaryRelation<&'static str>> = prefs
        .iter()
        .map(|p| p as &dyn BinaryRelation<&'static str>)
        .collect();
    PreferenceProfile::new(members).unwrap()
}

#[test]
fn pairwise_majority_picks_sleep() {
    let prefs = elos();
    let profile = profile_of(&prefs);
    let majority = pairwise_majority(&profile);

    assert!(complete(&majority));
    assert!(!transitive(&majority));
    assert!(!rational(&majority));
    assert_eq!(most_preferred(&majority).unwrap(), "sleep");
}

#[test]
fn borda_counting_picks_first_of_a_three_way_tie() {
    let prefs = elos();
    let profile = profile_of(&prefs);
    for x in activities().iter() {
        assert_eq!(profile_borda_count(x, &profile).unwrap(), 2);
    }
    let borda = borda_counting(&profile);
    assert!(rational(&borda));
    assert_eq!(most_preferred(&borda).unwrap(), "pushups");
}

#[test]
fn rule_objects_agree_with_free_functions() {
    let prefs = elos();
    let profile = profile_of(&prefs);
    assert_eq!(
        PairwiseMajority.aggregate(&profile).unwrap().pairs(),
        pairwise_majority(&profile).pairs()
    );
    assert_eq!(
        BordaCounting.aggregate(&profile).unwrap().pairs(),
        borda_counting(&profile).pairs()
    );
}

#[test]
fn weighted_majority_with_unit_weights_is_pairwise_majority() {
    let prefs = elos();
    let profile = profile_of(&prefs);
    let weighted = WeightedMajority(|_: Individual| 1.0)
        .aggregate(&profile)
        .unwrap();
    assert_eq!(weighted.pairs(), pairwise_majority(&profile).pairs());
}

#[test]
fn dictator_and_anti_dictator_disagree() {
    let prefs = elos();
    let profile = profile_of(&prefs);
    let humanity = Individual::new(2);

    let dictator = dictatorship(&profile, humanity).unwrap();
    let anti = anti_dictatorship(&profile, humanity).unwrap();
    for x in activities().iter() {
        for y in activities().iter() {
            assert_eq!(dictator.relates(x, y), anti.relates(y, x));
        }
    }
    assert_eq!(
        count_preference_of(&"reading", &"sleep", &profile).unwrap(),
        1.0
    );
}

#[test]
fn profiles_must_share_a_universe() {
    let [health, ..] = elos();
    let mut other = Relation::new(FiniteSet::with_elements(["pushups", "reading"]));
    other.add_relation("reading", "pushups").unwrap();

    let members: Vec<&dyn BinaryRelation<&'static str>> = vec![&health, &other];
    assert!(matches!(
        PreferenceProfile::new(members),
        Err(SocialChoiceError::IncomposableProfile { .. })
    ));

    let single = activity_preference(&[("sleep", "reading")]);
    let members: Vec<&dyn BinaryRelation<&'static str>> = vec![&single];
    assert!(PreferenceProfile::new(members).is_ok());
}
