//! Worked scenarios wired from the public `welfare_core` API.

use std::collections::HashMap;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use welfare_core::{
    BinaryRelation, FiniteSet, Lottery, PhysicalRelation, PreferenceProfile, Relation, Utility,
    borda_counting, expected_utility, most_preferred, pairwise_majority, rational, simulate,
    simulate_with,
};
use welfare_config::SimulationSettings;

pub const ACTIVITIES: [&str; 3] = ["pushups", "reading", "sleep"];

/// Winners of the three-voter activity profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorityReport {
    pub majority_winner: &'static str,
    pub majority_rational: bool,
    pub borda_winner: &'static str,
    pub borda_rational: bool,
}

fn ranking(pairs: &[(&'static str, &'static str)]) -> Result<Relation<&'static str>> {
    let mut relation = Relation::new(FiniteSet::with_elements(ACTIVITIES));
    for (x, y) in pairs {
        relation
            .add_relation(*x, *y)
            .with_context(|| format!("recording {x} over {y}"))?;
    }
    Ok(relation)
}

pub fn majority() -> Result<MajorityReport> {
    let health = ranking(&[("sleep", "pushups"), ("pushups", "reading")])?;
    let philosophy = ranking(&[("reading", "pushups"), ("pushups", "sleep")])?;
    let humanity = ranking(&[("reading", "sleep"), ("sleep", "pushups")])?;

    let profile: Vec<&dyn BinaryRelation<&'static str>> = vec![&health, &philosophy, &humanity];
    let profile = PreferenceProfile::new(profile)?;

    let majority = pairwise_majority(&profile);
    let borda = borda_counting(&profile);

    Ok(MajorityReport {
        majority_winner: most_preferred(&majority)?,
        majority_rational: rational(&majority),
        borda_winner: most_preferred(&borda)?,
        borda_rational: rational(&borda),
    })
}

/// Expected utility of one lottery under the identity and square utilities.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationRow {
    pub outcomes: Vec<i64>,
    pub identity: Utility,
    pub square: Utility,
}

fn identity(a: &i64) -> Utility {
    *a as Utility
}

fn square(a: &i64) -> Utility {
    let a = *a as Utility;
    a * a
}

pub fn expectations() -> Result<Vec<ExpectationRow>> {
    let supports: [&[i64]; 3] = [&[1, 4, 5], &[4], &[3, 4]];
    supports
        .iter()
        .map(|outcomes| {
            let lottery = Lottery::uniform(outcomes.iter().copied().collect())?;
            Ok(ExpectationRow {
                outcomes: outcomes.to_vec(),
                identity: expected_utility(&lottery, identity),
                square: expected_utility(&lottery, square),
            })
        })
        .collect()
}

/// Draw `settings.draws` samples from a uniform lottery and count each outcome.
///
/// Counts are returned in the order the outcomes were given.
pub fn simulate_uniform(
    outcomes: &[String],
    settings: SimulationSettings,
) -> Result<Vec<(String, usize)>> {
    let lottery = Lottery::uniform(outcomes.iter().cloned().collect())?;
    let mut rng = settings.seed.map(StdRng::seed_from_u64);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..settings.draws.get() {
        let drawn = match rng.as_mut() {
            Some(rng) => simulate_with(&lottery, rng)?,
            None => simulate(&lottery)?,
        };
        *counts.entry(drawn).or_default() += 1;
    }
    tracing::debug!(
        draws = settings.draws.get(),
        seeded = settings.seed.is_some(),
        "simulation finished"
    );

    Ok(lottery
        .alternatives()
        .iter()
        .map(|o| (o.clone(), counts.get(o).copied().unwrap_or(0)))
        .collect())
}
