//! # Scenario Declarations
//!
//! A [`Scenario`] is a declarative head count per stock kind. Every
//! field defaults to zero, so a configuration file only names the kinds
//! it wants. Building a scenario is infallible: the counts are the only
//! inputs, and any count is valid.

use serde::{Deserialize, Serialize};

use menagerie_species::prelude::*;

use crate::population::Population;

/// Head counts for a stock-habitat run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub female_cats: usize,
    pub male_cats: usize,
    pub female_mice: usize,
    pub male_mice: usize,
    pub female_pikes: usize,
    pub male_pikes: usize,
    pub sidereal_unicorns: usize,
    pub umbral_unicorns: usize,
}

impl Scenario {
    /// The classic pairing: one cat and one mouse of each sex.
    pub fn classic() -> Self {
        Self {
            female_cats: 1,
            male_cats: 1,
            female_mice: 1,
            male_mice: 1,
            ..Self::default()
        }
    }

    /// Total number of residents the scenario declares.
    pub fn total(&self) -> usize {
        self.female_cats
            + self.male_cats
            + self.female_mice
            + self.male_mice
            + self.female_pikes
            + self.male_pikes
            + self.sidereal_unicorns
            + self.umbral_unicorns
    }

    /// Builds the declared population with fresh specimens throughout,
    /// kinds in roster order.
    pub fn build(&self) -> Population<Creature> {
        let mut population = Population::new();
        for _ in 0..self.female_cats {
            population.push(female_cat());
        }
        for _ in 0..self.male_cats {
            population.push(male_cat());
        }
        for _ in 0..self.female_mice {
            population.push(female_mouse());
        }
        for _ in 0..self.male_mice {
            population.push(male_mouse());
        }
        for _ in 0..self.female_pikes {
            population.push(female_pike());
        }
        for _ in 0..self.male_pikes {
            population.push(male_pike());
        }
        for _ in 0..self.sidereal_unicorns {
            population.push(sidereal_unicorn());
        }
        for _ in 0..self.umbral_unicorns {
            population.push(umbral_unicorn());
        }
        population
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_classic_scenario_declares_two_couples() {
        let scenario = Scenario::classic();
        assert_eq!(scenario.total(), 4);
        assert_eq!(scenario.build().len(), 4);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let scenario: Scenario = serde_json::from_str(r#"{"female_cats": 2}"#).unwrap();
        assert_eq!(scenario.female_cats, 2);
        assert_eq!(scenario.male_mice, 0);
        assert_eq!(scenario.total(), 2);
    }

    #[test]
    fn empty_scenarios_build_empty_populations() {
        let scenario = Scenario::default();
        assert_eq!(scenario.total(), 0);
        assert!(scenario.build().is_empty());
    }
}
