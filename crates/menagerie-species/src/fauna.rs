//! # The Stock Roster
//!
//! [`Creature`] is the closed union over every stock kind: each species
//! crossed with each literal of its own scheme. Adding a kind means
//! adding one line to the roster; every pairwise resolution it takes
//! part in is derived from there.

use std::error::Error;
use std::fmt;

use menagerie_core::prelude::*;

use crate::cat::{female_cat, male_cat, FemaleCat, MaleCat};
use crate::mouse::{female_mouse, male_mouse, FemaleMouse, MaleMouse};
use crate::pike::{female_pike, male_pike, FemalePike, MalePike};
use crate::unicorn::{sidereal_unicorn, umbral_unicorn, SiderealUnicorn, UmbralUnicorn};

menagerie! {
    /// Every kind the stock habitat can hold.
    pub enum Creature {
        FemaleCat(FemaleCat),
        MaleCat(MaleCat),
        FemaleMouse(FemaleMouse),
        MaleMouse(MaleMouse),
        FemalePike(FemalePike),
        MalePike(MalePike),
        SiderealUnicorn(SiderealUnicorn),
        UmbralUnicorn(UmbralUnicorn),
    }
}

impl Creature {
    /// Builds a fresh creature from species and gender names.
    ///
    /// Names are matched case-insensitively against [`Species::NAME`]
    /// and the scheme's literal names.
    pub fn from_names(species: &str, gender: &str) -> Result<Self, UnknownKindError> {
        let creature = match species.to_ascii_lowercase().as_str() {
            "cat" => match gender.to_ascii_lowercase().as_str() {
                "female" => female_cat().into(),
                "male" => male_cat().into(),
                _ => return Err(UnknownKindError::gender("cat", gender)),
            },
            "mouse" => match gender.to_ascii_lowercase().as_str() {
                "female" => female_mouse().into(),
                "male" => male_mouse().into(),
                _ => return Err(UnknownKindError::gender("mouse", gender)),
            },
            "pike" => match gender.to_ascii_lowercase().as_str() {
                "female" => female_pike().into(),
                "male" => male_pike().into(),
                _ => return Err(UnknownKindError::gender("pike", gender)),
            },
            "unicorn" => match gender.to_ascii_lowercase().as_str() {
                "sidereal" => sidereal_unicorn().into(),
                "umbral" => umbral_unicorn().into(),
                _ => return Err(UnknownKindError::gender("unicorn", gender)),
            },
            _ => return Err(UnknownKindError::species(species)),
        };
        Ok(creature)
    }

    /// One fresh specimen of every kind, in roster order.
    pub fn one_of_each() -> Vec<Self> {
        vec![
            female_cat().into(),
            male_cat().into(),
            female_mouse().into(),
            male_mouse().into(),
            female_pike().into(),
            male_pike().into(),
            sidereal_unicorn().into(),
            umbral_unicorn().into(),
        ]
    }

    /// The resolution facts of every kind, in roster order.
    pub fn kind_census() -> Vec<KindFacts> {
        vec![
            kind_facts::<FemaleCat>(),
            kind_facts::<MaleCat>(),
            kind_facts::<FemaleMouse>(),
            kind_facts::<MaleMouse>(),
            kind_facts::<FemalePike>(),
            kind_facts::<MalePike>(),
            kind_facts::<SiderealUnicorn>(),
            kind_facts::<UmbralUnicorn>(),
        ]
    }
}

/// Rejected name pair in [`Creature::from_names`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownKindError {
    /// No species carries the given name.
    Species { name: String },
    /// The species exists but its scheme has no such literal.
    Gender { species: &'static str, name: String },
}

impl UnknownKindError {
    fn species(name: impl Into<String>) -> Self {
        UnknownKindError::Species { name: name.into() }
    }

    fn gender(species: &'static str, name: impl Into<String>) -> Self {
        UnknownKindError::Gender {
            species,
            name: name.into(),
        }
    }
}

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownKindError::Species { name } => write!(f, "Unknown species: {}", name),
            UnknownKindError::Gender { species, name } => {
                write!(f, "Unknown gender for {}: {}", species, name)
            }
        }
    }
}

impl Error for UnknownKindError {}
