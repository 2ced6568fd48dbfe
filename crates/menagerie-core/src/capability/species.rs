//! # Species Declarations
//!
//! A species is the behavioral half of a specimen: it owns the gender
//! taxonomy its literals come from and declares its predation posture as
//! two role types. The roles are associated types rather than bare trait
//! implementations so that pairwise resolution can read them back as
//! compile-time data.
//!
//! [`SameSpeciesAs`] is derived, never hand-implemented: two composed kinds
//! are conspecific exactly when they name the same species type.

use crate::capability::animal::Animal;
use crate::capability::predation::{DefensiveRole, OffensiveRole};
use crate::gender::GenderScheme;

/// A species definition: behavior, gender taxonomy, and predation posture.
pub trait Species: Animal + Sized + 'static {
    /// Stable display name, unique within a habitat.
    const NAME: &'static str;

    /// Gender taxonomy owned by this species.
    type Scheme: GenderScheme;

    /// Offensive posture in predation encounters.
    type Offense: OffensiveRole<Self>;

    /// Defensive posture in predation encounters.
    type Defense: DefensiveRole<Self>;
}

/// A value built around one species.
pub trait OfSpecies {
    /// The species this value is composed from.
    type Species: Species;

    /// Borrow the species.
    fn species(&self) -> &Self::Species;
}

/// Species-identity relation between composed kinds.
pub trait SameSpeciesAs<Other: ?Sized> {}

impl<A, B> SameSpeciesAs<B> for A
where
    A: OfSpecies,
    B: OfSpecies<Species = A::Species>,
{
}
