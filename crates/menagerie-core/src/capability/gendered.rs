//! # Gendered Capability
//!
//! A gendered value carries a gender literal fixed at composition time,
//! together with the sex classification the active policy derived from it.
//!
//! **Key insight**: the trait is sealed. Species never implement it; only
//! the composition builder in [`crate::specimen`] does. A species that
//! already went through composition cannot be composed again, and no type
//! can claim two genders, because the one implementation lives on the
//! composed wrapper itself.
//!
//! [`Female`] and [`Male`] are never hand-implemented either: they hold
//! exactly when the classified sex marker says so.

use crate::gender::{FemaleSex, GenderScheme, MaleSex, SexMarker};

pub(crate) mod sealed {
    /// Implemented only by composed specimens.
    pub trait Composed {}
}

/// A value composed with a gender literal.
pub trait Gendered: sealed::Composed {
    /// The gender taxonomy the literal belongs to.
    type Scheme: GenderScheme;

    /// Sex classification assigned by the composition policy.
    type Sex: SexMarker;

    /// The gender literal fixed at composition.
    const GENDER: Self::Scheme;

    /// The gender literal, as a value.
    fn gender(&self) -> Self::Scheme {
        Self::GENDER
    }
}

/// Classified female at composition time.
pub trait Female: Gendered {}

impl<T> Female for T where T: Gendered<Sex = FemaleSex> {}

/// Classified male at composition time.
pub trait Male: Gendered {}

impl<T> Male for T where T: Gendered<Sex = MaleSex> {}
