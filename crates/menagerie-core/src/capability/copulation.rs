//! # Copulation Capability
//!
//! Mating eligibility is derived, never declared: two composed kinds can
//! copulate exactly when they are conspecific and their classified sexes
//! form an opposite pair. Unsexed kinds satisfy no opposite pairing and so
//! never copulate, whatever their species.

use crate::capability::gendered::Gendered;
use crate::capability::species::SameSpeciesAs;
use crate::gender::OppositeSexes;

/// Compile-time mating eligibility toward another kind.
pub trait CanCopulateWith<Other> {}

impl<A, B> CanCopulateWith<B> for A
where
    A: Gendered + SameSpeciesAs<B>,
    B: Gendered,
    (A::Sex, B::Sex): OppositeSexes,
{
}
