//! # Predation Capabilities
//!
//! Predation has two independent axes, declared per species:
//!
//! - **offense** — does the species actively hunt? A hunting species
//!   carries one [`Pursue`] body that works against any quarry.
//! - **defense** — can the species be taken as quarry? A huntable species
//!   carries one [`Flee`] body that works against any predator.
//!
//! Each axis is reified as a role type ([`Predacious`]/[`Placid`] and
//! [`Quarry`]/[`Inedible`]) so that resolution can read the posture as a
//! compile-time constant and route invocations without knowing the species.
//! Declaring [`Predacious`] without a [`Pursue`] body, or [`Quarry`]
//! without [`Flee`], fails the species declaration at build time.
//!
//! The relational capabilities [`PredatorOf`] and [`HuntedBy`] are derived
//! from the roles on composed specimens: a kind is a predator of another
//! exactly when the first is predacious *and* the second is quarry. The
//! dual marker [`PreyOf`] holds whenever both halves of the relation do.

use crate::capability::animal::Animal;

/// Hunting body of a predacious species: one routine, any quarry.
pub trait Pursue: Animal {
    /// Run down the given prey.
    fn pursue(&self, prey: &(dyn Animal + '_));
}

/// Flight body of a huntable species: one routine, any predator.
pub trait Flee: Animal {
    /// Endure pursuit by the given predator.
    fn flee_from(&self, predator: &(dyn Animal + '_));
}

/// Offensive posture of a species, reified as data.
pub trait OffensiveRole<S> {
    /// Whether the species actively hunts.
    const HUNTS: bool;

    /// Invoke the species' hunting body.
    fn engage(species: &S, prey: &(dyn Animal + '_));
}

/// Declares an active hunter. Requires the species to carry a [`Pursue`]
/// body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Predacious;

impl<S: Pursue> OffensiveRole<S> for Predacious {
    const HUNTS: bool = true;

    fn engage(species: &S, prey: &(dyn Animal + '_)) {
        species.pursue(prey);
    }
}

/// Declares a species that never hunts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placid;

impl<S> OffensiveRole<S> for Placid {
    const HUNTS: bool = false;

    // Never routed to: resolution consults HUNTS first.
    fn engage(_species: &S, _prey: &(dyn Animal + '_)) {}
}

/// Defensive posture of a species, reified as data.
pub trait DefensiveRole<S> {
    /// Whether the species can be taken as quarry.
    const HUNTABLE: bool;

    /// Invoke the species' flight body.
    fn suffer(species: &S, predator: &(dyn Animal + '_));
}

/// Declares a huntable species. Requires the species to carry a [`Flee`]
/// body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quarry;

impl<S: Flee> DefensiveRole<S> for Quarry {
    const HUNTABLE: bool = true;

    fn suffer(species: &S, predator: &(dyn Animal + '_)) {
        species.flee_from(predator);
    }
}

/// Declares a species nothing hunts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inedible;

impl<S> DefensiveRole<S> for Inedible {
    const HUNTABLE: bool = false;

    // Never routed to: resolution consults HUNTABLE first.
    fn suffer(_species: &S, _predator: &(dyn Animal + '_)) {}
}

/// Compile-time predator relation toward a specific quarry type.
pub trait PredatorOf<Prey: ?Sized>: Animal {
    /// Hunt the given prey.
    fn hunt(&self, prey: &Prey);
}

/// Compile-time prey relation toward a specific predator type.
pub trait HuntedBy<Predator: ?Sized>: Animal {
    /// Be notified of pursuit by the given predator.
    fn hunted_by(&self, predator: &Predator);
}

/// Dual of [`PredatorOf`]: derived whenever both halves of the predation
/// relation hold between the pair.
pub trait PreyOf<Predator: ?Sized> {}

impl<A, P> PreyOf<P> for A
where
    A: HuntedBy<P>,
    P: PredatorOf<A>,
{
}
