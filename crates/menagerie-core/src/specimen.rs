//! # Specimen Composition
//!
//! [`compose`] welds a species value to one literal of its own gender
//! scheme and produces a [`Specimen`]: the only composed, gendered kind
//! in the system.
//!
//! **Key insight**: a specimen's capability surface is assembled from its
//! parts by conditional delegation. Behavioral capabilities pass through
//! exactly when the species has them; gender capabilities come from the
//! chosen literal under the chosen specifier policy; predation
//! capabilities appear exactly when the species' declared roles admit
//! them. Nothing is claimed by hand, so a specimen can never carry a
//! capability its parts do not justify — and because [`Gendered`] is
//! sealed to composed kinds, a specimen can never be composed again or
//! gendered twice.

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capability::gendered::sealed;
use crate::capability::{
    Animal, Breathes, DefensiveRole, Flee, Gendered, HasUdders, Homeothermic, HuntedBy, OfSpecies,
    OffensiveRole, Predacious, PredatorOf, Pursue, Quarry, Species, Udder, Vertebrate,
};
use crate::dispatch::Disposition;
use crate::gender::{ByLiteralName, GenderLiteral, GenderScheme, GenderSpecifier, SexMarker};

/// Unique identity of one composed specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecimenId(pub Uuid);

impl SpecimenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id for reproducible transcripts.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(
            seed,
            seed.wrapping_mul(0x9e37_79b9_7f4a_7c15),
        ))
    }
}

impl Default for SpecimenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpecimenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Species and gender names of one composed kind, as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KindTag {
    pub species: &'static str,
    pub gender: &'static str,
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.species, self.gender)
    }
}

/// A species composed with one gender literal of its own scheme.
///
/// `S` is the species, `G` the chosen literal tag, and `P` the sex
/// specifier policy, defaulting to [`ByLiteralName`]. The struct-level
/// bounds make ill-formed compositions unrepresentable: a literal from
/// another species' scheme is rejected where the type is named.
#[derive(Debug)]
pub struct Specimen<S, G, P = ByLiteralName>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    id: SpecimenId,
    species: S,
    gender: PhantomData<(G, P)>,
}

/// Composes a species with one literal of its gender scheme under the
/// default [`ByLiteralName`] sexing policy.
pub fn compose<S, G>(species: S) -> Specimen<S, G>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
{
    compose_with(species)
}

/// Composes a species with one literal of its gender scheme under an
/// explicit sexing policy.
pub fn compose_with<S, G, P>(species: S) -> Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    Specimen {
        id: SpecimenId::new(),
        species,
        gender: PhantomData,
    }
}

impl<S, G, P> Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    pub fn id(&self) -> SpecimenId {
        self.id
    }

    /// Species and gender names of this kind.
    pub fn tag(&self) -> KindTag {
        KindTag {
            species: S::NAME,
            gender: G::VALUE.literal_name(),
        }
    }

    /// Replaces the random id, for reproducible transcripts.
    pub fn with_id(mut self, id: SpecimenId) -> Self {
        self.id = id;
        self
    }
}

impl<S, G, P> Animal for Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    fn behave(&self) {
        self.species.behave();
    }
}

impl<S, G, P> Vertebrate for Specimen<S, G, P>
where
    S: Species + Vertebrate,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    type Spine = S::Spine;

    fn spine(&self) -> &Self::Spine {
        self.species.spine()
    }
}

impl<S, G, P> Breathes for Specimen<S, G, P>
where
    S: Species + Breathes,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    fn breathe(&self) {
        self.species.breathe();
    }
}

impl<S, G, P> Homeothermic for Specimen<S, G, P>
where
    S: Species + Homeothermic,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    const BODY_TEMPERATURE: i32 = S::BODY_TEMPERATURE;
}

impl<S, G, P> HasUdders for Specimen<S, G, P>
where
    S: Species + HasUdders,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    const UDDER_COUNT: NonZeroUsize = S::UDDER_COUNT;

    fn udders(&self) -> &[Udder] {
        self.species.udders()
    }
}

impl<S, G, P> OfSpecies for Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    type Species = S;

    fn species(&self) -> &S {
        &self.species
    }
}

impl<S, G, P> sealed::Composed for Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
}

impl<S, G, P> Gendered for Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    type Scheme = S::Scheme;
    type Sex = P::Sex;

    const GENDER: S::Scheme = G::VALUE;
}

// Predation is granted on the composed kind, not on the bare species,
// and only when the declared roles on both sides admit it.

impl<S, G, P, Q> PredatorOf<Q> for Specimen<S, G, P>
where
    S: Species<Offense = Predacious> + Pursue,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
    Q: Animal + OfSpecies,
    Q::Species: Species<Defense = Quarry>,
{
    fn hunt(&self, prey: &Q) {
        <Predacious as OffensiveRole<S>>::engage(&self.species, prey);
    }
}

impl<S, G, P, H> HuntedBy<H> for Specimen<S, G, P>
where
    S: Species<Defense = Quarry> + Flee,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
    H: Animal + OfSpecies,
    H::Species: Species<Offense = Predacious>,
{
    fn hunted_by(&self, predator: &H) {
        <Quarry as DefensiveRole<S>>::suffer(&self.species, predator);
    }
}

impl<S, G, P> Disposition for Specimen<S, G, P>
where
    S: Species,
    G: GenderLiteral<Scheme = S::Scheme>,
    P: GenderSpecifier<G>,
{
    const FEMALE: bool = <P::Sex as SexMarker>::IS_FEMALE;
    const MALE: bool = <P::Sex as SexMarker>::IS_MALE;
    const HUNTS: bool = <S::Offense as OffensiveRole<S>>::HUNTS;
    const HUNTABLE: bool = <S::Defense as DefensiveRole<S>>::HUNTABLE;

    fn pursue_quarry(&self, prey: &(dyn Animal + '_)) {
        <S::Offense as OffensiveRole<S>>::engage(&self.species, prey);
    }

    fn flee_predator(&self, predator: &(dyn Animal + '_)) {
        <S::Defense as DefensiveRole<S>>::suffer(&self.species, predator);
    }
}
