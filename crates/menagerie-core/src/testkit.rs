//! Test-only species with instrumented behaviors.
//!
//! Four species cover the role grid: shrews are placid quarry, stoats
//! hunt but cannot be hunted, martens do both (their own kind included),
//! and wisps do neither and carry an unclassifiable gender scheme.
//! Invocation counters are `Cell`s so the routing paths can be asserted
//! through shared references.

use std::cell::Cell;
use std::num::NonZeroUsize;

use crate::capability::{
    udder_count, Animal, Breathes, Flee, HasUdders, Homeothermic, Inedible, Placid, Predacious,
    Pursue, Quarry, Species, Spine, Udder, Vertebrate,
};
use crate::gender_scheme;
use crate::specimen::{compose, Specimen};

gender_scheme! {
    pub enum ShrewGender [shrew_gender] { Male, Female }
}

/// Placid quarry with the full mammalian surface.
#[derive(Debug, Default)]
pub struct Shrew {
    spine: Spine,
    udders: [Udder; 6],
    behaviors: Cell<u64>,
    flights: Cell<u64>,
}

impl Shrew {
    pub fn behaviors(&self) -> u64 {
        self.behaviors.get()
    }

    pub fn flights(&self) -> u64 {
        self.flights.get()
    }
}

impl Animal for Shrew {
    fn behave(&self) {
        self.behaviors.set(self.behaviors.get() + 1);
    }
}

impl Vertebrate for Shrew {
    type Spine = Spine;

    fn spine(&self) -> &Spine {
        &self.spine
    }
}

impl Breathes for Shrew {
    fn breathe(&self) {}
}

impl Homeothermic for Shrew {
    const BODY_TEMPERATURE: i32 = 36;
}

impl HasUdders for Shrew {
    const UDDER_COUNT: NonZeroUsize = udder_count(6);

    fn udders(&self) -> &[Udder] {
        &self.udders
    }
}

impl Flee for Shrew {
    fn flee_from(&self, _predator: &(dyn Animal + '_)) {
        self.flights.set(self.flights.get() + 1);
    }
}

impl Species for Shrew {
    const NAME: &'static str = "shrew";
    type Scheme = ShrewGender;
    type Offense = Placid;
    type Defense = Quarry;
}

gender_scheme! {
    pub enum StoatGender [stoat_gender] { Male, Female }
}

/// Predator nothing hunts back. Carries no udders on purpose.
#[derive(Debug, Default)]
pub struct Stoat {
    spine: Spine,
    hunts: Cell<u64>,
}

impl Stoat {
    pub fn hunts(&self) -> u64 {
        self.hunts.get()
    }
}

impl Animal for Stoat {
    fn behave(&self) {}
}

impl Vertebrate for Stoat {
    type Spine = Spine;

    fn spine(&self) -> &Spine {
        &self.spine
    }
}

impl Breathes for Stoat {
    fn breathe(&self) {}
}

impl Homeothermic for Stoat {
    const BODY_TEMPERATURE: i32 = 38;
}

impl Pursue for Stoat {
    fn pursue(&self, _prey: &(dyn Animal + '_)) {
        self.hunts.set(self.hunts.get() + 1);
    }
}

impl Species for Stoat {
    const NAME: &'static str = "stoat";
    type Scheme = StoatGender;
    type Offense = Predacious;
    type Defense = Inedible;
}

gender_scheme! {
    pub enum MartenGender [marten_gender] { Male, Female }
}

/// Hunts and can be hunted, which makes same-species predation possible.
#[derive(Debug, Default)]
pub struct Marten {
    hunts: Cell<u64>,
    flights: Cell<u64>,
}

impl Marten {
    pub fn hunts(&self) -> u64 {
        self.hunts.get()
    }

    pub fn flights(&self) -> u64 {
        self.flights.get()
    }
}

impl Animal for Marten {
    fn behave(&self) {}
}

impl Pursue for Marten {
    fn pursue(&self, _prey: &(dyn Animal + '_)) {
        self.hunts.set(self.hunts.get() + 1);
    }
}

impl Flee for Marten {
    fn flee_from(&self, _predator: &(dyn Animal + '_)) {
        self.flights.set(self.flights.get() + 1);
    }
}

impl Species for Marten {
    const NAME: &'static str = "marten";
    type Scheme = MartenGender;
    type Offense = Predacious;
    type Defense = Quarry;
}

gender_scheme! {
    pub enum WispGender [wisp_gender] { Gloaming, Radiant }
}

/// Bare animal with an unclassifiable scheme: no literal sexes, no
/// predation, no vertebrate surface.
#[derive(Debug, Default)]
pub struct Wisp;

impl Animal for Wisp {
    fn behave(&self) {}
}

impl Species for Wisp {
    const NAME: &'static str = "wisp";
    type Scheme = WispGender;
    type Offense = Placid;
    type Defense = Inedible;
}

pub type FemaleShrew = Specimen<Shrew, shrew_gender::Female>;
pub type MaleShrew = Specimen<Shrew, shrew_gender::Male>;
pub type FemaleStoat = Specimen<Stoat, stoat_gender::Female>;
pub type MaleStoat = Specimen<Stoat, stoat_gender::Male>;
pub type FemaleMarten = Specimen<Marten, marten_gender::Female>;
pub type MaleMarten = Specimen<Marten, marten_gender::Male>;
pub type GloamingWisp = Specimen<Wisp, wisp_gender::Gloaming>;
pub type RadiantWisp = Specimen<Wisp, wisp_gender::Radiant>;

pub fn female_shrew() -> FemaleShrew {
    compose(Shrew::default())
}

pub fn male_shrew() -> MaleShrew {
    compose(Shrew::default())
}

pub fn female_stoat() -> FemaleStoat {
    compose(Stoat::default())
}

pub fn male_stoat() -> MaleStoat {
    compose(Stoat::default())
}

pub fn female_marten() -> FemaleMarten {
    compose(Marten::default())
}

pub fn male_marten() -> MaleMarten {
    compose(Marten::default())
}

pub fn gloaming_wisp() -> GloamingWisp {
    compose(Wisp)
}
