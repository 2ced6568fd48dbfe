//! # The Cat
//!
//! A warm, uddered predator that nothing hunts back. The full mammalian
//! surface is here: spine, breath, a fixed body temperature, and udders,
//! so both sexes compose into [`Mammal`](menagerie_core::capability::Mammal)s.
//!
//! Counters record how often each body was invoked; tests read them to
//! prove which resolution paths actually ran.

use std::cell::Cell;
use std::num::NonZeroUsize;

use menagerie_core::prelude::*;

gender_scheme! {
    /// Two-sexed taxonomy of the cat.
    pub enum CatGender [cat_gender] { Male, Female }
}

/// The species itself. Predacious, inedible, 37 degrees.
#[derive(Debug, Default)]
pub struct Cat {
    spine: Spine,
    udders: [Udder; 8],
    behaviors: Cell<u64>,
    hunts: Cell<u64>,
}

impl Cat {
    /// Times this cat has behaved.
    pub fn behaviors(&self) -> u64 {
        self.behaviors.get()
    }

    /// Times this cat has run down prey.
    pub fn hunts(&self) -> u64 {
        self.hunts.get()
    }
}

impl Animal for Cat {
    fn behave(&self) {
        self.behaviors.set(self.behaviors.get() + 1);
    }
}

impl Vertebrate for Cat {
    type Spine = Spine;

    fn spine(&self) -> &Spine {
        &self.spine
    }
}

impl Breathes for Cat {
    fn breathe(&self) {}
}

impl Homeothermic for Cat {
    const BODY_TEMPERATURE: i32 = 37;
}

impl HasUdders for Cat {
    const UDDER_COUNT: NonZeroUsize = udder_count(8);

    fn udders(&self) -> &[Udder] {
        &self.udders
    }
}

impl Pursue for Cat {
    fn pursue(&self, _prey: &(dyn Animal + '_)) {
        self.hunts.set(self.hunts.get() + 1);
    }
}

impl Species for Cat {
    const NAME: &'static str = "cat";
    type Scheme = CatGender;
    type Offense = Predacious;
    type Defense = Inedible;
}

/// A cat composed female.
pub type FemaleCat = Specimen<Cat, cat_gender::Female>;

/// A cat composed male.
pub type MaleCat = Specimen<Cat, cat_gender::Male>;

pub fn female_cat() -> FemaleCat {
    compose(Cat::default())
}

pub fn male_cat() -> MaleCat {
    compose(Cat::default())
}
