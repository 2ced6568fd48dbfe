//! # The Pike
//!
//! A cold-water predator that is itself fair quarry, its own kind
//! included: two same-sexed pikes hunt each other, an opposite-sexed
//! pair mates first. Pikes breathe and have spines but hold no fixed
//! body temperature, so no pike is ever a mammal.

use std::cell::Cell;

use menagerie_core::prelude::*;

gender_scheme! {
    /// Two-sexed taxonomy of the pike.
    pub enum PikeGender [pike_gender] { Male, Female }
}

/// The species itself. Predacious and huntable at once.
#[derive(Debug, Default)]
pub struct Pike {
    spine: Spine,
    behaviors: Cell<u64>,
    hunts: Cell<u64>,
    flights: Cell<u64>,
}

impl Pike {
    /// Times this pike has behaved.
    pub fn behaviors(&self) -> u64 {
        self.behaviors.get()
    }

    /// Times this pike has run down prey.
    pub fn hunts(&self) -> u64 {
        self.hunts.get()
    }

    /// Times this pike has fled a predator.
    pub fn flights(&self) -> u64 {
        self.flights.get()
    }
}

impl Animal for Pike {
    fn behave(&self) {
        self.behaviors.set(self.behaviors.get() + 1);
    }
}

impl Vertebrate for Pike {
    type Spine = Spine;

    fn spine(&self) -> &Spine {
        &self.spine
    }
}

impl Breathes for Pike {
    fn breathe(&self) {}
}

impl Pursue for Pike {
    fn pursue(&self, _prey: &(dyn Animal + '_)) {
        self.hunts.set(self.hunts.get() + 1);
    }
}

impl Flee for Pike {
    fn flee_from(&self, _predator: &(dyn Animal + '_)) {
        self.flights.set(self.flights.get() + 1);
    }
}

impl Species for Pike {
    const NAME: &'static str = "pike";
    type Scheme = PikeGender;
    type Offense = Predacious;
    type Defense = Quarry;
}

/// A pike composed female.
pub type FemalePike = Specimen<Pike, pike_gender::Female>;

/// A pike composed male.
pub type MalePike = Specimen<Pike, pike_gender::Male>;

pub fn female_pike() -> FemalePike {
    compose(Pike::default())
}

pub fn male_pike() -> MalePike {
    compose(Pike::default())
}
