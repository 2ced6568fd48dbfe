//! # The Mouse
//!
//! Warm, uddered, and everyone's quarry. Mice never hunt; they flee.

use std::cell::Cell;
use std::num::NonZeroUsize;

use menagerie_core::prelude::*;

gender_scheme! {
    /// Two-sexed taxonomy of the mouse.
    pub enum MouseGender [mouse_gender] { Male, Female }
}

/// The species itself. Placid, huntable, 35 degrees.
#[derive(Debug, Default)]
pub struct Mouse {
    spine: Spine,
    udders: [Udder; 10],
    behaviors: Cell<u64>,
    flights: Cell<u64>,
}

impl Mouse {
    /// Times this mouse has behaved.
    pub fn behaviors(&self) -> u64 {
        self.behaviors.get()
    }

    /// Times this mouse has fled a predator.
    pub fn flights(&self) -> u64 {
        self.flights.get()
    }
}

impl Animal for Mouse {
    fn behave(&self) {
        self.behaviors.set(self.behaviors.get() + 1);
    }
}

impl Vertebrate for Mouse {
    type Spine = Spine;

    fn spine(&self) -> &Spine {
        &self.spine
    }
}

impl Breathes for Mouse {
    fn breathe(&self) {}
}

impl Homeothermic for Mouse {
    const BODY_TEMPERATURE: i32 = 35;
}

impl HasUdders for Mouse {
    const UDDER_COUNT: NonZeroUsize = udder_count(10);

    fn udders(&self) -> &[Udder] {
        &self.udders
    }
}

impl Flee for Mouse {
    fn flee_from(&self, _predator: &(dyn Animal + '_)) {
        self.flights.set(self.flights.get() + 1);
    }
}

impl Species for Mouse {
    const NAME: &'static str = "mouse";
    type Scheme = MouseGender;
    type Offense = Placid;
    type Defense = Quarry;
}

/// A mouse composed female.
pub type FemaleMouse = Specimen<Mouse, mouse_gender::Female>;

/// A mouse composed male.
pub type MaleMouse = Specimen<Mouse, mouse_gender::Male>;

pub fn female_mouse() -> FemaleMouse {
    compose(Mouse::default())
}

pub fn male_mouse() -> MaleMouse {
    compose(Mouse::default())
}
