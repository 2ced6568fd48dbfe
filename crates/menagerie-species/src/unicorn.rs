//! # The Unicorn
//!
//! Warm, spined, and beyond sexing: the unicorn's literals name
//! celestial aspects, so every unicorn classifies as unsexed. No
//! unicorn ever mates or hunts. Every unicorn is still a mammal,
//! because an unsexed kind owes the mammary clause nothing.

use std::cell::Cell;

use menagerie_core::prelude::*;

gender_scheme! {
    /// Unicorns are told apart by aspect, not sex.
    pub enum UnicornGender [unicorn_gender] { Sidereal, Umbral }
}

/// The species itself. Placid, inedible, 38 degrees, no udders.
#[derive(Debug, Default)]
pub struct Unicorn {
    spine: Spine,
    behaviors: Cell<u64>,
}

impl Unicorn {
    /// Times this unicorn has behaved.
    pub fn behaviors(&self) -> u64 {
        self.behaviors.get()
    }
}

impl Animal for Unicorn {
    fn behave(&self) {
        self.behaviors.set(self.behaviors.get() + 1);
    }
}

impl Vertebrate for Unicorn {
    type Spine = Spine;

    fn spine(&self) -> &Spine {
        &self.spine
    }
}

impl Breathes for Unicorn {
    fn breathe(&self) {}
}

impl Homeothermic for Unicorn {
    const BODY_TEMPERATURE: i32 = 38;
}

impl Species for Unicorn {
    const NAME: &'static str = "unicorn";
    type Scheme = UnicornGender;
    type Offense = Placid;
    type Defense = Inedible;
}

/// A unicorn of the sidereal aspect.
pub type SiderealUnicorn = Specimen<Unicorn, unicorn_gender::Sidereal>;

/// A unicorn of the umbral aspect.
pub type UmbralUnicorn = Specimen<Unicorn, unicorn_gender::Umbral>;

pub fn sidereal_unicorn() -> SiderealUnicorn {
    compose(Unicorn::default())
}

pub fn umbral_unicorn() -> UmbralUnicorn {
    compose(Unicorn::default())
}
