//! Convenience re-exports for the stock fauna.
//!
//! ```rust
//! use menagerie_species::prelude::*;
//! ```

pub use crate::cat::{female_cat, male_cat, Cat, CatGender, FemaleCat, MaleCat};
pub use crate::fauna::{Creature, UnknownKindError};
pub use crate::mouse::{female_mouse, male_mouse, FemaleMouse, MaleMouse, Mouse, MouseGender};
pub use crate::pike::{female_pike, male_pike, FemalePike, MalePike, Pike, PikeGender};
pub use crate::unicorn::{
    sidereal_unicorn, umbral_unicorn, SiderealUnicorn, UmbralUnicorn, Unicorn, UnicornGender,
};
