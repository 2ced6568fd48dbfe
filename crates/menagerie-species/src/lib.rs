//! # Menagerie Species
//!
//! The stock fauna: four species spanning the whole capability grid,
//! and the closed [`Creature`](fauna::Creature) roster over their
//! composed kinds.
//!
//! - **cat** — Warm predator, uddered, nobody's quarry
//! - **mouse** — Warm quarry, uddered, never hunts
//! - **pike** — Cold predator and quarry at once, cannibalistic
//! - **unicorn** — Warm and unsexed, ignores everyone
//!
//! ## Quick Start
//!
//! ```rust
//! use menagerie_core::prelude::*;
//! use menagerie_species::prelude::*;
//!
//! let her = Creature::from(female_cat());
//! let him = Creature::from(male_cat());
//! assert_eq!(her.encounter(&him), Interaction::Copulation);
//!
//! let hunter = Creature::from(male_cat());
//! let quarry = Creature::from(female_mouse());
//! assert!(hunter.encounter(&quarry).is_predation());
//! ```
//!
//! ## Compile-Time Guarantees
//!
//! Ill-formed kinds are rejected at build time, not at run time. A male
//! cat is not female:
//!
//! ```compile_fail
//! use menagerie_core::capability::Female;
//! use menagerie_species::cat::MaleCat;
//!
//! fn requires_female<T: Female>() {}
//!
//! requires_female::<MaleCat>();
//! ```
//!
//! A composed kind is not a species, so it cannot be composed again:
//!
//! ```compile_fail
//! use menagerie_core::specimen::compose;
//! use menagerie_species::cat::{cat_gender, female_cat, FemaleCat};
//!
//! let again = compose::<FemaleCat, cat_gender::Female>(female_cat());
//! ```
//!
//! A literal from another species' scheme is rejected:
//!
//! ```compile_fail
//! use menagerie_core::specimen::compose;
//! use menagerie_species::cat::Cat;
//! use menagerie_species::mouse::mouse_gender;
//!
//! let chimera = compose::<Cat, mouse_gender::Female>(Cat::default());
//! ```
//!
//! Only a sexing policy can sit in the specifier slot:
//!
//! ```compile_fail
//! use menagerie_core::specimen::compose_with;
//! use menagerie_species::cat::{cat_gender, Cat};
//!
//! let odd = compose_with::<Cat, cat_gender::Female, u32>(Cat::default());
//! ```
//!
//! A cold-blooded pike is never a mammal, whatever its sex:
//!
//! ```compile_fail
//! use menagerie_core::capability::Mammal;
//! use menagerie_species::pike::MalePike;
//!
//! fn requires_mammal<T: Mammal>() {}
//!
//! requires_mammal::<MalePike>();
//! ```
//!
//! Copulation never crosses species lines:
//!
//! ```compile_fail
//! use menagerie_core::capability::CanCopulateWith;
//! use menagerie_species::cat::FemaleCat;
//! use menagerie_species::mouse::MaleMouse;
//!
//! fn requires_mates<A: CanCopulateWith<B>, B>() {}
//!
//! requires_mates::<MaleMouse, FemaleCat>();
//! ```
//!
//! And gender cannot be hand-claimed: only composition grants it.
//!
//! ```compile_fail
//! use menagerie_core::capability::Gendered;
//! use menagerie_core::gender::FemaleSex;
//! use menagerie_species::cat::CatGender;
//!
//! struct Imposter;
//!
//! impl Gendered for Imposter {
//!     type Scheme = CatGender;
//!     type Sex = FemaleSex;
//!     const GENDER: CatGender = CatGender::Female;
//! }
//! ```

pub mod cat;
pub mod mouse;
pub mod pike;
pub mod unicorn;
pub mod fauna;
pub mod prelude;
