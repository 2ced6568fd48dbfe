//! # Menagerie
//!
//! Animal kinds as compile-time contracts, with a habitat to run them in.
//!
//! Menagerie models each kind of animal as a type whose capabilities are
//! traits: what it is (vertebrate, warm-blooded, mammal), what it does
//! (hunt, flee, copulate), and whom it does it with. Claims are checked
//! when the kind is composed, so an ill-formed kind is a compile error,
//! and every pairwise encounter resolves to exactly one outcome.
//!
//! ## Quick Start
//!
//! ```rust
//! use menagerie::prelude::*;
//!
//! // A cat couple and a mouse couple share a habitat
//! let population = Scenario::classic().build();
//!
//! // Run one pass over every unordered pair
//! let (report, log) = population.run();
//!
//! assert_eq!(report.copulations, 2);
//! assert_eq!(report.predations, 4);
//! assert_eq!(report.indifferences, 0);
//!
//! for event in log.events() {
//!     println!("{:?}", event);
//! }
//! ```
//!
//! ## Architecture
//!
//! Menagerie is organized into several crates:
//!
//! - [`menagerie_core`] - Capability traits, gender schemes, composition, resolution
//! - [`menagerie_species`] - Stock species and the closed `Creature` roster
//! - [`menagerie_habitat`] - Populations, simulation passes, event observation
//!
//! ## Key Concepts
//!
//! ### Interaction Ranking
//!
//! Every encounter resolves through one ordered chain:
//!
//! | Rank | Outcome | Condition |
//! |------|---------|-----------|
//! | 1 | Copulation | Same species, opposite sexes |
//! | 2 | Predation | A declared hunter faces a huntable kind (either or both ways) |
//! | 3 | Indifference | Nothing above applies |
//!
//! ### Stock Kinds
//!
//! - **Cat** - Warm-blooded mammal, hunts, never hunted
//! - **Mouse** - Warm-blooded mammal, placid, huntable
//! - **Pike** - Cold-blooded fish, hunts and is hunted, even by its own kind
//! - **Unicorn** - Warm-blooded but unsexed, neither hunts nor is hunted
//!
//! ## Declaring Your Own Kind
//!
//! A species declares its gender scheme, its offensive and defensive
//! roles, and whichever capability traits its body supports. Composition
//! does the rest:
//!
//! ```rust
//! use menagerie::prelude::*;
//!
//! gender_scheme! {
//!     pub enum FerretGender [ferret_gender] {
//!         Male,
//!         Female,
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Ferret;
//!
//! impl Animal for Ferret {
//!     fn behave(&self) {}
//! }
//!
//! impl Pursue for Ferret {
//!     fn pursue(&self, _prey: &(dyn Animal + '_)) {}
//! }
//!
//! impl Species for Ferret {
//!     const NAME: &'static str = "ferret";
//!     type Scheme = FerretGender;
//!     type Offense = Predacious;
//!     type Defense = Inedible;
//! }
//!
//! fn main() {
//!     let hob: Specimen<Ferret, ferret_gender::Male> = compose(Ferret::default());
//!     let jill: Specimen<Ferret, ferret_gender::Female> = compose(Ferret::default());
//!     assert_eq!(conduct(&hob, &jill), Interaction::Copulation);
//! }
//! ```

// Re-export all subcrates
pub use menagerie_core as core;
pub use menagerie_habitat as habitat;
pub use menagerie_species as species;

/// Prelude module for convenient imports.
///
/// ```rust
/// use menagerie::prelude::*;
/// ```
pub mod prelude {
    // Capability contracts
    pub use menagerie_core::capability::{
        udder_count, Animal, Breathes, CanCopulateWith, Female, Flee, Gendered, HasUdders,
        Homeothermic, HuntedBy, Inedible, Male, Mammal, OfSpecies, Placid, Predacious, PredatorOf,
        PreyOf, Pursue, Quarry, SameSpeciesAs, Species, Spine, Udder, Vertebrate,
    };

    // Gender machinery
    pub use menagerie_core::gender::{
        ByLiteralName, FemaleSex, GenderLiteral, GenderScheme, GenderSpecifier, MaleSex, SexMarker,
        Sexless, Unsexed,
    };

    // Composition and resolution
    pub use menagerie_core::dispatch::{conduct, kind_facts, resolve, Disposition, KindFacts};
    pub use menagerie_core::interaction::{Interaction, PredationOrientation};
    pub use menagerie_core::resident::Resident;
    pub use menagerie_core::specimen::{compose, compose_with, KindTag, Specimen, SpecimenId};
    pub use menagerie_core::{gender_scheme, menagerie};

    // Stock fauna
    pub use menagerie_species::cat::{female_cat, male_cat, Cat, CatGender, FemaleCat, MaleCat};
    pub use menagerie_species::fauna::{Creature, UnknownKindError};
    pub use menagerie_species::mouse::{
        female_mouse, male_mouse, FemaleMouse, MaleMouse, Mouse, MouseGender,
    };
    pub use menagerie_species::pike::{
        female_pike, male_pike, FemalePike, MalePike, Pike, PikeGender,
    };
    pub use menagerie_species::unicorn::{
        sidereal_unicorn, umbral_unicorn, SiderealUnicorn, UmbralUnicorn, Unicorn, UnicornGender,
    };

    // Habitat simulation
    pub use menagerie_habitat::observer::{EncounterObserver, EventLog};
    pub use menagerie_habitat::population::{
        encounter_table, EncounterEvent, Participant, Population, SimulationReport,
    };
    pub use menagerie_habitat::scenario::Scenario;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
