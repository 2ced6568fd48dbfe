//! Convenience re-exports for the common surface.
//!
//! ```rust
//! use menagerie_core::prelude::*;
//! ```

pub use crate::capability::{
    udder_count, Animal, Breathes, CanCopulateWith, Female, Flee, Gendered, HasUdders,
    Homeothermic, HuntedBy, Inedible, Male, Mammal, OfSpecies, Placid, Predacious, PredatorOf,
    PreyOf, Pursue, Quarry, SameSpeciesAs, Species, Spine, Udder, Vertebrate,
};
pub use crate::dispatch::{conduct, kind_facts, resolve, Disposition, KindFacts};
pub use crate::gender::{
    ByLiteralName, FemaleSex, GenderLiteral, GenderScheme, GenderSpecifier, MaleSex, SexMarker,
    Sexless, Unsexed,
};
pub use crate::interaction::{Interaction, PredationOrientation};
pub use crate::resident::Resident;
pub use crate::specimen::{compose, compose_with, KindTag, Specimen, SpecimenId};
pub use crate::{gender_scheme, menagerie};
