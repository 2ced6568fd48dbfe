//! The capability registry.
//!
//! Each capability is a Rust trait naming one structural guarantee a kind
//! can offer. Species implement the behavioral capabilities directly;
//! the relational ones (`Female`, `Male`, `Mammal`, `PredatorOf`,
//! `HuntedBy`, `PreyOf`, `SameSpeciesAs`, `CanCopulateWith`) are derived
//! by blanket implementations and can never be hand-claimed.

pub mod animal;
pub mod copulation;
pub mod gendered;
pub mod mammary;
pub mod predation;
pub mod species;
pub mod thermal;

// Re-export every capability at the registry level
pub use animal::{Animal, Breathes, Spine, Vertebrate};
pub use copulation::CanCopulateWith;
pub use gendered::{Female, Gendered, Male};
pub use mammary::{udder_count, HasUdders, Mammal, MammaryContract, Udder};
pub use predation::{
    DefensiveRole, Flee, HuntedBy, Inedible, OffensiveRole, Placid, Predacious, PredatorOf,
    PreyOf, Pursue, Quarry,
};
pub use species::{OfSpecies, SameSpeciesAs, Species};
pub use thermal::Homeothermic;
