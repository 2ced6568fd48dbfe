//! Convenience re-exports for habitat simulation.
//!
//! ```rust
//! use menagerie_habitat::prelude::*;
//! ```

pub use crate::observer::{EncounterObserver, EventLog};
pub use crate::population::{
    encounter_table, EncounterEvent, Participant, Population, SimulationReport,
};
pub use crate::scenario::Scenario;
