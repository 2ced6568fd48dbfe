//! # Menagerie Habitat
//!
//! Runs populations of composed kinds through simulation passes:
//! behaviors first, then one resolved encounter per unordered pair,
//! every outcome reported as an event.
//!
//! - **population** — Residents, the pairwise pass, events, tallies
//! - **observer** — Event sinks: closures or the ordered [`EventLog`](observer::EventLog)
//! - **scenario** — Declarative head counts loadable from configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use menagerie_habitat::prelude::*;
//!
//! let population = Scenario::classic().build();
//! let (report, log) = population.run();
//!
//! assert_eq!(report.residents, 4);
//! assert_eq!(report.pairs, 6);
//! assert_eq!(report.copulations, 2);
//! assert_eq!(report.predations, 4);
//! assert_eq!(report.indifferences, 0);
//! assert_eq!(log.len(), 6);
//! ```

pub mod population;
pub mod observer;
pub mod scenario;
pub mod prelude;
