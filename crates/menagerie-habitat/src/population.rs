//! # Populations and the Simulation Pass
//!
//! A [`Population`] holds residents of one closed roster. A simulation
//! pass runs every resident's behavior, then resolves every unordered
//! pair once, in insertion order, and reports each outcome as an
//! [`EncounterEvent`].
//!
//! Predation events are directional: a mutual hunt between two parties
//! produces two events with the roles swapped, and the report counts
//! both.

use serde::Serialize;

use menagerie_core::interaction::Interaction;
use menagerie_core::resident::Resident;
use menagerie_core::specimen::{KindTag, SpecimenId};

use crate::observer::{EncounterObserver, EventLog};

/// Who took part: identity plus kind names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: SpecimenId,
    pub tag: KindTag,
}

impl Participant {
    pub fn of<R: Resident>(resident: &R) -> Self {
        Self {
            id: resident.id(),
            tag: resident.tag(),
        }
    }
}

/// One resolved encounter.
///
/// Copulation and indifference keep the pair's insertion order;
/// predation names the roles instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EncounterEvent {
    Copulation { left: Participant, right: Participant },
    Predation { predator: Participant, prey: Participant },
    Indifference { left: Participant, right: Participant },
}

/// Tallies for one simulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub residents: usize,
    pub pairs: usize,
    pub copulations: usize,
    pub predations: usize,
    pub indifferences: usize,
}

/// An ordered collection of residents from one closed roster.
#[derive(Debug)]
pub struct Population<R> {
    residents: Vec<R>,
}

impl<R> Default for Population<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<Vec<R>> for Population<R> {
    fn from(residents: Vec<R>) -> Self {
        Self { residents }
    }
}

impl<R> Population<R> {
    pub fn new() -> Self {
        Self {
            residents: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    pub fn residents(&self) -> &[R] {
        &self.residents
    }

    /// Adds a resident; accepts anything the roster converts from.
    pub fn push(&mut self, resident: impl Into<R>) {
        self.residents.push(resident.into());
    }
}

impl<R: Resident> Population<R> {
    /// Runs every resident's behavior once.
    pub fn behave_all(&self) {
        for resident in &self.residents {
            resident.behave();
        }
    }

    /// One full pass: behaviors first, then every unordered pair once.
    ///
    /// Observers see events in pair order; a mutual predation reports
    /// the forward direction before the reverse one.
    pub fn simulate(&self, observer: &mut dyn EncounterObserver) -> SimulationReport {
        let mut report = SimulationReport {
            residents: self.residents.len(),
            ..SimulationReport::default()
        };

        self.behave_all();

        for (index, left) in self.residents.iter().enumerate() {
            for right in &self.residents[index + 1..] {
                report.pairs += 1;
                match left.encounter(right) {
                    Interaction::Copulation => {
                        report.copulations += 1;
                        observer.notify(&EncounterEvent::Copulation {
                            left: Participant::of(left),
                            right: Participant::of(right),
                        });
                    }
                    Interaction::Predation { orientation } => {
                        if orientation.forward() {
                            report.predations += 1;
                            observer.notify(&EncounterEvent::Predation {
                                predator: Participant::of(left),
                                prey: Participant::of(right),
                            });
                        }
                        if orientation.reverse() {
                            report.predations += 1;
                            observer.notify(&EncounterEvent::Predation {
                                predator: Participant::of(right),
                                prey: Participant::of(left),
                            });
                        }
                    }
                    Interaction::Indifference => {
                        report.indifferences += 1;
                        observer.notify(&EncounterEvent::Indifference {
                            left: Participant::of(left),
                            right: Participant::of(right),
                        });
                    }
                }
            }
        }

        report
    }

    /// Simulates into a fresh [`EventLog`] and returns both.
    pub fn run(&self) -> (SimulationReport, EventLog) {
        let mut log = EventLog::new();
        let report = self.simulate(&mut log);
        (report, log)
    }
}

/// Resolves every row resident against every column resident.
///
/// Cells are live encounters, so predation handlers run while the
/// table is built.
pub fn encounter_table<R: Resident>(rows: &[R], cols: &[R]) -> Vec<Vec<Interaction>> {
    rows.iter()
        .map(|left| cols.iter().map(|right| left.encounter(right)).collect())
        .collect()
}
