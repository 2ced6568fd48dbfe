//! Observation of simulation events.
//!
//! The simulation pushes each event to an [`EncounterObserver`] as it
//! happens. Closures observe directly; [`EventLog`] keeps the whole
//! transcript in order.

use crate::population::EncounterEvent;

/// Receives each event as the simulation produces it.
pub trait EncounterObserver {
    fn notify(&mut self, event: &EncounterEvent);
}

impl<F> EncounterObserver for F
where
    F: FnMut(&EncounterEvent),
{
    fn notify(&mut self, event: &EncounterEvent) {
        self(event);
    }
}

/// Observer that keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<EncounterEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EncounterEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<EncounterEvent> {
        self.events
    }
}

impl EncounterObserver for EventLog {
    fn notify(&mut self, event: &EncounterEvent) {
        self.events.push(event.clone());
    }
}
