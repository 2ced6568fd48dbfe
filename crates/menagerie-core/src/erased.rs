//! # Erased Animals
//!
//! Single-object erasure for open-set collections where only behavior
//! matters. [`AnyAnimal`] boxes any animal behind `dyn Animal` and fans
//! `behave` out to it.
//!
//! Erasure ends there on purpose. Pairwise resolution needs both
//! parties' concrete types at once — species identity, sex
//! classification, predation roles — and a `dyn` object has surrendered
//! all of them. Two erased animals can only ever be indifferent, so no
//! `encounter` is offered here; a closed roster declared with
//! [`menagerie!`](crate::menagerie) keeps the types and is the tool for
//! habitats.

use std::fmt;

use crate::capability::Animal;

/// Any animal, reduced to its behavior.
pub struct AnyAnimal {
    inner: Box<dyn Animal>,
}

impl AnyAnimal {
    pub fn new(animal: impl Animal + 'static) -> Self {
        Self {
            inner: Box::new(animal),
        }
    }
}

impl Animal for AnyAnimal {
    fn behave(&self) {
        self.inner.behave();
    }
}

impl fmt::Debug for AnyAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyAnimal").finish_non_exhaustive()
    }
}
