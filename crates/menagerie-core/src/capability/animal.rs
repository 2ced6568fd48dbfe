//! # Animal Capability
//!
//! The root of the capability registry: anything that can take part in a
//! habitat must behave. Every other capability refines this one, either by
//! supertrait (a [`Vertebrate`] is an `Animal` with a spine) or by blanket
//! derivation elsewhere in the crate.
//!
//! **Key insight**: the trait is deliberately minimal and object-safe.
//! Behavior erasure (`dyn Animal`) is the one thing an open collection can
//! still do once the concrete kind is gone.

/// An autonomous participant in a habitat.
pub trait Animal {
    /// Execute one unit of autonomous behavior.
    fn behave(&self);
}

/// An animal with a skeletal axis.
///
/// The spine structure is species-specific; most species use the shared
/// [`Spine`] marker, but nothing stops a species from declaring richer
/// anatomy.
pub trait Vertebrate: Animal {
    /// Concrete spine structure carried by this vertebrate.
    type Spine;

    /// Borrow the spine.
    fn spine(&self) -> &Self::Spine;
}

/// Default spine structure for species without bespoke anatomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spine;

/// An animal that respires.
pub trait Breathes {
    /// Draw one breath.
    fn breathe(&self);
}
