//! # Mammary Capability and the Mammal Contract
//!
//! [`Mammal`] is the registry's one conditional contract: every mammal is a
//! breathing, homeothermic, gendered vertebrate, and a *female* mammal must
//! additionally expose udders. The sex-conditional clause is expressed by
//! [`MammaryContract`], implemented for each sex marker: the female marker
//! demands [`HasUdders`], the others demand nothing.
//!
//! **Key insight**: `Mammal` is never hand-implemented. The blanket
//! implementation derives it for any type whose parts jointly satisfy the
//! contract, so a male specimen of an udderless species can still be a
//! mammal while its female counterpart is rejected at build time.

use std::num::NonZeroUsize;

use crate::capability::animal::{Breathes, Vertebrate};
use crate::capability::gendered::Gendered;
use crate::capability::thermal::Homeothermic;
use crate::gender::{FemaleSex, MaleSex, Unsexed};

/// One udder. A structural marker with no behavior of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Udder;

/// Builds an udder cardinality for a species declaration.
///
/// Panics during constant evaluation when `count` is zero, which turns an
/// empty udder declaration into a build failure.
pub const fn udder_count(count: usize) -> NonZeroUsize {
    match NonZeroUsize::new(count) {
        Some(cardinality) => cardinality,
        None => panic!("udder cardinality must be non-zero"),
    }
}

/// An animal with udders.
pub trait HasUdders {
    /// How many udders the species carries. Non-zero by construction.
    const UDDER_COUNT: NonZeroUsize;

    /// Borrow the udders.
    fn udders(&self) -> &[Udder];
}

/// Sex-conditional clause of the mammal contract.
///
/// Implemented for each sex marker over a candidate type `T`. Only the
/// female marker puts an obligation on `T`.
pub trait MammaryContract<T: ?Sized> {}

impl<T: HasUdders + ?Sized> MammaryContract<T> for FemaleSex {}
impl<T: ?Sized> MammaryContract<T> for MaleSex {}
impl<T: ?Sized> MammaryContract<T> for Unsexed {}

/// A breathing, homeothermic, gendered vertebrate whose sex classification
/// honors the mammary clause.
pub trait Mammal: Vertebrate + Homeothermic + Breathes + Gendered {}

impl<T> Mammal for T
where
    T: Vertebrate + Homeothermic + Breathes + Gendered,
    T::Sex: MammaryContract<T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn udder_count_preserves_the_cardinality() {
        assert_eq!(udder_count(8).get(), 8);
        assert_eq!(udder_count(1).get(), 1);
    }
}
