//! # Closed Habitat Rosters
//!
//! Heterogeneous storage for composed kinds without erasing them. The
//! [`menagerie!`] macro declares a tagged union over a closed set of
//! kinds; the generated [`Resident`] implementation recovers each
//! party's concrete type before resolving an encounter.
//!
//! **Key insight**: pairwise resolution needs *both* concrete types at
//! once, which no single-object erasure can provide. For a closed set
//! the answer is a two-level match: `n` kinds expand to `n²`
//! statically-typed pair resolutions, each one folded to its constant
//! outcome by the optimizer. Adding a kind to the roster is one line,
//! and every pairing it participates in is derived, not written.

use crate::interaction::Interaction;
use crate::specimen::{KindTag, SpecimenId};

/// A member of a closed habitat roster.
///
/// Implemented by the enums [`menagerie!`] generates, and the surface
/// the habitat layer drives: identity and tag for reporting, behavior
/// for the activity pass, [`encounter`](Resident::encounter) for
/// pairwise resolution.
pub trait Resident {
    /// Identity of the contained specimen.
    fn id(&self) -> SpecimenId;

    /// Species and gender names of the contained specimen.
    fn tag(&self) -> KindTag;

    /// Runs the contained specimen's behavior.
    fn behave(&self);

    /// Resolves the encounter with `other` and runs the predation
    /// handlers for every direction in which hunting occurs.
    fn encounter(&self, other: &Self) -> Interaction;
}

/// Declares a closed roster: a tagged union over the listed kinds with
/// [`From`] conversions, an [`Animal`](crate::capability::Animal)
/// implementation, and a [`Resident`] implementation whose `encounter`
/// recovers both concrete types.
///
/// ```
/// use menagerie_core::capability::{Animal, Inedible, Placid, Species};
/// use menagerie_core::gender_scheme;
/// use menagerie_core::interaction::Interaction;
/// use menagerie_core::resident::Resident;
/// use menagerie_core::specimen::{compose, Specimen};
/// use menagerie_core::menagerie;
///
/// #[derive(Debug, Default)]
/// pub struct Vole;
///
/// impl Animal for Vole {
///     fn behave(&self) {}
/// }
///
/// gender_scheme! {
///     pub enum VoleGender [vole_gender] { Male, Female }
/// }
///
/// impl Species for Vole {
///     const NAME: &'static str = "vole";
///     type Scheme = VoleGender;
///     type Offense = Placid;
///     type Defense = Inedible;
/// }
///
/// pub type FemaleVole = Specimen<Vole, vole_gender::Female>;
/// pub type MaleVole = Specimen<Vole, vole_gender::Male>;
///
/// menagerie! {
///     pub enum Burrow {
///         FemaleVole(FemaleVole),
///         MaleVole(MaleVole),
///     }
/// }
///
/// fn main() {
///     let her = Burrow::from(compose::<Vole, vole_gender::Female>(Vole));
///     let him = Burrow::from(compose::<Vole, vole_gender::Male>(Vole));
///     assert_eq!(her.encounter(&him), Interaction::Copulation);
/// }
/// ```
#[macro_export]
macro_rules! menagerie {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($kind:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $($variant($kind)),+
        }

        $(
            impl ::std::convert::From<$kind> for $name {
                fn from(specimen: $kind) -> Self {
                    Self::$variant(specimen)
                }
            }
        )+

        impl $crate::capability::Animal for $name {
            fn behave(&self) {
                match self {
                    $(Self::$variant(inner) => $crate::capability::Animal::behave(inner)),+
                }
            }
        }

        impl $crate::resident::Resident for $name {
            fn id(&self) -> $crate::specimen::SpecimenId {
                match self {
                    $(Self::$variant(inner) => inner.id()),+
                }
            }

            fn tag(&self) -> $crate::specimen::KindTag {
                match self {
                    $(Self::$variant(inner) => inner.tag()),+
                }
            }

            fn behave(&self) {
                $crate::capability::Animal::behave(self);
            }

            fn encounter(&self, other: &Self) -> $crate::interaction::Interaction {
                $crate::menagerie!(@encounter (self, other, $name) [$($variant),+] [$($variant),+])
            }
        }
    };

    // Outer match: recover the left party's type, then resolve it
    // against every kind in the roster. The list is passed twice so the
    // inner expansion can iterate it independently of the outer one.
    (@encounter ($this:expr, $other:expr, $name:ident) [$($variant:ident),+] $all:tt) => {
        match $this {
            $(
                $name::$variant(inner) =>
                    $crate::menagerie!(@against (inner, $other, $name) $all),
            )+
        }
    };

    // Inner match: recover the right party's type and conduct the
    // encounter with both concrete types in hand.
    (@against ($inner:expr, $other:expr, $name:ident) [$($variant:ident),+]) => {
        match $other {
            $(
                $name::$variant(opposite) => $crate::dispatch::conduct($inner, opposite),
            )+
        }
    };
}
