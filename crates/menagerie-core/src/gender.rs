//! # Gender Schemes, Literals, and Sex Classification
//!
//! A species owns a *gender scheme*: a closed enumeration of gender
//! literals. Composition picks one literal and derives a *sex
//! classification* from it under a pluggable policy.
//!
//! **Key insight**: classification happens once, at the declaration site,
//! by literal *name*. The [`gender_scheme!`] macro generates one zero-sized
//! tag type per literal and assigns its [`GenderLiteral::Sex`] while it
//! still sees the identifier: a literal spelled `Female` (or `female`)
//! classifies as [`FemaleSex`], `Male`/`male` as [`MaleSex`], and anything
//! else as [`Unsexed`] — silently, with no fallback probing later. A
//! malformed literal is unrepresentable: tags only exist for variants the
//! scheme actually declares, and a tag's value is typed by its own scheme.
//!
//! The sex markers form a closed classification; the marker traits here
//! are sealed against outside implementations.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sex {}
    pub trait Pairing {}
}

/// One of the three sex classifications a literal can map to.
pub trait SexMarker: sealed::Sex + Copy + Default + fmt::Debug + 'static {
    /// Whether this marker is the female classification.
    const IS_FEMALE: bool;

    /// Whether this marker is the male classification.
    const IS_MALE: bool;

    /// Human-readable label.
    const LABEL: &'static str;
}

/// Classified female by literal name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FemaleSex;

/// Classified male by literal name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaleSex;

/// No sex classification. The silent default for literals whose name is
/// neither `Female` nor `Male`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unsexed;

impl sealed::Sex for FemaleSex {}
impl sealed::Sex for MaleSex {}
impl sealed::Sex for Unsexed {}

impl SexMarker for FemaleSex {
    const IS_FEMALE: bool = true;
    const IS_MALE: bool = false;
    const LABEL: &'static str = "female";
}

impl SexMarker for MaleSex {
    const IS_FEMALE: bool = false;
    const IS_MALE: bool = true;
    const LABEL: &'static str = "male";
}

impl SexMarker for Unsexed {
    const IS_FEMALE: bool = false;
    const IS_MALE: bool = false;
    const LABEL: &'static str = "unsexed";
}

/// Ordered sex pairings that admit copulation. Exactly two exist.
pub trait OppositeSexes: sealed::Pairing {}

impl sealed::Pairing for (FemaleSex, MaleSex) {}
impl sealed::Pairing for (MaleSex, FemaleSex) {}

impl OppositeSexes for (FemaleSex, MaleSex) {}
impl OppositeSexes for (MaleSex, FemaleSex) {}

/// A closed enumeration of gender literals owned by one species.
pub trait GenderScheme: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every literal of the scheme, in declaration order.
    const LITERALS: &'static [Self];

    /// The declared name of the given literal.
    fn literal_name(self) -> &'static str;
}

/// A zero-sized tag denoting one literal of one scheme, carrying the sex
/// classification derived from its name.
pub trait GenderLiteral: Copy + Default + fmt::Debug + 'static {
    /// The scheme this literal belongs to.
    type Scheme: GenderScheme;

    /// Name-derived sex classification.
    type Sex: SexMarker;

    /// The scheme value this tag denotes.
    const VALUE: Self::Scheme;
}

/// Pluggable sex-classification policy applied at composition time.
pub trait GenderSpecifier<G: GenderLiteral>: Copy + Default + fmt::Debug + 'static {
    /// Sex this policy assigns to the literal.
    type Sex: SexMarker;
}

/// Default policy: trust the literal's name-derived classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByLiteralName;

impl<G: GenderLiteral> GenderSpecifier<G> for ByLiteralName {
    type Sex = G::Sex;
}

/// Alternate policy: suppress sexing entirely, whatever the literal says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sexless;

impl<G: GenderLiteral> GenderSpecifier<G> for Sexless {
    type Sex = Unsexed;
}

/// Declares a gender scheme: the enum, a [`GenderScheme`] implementation,
/// and a module of zero-sized literal tags, one per variant.
///
/// The bracketed identifier names the tag module. Literal names decide
/// sex classification at expansion time; see the module docs.
///
/// ```
/// use menagerie_core::gender_scheme;
/// use menagerie_core::gender::{GenderLiteral, GenderScheme};
///
/// gender_scheme! {
///     /// Taxonomy for a two-sexed species.
///     pub enum VoleGender [vole_gender] { Male, Female }
/// }
///
/// fn main() {
///     assert_eq!(VoleGender::Female.literal_name(), "Female");
///     assert_eq!(<vole_gender::Female as GenderLiteral>::VALUE, VoleGender::Female);
/// }
/// ```
#[macro_export]
macro_rules! gender_scheme {
    (
        $(#[$meta:meta])*
        $vis:vis enum $scheme:ident [$tags:ident] {
            $($literal:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $scheme {
            $($literal),+
        }

        impl $crate::gender::GenderScheme for $scheme {
            const LITERALS: &'static [Self] = &[$(Self::$literal),+];

            fn literal_name(self) -> &'static str {
                match self {
                    $(Self::$literal => stringify!($literal)),+
                }
            }
        }

        #[doc = concat!("Literal tags for [`", stringify!($scheme), "`].")]
        $vis mod $tags {
            $(
                #[doc = concat!(
                    "Tag for [`",
                    stringify!($scheme),
                    "::",
                    stringify!($literal),
                    "`](super::",
                    stringify!($scheme),
                    ").",
                )]
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
                pub struct $literal;

                impl $crate::gender::GenderLiteral for $literal {
                    type Scheme = super::$scheme;
                    type Sex = $crate::gender_scheme!(@classify $literal);
                    const VALUE: super::$scheme = super::$scheme::$literal;
                }
            )+
        }
    };

    // Name-based sex classification. Anything unrecognized is unsexed,
    // silently.
    (@classify Female) => { $crate::gender::FemaleSex };
    (@classify female) => { $crate::gender::FemaleSex };
    (@classify Male) => { $crate::gender::MaleSex };
    (@classify male) => { $crate::gender::MaleSex };
    (@classify $other:ident) => { $crate::gender::Unsexed };
}
