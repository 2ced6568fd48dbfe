//! # Pairwise Interaction Resolution
//!
//! Given two composed kinds, decide what happens when they meet. The
//! rules are ranked: copulation first, then predation in either or both
//! directions, then indifference.
//!
//! **Key insight**: every question the resolver asks is already settled
//! in the types. Composition fixes a specimen's species, sex
//! classification, and predation roles; the [`Disposition`] facts below
//! are `bool` consts derived from that structure, so [`resolve`] is a
//! single ordered chain over constants that the optimizer folds per pair
//! of types. The behavior handlers are invoked only along branches whose
//! guarding fact is `true`, which is exactly when the corresponding
//! capability trait ([`PredatorOf`], [`HuntedBy`]) is implemented — the
//! const layer and the trait layer are derived from the same role types
//! and cannot disagree.
//!
//! [`PredatorOf`]: crate::capability::PredatorOf
//! [`HuntedBy`]: crate::capability::HuntedBy

use std::any::TypeId;

use serde::Serialize;

use crate::capability::{Animal, Gendered, OfSpecies, Species};
use crate::gender::GenderScheme;
use crate::interaction::{Interaction, PredationOrientation};

/// Resolution profile of one composed kind.
///
/// Implemented once, for `Specimen`, with every fact derived from the
/// composed type: sex facts from the gender specifier, predation facts
/// from the species' offensive and defensive roles. The invocation
/// methods are total, but [`resolve`] routes to them only when the
/// guarding fact holds.
pub trait Disposition: Animal + Gendered + OfSpecies {
    /// Classified female.
    const FEMALE: bool;

    /// Classified male.
    const MALE: bool;

    /// The species takes the hunter role.
    const HUNTS: bool;

    /// The species takes the quarry role.
    const HUNTABLE: bool;

    /// Run the hunter-side behavior against `prey`.
    fn pursue_quarry(&self, prey: &(dyn Animal + '_));

    /// Run the quarry-side behavior against `predator`.
    fn flee_predator(&self, predator: &(dyn Animal + '_));
}

fn same_species<A, B>() -> bool
where
    A: Disposition,
    B: Disposition,
{
    TypeId::of::<A::Species>() == TypeId::of::<B::Species>()
}

fn opposite_sexes<A, B>() -> bool
where
    A: Disposition,
    B: Disposition,
{
    (A::FEMALE && B::MALE) || (A::MALE && B::FEMALE)
}

/// Resolves the encounter outcome for an ordered pair of kinds.
///
/// Pure in the types: no specimen is needed and no behavior runs. Use
/// [`conduct`] to also run the predation handlers.
pub fn resolve<A, B>() -> Interaction
where
    A: Disposition,
    B: Disposition,
{
    if same_species::<A, B>() && opposite_sexes::<A, B>() {
        return Interaction::Copulation;
    }
    match (A::HUNTS && B::HUNTABLE, B::HUNTS && A::HUNTABLE) {
        (true, true) => Interaction::Predation {
            orientation: PredationOrientation::Mutual,
        },
        (true, false) => Interaction::Predation {
            orientation: PredationOrientation::Forward,
        },
        (false, true) => Interaction::Predation {
            orientation: PredationOrientation::Reverse,
        },
        (false, false) => Interaction::Indifference,
    }
}

/// Resolves the encounter and runs the predation handlers for every
/// direction in which hunting occurs.
pub fn conduct<A, B>(left: &A, right: &B) -> Interaction
where
    A: Disposition,
    B: Disposition,
{
    let outcome = resolve::<A, B>();
    if let Interaction::Predation { orientation } = outcome {
        if orientation.forward() {
            left.pursue_quarry(right);
            right.flee_predator(left);
        }
        if orientation.reverse() {
            right.pursue_quarry(left);
            left.flee_predator(right);
        }
    }
    outcome
}

/// The resolution profile of one kind, reported as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindFacts {
    pub species: &'static str,
    pub gender: &'static str,
    pub female: bool,
    pub male: bool,
    pub hunts: bool,
    pub huntable: bool,
}

/// Reports the facts [`resolve`] would consult for the given kind.
pub fn kind_facts<A>() -> KindFacts
where
    A: Disposition,
{
    KindFacts {
        species: <A::Species as Species>::NAME,
        gender: A::GENDER.literal_name(),
        female: A::FEMALE,
        male: A::MALE,
        hunts: A::HUNTS,
        huntable: A::HUNTABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{
        female_marten, female_shrew, female_stoat, gloaming_wisp, male_marten, male_stoat,
        FemaleMarten, FemaleShrew, FemaleStoat, GloamingWisp, MaleMarten, MaleShrew, MaleStoat,
        RadiantWisp,
    };

    fn predation(orientation: PredationOrientation) -> Interaction {
        Interaction::Predation { orientation }
    }

    #[test]
    fn copulation_outranks_mutual_predation() {
        // Martens hunt their own kind, but an opposite-sexed pair mates.
        assert_eq!(resolve::<MaleMarten, FemaleMarten>(), Interaction::Copulation);
        assert_eq!(resolve::<FemaleMarten, MaleMarten>(), Interaction::Copulation);
        assert_eq!(
            resolve::<MaleMarten, MaleMarten>(),
            predation(PredationOrientation::Mutual)
        );
    }

    #[test]
    fn predation_orientation_tracks_the_hunting_side() {
        assert_eq!(
            resolve::<MaleStoat, FemaleShrew>(),
            predation(PredationOrientation::Forward)
        );
        assert_eq!(
            resolve::<FemaleShrew, MaleStoat>(),
            predation(PredationOrientation::Reverse)
        );
        // A stoat is nobody's quarry, so forward-hunting a marten is
        // one-sided even though the marten hunts back in principle.
        assert_eq!(
            resolve::<MaleStoat, MaleMarten>(),
            predation(PredationOrientation::Forward)
        );
    }

    #[test]
    fn resolution_is_mirror_consistent() {
        assert_eq!(
            resolve::<MaleStoat, FemaleShrew>(),
            resolve::<FemaleShrew, MaleStoat>().mirrored()
        );
        assert_eq!(
            resolve::<MaleMarten, MaleMarten>(),
            resolve::<MaleMarten, MaleMarten>().mirrored()
        );
        assert_eq!(
            resolve::<GloamingWisp, MaleStoat>(),
            resolve::<MaleStoat, GloamingWisp>().mirrored()
        );
    }

    #[test]
    fn unclassified_kinds_neither_mate_nor_hunt() {
        assert_eq!(resolve::<GloamingWisp, RadiantWisp>(), Interaction::Indifference);
        assert_eq!(resolve::<GloamingWisp, MaleStoat>(), Interaction::Indifference);
        assert_eq!(resolve::<GloamingWisp, MaleShrew>(), Interaction::Indifference);
    }

    #[test]
    fn same_sex_conspecifics_without_predation_ignore_each_other() {
        assert_eq!(resolve::<FemaleShrew, FemaleShrew>(), Interaction::Indifference);
        assert_eq!(resolve::<MaleStoat, FemaleStoat>(), Interaction::Copulation);
        assert_eq!(resolve::<MaleStoat, MaleStoat>(), Interaction::Indifference);
    }

    #[test]
    fn conduct_runs_handlers_for_each_hunting_side() {
        let stoat = male_stoat();
        let shrew = female_shrew();

        let outcome = conduct(&stoat, &shrew);
        assert_eq!(outcome, predation(PredationOrientation::Forward));
        assert_eq!(stoat.species().hunts(), 1);
        assert_eq!(shrew.species().flights(), 1);

        // Mutual predation runs both handler pairs.
        let left = male_marten();
        let right = male_marten();
        conduct(&left, &right);
        assert_eq!(left.species().hunts(), 1);
        assert_eq!(left.species().flights(), 1);
        assert_eq!(right.species().hunts(), 1);
        assert_eq!(right.species().flights(), 1);
    }

    #[test]
    fn conduct_runs_no_handlers_for_copulation_or_indifference() {
        let male = male_marten();
        let female = female_marten();
        assert_eq!(conduct(&male, &female), Interaction::Copulation);
        assert_eq!(male.species().hunts(), 0);
        assert_eq!(female.species().flights(), 0);

        let wisp = gloaming_wisp();
        let stoat = female_stoat();
        assert_eq!(conduct(&wisp, &stoat), Interaction::Indifference);
        assert_eq!(stoat.species().hunts(), 0);
    }

    #[test]
    fn kind_facts_report_the_composed_profile() {
        let facts = kind_facts::<FemaleStoat>();
        assert_eq!(
            facts,
            KindFacts {
                species: "stoat",
                gender: "Female",
                female: true,
                male: false,
                hunts: true,
                huntable: false,
            }
        );

        let facts = kind_facts::<GloamingWisp>();
        assert_eq!(facts.species, "wisp");
        assert_eq!(facts.gender, "Gloaming");
        assert!(!facts.female && !facts.male);
        assert!(!facts.hunts && !facts.huntable);
    }
}
