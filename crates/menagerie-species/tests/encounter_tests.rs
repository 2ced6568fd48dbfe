//! Encounter outcomes across the stock roster.

use menagerie_core::prelude::*;
use menagerie_species::prelude::*;

fn predation(orientation: PredationOrientation) -> Interaction {
    Interaction::Predation { orientation }
}

#[test]
fn classic_pairings_resolve_by_rank() {
    let female_cat = Creature::from(female_cat());
    let male_cat = Creature::from(male_cat());
    let female_mouse = Creature::from(female_mouse());
    let male_mouse = Creature::from(male_mouse());

    assert_eq!(female_cat.encounter(&male_cat), Interaction::Copulation);
    assert_eq!(female_mouse.encounter(&male_mouse), Interaction::Copulation);
    assert_eq!(
        female_cat.encounter(&female_mouse),
        predation(PredationOrientation::Forward)
    );
    assert_eq!(
        male_mouse.encounter(&male_cat),
        predation(PredationOrientation::Reverse)
    );
    // Same species, same sex, nothing hunts a cat.
    assert_eq!(female_cat.encounter(&female_cat), Interaction::Indifference);
}

#[test]
fn same_sex_pikes_hunt_each_other() {
    let left = Creature::from(male_pike());
    let right = Creature::from(male_pike());
    assert_eq!(
        left.encounter(&right),
        predation(PredationOrientation::Mutual)
    );

    let Creature::MalePike(a) = &left else {
        panic!("conversion chose the wrong variant");
    };
    let Creature::MalePike(b) = &right else {
        panic!("conversion chose the wrong variant");
    };
    assert_eq!(a.species().hunts(), 1);
    assert_eq!(a.species().flights(), 1);
    assert_eq!(b.species().hunts(), 1);
    assert_eq!(b.species().flights(), 1);
}

#[test]
fn opposite_sex_pikes_mate_instead_of_hunting() {
    let him = Creature::from(male_pike());
    let her = Creature::from(female_pike());
    assert_eq!(him.encounter(&her), Interaction::Copulation);

    let Creature::MalePike(pike) = &him else {
        panic!("conversion chose the wrong variant");
    };
    assert_eq!(pike.species().hunts(), 0);
    assert_eq!(pike.species().flights(), 0);
}

#[test]
fn any_hunter_takes_any_quarry() {
    let cat = Creature::from(female_cat());
    let pike = Creature::from(female_pike());
    let mouse = Creature::from(male_mouse());

    assert_eq!(
        cat.encounter(&pike),
        predation(PredationOrientation::Forward)
    );
    assert_eq!(
        pike.encounter(&mouse),
        predation(PredationOrientation::Forward)
    );
    // The pike hunts, but a cat is nobody's quarry.
    assert_eq!(
        pike.encounter(&cat),
        predation(PredationOrientation::Reverse)
    );
}

#[test]
fn unicorns_neither_mate_nor_hunt() {
    let sidereal = Creature::from(sidereal_unicorn());
    let umbral = Creature::from(umbral_unicorn());
    let cat = Creature::from(male_cat());

    assert_eq!(sidereal.encounter(&umbral), Interaction::Indifference);
    assert_eq!(sidereal.encounter(&cat), Interaction::Indifference);
    assert_eq!(cat.encounter(&sidereal), Interaction::Indifference);
}

#[test]
fn repeated_encounters_rerun_the_handlers() {
    let cat = Creature::from(male_cat());
    let mouse = Creature::from(female_mouse());
    assert_eq!(cat.encounter(&mouse), cat.encounter(&mouse));

    let Creature::MaleCat(hunter) = &cat else {
        panic!("conversion chose the wrong variant");
    };
    let Creature::FemaleMouse(quarry) = &mouse else {
        panic!("conversion chose the wrong variant");
    };
    assert_eq!(hunter.species().hunts(), 2);
    assert_eq!(quarry.species().flights(), 2);
}

#[test]
fn encounters_are_mirror_consistent_across_the_roster() {
    let roster = Creature::one_of_each();
    for left in &roster {
        for right in &roster {
            assert_eq!(
                left.encounter(right),
                right.encounter(left).mirrored(),
                "mirror mismatch: {} vs {}",
                left.tag(),
                right.tag()
            );
        }
    }
}

#[test]
fn the_full_roster_has_one_of_each_kind() {
    let roster = Creature::one_of_each();
    assert_eq!(roster.len(), 8);
    let tags: Vec<String> = roster
        .iter()
        .map(|creature| creature.tag().to_string())
        .collect();
    assert_eq!(
        tags,
        [
            "cat (Female)",
            "cat (Male)",
            "mouse (Female)",
            "mouse (Male)",
            "pike (Female)",
            "pike (Male)",
            "unicorn (Sidereal)",
            "unicorn (Umbral)",
        ]
    );
}

#[test]
fn creatures_build_from_names_case_insensitively() {
    let cat = Creature::from_names("Cat", "FEMALE").unwrap();
    assert_eq!(cat.tag().to_string(), "cat (Female)");
    let unicorn = Creature::from_names("unicorn", "umbral").unwrap();
    assert_eq!(unicorn.tag().to_string(), "unicorn (Umbral)");

    let err = Creature::from_names("gryphon", "female").unwrap_err();
    assert_eq!(err.to_string(), "Unknown species: gryphon");
    let err = Creature::from_names("cat", "sidereal").unwrap_err();
    assert_eq!(err.to_string(), "Unknown gender for cat: sidereal");
}
