//! Full simulation passes over stock populations.

use menagerie_core::prelude::*;
use menagerie_habitat::prelude::*;
use menagerie_species::prelude::*;

#[test]
fn the_classic_scenario_produces_the_expected_transcript() {
    let population = Scenario::classic().build();
    let (report, log) = population.run();

    assert_eq!(report.residents, 4);
    assert_eq!(report.pairs, 6);
    assert_eq!(report.copulations, 2);
    assert_eq!(report.predations, 4);
    assert_eq!(report.indifferences, 0);
    assert_eq!(log.len(), 6);

    // Every predation in this scenario runs cat against mouse.
    for event in log.events() {
        if let EncounterEvent::Predation { predator, prey } = event {
            assert_eq!(predator.tag.species, "cat");
            assert_eq!(prey.tag.species, "mouse");
        }
    }
}

#[test]
fn simulation_runs_each_behavior_once_per_pass() {
    let mut population = Population::<Creature>::new();
    population.push(female_cat());
    population.push(male_mouse());

    population.simulate(&mut |_: &EncounterEvent| {});

    let residents = population.residents();
    let Creature::FemaleCat(cat) = &residents[0] else {
        panic!("insertion order changed");
    };
    let Creature::MaleMouse(mouse) = &residents[1] else {
        panic!("insertion order changed");
    };
    assert_eq!(cat.species().behaviors(), 1);
    assert_eq!(mouse.species().behaviors(), 1);

    population.behave_all();
    assert_eq!(cat.species().behaviors(), 2);
    assert_eq!(mouse.species().behaviors(), 2);
}

#[test]
fn repeated_runs_replay_the_same_transcript() {
    let population = Scenario::classic().build();
    let (first_report, first_log) = population.run();
    let (second_report, second_log) = population.run();
    assert_eq!(first_report, second_report);
    assert_eq!(first_log.events(), second_log.events());
}

#[test]
fn unicorn_herds_are_entirely_indifferent() {
    let scenario = Scenario {
        sidereal_unicorns: 2,
        umbral_unicorns: 1,
        ..Scenario::default()
    };
    let (report, log) = scenario.build().run();

    assert_eq!(report.residents, 3);
    assert_eq!(report.pairs, 3);
    assert_eq!(report.indifferences, 3);
    assert_eq!(report.copulations + report.predations, 0);
    assert!(log
        .events()
        .iter()
        .all(|event| matches!(event, EncounterEvent::Indifference { .. })));
}

#[test]
fn mutual_predation_reports_both_directions() {
    let scenario = Scenario {
        male_pikes: 2,
        ..Scenario::default()
    };
    let (report, log) = scenario.build().run();

    assert_eq!(report.pairs, 1);
    assert_eq!(report.predations, 2);
    assert_eq!(log.len(), 2);

    let EncounterEvent::Predation {
        predator: first_predator,
        prey: first_prey,
    } = &log.events()[0]
    else {
        panic!("expected a predation event");
    };
    let EncounterEvent::Predation {
        predator: second_predator,
        prey: second_prey,
    } = &log.events()[1]
    else {
        panic!("expected a predation event");
    };
    assert_eq!(first_predator.id, second_prey.id);
    assert_eq!(first_prey.id, second_predator.id);
}

#[test]
fn opposite_sex_pikes_mate_despite_mutual_hunting() {
    let scenario = Scenario {
        female_pikes: 1,
        male_pikes: 1,
        ..Scenario::default()
    };
    let (report, log) = scenario.build().run();

    assert_eq!(report.copulations, 1);
    assert_eq!(report.predations, 0);
    assert_eq!(log.len(), 1);
}

#[test]
fn mixed_rosters_resolve_each_pair_independently() {
    let mut population = Population::<Creature>::new();
    population.push(female_cat());
    population.push(female_pike());
    population.push(female_mouse());

    let (report, log) = population.run();
    assert_eq!(report.pairs, 3);
    assert_eq!(report.predations, 3);
    assert_eq!(report.copulations + report.indifferences, 0);

    let roles: Vec<(&str, &str)> = log
        .events()
        .iter()
        .map(|event| {
            let EncounterEvent::Predation { predator, prey } = event else {
                panic!("expected a predation event");
            };
            (predator.tag.species, prey.tag.species)
        })
        .collect();
    assert_eq!(roles, [("cat", "pike"), ("cat", "mouse"), ("pike", "mouse")]);
}

#[test]
fn the_encounter_table_is_mirror_consistent() {
    let roster = Creature::one_of_each();
    let table = encounter_table(&roster, &roster);

    assert_eq!(table.len(), 8);
    for (row_index, row) in table.iter().enumerate() {
        assert_eq!(row.len(), 8);
        for (col_index, outcome) in row.iter().enumerate() {
            assert_eq!(
                *outcome,
                table[col_index][row_index].mirrored(),
                "cell ({}, {})",
                row_index,
                col_index
            );
        }
    }
}

#[test]
fn events_serialize_with_named_roles() {
    let mut population = Population::<Creature>::new();
    population.push(male_cat().with_id(SpecimenId::from_seed(1)));
    population.push(male_mouse().with_id(SpecimenId::from_seed(2)));

    let (_, log) = population.run();
    let value = serde_json::to_value(log.events()).unwrap();

    assert_eq!(value[0]["Predation"]["predator"]["tag"]["species"], "cat");
    assert_eq!(value[0]["Predation"]["prey"]["tag"]["gender"], "Male");
    let expected = serde_json::to_value(SpecimenId::from_seed(1)).unwrap();
    assert_eq!(value[0]["Predation"]["predator"]["id"], expected);
}
