//! Run a full simulation pass and narrate the transcript.

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;
use menagerie::prelude::*;

use crate::config::load_scenario;

pub fn run(scenario_path: Option<&str>, flags: Scenario, json: bool, verbose: bool) -> Result<()> {
    let scenario = match scenario_path {
        Some(path) => {
            if flags.total() > 0 {
                bail!("Pass either a scenario file or head-count flags, not both");
            }
            load_scenario(Path::new(path))?
        }
        None if flags.total() > 0 => flags,
        None => Scenario::classic(),
    };

    let population = scenario.build();
    let (report, log) = population.run();

    if json {
        let transcript = serde_json::json!({
            "report": report,
            "events": log.events(),
        });
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    println!(
        "{} Simulating {} residents...",
        "→".blue(),
        report.residents.to_string().cyan()
    );

    if verbose {
        for resident in population.residents() {
            println!(
                "  {} [{}]",
                resident.tag(),
                resident.id().to_string().dimmed()
            );
        }
    }

    println!();
    for event in log.events() {
        match event {
            EncounterEvent::Copulation { left, right } => {
                println!(
                    "  {} {} {}",
                    left.tag.to_string().cyan(),
                    "copulates with".green().bold(),
                    right.tag.to_string().cyan()
                );
            }
            EncounterEvent::Predation { predator, prey } => {
                println!(
                    "  {} {} {}",
                    predator.tag.to_string().cyan(),
                    "hunts".red().bold(),
                    prey.tag.to_string().cyan()
                );
            }
            EncounterEvent::Indifference { left, right } => {
                println!(
                    "  {} {} {}",
                    left.tag.to_string().cyan(),
                    "ignores".dimmed(),
                    right.tag.to_string().cyan()
                );
            }
        }
    }

    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!("  Pairs:         {}", report.pairs.to_string().cyan());
    println!(
        "  Copulations:   {}",
        report.copulations.to_string().green()
    );
    println!("  Predations:    {}", report.predations.to_string().red());
    println!(
        "  Indifferences: {}",
        report.indifferences.to_string().yellow()
    );

    Ok(())
}
