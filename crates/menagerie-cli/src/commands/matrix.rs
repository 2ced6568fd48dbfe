//! Print the pairwise outcome matrix for the full roster.

use anyhow::Result;
use colored::Colorize;
use menagerie::prelude::*;

pub fn run() -> Result<()> {
    let roster = Creature::one_of_each();
    let table = encounter_table(&roster, &roster);
    let labels: Vec<String> = roster.iter().map(|kind| kind.tag().to_string()).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    println!("{}", "Encounter Matrix".white().bold());
    println!("{}", "═".repeat(width + 4 + 3 * labels.len()).dimmed());

    print!("  {:>2} {:width$}", "", "", width = width);
    for index in 1..=labels.len() {
        print!("{}", format!("{:>3}", index).dimmed());
    }
    println!();

    for (row, label) in labels.iter().enumerate() {
        print!(
            "  {} {}",
            format!("{:>2}", row + 1).dimmed(),
            format!("{:<width$}", label, width = width).cyan()
        );
        for outcome in &table[row] {
            let cell = match outcome {
                Interaction::Copulation => "C".green().bold(),
                Interaction::Predation { orientation } => match orientation {
                    PredationOrientation::Forward => ">".red(),
                    PredationOrientation::Reverse => "<".yellow(),
                    PredationOrientation::Mutual => "x".magenta(),
                },
                Interaction::Indifference => "·".dimmed(),
            };
            print!("  {}", cell);
        }
        println!();
    }

    println!();
    println!(
        "  {} copulation   {} row hunts   {} row hunted   {} mutual   {} indifferent",
        "C".green().bold(),
        ">".red(),
        "<".yellow(),
        "x".magenta(),
        "·".dimmed()
    );

    Ok(())
}
