//! List every stock kind with the facts resolution consults.

use anyhow::Result;
use colored::Colorize;
use menagerie::prelude::*;

pub fn run(json: bool) -> Result<()> {
    let census = Creature::kind_census();

    if json {
        println!("{}", serde_json::to_string_pretty(&census)?);
        return Ok(());
    }

    println!("{}", "Menagerie Census".white().bold());
    println!("{}", "═".repeat(56).dimmed());

    for kind in &census {
        let sex = if kind.female {
            "female ".green()
        } else if kind.male {
            "male   ".blue()
        } else {
            "unsexed".dimmed()
        };
        let offense = if kind.hunts {
            "hunts ".red()
        } else {
            "placid".normal()
        };
        let defense = if kind.huntable {
            "huntable".yellow()
        } else {
            "inedible".normal()
        };
        let label = format!("{:<20}", format!("{} ({})", kind.species, kind.gender));
        println!("  {}  {}  {}  {}", label.cyan(), sex, offense, defense);
    }

    println!("{}", "═".repeat(56).dimmed());
    println!("  {} kinds", census.len().to_string().cyan());

    Ok(())
}
