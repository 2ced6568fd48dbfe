//! Menagerie CLI - Habitat simulation from the command line.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menagerie::prelude::Scenario;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(author, version, about = "Menagerie - Typed animal kinds in a simulated habitat", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation pass over a population
    Run {
        /// Scenario file (TOML) declaring head counts
        #[arg(short, long)]
        scenario: Option<String>,

        /// Number of female cats
        #[arg(long, default_value = "0")]
        female_cats: usize,

        /// Number of male cats
        #[arg(long, default_value = "0")]
        male_cats: usize,

        /// Number of female mice
        #[arg(long, default_value = "0")]
        female_mice: usize,

        /// Number of male mice
        #[arg(long, default_value = "0")]
        male_mice: usize,

        /// Number of female pikes
        #[arg(long, default_value = "0")]
        female_pikes: usize,

        /// Number of male pikes
        #[arg(long, default_value = "0")]
        male_pikes: usize,

        /// Number of sidereal unicorns
        #[arg(long, default_value = "0")]
        sidereal_unicorns: usize,

        /// Number of umbral unicorns
        #[arg(long, default_value = "0")]
        umbral_unicorns: usize,

        /// Emit the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every stock kind with its resolution facts
    Census {
        /// Emit the census as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the pairwise outcome matrix for the full roster
    Matrix,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            female_cats,
            male_cats,
            female_mice,
            male_mice,
            female_pikes,
            male_pikes,
            sidereal_unicorns,
            umbral_unicorns,
            json,
        } => {
            let flags = Scenario {
                female_cats,
                male_cats,
                female_mice,
                male_mice,
                female_pikes,
                male_pikes,
                sidereal_unicorns,
                umbral_unicorns,
            };
            commands::run::run(scenario.as_deref(), flags, json, cli.verbose)
        }
        Commands::Census { json } => commands::census::run(json),
        Commands::Matrix => commands::matrix::run(),
    }
}
