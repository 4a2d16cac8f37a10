//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive exploration loop and a one-shot report command
//! over the same filtering-and-aggregation engine.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use bikeshare_explorer::dataset::{CityRegistry, load_data};
use bikeshare_explorer::error::Error;
use bikeshare_explorer::filters::Vocabularies;
use bikeshare_explorer::output::{print_json, print_report};
use bikeshare_explorer::stats;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively choose filters and browse statistics
    Explore {
        /// Directory containing the city CSV files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Print statistics for one (city, month, day) combination
    Report {
        /// City name, or any unambiguous prefix
        #[arg(short, long)]
        city: String,

        /// Month name prefix, or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Weekday name prefix, or "all"
        #[arg(short = 'w', long, default_value = "all")]
        day: String,

        /// Directory containing the city CSV files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let vocab = Vocabularies::default();

    match cli.command {
        Commands::Explore { data_dir } => {
            let registry = CityRegistry::from_dir(&resolve_data_dir(data_dir));
            explore_loop(&registry, &vocab)?;
        }
        Commands::Report {
            city,
            month,
            day,
            data_dir,
            json,
        } => {
            let registry = CityRegistry::from_dir(&resolve_data_dir(data_dir));
            let city = vocab.resolve_city(&city)?;
            let month = vocab.resolve_month(&month)?;
            let day = vocab.resolve_day(&day)?;

            let view = load_data(&registry, &vocab, &city, &month, &day)?;
            let report = stats::report(&view, &month, &day);
            if json {
                print_json(&report)?;
            } else {
                print_report(&report, &vocab);
            }
        }
    }

    Ok(())
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("BIKESHARE_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// The interactive cycle: prompt for filters, load, aggregate, print,
/// offer a restart. Each cycle reloads from disk.
fn explore_loop(registry: &CityRegistry, vocab: &Vocabularies) -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let city = prompt_city(vocab)?;
        let month = prompt_month(vocab)?;
        let day = prompt_day(vocab)?;
        println!("{}", "-".repeat(40));

        let view = load_data(registry, vocab, &city, &month, &day)?;
        let report = stats::report(&view, &month, &day);
        print_report(&report, vocab);

        let again = prompt("\nWould you like to restart? Enter yes or no.\n")?;
        if !again.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_city(vocab: &Vocabularies) -> Result<String> {
    loop {
        let input = prompt(&format!(
            "Enter first letters of city to show data for ({}): ",
            vocab.cities.join(", ")
        ))?;
        match vocab.resolve_city(&input) {
            Ok(city) => {
                println!("> Will show data for city: {city}");
                return Ok(city);
            }
            Err(e) => {
                debug!(input, error = %e, "City resolution failed");
                println!("> I did not recognise the city name, please check spelling and try again...");
            }
        }
    }
}

fn prompt_month(vocab: &Vocabularies) -> Result<String> {
    loop {
        let input =
            prompt("Enter first letters of month (January to June) or type \"all\" to select all months: ")?;
        match vocab.resolve_month(&input) {
            Ok(month) => {
                println!("> Will show data for month(s): {month}");
                return Ok(month);
            }
            Err(Error::Ambiguous { .. }) => {
                println!("> The month name is ambiguous, please type more letters and try again...");
            }
            Err(_) => {
                println!("> I did not recognise the month name, please check spelling and try again...");
            }
        }
    }
}

fn prompt_day(vocab: &Vocabularies) -> Result<String> {
    loop {
        let input = prompt("Enter first letters of day or type \"all\" to select all days: ")?;
        match vocab.resolve_day(&input) {
            Ok(day) => {
                println!("> Will show data for week day(s): {day}");
                return Ok(day);
            }
            Err(Error::Ambiguous { .. }) => {
                println!("> The day name is ambiguous, please type more letters and try again...");
            }
            Err(_) => {
                println!("> I did not recognise the day name, please check spelling and try again...");
            }
        }
    }
}
