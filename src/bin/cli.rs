use anyhow::Result;
use clap::{ArgGroup, Parser, ValueEnum};
use football_fixtures::catalog::Catalog;
use football_fixtures::display::{render_json, render_table};
use football_fixtures::{fetch_games, Config, UseCase};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum When {
    /// Games in play right now
    Now,
    /// Today's games in the top competitions
    Today,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fixtures", about = "Track football games from the terminal")]
#[command(group(
    ArgGroup::new("selector")
        .required(true)
        .args(["time", "country", "list_countries"])
))]
struct Cli {
    /// Which games to show by time
    #[arg(short = 't', value_enum)]
    time: Option<When>,

    /// Today's games in a specific country
    #[arg(short = 'c')]
    country: Option<String>,

    /// Print the known country codes
    #[arg(long)]
    list_countries: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Competition catalog JSON file to use instead of the built-in one
    #[arg(long)]
    catalog: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never mix with the table
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::embedded()?,
    };

    if cli.list_countries {
        for country in catalog.countries() {
            println!("{:<4} {}", country.code, country.name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let use_case = match (cli.time, cli.country) {
        (Some(When::Now), _) => UseCase::Live,
        (Some(When::Today), _) => UseCase::TodaysTop,
        (None, Some(country)) => {
            if !catalog.has_country(&country) {
                eprintln!(
                    "country {} doesn't exist, run with --list-countries to see the codes",
                    country
                );
                return Ok(ExitCode::from(2));
            }
            UseCase::Country(country)
        }
        (None, None) => unreachable!("clap requires one selector"),
    };

    let games = match fetch_games(&config, &catalog, &use_case).await {
        Ok(games) => games,
        Err(e) if e.is_invalid_input() => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(2));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match games {
        None => {
            println!("Oops! Try again in a minute");
            Ok(ExitCode::FAILURE)
        }
        Some(games) if games.is_empty() => {
            println!("Nothing now");
            Ok(ExitCode::SUCCESS)
        }
        Some(games) => {
            match cli.format {
                OutputFormat::Table => println!("{}", render_table(&games)),
                OutputFormat::Json => println!("{}", render_json(&games)?),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
