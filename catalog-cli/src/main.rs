use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::*;

use catalog_cli::config::{Config, Overrides};
use catalog_cli::{RunSummary, run};

#[derive(Parser)]
#[command(name = "update-db", version)]
#[command(about = "Rebuild items.json and units.json from the card catalog workbook")]
struct Cli {
    /// Workbook to read (overrides config file)
    #[arg(long, env = "UPDATE_DB_WORKBOOK")]
    workbook: Option<PathBuf>,

    /// Items JSON file to merge with and overwrite
    #[arg(long, env = "UPDATE_DB_ITEMS")]
    items: Option<PathBuf>,

    /// Units JSON file to merge with and overwrite
    #[arg(long, env = "UPDATE_DB_UNITS")]
    units: Option<PathBuf>,

    /// Path to a TOML config file (defaults to ./update-db.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Build everything but write nothing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            workbook: self.workbook.clone(),
            items_json: self.items.clone(),
            units_json: self.units.clone(),
        }
    }
}

fn log_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.overrides());

    let summary = run(&config, cli.dry_run)?;
    print_summary(&summary, &config);

    Ok(())
}

fn print_summary(summary: &RunSummary, config: &Config) {
    println!(
        "{} items ({} new), {} units ({} new)",
        summary.items.to_string().bright_green().bold(),
        summary.new_items,
        summary.units.to_string().bright_green().bold(),
        summary.new_units
    );

    if summary.unresolved_fragments > 0 {
        println!(
            "{}",
            format!(
                "{} equipped-item names matched no item (run with -v to list them)",
                summary.unresolved_fragments
            )
            .yellow()
        );
    }

    if summary.written {
        println!(
            "Wrote {} and {}",
            config.items_json.display().to_string().cyan(),
            config.units_json.display().to_string().cyan()
        );
    } else {
        println!("{}", "Dry run: no files written".dimmed());
    }
}
