//! Seawatch CLI
//!
//! Command-line access to the dashboard pipeline without the web server:
//! - Write the CSV export
//! - Print a filtered series
//! - Print an SST grid snapshot
//! - Generate a default config file

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seawatch::config::{generate_default_config, Config};
use seawatch::dashboard::filtered_series;
use seawatch::export::{ExportTable, EXPORT_FILE_NAME};
use seawatch::series::{
    filter_series, window_end, window_start, DateInterval, Metric, SyntheticGenerator,
    TimeSeries,
};

#[derive(Parser)]
#[command(name = "seawatch-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ocean warming dashboard data from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed generator seed for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the joined series as CSV
    Export {
        /// First date (YYYY-MM-DD), default 2000-01-01
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Last date (YYYY-MM-DD), default 2035-12-31
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Print one filtered series
    Series {
        /// Series slug (see `metrics`)
        slug: String,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Print the SST grid for one date
    Map {
        /// Snapshot date (YYYY-MM-DD), default 2000-01-01
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the available series
    Metrics,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(seed) = cli.seed {
        config.generator.seed = Some(seed);
    }

    match cli.command {
        Commands::Export { start, end, output } => {
            let start = start.unwrap_or_else(window_start);
            let end = end.unwrap_or_else(window_end);

            let (_, series) = filtered_series(&config.generator, start, end)?;
            let table = ExportTable::outer_join(&series);
            let bytes = table.to_csv()?;

            if output.as_os_str() == "-" {
                print!("{}", String::from_utf8_lossy(&bytes));
            } else {
                std::fs::write(&output, &bytes)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                println!(
                    "Wrote {} rows ({} to {}) to {}",
                    table.rows.len(),
                    start,
                    end,
                    output.display()
                );
            }
        }

        Commands::Series { slug, start, end } => {
            let Some(metric) = Metric::from_slug(&slug) else {
                bail!(
                    "Unknown series '{}'. Available: {}",
                    slug,
                    Metric::all().iter().map(Metric::slug).collect::<Vec<_>>().join(", ")
                );
            };

            let interval = DateInterval::new(
                start.unwrap_or_else(window_start),
                end.unwrap_or_else(window_end),
            )?;

            let mut generator = SyntheticGenerator::new(config.generator.clone());
            let series = filter_series(&generator.generate(metric), &interval);

            print_series(&series, &cli.format)?;
        }

        Commands::Map { date } => {
            let date = date.unwrap_or_else(window_start);
            let mut generator = SyntheticGenerator::new(config.generator.clone());
            let grid = generator.generate_grid(date);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&grid)?),
                "csv" => {
                    println!("lat,lon,sst");
                    for p in &grid {
                        println!("{},{},{}", p.latitude, p.longitude, p.value);
                    }
                }
                _ => {
                    println!("{}", seawatch::render::map_title(date));
                    println!("{:>10} {:>10} {:>10}", "lat", "lon", "sst");
                    println!("{}", "-".repeat(32));
                    for p in &grid {
                        println!("{:>10.3} {:>10.1} {:>10.3}", p.latitude, p.longitude, p.value);
                    }
                }
            }
        }

        Commands::Metrics => {
            println!("{:<18} {:<8} {:<11} {}", "Slug", "Cadence", "Chart", "Label");
            println!("{}", "-".repeat(65));

            for metric in Metric::all() {
                println!(
                    "{:<18} {:<8} {:<11} {}",
                    metric.slug(),
                    metric.cadence().to_string(),
                    metric.chart_kind().to_string(),
                    metric.label()
                );
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Print a series in the requested format
fn print_series(series: &TimeSeries, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(series)?),
        "csv" => {
            println!("date,{}", series.metric.label());
            for p in &series.points {
                println!("{},{}", p.date, p.value);
            }
        }
        _ => {
            println!("{}", series.metric.title());
            println!("{:<12} {:>12}", "date", "value");
            println!("{}", "-".repeat(25));
            for p in &series.points {
                println!("{:<12} {:>12.3}", p.date.to_string(), p.value);
            }
            if series.is_empty() {
                println!("(no points in range)");
            } else {
                println!();
                println!("{} points", series.len());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use seawatch::series::GeneratorConfig;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_binary_name_in_usage() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.contains("seawatch-cli"));
    }

    #[test]
    fn test_parse_export_args() {
        let cli = Cli::parse_from([
            "seawatch-cli",
            "--seed",
            "3",
            "export",
            "--start",
            "2010-01-01",
            "--end",
            "2010-03-31",
        ]);

        assert_eq!(cli.seed, Some(3));
        match cli.command {
            Commands::Export { start, end, output } => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2010, 1, 1));
                assert_eq!(end, NaiveDate::from_ymd_opt(2010, 3, 31));
                assert_eq!(output, PathBuf::from("climate_dashboard.csv"));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_reject_bad_date() {
        assert!(Cli::try_parse_from(["seawatch-cli", "map", "--date", "tomorrow"]).is_err());
    }

    #[test]
    fn test_seed_drives_generator() {
        let config = GeneratorConfig::default().seed(8);
        let a = SyntheticGenerator::new(config.clone()).generate(Metric::KoreaSst);
        let b = SyntheticGenerator::new(config).generate(Metric::KoreaSst);
        assert_eq!(a, b);
    }
}
