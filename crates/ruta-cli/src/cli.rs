//! CLI definition using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use ruta_domain::RouteInputs;
use ruta_types::{OutputFormat, Period};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ruta-dimension")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fleet size, dispatch interval, capacity and timetable for a bus route")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Reserve fleet share, 0.0-1.0. Uses config value if not specified.
    #[arg(long, global = true)]
    pub reserve: Option<f64>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Route inputs for one period. Defaults match the reference route.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// One-way route length (km)
    #[arg(long, default_value_t = 10.0)]
    pub length: f64,

    /// Passengers per hour
    #[arg(long, default_value_t = 375)]
    pub demand: u32,

    /// Vehicle capacity, seated plus standing
    #[arg(long, default_value_t = 70)]
    pub capacity: u32,

    /// Occupancy factor, 0.0-1.0
    #[arg(long, default_value_t = 0.7)]
    pub occupancy: f64,

    /// One-way travel time (min)
    #[arg(long, default_value_t = 45.0)]
    pub travel: f64,

    /// Terminal dwell time (min)
    #[arg(long, default_value_t = 6.0)]
    pub terminal: f64,

    /// First service hour (0-23)
    #[arg(long, default_value_t = 7)]
    pub start_hour: u32,

    /// Hour service ends (1-24, exclusive)
    #[arg(long, default_value_t = 8)]
    pub end_hour: u32,
}

impl From<InputArgs> for RouteInputs {
    fn from(args: InputArgs) -> Self {
        RouteInputs {
            route_length_km: args.length,
            hourly_demand: args.demand,
            vehicle_capacity: args.capacity,
            occupancy_factor: args.occupancy,
            travel_time_min: args.travel,
            terminal_time_min: args.terminal,
            start_hour: args.start_hour,
            end_hour: args.end_hour,
        }
    }
}

/// Panels to show after a calculation
#[derive(Args, Debug, Clone, Copy)]
pub struct RenderArgs {
    /// Also show chart series and the dispatch timetable
    #[arg(long)]
    pub charts: bool,

    /// Hide the results table
    #[arg(long)]
    pub no_results: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Space-time diagram of one cycle
    Trajectory,
    /// Cumulative places offered against hourly demand
    Supply,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dimension one period from command-line inputs
    Dimension {
        #[command(flatten)]
        inputs: InputArgs,

        /// Period label for the output
        #[arg(long, value_enum, default_value_t = Period::Peak)]
        period: Period,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Dimension both periods of a scenario file
    Scenario {
        /// Path to scenario TOML file
        file: PathBuf,

        /// Only this period
        #[arg(long, value_enum)]
        period: Option<Period>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a dispatch timetable
    Timetable {
        #[arg(long)]
        start_hour: u32,

        #[arg(long)]
        end_hour: u32,

        /// Dispatch interval (min)
        #[arg(long)]
        interval: f64,

        /// Write the timetable to a CSV file instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Chart series for one period of a scenario
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,

        /// Path to scenario TOML file. Uses the reference route if omitted.
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Period::Peak)]
        period: Period,

        /// Write the series to a CSV file instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Export a scenario to Excel
    Export {
        /// Path to scenario TOML file
        file: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print a scenario file with default inputs
    Template {
        /// Write to this path instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set default reserve share (0.0-1.0)
        #[arg(long)]
        set_reserve: Option<f64>,

        /// Set decimals for rounded table values
        #[arg(long)]
        set_decimals: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_defaults_match_reference_route() {
        let cli = Cli::try_parse_from(["ruta-dimension", "dimension"]).unwrap();
        match cli.command {
            Commands::Dimension { inputs, period, render } => {
                assert_eq!(RouteInputs::from(inputs), RouteInputs::default());
                assert_eq!(period, Period::Peak);
                assert!(!render.charts);
                assert!(!render.no_results);
            }
            _ => panic!("expected dimension command"),
        }
    }

    #[test]
    fn test_dimension_flags() {
        let cli = Cli::try_parse_from([
            "ruta-dimension",
            "dimension",
            "--demand",
            "180",
            "--period",
            "off-peak",
            "--charts",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Dimension { inputs, period, render } => {
                assert_eq!(inputs.demand, 180);
                assert_eq!(period, Period::OffPeak);
                assert!(render.charts);
            }
            _ => panic!("expected dimension command"),
        }
    }

    #[test]
    fn test_timetable_requires_interval() {
        let args = ["ruta-dimension", "timetable", "--start-hour", "7", "--end-hour", "8"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_chart_kind() {
        let cli = Cli::try_parse_from(["ruta-dimension", "chart", "supply", "line.toml"]).unwrap();
        match cli.command {
            Commands::Chart { kind, file, .. } => {
                assert_eq!(kind, ChartKind::Supply);
                assert_eq!(file, Some(PathBuf::from("line.toml")));
            }
            _ => panic!("expected chart command"),
        }
    }
}
