//! Command handlers

use crate::cli::{ChartKind, Cli, Commands, RenderArgs};
use crate::output::{output_report, render_supply, render_trajectory};
use ruta_app::app::{run_period, run_scenario, run_scenario_strict, RenderOptions};
use ruta_app::config::Config;
use ruta_app::export::{
    export_supply_csv, export_timetable_csv, export_to_excel, export_trajectory_csv,
};
use ruta_app::scenario::Scenario;
use ruta_domain::{generate_timetable, RouteInputs};
use ruta_types::{ConfigError, Error, OutputFormat, Period, Result};
use std::path::{Path, PathBuf};

impl From<RenderArgs> for RenderOptions {
    fn from(args: RenderArgs) -> Self {
        RenderOptions {
            show_results: !args.no_results,
            show_charts: args.charts,
        }
    }
}

/// Settings resolved from config and global flags
struct RunSettings {
    output_format: OutputFormat,
    reserve_pct: f64,
    decimals: usize,
}

impl RunSettings {
    fn resolve(format: Option<OutputFormat>, reserve: Option<f64>) -> Result<Self> {
        let config = Config::load()?;

        // Override from CLI args
        let settings = RunSettings {
            output_format: format.unwrap_or(config.output_format),
            reserve_pct: reserve.unwrap_or(config.reserve_percentage),
            decimals: config.decimals,
        };
        tracing::debug!(
            format = %settings.output_format,
            reserve = settings.reserve_pct,
            "settings resolved"
        );
        Ok(settings)
    }
}

/// Requested edits for the `config` command
#[derive(Debug, Default)]
struct ConfigChanges {
    show: bool,
    set_format: Option<OutputFormat>,
    set_reserve: Option<f64>,
    set_decimals: Option<usize>,
    reset: bool,
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        command,
        format,
        reserve,
        ..
    } = cli;
    // Loaded per command: `config` must stay usable when the stored file is invalid
    let settings = || RunSettings::resolve(format, reserve);

    match command {
        Commands::Dimension {
            inputs,
            period,
            render,
        } => cmd_dimension(&settings()?, period, &RouteInputs::from(inputs), render.into()),

        Commands::Scenario {
            file,
            period,
            render,
        } => cmd_scenario(&settings()?, &file, period, render.into()),

        Commands::Timetable {
            start_hour,
            end_hour,
            interval,
            csv,
        } => cmd_timetable(&settings()?, start_hour, end_hour, interval, csv),

        Commands::Chart {
            kind,
            file,
            period,
            csv,
        } => cmd_chart(&settings()?, kind, file, period, csv),

        Commands::Export { file, output } => cmd_export(&settings()?, &file, output),

        Commands::Template { output } => cmd_template(output),

        Commands::Config {
            show,
            set_format,
            set_reserve,
            set_decimals,
            reset,
        } => {
            let changes = ConfigChanges {
                show,
                set_format,
                set_reserve,
                set_decimals,
                reset,
            };
            cmd_config(&Config::config_path()?, changes)
        }
    }
}

fn cmd_dimension(
    settings: &RunSettings,
    period: Period,
    inputs: &RouteInputs,
    render: RenderOptions,
) -> Result<()> {
    let report = run_period(period, inputs, settings.reserve_pct)?;
    output_report(settings.output_format, &report, render, settings.decimals)
}

fn cmd_scenario(
    settings: &RunSettings,
    file: &Path,
    only: Option<Period>,
    render: RenderOptions,
) -> Result<()> {
    let scenario = Scenario::load(file)?;
    tracing::info!(name = %scenario.name, "dimensioning scenario");

    let outcomes: Vec<_> = run_scenario(&scenario, settings.reserve_pct)
        .into_iter()
        .filter(|o| only.map_or(true, |p| p == o.period))
        .collect();

    let total = outcomes.len();
    let mut failed = 0;
    for outcome in outcomes {
        match outcome.outcome {
            Ok(report) => {
                output_report(settings.output_format, &report, render, settings.decimals)?
            }
            Err(e) => {
                failed += 1;
                eprintln!("[{}] Error: {}", outcome.period, e);
            }
        }
    }

    if failed > 0 {
        return Err(Error::PeriodsFailed { failed, total });
    }
    Ok(())
}

fn cmd_timetable(
    settings: &RunSettings,
    start_hour: u32,
    end_hour: u32,
    interval: f64,
    csv: Option<PathBuf>,
) -> Result<()> {
    let timetable = generate_timetable(start_hour, end_hour, interval)?;

    if let Some(path) = csv {
        export_timetable_csv(&timetable, &path)?;
        println!("Timetable written to: {}", path.display());
        return Ok(());
    }

    if settings.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&timetable)?);
    } else {
        for time in &timetable {
            println!("{}", time);
        }
    }
    Ok(())
}

fn cmd_chart(
    settings: &RunSettings,
    kind: ChartKind,
    file: Option<PathBuf>,
    period: Period,
    csv: Option<PathBuf>,
) -> Result<()> {
    let scenario = match file {
        Some(ref path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let report = run_period(period, scenario.inputs(period), settings.reserve_pct)?;

    match (kind, csv) {
        (ChartKind::Trajectory, Some(path)) => {
            export_trajectory_csv(&report.trajectory_chart(), &path)?;
            println!("Trajectory series written to: {}", path.display());
        }
        (ChartKind::Supply, Some(path)) => {
            export_supply_csv(&report.supply_chart(), &path)?;
            println!("Supply series written to: {}", path.display());
        }
        (ChartKind::Trajectory, None) => {
            let chart = report.trajectory_chart();
            if settings.output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", render_trajectory(&chart));
            }
        }
        (ChartKind::Supply, None) => {
            let chart = report.supply_chart();
            if settings.output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", render_supply(&chart, settings.decimals));
            }
        }
    }
    Ok(())
}

fn cmd_export(settings: &RunSettings, file: &Path, output: Option<PathBuf>) -> Result<()> {
    let scenario = Scenario::load(file)?;
    let reports = run_scenario_strict(&scenario, settings.reserve_pct)?;
    let output_path = output.unwrap_or_else(|| file.with_extension("xlsx"));

    export_to_excel(&scenario.name, &reports, &output_path)?;
    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_template(output: Option<PathBuf>) -> Result<()> {
    let scenario = Scenario::default();
    match output {
        Some(path) => {
            scenario.save(&path)?;
            println!("Scenario template written to: {}", path.display());
        }
        None => print!("{}", scenario.to_toml_string()?),
    }
    Ok(())
}

fn cmd_config(path: &Path, changes: ConfigChanges) -> Result<()> {
    if changes.reset {
        Config::default().save_to(path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_or_default_from(path);
    let mut changed = false;

    if let Some(format) = changes.set_format {
        config.output_format = format;
        changed = true;
    }

    if let Some(reserve) = changes.set_reserve {
        if !(0.0..=1.0).contains(&reserve) {
            return Err(ConfigError::InvalidValue(format!(
                "reserve share must be between 0.0 and 1.0, got {}",
                reserve
            ))
            .into());
        }
        config.reserve_percentage = reserve;
        changed = true;
    }

    if let Some(decimals) = changes.set_decimals {
        config.decimals = decimals;
        changed = true;
    }

    if changed {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if changes.show || !changed {
        println!("{}", config);
    }

    Ok(())
}
