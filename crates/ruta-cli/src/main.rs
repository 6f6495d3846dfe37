//! Route Dimensioning - operating parameters for a single bus route
//!
//! A CLI tool that sizes the fleet, dispatch interval, line capacity and
//! dispatch timetable for peak and off-peak service.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    ruta_app::logger::init_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
