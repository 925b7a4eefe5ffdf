use std::process::ExitCode;

use clap::Parser;
use log::info;

use ev_scheduler::config::load_general_parameters;
use ev_scheduler::csv_io::load_from_csv;
use ev_scheduler::errors::HostError;
use ev_scheduler::logging::setup_logger;
use ev_scheduler::schedule::write_csv;
use ev_scheduler::solver::SolverContext;

/// Solves an EV activity schedule over a daily horizon and writes the
/// result as CSV.
#[derive(Parser, Debug)]
#[command(name = "ev-scheduler", version, about)]
struct Cli {
    /// Path to the activities CSV file.
    activities: String,

    /// Path to the general-parameters TOML config file.
    config: String,

    /// Path to write the resulting schedule CSV to.
    #[arg(short, long, default_value = "schedule.csv")]
    output: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ev-scheduler: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), HostError> {
    let params = load_general_parameters(&cli.config)?;
    setup_logger(&params.logging.log_path, params.logging.log_level, params.logging.log_to_stdout)?;

    let activities = load_from_csv(&cli.activities)?;
    let mut ctx = SolverContext::new(params, activities)?;

    let schedule = ctx.solve()?;
    info!(
        "solve produced a {}-entry schedule in {:?}, {} labels considered",
        schedule.len(),
        ctx.get_total_time().unwrap_or_default(),
        ctx.get_count()
    );

    write_csv(&cli.output, &schedule)?;
    Ok(())
}
