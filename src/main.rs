use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use galton_board::cli::{num_balls_for, parse_num_cols};
use galton_board::logging::init_tracing;
use galton_board::render::{RenderConfig, render_ppm};
use galton_board::sim::run_simulation;

#[derive(Parser, Debug)]
#[command(
    name = "galton-board",
    version,
    about = "Simulate a Galton board and print the landing histogram as a PPM image"
)]
struct Cli {
    /// Rows of pegs to drop balls through (default 200).
    #[arg(value_name = "NUM_ROWS", allow_hyphen_values = true)]
    num_rows: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    let num_cols = match parse_num_cols(cli.num_rows.as_deref()) {
        Ok(num_cols) => num_cols,
        Err(err) => {
            tracing::debug!(?err, "rejected board size");
            eprintln!("Error: {err}");
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    let histogram = run_simulation(num_cols, num_balls_for(num_cols));

    let stdout = io::stdout();
    if let Err(err) = render_ppm(&histogram, &RenderConfig::default(), stdout.lock()) {
        tracing::error!(%err, "render aborted");
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
