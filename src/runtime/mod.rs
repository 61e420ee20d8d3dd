use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::cli::Args;
use crate::logging::{self, Verbosity};

mod pipeline;
mod preflight;
mod summary;

pub use pipeline::execute;
pub use preflight::RunConfig;
pub use summary::RunSummary;


pub fn run() -> ExitCode {
    let args = Args::parse();
    let verbosity = Verbosity::from_occurrences(args.verbose);
    logging::init(verbosity);

    let result = RunConfig::from_args(args, verbosity).and_then(|cfg| execute(&cfg));

    match result {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
