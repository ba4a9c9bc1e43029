use clap::Parser;
use console::style;
use log::{info, warn};
use png2jpeg::cli::Cli;
use png2jpeg::component::png_converter::BatchOutcome;
use png2jpeg::init;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init::init();

    match png2jpeg::run(&cli) {
        Ok(BatchOutcome::NoImages) => ExitCode::SUCCESS,
        Ok(BatchOutcome::Completed(result)) => {
            info!("Program exited normally ({} failure(s))", result.failed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            println!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
