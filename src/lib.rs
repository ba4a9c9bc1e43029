pub mod cli;
pub mod component;
pub mod config;
pub mod init;
pub mod tools;

use anyhow::Result;
use cli::Cli;
use component::BatchConverter;
use component::png_converter::BatchOutcome;
use config::Config;

/// Resolves settings for `cli` and runs one batch.
pub fn run(cli: &Cli) -> Result<BatchOutcome> {
    let config = match &cli.settings {
        Some(path) => Config::load_from(path)?,
        None => Config::new(),
    };
    let quality = config.resolve_quality(cli.quality);

    BatchConverter::new(&cli.input, &cli.output, quality).run()
}
