use crate::config::Quality;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "png2jpeg",
    version,
    about = "Compress PNG images in a folder to JPEG format."
)]
pub struct Cli {
    /// Path to the input folder containing PNG images.
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Path to the output folder where JPEG images will be saved.
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// JPEG quality, 1-95 (default: 80).
    #[arg(short, long, value_parser = parse_quality)]
    pub quality: Option<Quality>,

    /// JSON settings file (default: ./settings.json when present).
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

fn parse_quality(value: &str) -> Result<Quality, String> {
    let raw: u8 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number between 1 and 95"))?;
    Quality::try_from(raw).map_err(|e| e.to_string())
}
