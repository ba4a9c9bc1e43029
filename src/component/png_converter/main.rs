//! Batch driver for a directory of PNG files
//!
//! Walks the input directory, converts every PNG in turn and tallies the
//! outcome. A failing file is reported and skipped; only directory errors
//! stop the batch.

use super::converter::{ConversionRequest, convert_png_to_jpeg};
use crate::config::Quality;
use crate::tools::{PngFile, ensure_directory_exists, scan_png_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("The input folder '{}' does not exist or is not a directory.", .0.display())]
pub struct MissingInputDirectory(pub PathBuf);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub processed: usize,
    /// `(file name, error message)` in processing order.
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.processed - self.failures.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The input directory held no PNG files.
    NoImages,
    Completed(BatchResult),
}

pub struct BatchConverter {
    input_dir: PathBuf,
    output_dir: PathBuf,
    quality: Quality,
}

impl BatchConverter {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        quality: Quality,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            quality,
        }
    }

    pub fn run(&self) -> Result<BatchOutcome> {
        // the output directory must not be created for a bad input path
        validate_directory_exists(&self.input_dir).map_err(|e| {
            debug!("{e}");
            MissingInputDirectory(self.input_dir.clone())
        })?;
        ensure_directory_exists(&self.output_dir)?;

        let png_files = scan_png_files(&self.input_dir)?;

        if png_files.is_empty() {
            println!(
                "{}",
                style("No PNG images found in the specified input folder.").yellow()
            );
            info!("No PNG files under {}", self.input_dir.display());
            return Ok(BatchOutcome::NoImages);
        }

        println!("Found {} PNG image(s) to process.", png_files.len());
        info!(
            "Converting {} file(s) from {} to {} at quality {}",
            png_files.len(),
            self.input_dir.display(),
            self.output_dir.display(),
            self.quality
        );

        let result = self.convert_all(&png_files);

        println!("{}", style("Done converting images.").green());
        self.print_summary(&result);

        Ok(BatchOutcome::Completed(result))
    }

    fn convert_all(&self, png_files: &[PngFile]) -> BatchResult {
        let mut result = BatchResult::default();

        let progress_bar = ProgressBar::new(png_files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("Processing images");

        for png_file in png_files {
            let request = ConversionRequest::new(
                &png_file.path,
                output_path_for(&self.output_dir, png_file),
                self.quality,
            );
            debug!(
                "{} -> {}",
                request.input_path.display(),
                request.output_path.display()
            );

            result.processed += 1;
            if let Err(e) = convert_png_to_jpeg(&request) {
                let file_name = png_file.display_name();
                warn!("Conversion of {} failed: {e}", request.input_path.display());
                let message = e.to_string();
                // println on the bar is a no-op when it is hidden
                progress_bar.suspend(|| {
                    println!("{}", style(failure_line(&file_name, &message)).red());
                });
                result.failures.push((file_name, message));
            }

            progress_bar.inc(1);
        }

        progress_bar.finish();
        result
    }

    fn print_summary(&self, result: &BatchResult) {
        println!(
            "Converted {} of {} image(s), {} failed.",
            style(result.succeeded()).green(),
            result.processed,
            if result.failed() > 0 {
                style(result.failed()).red()
            } else {
                style(result.failed()).dim()
            }
        );

        info!(
            "Batch finished - converted: {}, failed: {}",
            result.succeeded(),
            result.failed()
        );
    }
}

/// `Error processing '<file>': <message>`
#[must_use]
pub fn failure_line(file_name: &str, message: &str) -> String {
    format!("Error processing '{file_name}': {message}")
}

/// `<output_dir>/<stem>.jpg`
#[must_use]
pub fn output_path_for(output_dir: &Path, png_file: &PngFile) -> PathBuf {
    let mut file_name = png_file.stem();
    file_name.push(".jpg");
    output_dir.join(file_name)
}
