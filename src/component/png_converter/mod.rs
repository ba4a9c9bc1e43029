//! PNG to JPEG component
//!
//! Converts every PNG directly under a folder into a JPEG, flattening
//! transparency onto a white background.

mod converter;
mod main;

pub use converter::{
    ConversionRequest, ConvertError, blend_over_white, convert_png_to_jpeg, flatten_onto_white,
    needs_compositing,
};
pub use main::{
    BatchConverter, BatchOutcome, BatchResult, MissingInputDirectory, failure_line, output_path_for,
};
