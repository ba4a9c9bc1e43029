mod file_scanner;
mod path_validator;

pub use file_scanner::{PngFile, has_png_suffix, scan_png_files};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
