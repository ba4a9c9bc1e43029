use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PNG_SUFFIX: &str = ".png";

#[derive(Debug, Clone)]
pub struct PngFile {
    pub path: PathBuf,
    pub file_name: OsString,
}

impl PngFile {
    /// File name without its last extension, e.g. `logo.PNG` -> `logo`.
    #[must_use]
    pub fn stem(&self) -> OsString {
        Path::new(&self.file_name)
            .file_stem()
            .map_or_else(|| self.file_name.clone(), std::ffi::OsStr::to_os_string)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

#[must_use]
pub fn has_png_suffix(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(PNG_SUFFIX)
}

/// Lists files directly under `directory` whose name ends in `.png`, sorted by name.
///
/// Symlinks are followed so a link to a regular file counts as a file.
pub fn scan_png_files(directory: &Path) -> Result<Vec<PngFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // broken symlinks and unreadable entries are not files
            Err(e) if e.depth() > 0 => {
                log::debug!("skipping unreadable entry: {e}");
                continue;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to list {}", directory.display()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !has_png_suffix(&entry.file_name().to_string_lossy()) {
            continue;
        }

        files.push(PngFile {
            file_name: entry.file_name().to_owned(),
            path: entry.into_path(),
        });
    }

    Ok(files)
}
