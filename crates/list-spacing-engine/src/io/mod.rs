use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::spacing::fix_list_spacing_with_stats;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

impl IoError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Whether [`fix_file`] writes its result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the file when the pass changed it.
    InPlace,
    /// Report only.
    DryRun,
}

/// Outcome of fixing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub collapsed_runs: usize,
    pub removed_lines: usize,
    pub changed: bool,
}

/// Outcome of a batch run. A failure on one file does not stop the others.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub reports: Vec<FileReport>,
    pub errors: Vec<IoError>,
}

impl BatchReport {
    fn record(&mut self, result: Result<FileReport, IoError>) {
        match result {
            Ok(report) => self.reports.push(report),
            Err(e) => {
                warn!("{e}");
                self.errors.push(e);
            }
        }
    }
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::io(path))
}

/// Write content to a markdown file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::io(parent))?;
    }

    fs::write(path, content).map_err(IoError::io(path))
}

/// Scan for markdown files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::io(dir))?;

    for entry in entries {
        let entry = entry.map_err(IoError::io(dir))?;
        let path = entry.path();
        // Symlinked folders are not followed; a link back to an ancestor would loop.
        let file_type = entry.file_type().map_err(IoError::io(&path))?;

        if file_type.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
            && !path.is_dir()
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Run the full list spacing pass over one file.
pub fn fix_file(path: &Path, mode: WriteMode) -> Result<FileReport, IoError> {
    let content = read_file(path)?;
    let fix = fix_list_spacing_with_stats(&content);
    let changed = fix.changed();

    if changed && mode == WriteMode::InPlace {
        write_file(path, &fix.text)?;
        info!(
            "{}: removed {} blank line(s) between list items",
            path.display(),
            fix.removed_lines
        );
    } else {
        debug!("{}: changed={changed}, mode={mode:?}", path.display());
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        collapsed_runs: fix.collapsed_runs,
        removed_lines: fix.removed_lines,
        changed,
    })
}

/// Fix a mix of files and notes directories.
///
/// Directories are scanned for `.md` files; anything else is fixed as given.
/// Reports come back in argument order, directory contents sorted. Errors
/// are collected alongside and the remaining paths are still processed.
pub fn fix_paths<P: AsRef<Path>>(paths: &[P], mode: WriteMode) -> BatchReport {
    let mut batch = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            match scan_markdown_files(path) {
                Ok(files) => {
                    for file in files {
                        batch.record(fix_file(&file, mode));
                    }
                }
                Err(e) => batch.record(Err(e)),
            }
        } else {
            batch.record(fix_file(path, mode));
        }
    }
    batch
}
