//! # lab-pack
//!
//! Packs the files of an exercise project into a timestamped zip archive
//! ready for submission.
//!
//! A run removes every `*.zip` directly inside the project root, then walks
//! the root and writes each selected file into
//! `{prefix}-{HH-MM_dd.mm.yy}.zip` (deflate) inside the root. A file is
//! selected when its own name is on the file allow-list or the name of the
//! directory holding it is on the directory allow-list.

mod error;
mod walk;

pub use error::PackError;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const TIMESTAMP_FORMAT: &str = "%H-%M_%d.%m.%y";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// What to skip, what to keep, and how to name the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOptions {
    pub skip_dirs: Vec<String>,
    pub allowed_files: Vec<String>,
    pub allowed_dirs: Vec<String>,
    pub archive_prefix: String,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            skip_dirs: strings(&["venv", ".venv", "__pycache__", ".git", ".idea", ".vscode"]),
            allowed_files: strings(&["requirements.txt", "manage.py", "caller.py"]),
            allowed_dirs: strings(&["main_app", "orm_skeleton", "migrations"]),
            archive_prefix: "submission".to_string(),
        }
    }
}

/// Outcome of a [`pack`] run.
#[derive(Debug, Clone, Serialize)]
pub struct PackReport {
    pub archive: PathBuf,
    /// Archive entry names, in the order they were written.
    pub entries: Vec<String>,
    /// Old archives deleted before packing.
    pub removed: Vec<PathBuf>,
}

/// File name of the archive created at `now`.
#[must_use]
pub fn archive_name(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}-{}.zip", now.format(TIMESTAMP_FORMAT))
}

/// Package the selected files under `root` into a fresh archive in `root`.
///
/// # Errors
///
/// Returns `PackError::NotADirectory` when `root` is not a directory, and
/// I/O, walk or zip errors from reading the tree or writing the archive.
pub fn pack(
    root: &Path,
    options: &PackOptions,
    now: NaiveDateTime,
) -> Result<PackReport, PackError> {
    if !root.is_dir() {
        return Err(PackError::NotADirectory(root.to_path_buf()));
    }
    // "." has no file name; parent-directory selection needs real names.
    let root = root.canonicalize()?;
    let root = root.as_path();
    let removed = remove_old_archives(root)?;

    let archive = root.join(archive_name(&options.archive_prefix, now));
    let mut zip = ZipWriter::new(File::create(&archive)?);
    let file_options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries = Vec::new();
    for entry in walk::build_walker(root, options) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || path == archive {
            continue;
        }
        if !walk::is_selected(path, options) {
            continue;
        }
        let Some(name) = walk::archive_path(root, path) else {
            continue;
        };
        zip.start_file(name.as_str(), file_options)?;
        io::copy(&mut File::open(path)?, &mut zip)?;
        tracing::debug!(entry = %name, "packed");
        entries.push(name);
    }
    zip.finish()?;

    tracing::info!(
        archive = %archive.display(),
        count = entries.len(),
        removed = removed.len(),
        "submission archive written"
    );
    Ok(PackReport {
        archive,
        entries,
        removed,
    })
}

/// Delete every `*.zip` file directly inside `root`.
fn remove_old_archives(root: &Path) -> Result<Vec<PathBuf>, PackError> {
    let mut removed = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_zip = path.extension().is_some_and(|ext| ext == "zip");
        if is_zip && path.is_file() {
            fs::remove_file(&path)?;
            removed.push(path);
        }
    }
    removed.sort();
    Ok(removed)
}
