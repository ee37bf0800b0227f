//! Directory walk and the allow-list that decides what goes into an archive.

use std::path::Path;

use ignore::WalkBuilder;

use crate::PackOptions;

/// Build a walker over `root` that never descends into `options.skip_dirs`.
///
/// Standard filters are off: `.gitignore` and hidden-file rules do not apply,
/// only the skip list does. Entries are yielded in file-name order.
pub(crate) fn build_walker(root: &Path, options: &PackOptions) -> ignore::Walk {
    let skip_dirs = options.skip_dirs.clone();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            // depth 0 is the root itself, which is never skipped
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !skip_dirs.iter().any(|skip| *skip == name)
        });
    builder.build()
}

/// Whether the file at `path` belongs in the archive.
pub(crate) fn is_selected(path: &Path, options: &PackOptions) -> bool {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if options.allowed_files.iter().any(|f| *f == file_name) {
        return true;
    }
    let parent = path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    options.allowed_dirs.iter().any(|d| *d == parent)
}

/// `path` relative to `root`, always with `/` separators.
pub(crate) fn archive_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
