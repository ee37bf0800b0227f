//! End-to-end packing of a small Django-style project tree.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zip::ZipArchive;

use lab_pack::{PackOptions, pack};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 2)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "manage.py", "# manage");
    write(root, "caller.py", "# caller");
    write(root, "requirements.txt", "Django==5.0");
    write(root, "README.md", "not packed");
    write(root, "main_app/models.py", "# models");
    write(root, "main_app/templates/index.html", "<html/>");
    write(root, "main_app/migrations/0001_initial.py", "# migration");
    write(root, "orm_skeleton/settings.py", "# settings");
    write(root, "venv/lib/main_app/ignored.py", "# inside venv");
    write(root, "main_app/__pycache__/models.cpython-311.pyc", "bytecode");
    write(root, ".git/main_app/HEAD", "ref");
    dir
}

fn entry_names(archive: &Path) -> Vec<String> {
    let mut zip = ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
    let mut names: Vec<String> = (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn packs_only_allow_listed_files() {
    let dir = project();
    let report = pack(dir.path(), &PackOptions::default(), now()).unwrap();

    assert_eq!(
        report.archive.file_name().unwrap().to_string_lossy(),
        "submission-18-30_02.11.24.zip"
    );
    let expected = vec![
        "caller.py",
        "main_app/migrations/0001_initial.py",
        "main_app/models.py",
        "manage.py",
        "orm_skeleton/settings.py",
        "requirements.txt",
    ];
    assert_eq!(entry_names(&report.archive), expected);

    let mut sorted = report.entries.clone();
    sorted.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn archived_content_is_intact() {
    let dir = project();
    let report = pack(dir.path(), &PackOptions::default(), now()).unwrap();

    let mut zip = ZipArchive::new(fs::File::open(&report.archive).unwrap()).unwrap();
    let mut contents = String::new();
    zip.by_name("main_app/models.py")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "# models");
}

#[test]
fn old_archives_are_replaced() {
    let dir = project();
    write(dir.path(), "submission-old.zip", "stale");
    write(dir.path(), "main_app/keep.zip", "nested zips stay");

    let report = pack(dir.path(), &PackOptions::default(), now()).unwrap();
    let root = dir.path().canonicalize().unwrap();
    assert_eq!(report.removed, vec![root.join("submission-old.zip")]);
    assert!(!dir.path().join("submission-old.zip").exists());
    assert!(dir.path().join("main_app/keep.zip").exists());

    // A second run removes the first run's archive and writes a new one.
    let again = pack(dir.path(), &PackOptions::default(), now()).unwrap();
    assert_eq!(again.removed, vec![report.archive.clone()]);
    assert!(again.archive.exists());
}

#[test]
fn custom_options_change_selection_and_name() {
    let dir = project();
    let options = PackOptions {
        allowed_files: vec!["README.md".into()],
        allowed_dirs: Vec::new(),
        archive_prefix: "exam".into(),
        ..PackOptions::default()
    };
    let report = pack(dir.path(), &options, now()).unwrap();
    assert_eq!(
        report.archive.file_name().unwrap().to_string_lossy(),
        "exam-18-30_02.11.24.zip"
    );
    assert_eq!(entry_names(&report.archive), vec!["README.md"]);
}
