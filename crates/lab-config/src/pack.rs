//! Allow-lists for the submission archive.

use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_skip_dirs() -> Vec<String> {
    strings(&["venv", ".venv", "__pycache__", ".git", ".idea", ".vscode"])
}

fn default_allowed_files() -> Vec<String> {
    strings(&["requirements.txt", "manage.py", "caller.py"])
}

fn default_allowed_dirs() -> Vec<String> {
    strings(&["main_app", "orm_skeleton", "migrations"])
}

fn default_archive_prefix() -> String {
    "submission".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackConfig {
    /// Directory names the walk never descends into.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// File names included wherever they appear.
    #[serde(default = "default_allowed_files")]
    pub allowed_files: Vec<String>,

    /// Files whose immediate parent has one of these names are included.
    #[serde(default = "default_allowed_dirs")]
    pub allowed_dirs: Vec<String>,

    /// Archive names are `{prefix}-{timestamp}.zip`.
    #[serde(default = "default_archive_prefix")]
    pub archive_prefix: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            skip_dirs: default_skip_dirs(),
            allowed_files: default_allowed_files(),
            allowed_dirs: default_allowed_dirs(),
            archive_prefix: default_archive_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_django_layout() {
        let config = PackConfig::default();
        assert!(config.skip_dirs.contains(&"__pycache__".to_string()));
        assert_eq!(config.allowed_files.len(), 3);
        assert_eq!(config.allowed_dirs, vec!["main_app", "orm_skeleton", "migrations"]);
        assert_eq!(config.archive_prefix, "submission");
    }
}
