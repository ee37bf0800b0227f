use std::path::Path;

use anyhow::Context;
use lab_config::{IN_MEMORY, LabConfig};
use lab_db::service::LabService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LabService,
}

impl AppContext {
    /// Open the database named by `--database`, else by `database.path`.
    ///
    /// The parent directory of a file database is created when missing.
    pub async fn init(config: &LabConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let db_path = flags
            .database
            .clone()
            .unwrap_or_else(|| config.database.path.clone());

        if db_path != IN_MEMORY {
            if let Some(parent) = Path::new(&db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
        }

        tracing::debug!(path = %db_path, "opening ormlab database");
        let service = LabService::new_local(&db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?;

        Ok(Self { service })
    }
}
