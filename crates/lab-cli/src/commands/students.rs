use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;
use crate::output::{message, output};

/// Handle `lab students`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        StudentCommands::Add => output(&service.add_students().await?, flags.format),
        StudentCommands::Info => message(&service.get_students_info().await?, flags.format),
        StudentCommands::UpdateEmails => {
            let updated = service.update_students_emails().await?;
            output(&json!({ "updated": updated }), flags.format)
        }
        StudentCommands::Truncate => {
            let deleted = service.truncate_students().await?;
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}
