use clap::Subcommand;

/// Read-only admin views over registered entities.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Show the admin registration of an entity.
    Show { entity: String },
    /// List rows projected on the entity's display columns.
    List {
        entity: String,
        /// Keep rows whose search fields contain this text.
        #[arg(long)]
        search: Option<String>,
    },
}
