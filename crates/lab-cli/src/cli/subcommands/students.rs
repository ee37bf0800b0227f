use clap::Subcommand;

/// Student registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Insert the four fixture students.
    Add,
    /// Print one line per student.
    Info,
    /// Move every email to the students domain.
    UpdateEmails,
    /// Delete every student.
    Truncate,
}
