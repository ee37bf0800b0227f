use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::entity::create(&args, ctx, flags).await,
        Commands::List(args) => commands::entity::list(&args, ctx, flags).await,
        Commands::Students { action } => commands::students::handle(&action, ctx, flags).await,
        Commands::Pets { action } => commands::basics::pets(&action, ctx, flags).await,
        Commands::Artifacts { action } => commands::basics::artifacts(&action, ctx, flags).await,
        Commands::Locations { action } => commands::basics::locations(&action, ctx, flags).await,
        Commands::Cars { action } => commands::basics::cars(&action, ctx, flags).await,
        Commands::Todos { action } => commands::basics::todos(&action, ctx, flags).await,
        Commands::Rooms { action } => commands::basics::rooms(&action, ctx, flags).await,
        Commands::Characters { action } => {
            commands::basics::characters(&action, ctx, flags).await
        }
        Commands::Gallery { action } => commands::relations::gallery(&action, ctx, flags).await,
        Commands::Garage { action } => commands::relations::garage(&action, ctx, flags).await,
        Commands::Zoo { action } => commands::relations::zoo(&action, ctx, flags).await,
        Commands::Heroes { action } => commands::relations::heroes(&action, ctx, flags).await,
        Commands::Messages { action } => commands::relations::messages(&action, ctx, flags).await,
        Commands::Cards { action } => commands::relations::cards(&action, ctx, flags).await,
        Commands::Hotel { action } => commands::hotel::hotel(&action, ctx, flags).await,
        Commands::Restaurants { action } => {
            commands::hotel::restaurants(&action, ctx, flags).await
        }
        Commands::Listings { action } => commands::managers::listings(&action, ctx, flags).await,
        Commands::Games { action } => commands::managers::games(&action, ctx, flags).await,
        Commands::Invoices { action } => commands::managers::invoices(&action, ctx, flags).await,
        Commands::Portfolio { action } => {
            commands::managers::portfolio(&action, ctx, flags).await
        }
        Commands::Tasks { action } => commands::managers::tasks(&action, ctx, flags).await,
        Commands::Exercises { action } => {
            commands::managers::exercises(&action, ctx, flags).await
        }
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
        Commands::Schema(_) | Commands::Pack(_) => {
            unreachable!("schema/pack are pre-dispatched in main")
        }
    }
}
