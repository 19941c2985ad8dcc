use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Vagas(args) => commands::vagas::handle(&args, ctx, flags).await,
        Commands::Vaga(args) => commands::vaga::handle(&args, ctx, flags).await,
        Commands::Cursos => commands::cursos::handle(ctx, flags).await,
        Commands::Habilidades(args) => commands::habilidades::handle(&args, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is pre-dispatched in main"),
    }
}
