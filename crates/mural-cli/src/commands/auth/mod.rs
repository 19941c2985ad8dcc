mod logout;
mod set_token;
mod status;

use mural_client::TokenStore;
use mural_config::MuralConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `mural auth <subcommand>`.
pub fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &MuralConfig,
) -> anyhow::Result<()> {
    let store = TokenStore::default_location()?;
    match action {
        AuthCommands::SetToken(args) => set_token::handle(args, &store, flags),
        AuthCommands::Logout => logout::handle(&store, flags),
        AuthCommands::Status => status::handle(&store, flags, config),
    }
}
