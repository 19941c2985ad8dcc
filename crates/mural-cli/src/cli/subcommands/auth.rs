use clap::{Args, Subcommand};

/// Admin token commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Store the admin token issued by the backend login.
    SetToken(AuthSetTokenArgs),
    /// Remove the stored token.
    Logout,
    /// Show whether a token is available and where it comes from.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSetTokenArgs {
    /// Bearer token value.
    pub token: String,
}
