mod login;
mod logout;
mod recovery;
mod signup;
mod update;
mod whoami;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `mru auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Signup(args) => signup::handle(args, ctx, flags).await,
        AuthCommands::Login { email, password } => login::handle(email, password, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags).await,
        AuthCommands::Whoami => whoami::handle(ctx, flags).await,
        AuthCommands::Resend { email } => recovery::resend(email, ctx, flags).await,
        AuthCommands::Reset { email } => recovery::reset(email, ctx, flags).await,
        AuthCommands::Update(args) => update::handle(args, ctx, flags).await,
    }
}
