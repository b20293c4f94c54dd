use mru_auth::{AuthUser, SignUpOutcome};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SignupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SignupResponse {
    confirmation_pending: bool,
    user: AuthUser,
}

pub async fn handle(
    args: &SignupArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let auth = ctx.auth();
    let mut builder = auth.sign_up_builder();
    builder.email(&args.email)?.password(&args.password)?;
    if let (Some(first), Some(last)) = (&args.first_name, &args.last_name) {
        builder.fullname(first, last)?;
    }
    if let Some(username) = &args.username {
        builder.username(username)?;
    }

    let outcome = builder.submit().await?;
    let response = SignupResponse {
        confirmation_pending: matches!(outcome, SignUpOutcome::PendingConfirmation(_)),
        user: outcome.user().clone(),
    };
    output(&response, flags.format)
}
