use mru_auth::AuthUser;
use mru_core::entities::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AccountUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AccountUpdateResponse {
    user: Option<AuthUser>,
    profile: Option<UserProfile>,
}

pub async fn handle(
    args: &AccountUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let auth = ctx.auth();
    let mut builder = auth.modify_builder();
    if let Some(email) = &args.email {
        builder.email(email)?;
    }
    if let Some(password) = &args.password {
        builder.password(password)?;
    }
    if let (Some(first), Some(last)) = (&args.first_name, &args.last_name) {
        builder.fullname(first, last)?;
    }
    if let Some(username) = &args.username {
        builder.username(username)?;
    }

    let modified = builder.submit().await?;
    output(
        &AccountUpdateResponse {
            user: modified.user,
            profile: modified.profile,
        },
        flags.format,
    )
}
