use mru_auth::AuthUser;
use mru_core::entities::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WhoamiResponse {
    user: AuthUser,
    confirmed: bool,
    profile: Option<UserProfile>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    let profile = match ctx.market.profile(&user.id).await {
        Ok(profile) => Some(profile),
        Err(error) if error.is_not_found() => None,
        Err(error) => return Err(error.into()),
    };

    output(
        &WhoamiResponse {
            confirmed: user.is_confirmed(),
            user,
            profile,
        },
        flags.format,
    )
}
