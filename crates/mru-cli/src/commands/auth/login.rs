use chrono::{DateTime, Utc};
use mru_auth::AuthUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    user: AuthUser,
    expires_at: Option<DateTime<Utc>>,
}

pub async fn handle(
    email: &str,
    password: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let auth = ctx.auth();
    let mut builder = auth.sign_in_builder();
    builder.email(email)?.password(password)?;
    let session = builder.submit().await?;

    output(
        &LoginResponse {
            expires_at: session.expires(),
            user: session.user,
        },
        flags.format,
    )
}
