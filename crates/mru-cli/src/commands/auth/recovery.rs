use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct EmailSentResponse<'a> {
    sent_to: &'a str,
}

/// Resend the sign-up confirmation email.
pub async fn resend(email: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let auth = ctx.auth();
    let mut builder = auth.sign_up_builder();
    builder.email(email)?;
    builder.reverify().await?;
    output(&EmailSentResponse { sent_to: email }, flags.format)
}

/// Send a password reset email.
pub async fn reset(email: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let auth = ctx.auth();
    let mut builder = auth.sign_in_builder();
    builder.email(email)?;
    builder.reset_password().await?;
    output(&EmailSentResponse { sent_to: email }, flags.format)
}
