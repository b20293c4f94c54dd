use std::path::Path;

use anyhow::Context;
use mru_core::updates::ProfileChange;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mru user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let market = &ctx.market;
    if let UserCommands::Profile { id: Some(id) } = action {
        return output(&market.profile(id).await?, flags.format);
    }

    let user = ctx.require_user().await?;
    let me = user.id.as_str();
    match action {
        UserCommands::Profile { .. } => output(&market.profile(me).await?, flags.format),
        UserCommands::Update {
            username,
            first_name,
            last_name,
        } => {
            let change = ProfileChange {
                user_name: username.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                ..ProfileChange::default()
            };
            output(&market.update_profile(me, &change).await?, flags.format)
        }
        UserCommands::Picture { file } => {
            let (name, bytes) = read_picture(file).await?;
            output(
                &market.update_profile_picture(me, &name, bytes).await?,
                flags.format,
            )
        }
        UserCommands::ClearPicture => output(&market.clear_profile_picture(me).await?, flags.format),
        UserCommands::Block { user } => output(&market.block(me, user, true).await?, flags.format),
        UserCommands::Unblock { user } => output(&market.unblock(me, user).await?, flags.format),
        UserCommands::Mute { user } => output(&market.mute(me, user, true).await?, flags.format),
        UserCommands::Unmute { user } => output(&market.unmute(me, user).await?, flags.format),
        UserCommands::Blocked => output(&market.blocked_interactions(me).await?, flags.format),
        UserCommands::Muted => output(&market.muted_interactions(me).await?, flags.format),
    }
}

async fn read_picture(file: &Path) -> anyhow::Result<(String, Vec<u8>)> {
    let name = file
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("not a file path: {}", file.display()))?
        .to_string();
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    Ok((name, bytes))
}
