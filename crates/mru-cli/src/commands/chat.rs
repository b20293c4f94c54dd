use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::commands::shared::truncate;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mru chat <subcommand>`.
pub async fn handle(
    action: &ChatCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    let me = user.id.as_str();
    let market = &ctx.market;
    match action {
        ChatCommands::List { limit } => {
            let mut chats = market.chats_for_user(me).await?;
            truncate(&mut chats, *limit, ctx, flags)?;
            output(&chats, flags.format)
        }
        ChatCommands::Open { user } => output(&market.open_chat(me, user).await?, flags.format),
        ChatCommands::Visibility { visible, ids } => {
            output(&market.show_chats(*visible, ids).await?, flags.format)
        }
        ChatCommands::Messages { chat, limit } => {
            let mut messages = market.messages(*chat).await?;
            truncate(&mut messages, *limit, ctx, flags)?;
            output(&messages, flags.format)
        }
        ChatCommands::Send { chat, text } => {
            output(&market.send_message(*chat, me, text).await?, flags.format)
        }
        ChatCommands::Hide { chat, ids, show } => {
            output(&market.show_messages(*chat, me, *show, ids).await?, flags.format)
        }
        ChatCommands::Delete { chat, ids } => {
            output(&market.remove_messages(*chat, me, ids).await?, flags.format)
        }
        ChatCommands::HideAll => output(&market.hide_all_messages(me).await?, flags.format),
        ChatCommands::DeleteAll => output(&market.remove_all_messages(me).await?, flags.format),
    }
}
