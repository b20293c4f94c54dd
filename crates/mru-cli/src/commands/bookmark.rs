use mru_core::entities::BookmarkedProduct;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BookmarkCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mru bookmark <subcommand>`.
pub async fn handle(
    action: &BookmarkCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    let market = &ctx.market;

    if let BookmarkCommands::Add { ids } = action {
        return output(&market.bookmark(&user.id, ids).await?, flags.format);
    }

    let bookmarker = match market.bookmarker(&user.id).await {
        Ok(bookmarker) => bookmarker,
        Err(error) if error.is_not_found() => {
            tracing::debug!("user has never bookmarked anything");
            return output(&Vec::<BookmarkedProduct>::new(), flags.format);
        }
        Err(error) => return Err(error.into()),
    };

    let rows = match action {
        BookmarkCommands::List => market.bookmarked_products(bookmarker.id).await?,
        BookmarkCommands::Remove { ids } => market.remove_bookmarks(bookmarker.id, ids).await?,
        BookmarkCommands::Clear => market.clear_bookmarks(bookmarker.id).await?,
        BookmarkCommands::Add { .. } => unreachable!("handled above"),
    };
    output(&rows, flags.format)
}
