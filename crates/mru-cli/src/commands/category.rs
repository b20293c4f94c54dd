use mru_core::updates::CategoryChangeBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::commands::shared::truncate;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mru category <subcommand>`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let market = &ctx.market;
    match action {
        CategoryCommands::List => output(&market.category_tags().await?, flags.format),
        CategoryCommands::Get { id } => output(&market.category_tag(*id).await?, flags.format),
        CategoryCommands::Create { name, description } => {
            output(&market.register_category(name, description).await?, flags.format)
        }
        CategoryCommands::Update {
            id,
            name,
            description,
        } => {
            let mut change = CategoryChangeBuilder::new();
            if let Some(name) = name {
                change = change.name(name);
            }
            if let Some(description) = description {
                change = change.description(description);
            }
            output(&market.modify_category(*id, &change.build()).await?, flags.format)
        }
        CategoryCommands::Remove { ids } => output(&market.remove_categories(ids).await?, flags.format),
        CategoryCommands::Products { id, limit } => {
            let mut products = market.products_by_category(*id).await?;
            truncate(&mut products, *limit, ctx, flags)?;
            output(&products, flags.format)
        }
    }
}
