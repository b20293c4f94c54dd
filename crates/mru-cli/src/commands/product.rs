use mru_core::entities::{CategorizedProduct, RowId};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{
    ProductCommands, ProductCreateArgs, ProductListArgs, ProductUpdateArgs,
};
use crate::commands::shared::truncate;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ProductCreateResponse {
    id: i64,
    categories: Vec<CategorizedProduct>,
}

#[derive(Serialize)]
struct ProductImagesResponse {
    id: i64,
    urls: Vec<String>,
}

#[derive(Serialize)]
struct ProductSoldResponse {
    id: i64,
    sold: bool,
}

/// Handle `mru product <subcommand>`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let market = &ctx.market;
    match action {
        ProductCommands::List(args) => list(args, ctx, flags).await,
        ProductCommands::Get { id } => output(&market.product(*id).await?, flags.format),
        ProductCommands::Mine => {
            let user = ctx.require_user().await?;
            output(&market.products_by_seller(&user.id).await?, flags.format)
        }
        ProductCommands::Create(args) => create(args, ctx, flags).await,
        ProductCommands::Update(args) => update(args, ctx, flags).await,
        ProductCommands::Publish { ids } => output(&market.set_listed(true, ids).await?, flags.format),
        ProductCommands::Unpublish { ids } => {
            output(&market.set_listed(false, ids).await?, flags.format)
        }
        ProductCommands::Stock { id, count } => {
            output(&market.set_stock(*id, *count).await?, flags.format)
        }
        ProductCommands::Remove { ids } => {
            let removed: Vec<RowId> = market.remove_products(ids).await?;
            output(&removed, flags.format)
        }
        ProductCommands::Tag {
            id,
            categories,
            replace,
        } => {
            let tagged = if *replace {
                market.retag_product(*id, categories).await?
            } else {
                market.tag_product(*id, categories).await?
            };
            output(&tagged, flags.format)
        }
        ProductCommands::Images { id } => {
            let product = market.product(*id).await?;
            let urls = market.product_image_urls(&product);
            output(&ProductImagesResponse { id: *id, urls }, flags.format)
        }
        ProductCommands::Sold { id } => {
            market.mark_sold(*id).await?;
            output(&ProductSoldResponse { id: *id, sold: true }, flags.format)
        }
        ProductCommands::Orders { limit } => {
            let user = ctx.require_user().await?;
            let mut orders = market.orders_by_buyer(&user.id).await?;
            truncate(&mut orders, *limit, ctx, flags)?;
            output(&orders, flags.format)
        }
    }
}

async fn list(args: &ProductListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut filter = ctx.market.product_filter();
    if let Some(seller) = &args.seller {
        filter.seller(seller)?;
    }
    if let (Some(min), Some(max)) = (args.min_price, args.max_price) {
        filter.price(min, max)?;
    }
    if let (Some(min), Some(max)) = (args.min_stock, args.max_stock) {
        filter.stock(min, max)?;
    }
    if let Some(listed) = args.listed {
        filter.listed(listed);
    }
    if let Some(search) = &args.search {
        filter.search(search)?;
    }
    if !args.category.is_empty() {
        filter.categories(&args.category)?;
    }

    let mut products = filter.find().await?;
    truncate(&mut products, args.limit, ctx, flags)?;
    output(&products, flags.format)
}

async fn create(
    args: &ProductCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    let mut builder = ctx.market.product_builder();
    builder
        .seller(&user.id)?
        .title(&args.title)?
        .description(&args.description)?
        .price(&args.price)?
        .stock(&args.stock)?;
    if !args.image.is_empty() {
        builder.image(args.image.as_slice())?;
    }

    let row = builder.submit().await?;
    let categories = if args.category.is_empty() {
        Vec::new()
    } else {
        ctx.market.tag_product(row.id, &args.category).await?
    };
    output(
        &ProductCreateResponse {
            id: row.id,
            categories,
        },
        flags.format,
    )
}

async fn update(
    args: &ProductUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut modifier = ctx.market.product_modifier(args.id);
    if let Some(title) = &args.title {
        modifier.title(title)?;
    }
    if let Some(description) = &args.description {
        modifier.description(description)?;
    }
    if let Some(price) = &args.price {
        modifier.price(price)?;
    }
    if let Some(stock) = &args.stock {
        modifier.stock(stock)?;
    }
    if !args.image.is_empty() {
        modifier.image(args.image.as_slice())?;
    }
    if let Some(listed) = args.listed {
        modifier.listed(listed);
    }
    output(&modifier.modify().await?, flags.format)
}
