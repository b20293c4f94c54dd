use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ReviewCommands, ReviewSubject};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AverageResponse {
    average: Option<f64>,
}

/// Handle `mru review <subcommand>`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let market = &ctx.market;
    match action {
        ReviewCommands::List(subject) => {
            let reviews = match subject {
                ReviewSubject {
                    product: Some(product),
                    ..
                } => market.product_reviews(*product).await?,
                ReviewSubject {
                    seller: Some(seller),
                    ..
                } => market.seller_reviews(seller).await?,
                ReviewSubject { .. } => anyhow::bail!("a product or seller is required"),
            };
            output(&reviews, flags.format)
        }
        ReviewCommands::Average(subject) => {
            let average = match subject {
                ReviewSubject {
                    product: Some(product),
                    ..
                } => market.average_product_rating(*product).await?,
                ReviewSubject {
                    seller: Some(seller),
                    ..
                } => market.average_seller_rating(seller).await?,
                ReviewSubject { .. } => anyhow::bail!("a product or seller is required"),
            };
            output(&AverageResponse { average }, flags.format)
        }
        ReviewCommands::Publish {
            subject,
            rating,
            description,
        } => {
            let user = ctx.require_user().await?;
            let mut publisher = market.review_publisher(&user.id);
            publisher.rating(rating)?.description(description)?;
            if let Some(product) = subject.product {
                publisher.product(product);
            }
            if let Some(seller) = &subject.seller {
                publisher.seller(seller)?;
            }
            output(&publisher.publish().await?, flags.format)
        }
        ReviewCommands::Update {
            id,
            rating,
            description,
        } => {
            let user = ctx.require_user().await?;
            let review = market
                .modify_review(&user.id, *id, *rating, description.as_deref())
                .await?;
            output(&review, flags.format)
        }
        ReviewCommands::Remove { ids } => {
            let user = ctx.require_user().await?;
            output(&market.remove_reviews(&user.id, ids).await?, flags.format)
        }
    }
}
