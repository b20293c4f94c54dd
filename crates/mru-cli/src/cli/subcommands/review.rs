use clap::{ArgGroup, Args, Subcommand};

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Reviews of a product or seller.
    List(ReviewSubject),
    /// Average rating of a product or seller.
    Average(ReviewSubject),
    /// Publish a review as the signed-in user.
    Publish {
        #[command(flatten)]
        subject: ReviewSubject,
        #[arg(long, allow_hyphen_values = true)]
        rating: String,
        #[arg(long)]
        description: String,
    },
    /// Change one of own reviews.
    Update {
        id: i64,
        #[arg(long, allow_hyphen_values = true)]
        rating: Option<f64>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete own reviews.
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

/// Exactly one of a product or a seller.
#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("review_subject").required(true).args(["product", "seller"])))]
pub struct ReviewSubject {
    #[arg(long)]
    pub product: Option<i64>,
    #[arg(long)]
    pub seller: Option<String>,
}
