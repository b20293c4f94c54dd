use clap::{Args, Subcommand};

/// Product listing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// Browse products with optional filters.
    List(ProductListArgs),
    /// Get a product by ID.
    Get { id: i64 },
    /// Products listed by the signed-in user.
    Mine,
    /// Create a listing for the signed-in user.
    Create(ProductCreateArgs),
    /// Change fields of a product.
    Update(ProductUpdateArgs),
    /// List products for sale.
    Publish {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Take products off sale.
    Unpublish {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Set the stock count of a product.
    Stock { id: i64, count: i64 },
    /// Delete products.
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Assign categories to a product.
    Tag {
        id: i64,
        #[arg(long = "category", required = true)]
        categories: Vec<i64>,
        /// Drop existing assignments first.
        #[arg(long)]
        replace: bool,
    },
    /// Public URLs of a product's images.
    Images { id: i64 },
    /// Record a purchase of a product.
    Sold { id: i64 },
    /// Orders placed by the signed-in user.
    Orders {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProductListArgs {
    #[arg(long)]
    pub seller: Option<String>,
    #[arg(long, requires = "max_price")]
    pub min_price: Option<f64>,
    #[arg(long, requires = "min_price")]
    pub max_price: Option<f64>,
    #[arg(long, requires = "max_stock")]
    pub min_stock: Option<i64>,
    #[arg(long, requires = "min_stock")]
    pub max_stock: Option<i64>,
    #[arg(long)]
    pub listed: Option<bool>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Vec<i64>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ProductCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Price as typed; validated before sending.
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: String,
    #[arg(long)]
    pub image: Vec<String>,
    #[arg(long)]
    pub category: Vec<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct ProductUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,
    #[arg(long)]
    pub image: Vec<String>,
    #[arg(long)]
    pub listed: Option<bool>,
}
