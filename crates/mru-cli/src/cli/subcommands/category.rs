use clap::Subcommand;

/// Category tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List all categories.
    List,
    /// Get a category by ID.
    Get { id: i64 },
    /// Create a category.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    /// Rename or redescribe a category.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete categories.
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Products tagged with a category.
    Products {
        id: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
}
