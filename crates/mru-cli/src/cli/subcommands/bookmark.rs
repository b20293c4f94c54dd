use clap::Subcommand;

/// Bookmark commands for the signed-in user.
#[derive(Clone, Debug, Subcommand)]
pub enum BookmarkCommands {
    /// Bookmarked products.
    List,
    /// Bookmark products.
    Add {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Remove bookmarks.
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Remove every bookmark.
    Clear,
}
