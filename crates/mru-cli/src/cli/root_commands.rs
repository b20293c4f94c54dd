use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, BookmarkCommands, CategoryCommands, ChatCommands, ProductCommands,
    ReportCommands, ReviewCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign up, sign in, and manage the account.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse, list, and manage products.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Category tags.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Bookmarked products.
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommands,
    },
    /// Chats and messages.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Abuse reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Reviews and ratings.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Profiles, blocking, and muting.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
