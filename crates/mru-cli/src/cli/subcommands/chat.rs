use clap::Subcommand;

/// Chat and message commands for the signed-in user.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Chats involving the signed-in user.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Open (or create) the chat with another user.
    Open { user: String },
    /// Show or hide chats.
    Visibility {
        #[arg(long)]
        visible: bool,
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Visible messages of a chat, oldest first.
    Messages {
        chat: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Send a message.
    Send { chat: i64, text: String },
    /// Hide own messages in a chat.
    Hide {
        chat: i64,
        #[arg(required = true)]
        ids: Vec<i64>,
        /// Make the messages visible again instead.
        #[arg(long)]
        show: bool,
    },
    /// Delete own messages in a chat.
    Delete {
        chat: i64,
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Hide every message the signed-in user has sent.
    HideAll,
    /// Delete every message the signed-in user has sent.
    DeleteAll,
}
