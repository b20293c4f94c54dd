use std::path::PathBuf;

use clap::Subcommand;

/// Profile and interaction commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Show a profile; defaults to the signed-in user.
    Profile { id: Option<String> },
    /// Change profile fields of the signed-in user.
    Update {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Upload a new profile picture.
    Picture { file: PathBuf },
    /// Remove the profile picture.
    ClearPicture,
    /// Block a user.
    Block { user: String },
    /// Unblock a user.
    Unblock { user: String },
    /// Mute a user.
    Mute { user: String },
    /// Unmute a user.
    Unmute { user: String },
    /// Interactions where someone is blocked.
    Blocked,
    /// Interactions where someone is muted.
    Muted,
}
