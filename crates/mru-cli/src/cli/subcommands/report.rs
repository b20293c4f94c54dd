use clap::Subcommand;

/// Abuse report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Reports filed by the signed-in user, or against `--against`.
    List {
        #[arg(long, conflicts_with = "all")]
        against: Option<String>,
        /// Every report, moderation view.
        #[arg(long)]
        all: bool,
        #[arg(long, requires = "all")]
        include_closed: bool,
    },
    /// File a report against a user.
    Create {
        target: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        link: String,
    },
    /// Change the description of a report.
    Update {
        id: i64,
        #[arg(long)]
        description: String,
    },
    /// Close own reports.
    Close {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Reopen own reports.
    Reopen {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Delete own reports.
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}
