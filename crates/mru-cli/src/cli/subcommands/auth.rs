use clap::{Args, Subcommand};

/// Account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account with an institutional email.
    Signup(SignupArgs),
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the stored session.
    Logout,
    /// Show the signed-in user and their profile.
    Whoami,
    /// Resend the sign-up confirmation email.
    Resend {
        #[arg(long)]
        email: String,
    },
    /// Send a password reset email.
    Reset {
        #[arg(long)]
        email: String,
    },
    /// Change login details or profile names.
    Update(AccountUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, requires = "last_name")]
    pub first_name: Option<String>,
    #[arg(long, requires = "first_name")]
    pub last_name: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AccountUpdateArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long, requires = "last_name")]
    pub first_name: Option<String>,
    #[arg(long, requires = "first_name")]
    pub last_name: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
}
