use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mru` binary.
#[derive(Debug, Parser)]
#[command(name = "mru", version, about = "MRU Exchange - campus marketplace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to print from list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AuthCommands, ProductCommands, ReviewCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_on_either_side() {
        let cli = Cli::try_parse_from(["mru", "--format", "raw", "category", "list", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Category { .. }));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["mru", "--format", "xml", "category", "list"]).is_err());
    }

    #[test]
    fn product_list_collects_filters() {
        let cli = Cli::try_parse_from([
            "mru", "product", "list", "--min-price", "5", "--max-price", "40", "--category",
            "2", "--category", "7",
        ])
        .expect("cli should parse");
        let Commands::Product {
            action: ProductCommands::List(args),
        } = cli.command
        else {
            panic!("expected product list");
        };
        assert_eq!(args.min_price, Some(5.0));
        assert_eq!(args.max_price, Some(40.0));
        assert_eq!(args.category, vec![2, 7]);
    }

    #[test]
    fn product_create_keeps_price_as_text() {
        let cli = Cli::try_parse_from([
            "mru", "product", "create", "--title", "Desk Lamp", "--description", "Bright",
            "--price", "-5", "--stock", "1",
        ])
        .expect("cli should parse");
        let Commands::Product {
            action: ProductCommands::Create(args),
        } = cli.command
        else {
            panic!("expected product create");
        };
        assert_eq!(args.price, "-5");
    }

    #[test]
    fn review_average_needs_exactly_one_subject() {
        assert!(Cli::try_parse_from(["mru", "review", "average"]).is_err());
        assert!(
            Cli::try_parse_from(["mru", "review", "average", "--product", "1", "--seller", "s"])
                .is_err()
        );
        let cli = Cli::try_parse_from(["mru", "review", "average", "--seller", "uid-1"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Review {
                action: ReviewCommands::Average(_)
            }
        ));
    }

    #[test]
    fn auth_signup_parses_names() {
        let cli = Cli::try_parse_from([
            "mru", "auth", "signup", "--email", "a@mtroyal.ca", "--password", "secret1",
            "--first-name", "Ada", "--last-name", "Lovelace",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Signup(args),
        } = cli.command
        else {
            panic!("expected signup");
        };
        assert_eq!(args.first_name.as_deref(), Some("Ada"));
        assert_eq!(args.username, None);
    }
}
