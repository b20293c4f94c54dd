use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Pick the row cap: the subcommand's `--limit`, else the global one, else
/// `general.default_limit`.
const fn row_cap(subcommand: Option<u32>, global: Option<u32>, configured: u32) -> u32 {
    match (subcommand, global) {
        (Some(cap), _) | (None, Some(cap)) => cap,
        (None, None) => configured,
    }
}

/// Drop rows past the cap in effect for this command.
pub fn truncate<T>(
    rows: &mut Vec<T>,
    subcommand: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cap = row_cap(subcommand, flags.limit, ctx.config.general.default_limit);
    rows.truncate(usize::try_from(cap)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::row_cap;

    #[test]
    fn subcommand_limit_wins_over_global() {
        assert_eq!(row_cap(Some(3), Some(50), 20), 3);
    }

    #[test]
    fn configured_limit_applies_without_flags() {
        assert_eq!(row_cap(None, None, 20), 20);
        assert_eq!(row_cap(None, Some(7), 20), 7);
    }
}
