use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mru report <subcommand>`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let market = &ctx.market;
    if let ReportCommands::List {
        all: true,
        include_closed,
        ..
    } = action
    {
        return output(&market.all_reports(*include_closed).await?, flags.format);
    }

    let user = ctx.require_user().await?;
    let me = user.id.as_str();
    match action {
        ReportCommands::List { against, .. } => {
            let reports = match against {
                Some(reported) => market.reports_by_reported(reported).await?,
                None => market.reports_by_reporter(me).await?,
            };
            output(&reports, flags.format)
        }
        ReportCommands::Create {
            target,
            description,
            link,
        } => {
            let mut builder = market.report_builder(me);
            builder.description(description)?.link(link)?;
            output(&builder.report(target).await?, flags.format)
        }
        ReportCommands::Update { id, description } => {
            output(&market.modify_report(*id, description).await?, flags.format)
        }
        ReportCommands::Close { ids } => output(&market.close_reports(me, ids).await?, flags.format),
        ReportCommands::Reopen { ids } => output(&market.open_reports(me, ids).await?, flags.format),
        ReportCommands::Remove { ids } => output(&market.remove_reports(me, ids).await?, flags.format),
    }
}
