//! Reporting repository: abuse reports between users.
//!
//! Bulk writes are scoped to the reporter, so one user can never close or
//! delete another user's reports.

use chrono::Utc;
use mru_core::entities::{Report, RowId};
use mru_core::enums::Table;
use mru_core::updates::ReportChange;
use mru_core::{MarketResult, validate};

use crate::MarketClient;
use crate::builders::ReportBuilder;
use crate::query::{Order, Query};

impl MarketClient {
    /// Reports filed by `reporter`.
    pub async fn reports_by_reporter(&self, reporter: &str) -> MarketResult<Vec<Report>> {
        self.fetch(
            Query::select(Table::Reports, "*")
                .eq("created_by_id", reporter)
                .order("created_at", Order::Desc),
        )
        .await
    }

    /// Reports filed against `reported`.
    pub async fn reports_by_reported(&self, reported: &str) -> MarketResult<Vec<Report>> {
        self.fetch(
            Query::select(Table::Reports, "*")
                .eq("created_on_id", reported)
                .order("created_at", Order::Desc),
        )
        .await
    }

    /// Moderation queue. Closed reports are left out unless asked for.
    pub async fn all_reports(&self, include_closed: bool) -> MarketResult<Vec<Report>> {
        let mut query = Query::select(Table::Reports, "*");
        if !include_closed {
            query = query.eq("is_closed", false);
        }
        self.fetch(query.order("created_at", Order::Desc)).await
    }

    #[must_use]
    pub fn report_builder(&self, reporter: &str) -> ReportBuilder<'_> {
        ReportBuilder::new(self, reporter)
    }

    pub async fn remove_reports(&self, reporter: &str, ids: &[i64]) -> MarketResult<Vec<RowId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::delete(Table::Reports)
                .eq("created_by_id", reporter)
                .in_("id", ids)
                .columns("id"),
        )
        .await
    }

    /// Close reports, stamping today's date.
    pub async fn close_reports(&self, reporter: &str, ids: &[i64]) -> MarketResult<Vec<Report>> {
        self.change_reports(reporter, ids, &ReportChange::close(Utc::now().date_naive()))
            .await
    }

    /// Reopen reports and clear their closed date.
    pub async fn open_reports(&self, reporter: &str, ids: &[i64]) -> MarketResult<Vec<Report>> {
        self.change_reports(reporter, ids, &ReportChange::reopen())
            .await
    }

    async fn change_reports(
        &self,
        reporter: &str,
        ids: &[i64],
        change: &ReportChange,
    ) -> MarketResult<Vec<Report>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(
            Query::update(Table::Reports, change)?
                .eq("created_by_id", reporter)
                .in_("id", ids)
                .columns("*"),
        )
        .await
    }

    /// Replace a report's description.
    pub async fn modify_report(&self, id: i64, description: &str) -> MarketResult<Report> {
        let mut slot = None;
        let description = validate::description(&mut slot, description, "User report")?;
        let change = ReportChange {
            description: Some(description),
            ..ReportChange::default()
        };
        self.fetch(
            Query::update(Table::Reports, &change)?
                .eq("id", id)
                .columns("*")
                .single(),
        )
        .await
    }
}
