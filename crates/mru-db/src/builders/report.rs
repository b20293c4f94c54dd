use mru_core::drafts::ReportDraft;
use mru_core::entities::Report;
use mru_core::enums::{Field, Table};
use mru_core::{MarketResult, ValidationError, validate};
use serde::Serialize;

use crate::MarketClient;
use crate::query::Query;

#[derive(Serialize)]
struct NewReport<'d> {
    #[serde(flatten)]
    draft: &'d ReportDraft,
    created_on_id: String,
}

/// Builds an abuse report; the reported user is named at submission.
#[derive(Debug)]
pub struct ReportBuilder<'a> {
    client: &'a MarketClient,
    draft: ReportDraft,
}

impl<'a> ReportBuilder<'a> {
    pub(crate) fn new(client: &'a MarketClient, reporter: &str) -> Self {
        Self {
            client,
            draft: ReportDraft::new(reporter),
        }
    }

    pub fn description(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::description(&mut self.draft.description, raw, "User report")?;
        Ok(self)
    }

    /// Attach a `.txt` object key with supporting information.
    pub fn link(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::link(&mut self.draft.linked_information, raw)?;
        Ok(self)
    }

    #[must_use]
    pub const fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// File the report against `target`.
    ///
    /// # Errors
    ///
    /// Returns a validation error without sending anything if the
    /// description or target is missing.
    pub async fn report(&self, target: &str) -> MarketResult<Report> {
        self.draft.ensure_complete()?;
        let created_on_id = validate::required_id(
            &mut None,
            target,
            Field::Subject,
            "Reported user is not specified",
        )?;
        tracing::info!(reporter = %self.draft.created_by_id, "filing report");
        self.client
            .fetch(
                Query::insert(
                    Table::Reports,
                    &NewReport {
                        draft: &self.draft,
                        created_on_id,
                    },
                )?
                .columns("*")
                .single(),
            )
            .await
    }
}
