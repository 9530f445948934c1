//! Request-level runner for the donor journey.
//!
//! Each submission is one read-modify-write: load the document, run the
//! section handler, and save once if it moved the donor on. Nothing is
//! cached between calls, so concurrent edits resolve as last writer wins.

use serde::Serialize;
use std::sync::Arc;

use crate::config::JourneyConfig;
use crate::domain::document::Document;
use crate::domain::errors::JourneyError;
use crate::domain::services::JourneyServices;
use crate::domain::types::{ActorUid, LpaId, LpaType};
use crate::journey::{self, Feedback, FormValues, JourneyContext, Outcome};
use crate::navigation::{router, Section, Target};
use crate::store::{AddressLookup, DonorStore};
use crate::structured_logger::StructuredLogger;
use crate::task::list::{self, TaskListSection};

/// What the caller should do after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// The submission was saved (or the section is not open yet); go here.
    Redirect(Target),
    /// Show the same section again.
    Render(Feedback),
}

pub struct JourneyService<S: DonorStore, L: AddressLookup> {
    store: S,
    lookup: L,
    services: JourneyServices,
    config: JourneyConfig,
    logger: Option<Arc<StructuredLogger>>,
}

impl<S: DonorStore, L: AddressLookup> JourneyService<S, L> {
    pub fn new(store: S, lookup: L, services: JourneyServices, config: JourneyConfig) -> Self {
        Self {
            store,
            lookup,
            services,
            config,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<StructuredLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Starts a new LPA for the donor and saves it.
    pub async fn create(&self, lpa_type: LpaType, donor_email: &str) -> Result<Document, JourneyError> {
        let mut document = Document::new(
            LpaId::generate(),
            lpa_type,
            donor_email,
            self.services.clock.now(),
        );
        self.store.put(&mut document).await?;

        tracing::info!("Created LPA {} ({})", document.lpa_id, lpa_type.slug());
        if let Some(logger) = &self.logger {
            logger.log_document_created(&document.lpa_id);
        }
        Ok(document)
    }

    pub async fn document(&self, lpa_id: &LpaId) -> Result<Document, JourneyError> {
        Ok(self.store.get(lpa_id).await?)
    }

    /// The task list with stored states healed against the document's data.
    pub async fn task_list(&self, lpa_id: &LpaId) -> Result<Vec<TaskListSection>, JourneyError> {
        let document = self.store.get(lpa_id).await?;
        Ok(list::build(&document))
    }

    /// Handles one form submission for `section`.
    ///
    /// A section the donor cannot reach yet redirects to the task list
    /// without touching the document.
    pub async fn submit(
        &self,
        lpa_id: &LpaId,
        section: Section,
        actor: Option<ActorUid>,
        form: &FormValues,
    ) -> Result<Response, JourneyError> {
        tracing::debug!("Submission for {} on {}", lpa_id, section);
        if let Some(logger) = &self.logger {
            logger.log_submission(lpa_id, section, actor, &form.field_names());
        }

        let result = self.run(lpa_id, section, actor, form).await;
        match &result {
            Ok(Response::Redirect(target)) => {
                if let Some(logger) = &self.logger {
                    logger.log_redirect(lpa_id, section, target);
                }
            }
            Ok(Response::Render(feedback)) => {
                tracing::debug!(
                    "Re-rendering {} with {} error(s)",
                    section,
                    feedback.errors.len()
                );
                if let Some(logger) = &self.logger {
                    logger.log_rejected(
                        lpa_id,
                        section,
                        &feedback.errors.fields(),
                        &feedback.warning_keys(),
                    );
                }
            }
            Err(e) => {
                tracing::warn!("Submission for {} on {} failed: {}", lpa_id, section, e);
                if let Some(logger) = &self.logger {
                    logger.log_failure(lpa_id, section, &e.to_string());
                }
            }
        }
        result
    }

    async fn run(
        &self,
        lpa_id: &LpaId,
        section: Section,
        actor: Option<ActorUid>,
        form: &FormValues,
    ) -> Result<Response, JourneyError> {
        let document = self.store.get(lpa_id).await?;
        if !router::is_reachable(&document, section) {
            tracing::info!("{} is not reachable yet for {}", section, lpa_id);
            return Ok(Response::Redirect(Target::to(Section::TaskList)));
        }

        let ctx = JourneyContext {
            services: &self.services,
            config: &self.config,
            lookup: &self.lookup,
        };
        match journey::dispatch(document, section, actor, form, &ctx).await? {
            Outcome::Saved {
                mut document,
                target,
            } => {
                document.updated_at = self.services.clock.now();
                self.store.put(&mut document).await?;
                tracing::info!("Saved {} v{} after {}", lpa_id, document.version, section);
                Ok(Response::Redirect(target))
            }
            Outcome::Invalid(feedback) => Ok(Response::Render(feedback)),
        }
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
