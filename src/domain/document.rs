//! The LPA document aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::actor::{AttorneyRole, CertificateProvider, Donor, PersonToNotify};
use crate::domain::decisions::{AttorneyDecisions, DecisionMode, ReplacementStepIn, StepIn};
use crate::domain::registry::{ActorList, ActorRegistry, Attorneys};
use crate::domain::types::{CanBeUsedWhen, LifeSustainingTreatment, LpaId, LpaType, YesNo};
use crate::task::{Task, Tasks};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub lpa_id: LpaId,
    pub lpa_type: LpaType,
    /// Incremented by the store on every put.
    #[serde(default)]
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub donor: Donor,
    #[serde(default)]
    pub attorneys: Attorneys,
    #[serde(default)]
    pub attorney_decisions: AttorneyDecisions,
    #[serde(default)]
    pub want_replacement_attorneys: YesNo,
    #[serde(default)]
    pub replacement_attorneys: Attorneys,
    #[serde(default)]
    pub replacement_attorney_decisions: AttorneyDecisions,
    #[serde(default)]
    pub how_replacements_step_in: ReplacementStepIn,
    #[serde(default)]
    pub when_can_be_used: Option<CanBeUsedWhen>,
    #[serde(default)]
    pub life_sustaining_treatment: Option<LifeSustainingTreatment>,
    #[serde(default)]
    pub restrictions: String,
    #[serde(default)]
    pub certificate_provider: Option<CertificateProvider>,
    #[serde(default)]
    pub want_to_notify_people: YesNo,
    #[serde(default)]
    pub people_to_notify: ActorList<PersonToNotify>,
    #[serde(default)]
    pub payment_reference: String,
    #[serde(default)]
    pub tasks: Tasks,
}

impl Document {
    pub fn new(lpa_id: LpaId, lpa_type: LpaType, donor_email: &str, now: DateTime<Utc>) -> Self {
        Self {
            lpa_id,
            lpa_type,
            version: 0,
            created_at: now,
            updated_at: now,
            donor: Donor {
                email: donor_email.to_string(),
                ..Default::default()
            },
            attorneys: Attorneys::default(),
            attorney_decisions: AttorneyDecisions::default(),
            want_replacement_attorneys: YesNo::Unset,
            replacement_attorneys: Attorneys::default(),
            replacement_attorney_decisions: AttorneyDecisions::default(),
            how_replacements_step_in: ReplacementStepIn::default(),
            when_can_be_used: None,
            life_sustaining_treatment: None,
            restrictions: String::new(),
            certificate_provider: None,
            want_to_notify_people: YesNo::Unset,
            people_to_notify: ActorList::default(),
            payment_reference: String::new(),
            tasks: Tasks::default(),
        }
    }

    pub fn attorneys_for(&self, role: AttorneyRole) -> &Attorneys {
        match role {
            AttorneyRole::Attorney => &self.attorneys,
            AttorneyRole::Replacement => &self.replacement_attorneys,
        }
    }

    pub fn attorneys_for_mut(&mut self, role: AttorneyRole) -> &mut Attorneys {
        match role {
            AttorneyRole::Attorney => &mut self.attorneys,
            AttorneyRole::Replacement => &mut self.replacement_attorneys,
        }
    }

    pub fn decisions_for(&self, role: AttorneyRole) -> &AttorneyDecisions {
        match role {
            AttorneyRole::Attorney => &self.attorney_decisions,
            AttorneyRole::Replacement => &self.replacement_attorney_decisions,
        }
    }

    pub fn decisions_for_mut(&mut self, role: AttorneyRole) -> &mut AttorneyDecisions {
        match role {
            AttorneyRole::Attorney => &mut self.attorney_decisions,
            AttorneyRole::Replacement => &mut self.replacement_attorney_decisions,
        }
    }

    /// The task list entry owning an attorney collection.
    pub fn task_for(role: AttorneyRole) -> Task {
        match role {
            AttorneyRole::Attorney => Task::ChooseAttorneys,
            AttorneyRole::Replacement => Task::ChooseReplacementAttorneys,
        }
    }

    /// The step-in question applies while several attorneys act jointly and severally.
    pub fn step_in_required(&self) -> bool {
        self.attorneys.len() > 1 && self.attorney_decisions.is(DecisionMode::JointlyAndSeverally)
    }

    /// Whether the replacement attorneys need a decision rule of their own.
    pub fn replacement_decisions_required(&self) -> bool {
        if self.replacement_attorneys.len() <= 1 {
            return false;
        }
        let primary = &self.attorney_decisions;
        self.attorneys.len() == 1
            || primary.is(DecisionMode::Jointly)
            || primary.is(DecisionMode::JointlyForSomeSeverallyForOthers)
            || (primary.is(DecisionMode::JointlyAndSeverally)
                && self.how_replacements_step_in.how == Some(StepIn::WhenAllCanNoLongerAct))
    }

    /// Removes decision answers the current actor composition no longer asks for.
    ///
    /// Runs after every change to an attorney collection, a decision mode or
    /// the step-in rule, so a shrinking group never keeps a stale answer.
    pub fn reconcile_decisions(&mut self) {
        let attorney_count = self.attorneys.len();
        self.attorney_decisions
            .prune(attorney_count, attorney_count > 1);

        if !self.step_in_required() || self.replacement_attorneys.is_empty() {
            self.how_replacements_step_in = ReplacementStepIn::default();
        }

        let replacement_count = self.replacement_attorneys.len();
        let keep = self.replacement_decisions_required();
        self.replacement_attorney_decisions
            .prune(replacement_count, keep);
    }

    /// Clears everything about replacement attorneys.
    pub fn clear_replacements(&mut self) {
        self.replacement_attorneys.clear();
        self.replacement_attorney_decisions = AttorneyDecisions::default();
        self.how_replacements_step_in = ReplacementStepIn::default();
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
