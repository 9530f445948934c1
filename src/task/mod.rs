//! Per-section completion state.
//!
//! `Tasks` is the persisted record; `tracker` recomputes what each
//! data-driven task should be; `list` builds the task list view.

pub mod list;
pub mod tracker;

use serde::{Deserialize, Serialize};

use crate::domain::types::LpaType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskState {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every task on the donor's task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    YourDetails,
    ChooseAttorneys,
    ChooseReplacementAttorneys,
    WhenCanTheLpaBeUsed,
    LifeSustainingTreatment,
    Restrictions,
    CertificateProvider,
    PeopleToNotify,
    CheckYourLpa,
    PayForLpa,
    ConfirmYourIdentityAndSign,
}

/// The tasks that make up "fill in the LPA" for this document's type.
pub fn fill_in_tasks(lpa_type: LpaType) -> [Task; 7] {
    let type_specific = match lpa_type {
        LpaType::PropertyAndAffairs => Task::WhenCanTheLpaBeUsed,
        LpaType::PersonalWelfare => Task::LifeSustainingTreatment,
    };
    [
        Task::YourDetails,
        Task::ChooseAttorneys,
        Task::ChooseReplacementAttorneys,
        type_specific,
        Task::Restrictions,
        Task::CertificateProvider,
        Task::PeopleToNotify,
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tasks {
    pub your_details: TaskState,
    pub choose_attorneys: TaskState,
    pub choose_replacement_attorneys: TaskState,
    pub when_can_the_lpa_be_used: TaskState,
    pub life_sustaining_treatment: TaskState,
    pub restrictions: TaskState,
    pub certificate_provider: TaskState,
    pub people_to_notify: TaskState,
    pub check_your_lpa: TaskState,
    pub pay_for_lpa: TaskState,
    pub confirm_your_identity_and_sign: TaskState,
}

impl Tasks {
    pub fn get(&self, task: Task) -> TaskState {
        match task {
            Task::YourDetails => self.your_details,
            Task::ChooseAttorneys => self.choose_attorneys,
            Task::ChooseReplacementAttorneys => self.choose_replacement_attorneys,
            Task::WhenCanTheLpaBeUsed => self.when_can_the_lpa_be_used,
            Task::LifeSustainingTreatment => self.life_sustaining_treatment,
            Task::Restrictions => self.restrictions,
            Task::CertificateProvider => self.certificate_provider,
            Task::PeopleToNotify => self.people_to_notify,
            Task::CheckYourLpa => self.check_your_lpa,
            Task::PayForLpa => self.pay_for_lpa,
            Task::ConfirmYourIdentityAndSign => self.confirm_your_identity_and_sign,
        }
    }

    pub fn set(&mut self, task: Task, state: TaskState) {
        let slot = match task {
            Task::YourDetails => &mut self.your_details,
            Task::ChooseAttorneys => &mut self.choose_attorneys,
            Task::ChooseReplacementAttorneys => &mut self.choose_replacement_attorneys,
            Task::WhenCanTheLpaBeUsed => &mut self.when_can_the_lpa_be_used,
            Task::LifeSustainingTreatment => &mut self.life_sustaining_treatment,
            Task::Restrictions => &mut self.restrictions,
            Task::CertificateProvider => &mut self.certificate_provider,
            Task::PeopleToNotify => &mut self.people_to_notify,
            Task::CheckYourLpa => &mut self.check_your_lpa,
            Task::PayForLpa => &mut self.pay_for_lpa,
            Task::ConfirmYourIdentityAndSign => &mut self.confirm_your_identity_and_sign,
        };
        *slot = state;
    }
}
