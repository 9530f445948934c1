//! The donor's task list view.

use serde::Serialize;

use crate::domain::document::Document;
use crate::domain::registry::ActorRegistry;
use crate::domain::types::LpaType;
use crate::navigation::Section;
use crate::task::tracker;
use crate::task::{Task, TaskState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListItem {
    pub task: Task,
    /// Display-name key for the template layer.
    pub name: &'static str,
    pub section: Section,
    pub state: TaskState,
    pub count: usize,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListSection {
    pub heading: &'static str,
    pub items: Vec<TaskListItem>,
}

impl Task {
    /// Display-name key shown on the task list.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::YourDetails => "provideYourDetails",
            Self::ChooseAttorneys => "chooseYourAttorneys",
            Self::ChooseReplacementAttorneys => "chooseYourReplacementAttorneys",
            Self::WhenCanTheLpaBeUsed => "chooseWhenTheLpaCanBeUsed",
            Self::LifeSustainingTreatment => "lifeSustainingTreatment",
            Self::Restrictions => "addRestrictionsToTheLpa",
            Self::CertificateProvider => "chooseYourCertificateProvider",
            Self::PeopleToNotify => "peopleToNotifyAboutYourLpa",
            Self::CheckYourLpa => "checkAndSendToYourCertificateProvider",
            Self::PayForLpa => "payForTheLpa",
            Self::ConfirmYourIdentityAndSign => "confirmYourIdentityAndSign",
        }
    }
}

fn item(doc: &Document, task: Task, section: Section, count: usize) -> TaskListItem {
    TaskListItem {
        task,
        name: task.display_name(),
        section,
        state: tracker::shown(doc, task),
        count,
        hidden: false,
    }
}

/// Builds the task list: fill in, pay, then confirm identity and sign.
///
/// Both type-specific items are listed; the one that does not apply to the
/// document's LPA type is hidden.
pub fn build(doc: &Document) -> Vec<TaskListSection> {
    let attorneys_link = if doc.attorneys.is_empty() {
        Section::ChooseAttorneys
    } else {
        Section::ChooseAttorneysSummary
    };
    let replacements_link = if doc.replacement_attorneys.is_empty() {
        Section::DoYouWantReplacementAttorneys
    } else {
        Section::ChooseReplacementAttorneysSummary
    };
    let people_link = if doc.people_to_notify.is_empty() {
        Section::DoYouWantToNotifyPeople
    } else {
        Section::ChoosePeopleToNotifySummary
    };
    let when_can_be_used = TaskListItem {
        hidden: doc.lpa_type != LpaType::PropertyAndAffairs,
        ..item(doc, Task::WhenCanTheLpaBeUsed, Section::WhenCanTheLpaBeUsed, 0)
    };
    let life_sustaining_treatment = TaskListItem {
        hidden: doc.lpa_type != LpaType::PersonalWelfare,
        ..item(
            doc,
            Task::LifeSustainingTreatment,
            Section::LifeSustainingTreatment,
            0,
        )
    };

    let fill_in = TaskListSection {
        heading: "fillInTheLpa",
        items: vec![
            item(doc, Task::YourDetails, Section::YourDetails, 0),
            item(
                doc,
                Task::ChooseAttorneys,
                attorneys_link,
                doc.attorneys.len(),
            ),
            item(
                doc,
                Task::ChooseReplacementAttorneys,
                replacements_link,
                doc.replacement_attorneys.len(),
            ),
            when_can_be_used,
            life_sustaining_treatment,
            item(doc, Task::Restrictions, Section::Restrictions, 0),
            item(
                doc,
                Task::CertificateProvider,
                Section::CertificateProvider,
                0,
            ),
            item(
                doc,
                Task::PeopleToNotify,
                people_link,
                doc.people_to_notify.len(),
            ),
            item(doc, Task::CheckYourLpa, Section::CheckYourLpa, 0),
        ],
    };

    vec![
        fill_in,
        TaskListSection {
            heading: "payForTheLpa",
            items: vec![item(doc, Task::PayForLpa, Section::AboutPayment, 0)],
        },
        TaskListSection {
            heading: "confirmYourIdentityAndSign",
            items: vec![item(
                doc,
                Task::ConfirmYourIdentityAndSign,
                Section::ConfirmYourIdentityAndSign,
                0,
            )],
        },
    ]
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
