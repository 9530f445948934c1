//! Task states derived from document data.
//!
//! Every function here is pure. Handlers call them after each mutation, and
//! the task list runs `heal` over stored states so a `Completed` flag whose
//! data no longer supports it shows as `InProgress`.

use crate::domain::actor::AttorneyRole;
use crate::domain::document::Document;
use crate::domain::registry::ActorRegistry;
use crate::task::{fill_in_tasks, Task, TaskState};

pub fn your_details(doc: &Document) -> TaskState {
    let donor = &doc.donor;
    let named = !donor.first_names.trim().is_empty() && !donor.last_name.trim().is_empty();
    if !named {
        return TaskState::NotStarted;
    }
    if donor.date_of_birth.is_some() && !donor.address.is_empty() {
        TaskState::Completed
    } else {
        TaskState::InProgress
    }
}

pub fn choose_attorneys(doc: &Document) -> TaskState {
    let attorneys = &doc.attorneys;
    if attorneys.is_empty() {
        return TaskState::NotStarted;
    }
    if !attorneys.is_complete() || !doc.attorney_decisions.is_settled(attorneys.len()) {
        return TaskState::InProgress;
    }
    TaskState::Completed
}

pub fn choose_replacement_attorneys(doc: &Document) -> TaskState {
    if doc.want_replacement_attorneys.is_no() {
        return TaskState::Completed;
    }

    let replacements = &doc.replacement_attorneys;
    if replacements.is_empty() {
        return if doc.want_replacement_attorneys.is_unset() {
            TaskState::NotStarted
        } else {
            TaskState::InProgress
        };
    }
    if !replacements.is_complete() {
        return TaskState::InProgress;
    }
    if doc.replacement_decisions_required()
        && !doc
            .replacement_attorney_decisions
            .is_settled(replacements.len())
    {
        return TaskState::InProgress;
    }
    if doc.step_in_required() && !doc.how_replacements_step_in.is_settled() {
        return TaskState::InProgress;
    }
    TaskState::Completed
}

pub fn certificate_provider(doc: &Document) -> TaskState {
    match &doc.certificate_provider {
        None => TaskState::NotStarted,
        Some(cp) if cp.is_complete() => TaskState::Completed,
        Some(_) => TaskState::InProgress,
    }
}

pub fn people_to_notify(doc: &Document) -> TaskState {
    if doc.want_to_notify_people.is_no() {
        return TaskState::Completed;
    }
    if doc.people_to_notify.is_empty() {
        return if doc.want_to_notify_people.is_unset() {
            TaskState::NotStarted
        } else {
            TaskState::InProgress
        };
    }
    if doc.people_to_notify.iter().all(|p| p.is_complete()) {
        TaskState::Completed
    } else {
        TaskState::InProgress
    }
}

/// What the data says a task should be. `None` for tasks whose state is
/// recorded by their own section rather than derived.
///
/// The closing tasks depend on the ones before them, so a fill-in task
/// dropping back also drops checking, payment and signing.
pub fn derived(doc: &Document, task: Task) -> Option<TaskState> {
    match task {
        Task::YourDetails => Some(your_details(doc)),
        Task::ChooseAttorneys => Some(choose_attorneys(doc)),
        Task::ChooseReplacementAttorneys => Some(choose_replacement_attorneys(doc)),
        Task::CertificateProvider => Some(certificate_provider(doc)),
        Task::PeopleToNotify => Some(people_to_notify(doc)),
        Task::WhenCanTheLpaBeUsed => {
            Some(answered(doc.when_can_be_used.is_some(), doc.tasks.when_can_the_lpa_be_used))
        }
        Task::LifeSustainingTreatment => Some(answered(
            doc.life_sustaining_treatment.is_some(),
            doc.tasks.life_sustaining_treatment,
        )),
        Task::CheckYourLpa => Some(answered(fill_in_complete(doc), doc.tasks.check_your_lpa)),
        Task::PayForLpa => Some(answered(
            !doc.payment_reference.trim().is_empty()
                && shown(doc, Task::CheckYourLpa).is_completed(),
            doc.tasks.pay_for_lpa,
        )),
        Task::ConfirmYourIdentityAndSign => Some(answered(
            shown(doc, Task::PayForLpa).is_completed(),
            doc.tasks.confirm_your_identity_and_sign,
        )),
        Task::Restrictions => None,
    }
}

/// Task state as shown to the donor, after healing.
pub fn shown(doc: &Document, task: Task) -> TaskState {
    heal(doc.tasks.get(task), derived(doc, task))
}

/// Every "fill in the LPA" task for the document's type shows as completed.
pub fn fill_in_complete(doc: &Document) -> bool {
    fill_in_tasks(doc.lpa_type)
        .iter()
        .all(|task| shown(doc, *task).is_completed())
}

fn answered(has_answer: bool, stored: TaskState) -> TaskState {
    if has_answer {
        stored
    } else if stored == TaskState::NotStarted {
        TaskState::NotStarted
    } else {
        TaskState::InProgress
    }
}

/// A stored `Completed` the data cannot back up becomes `InProgress`.
pub fn heal(stored: TaskState, derived: Option<TaskState>) -> TaskState {
    match (stored, derived) {
        (TaskState::Completed, Some(state)) if !state.is_completed() => TaskState::InProgress,
        (stored, _) => stored,
    }
}

/// Recomputes both attorney tasks; either collection changing can move both.
pub fn refresh_attorney_tasks(doc: &mut Document) {
    doc.tasks.choose_attorneys = choose_attorneys(doc);
    doc.tasks.choose_replacement_attorneys = choose_replacement_attorneys(doc);
}

/// Recomputes the task owning `role` and forces `InProgress` once the group is empty.
pub fn refresh_after_removal(doc: &mut Document, role: AttorneyRole) {
    refresh_attorney_tasks(doc);
    if doc.attorneys_for(role).is_empty() {
        doc.tasks
            .set(Document::task_for(role), TaskState::InProgress);
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
