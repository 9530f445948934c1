use super::*;
use crate::domain::decisions::{AttorneyDecisions, DecisionMode, ReplacementStepIn, StepIn};
use crate::domain::types::{CanBeUsedWhen, YesNo};
use crate::testing::{
    address, certificate_provider as provider_fixture, date, document, document_with,
    filled_document, incomplete_attorney, person_to_notify, uid,
};

#[test]
fn your_details_progression() {
    let mut doc = document();
    assert_eq!(your_details(&doc), TaskState::NotStarted);

    doc.donor.first_names = "Sam".to_string();
    doc.donor.last_name = "Smith".to_string();
    doc.donor.date_of_birth = Some(date(1950, 1, 1));
    assert_eq!(your_details(&doc), TaskState::InProgress);

    doc.donor.address = address("1 Donor Road");
    assert_eq!(your_details(&doc), TaskState::Completed);
}

#[test]
fn single_attorney_is_complete_without_mode() {
    let doc = document_with(1, 0);
    assert_eq!(choose_attorneys(&doc), TaskState::Completed);
    assert_eq!(choose_attorneys(&document()), TaskState::NotStarted);
}

#[test]
fn several_attorneys_need_a_settled_mode() {
    let mut doc = document_with(2, 0);
    assert_eq!(choose_attorneys(&doc), TaskState::InProgress);

    doc.attorney_decisions = AttorneyDecisions::default().apply(DecisionMode::Jointly, "");
    assert_eq!(choose_attorneys(&doc), TaskState::Completed);

    doc.attorney_decisions = doc
        .attorney_decisions
        .apply(DecisionMode::JointlyAndSeverally, "");
    assert_eq!(choose_attorneys(&doc), TaskState::InProgress);

    doc.attorney_decisions.happy_if_one_cannot_act = YesNo::Yes;
    assert_eq!(choose_attorneys(&doc), TaskState::Completed);
}

#[test]
fn incomplete_attorney_keeps_task_in_progress() {
    let mut doc = document();
    doc.attorneys.put(incomplete_attorney(1, "A", "B"));
    assert_eq!(choose_attorneys(&doc), TaskState::InProgress);
}

#[test]
fn declining_replacements_completes_task() {
    let mut doc = document_with(2, 0);
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::NotStarted);

    doc.want_replacement_attorneys = YesNo::Yes;
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::InProgress);

    doc.want_replacement_attorneys = YesNo::No;
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::Completed);
}

#[test]
fn replacements_under_jointly_and_severally_need_step_in() {
    let mut doc = document_with(2, 2);
    doc.want_replacement_attorneys = YesNo::Yes;
    doc.attorney_decisions = AttorneyDecisions {
        how: Some(DecisionMode::JointlyAndSeverally),
        details: String::new(),
        happy_if_one_cannot_act: YesNo::Yes,
    };
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::InProgress);

    doc.how_replacements_step_in = ReplacementStepIn::new(StepIn::WhenOneCanNoLongerAct, "");
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::Completed);

    doc.how_replacements_step_in = ReplacementStepIn::new(StepIn::WhenAllCanNoLongerAct, "");
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::InProgress);

    doc.replacement_attorney_decisions =
        AttorneyDecisions::default().apply(DecisionMode::Jointly, "");
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::Completed);
}

#[test]
fn one_attorney_several_replacements_need_replacement_mode() {
    let mut doc = document_with(1, 2);
    doc.want_replacement_attorneys = YesNo::Yes;
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::InProgress);

    doc.replacement_attorney_decisions =
        AttorneyDecisions::default().apply(DecisionMode::Severally, "");
    assert_eq!(choose_replacement_attorneys(&doc), TaskState::Completed);
}

#[test]
fn certificate_provider_and_people_to_notify() {
    let mut doc = document();
    assert_eq!(certificate_provider(&doc), TaskState::NotStarted);

    let mut cp = provider_fixture("Cee", "Pee");
    cp.address = Default::default();
    doc.certificate_provider = Some(cp.clone());
    assert_eq!(certificate_provider(&doc), TaskState::InProgress);
    cp.address = address("1 Road");
    doc.certificate_provider = Some(cp);
    assert_eq!(certificate_provider(&doc), TaskState::Completed);

    assert_eq!(people_to_notify(&doc), TaskState::NotStarted);
    doc.want_to_notify_people = YesNo::Yes;
    assert_eq!(people_to_notify(&doc), TaskState::InProgress);
    doc.people_to_notify.put(person_to_notify(1, "P", "N"));
    assert_eq!(people_to_notify(&doc), TaskState::Completed);
    doc.want_to_notify_people = YesNo::No;
    assert_eq!(people_to_notify(&doc), TaskState::Completed);
}

#[test]
fn heal_downgrades_unsupported_completion() {
    let doc = document();
    let derived_state = derived(&doc, Task::ChooseAttorneys);
    assert_eq!(
        heal(TaskState::Completed, derived_state),
        TaskState::InProgress
    );
    assert_eq!(
        heal(TaskState::NotStarted, derived_state),
        TaskState::NotStarted
    );
    assert_eq!(heal(TaskState::Completed, None), TaskState::Completed);
}

#[test]
fn heal_checks_recorded_answers() {
    let mut doc = document();
    doc.tasks.when_can_the_lpa_be_used = TaskState::Completed;
    let state = heal(
        doc.tasks.when_can_the_lpa_be_used,
        derived(&doc, Task::WhenCanTheLpaBeUsed),
    );
    assert_eq!(state, TaskState::InProgress);

    doc.when_can_be_used = Some(CanBeUsedWhen::HasCapacity);
    let state = heal(
        doc.tasks.when_can_the_lpa_be_used,
        derived(&doc, Task::WhenCanTheLpaBeUsed),
    );
    assert_eq!(state, TaskState::Completed);
}

#[test]
fn removal_of_last_actor_regresses_to_in_progress() {
    let mut doc = document_with(1, 1);
    doc.want_replacement_attorneys = YesNo::Yes;
    refresh_attorney_tasks(&mut doc);
    assert_eq!(doc.tasks.choose_replacement_attorneys, TaskState::Completed);

    doc.replacement_attorneys.delete(uid(101));
    refresh_after_removal(&mut doc, AttorneyRole::Replacement);
    assert_eq!(doc.tasks.choose_replacement_attorneys, TaskState::InProgress);

    doc.attorneys.delete(uid(1));
    refresh_after_removal(&mut doc, AttorneyRole::Attorney);
    assert_eq!(doc.tasks.choose_attorneys, TaskState::InProgress);
}

#[test]
fn closing_tasks_follow_the_tasks_before_them() {
    let mut doc = filled_document();
    doc.tasks.check_your_lpa = TaskState::Completed;
    doc.payment_reference = "REF1".to_string();
    doc.tasks.pay_for_lpa = TaskState::Completed;
    doc.tasks.confirm_your_identity_and_sign = TaskState::Completed;
    assert!(fill_in_complete(&doc));
    assert_eq!(shown(&doc, Task::ConfirmYourIdentityAndSign), TaskState::Completed);

    doc.donor.address = Default::default();

    assert!(!fill_in_complete(&doc));
    assert_eq!(shown(&doc, Task::YourDetails), TaskState::InProgress);
    assert_eq!(shown(&doc, Task::CheckYourLpa), TaskState::InProgress);
    assert_eq!(shown(&doc, Task::PayForLpa), TaskState::InProgress);
    assert_eq!(shown(&doc, Task::ConfirmYourIdentityAndSign), TaskState::InProgress);
}

#[test]
fn unchecked_lpa_stays_not_started() {
    let doc = filled_document();
    assert_eq!(shown(&doc, Task::CheckYourLpa), TaskState::NotStarted);
    assert_eq!(shown(&doc, Task::PayForLpa), TaskState::NotStarted);
}
