use super::*;
use crate::domain::decisions::{AttorneyDecisions, ReplacementStepIn};
use crate::task::{fill_in_tasks, TaskState};
use crate::testing::{document, document_with, filled_document, uid};

fn with_mode(mut doc: Document, mode: DecisionMode) -> Document {
    doc.attorney_decisions = AttorneyDecisions::default().apply(mode, "details");
    doc
}

#[test]
fn attorney_summary_add_another_goes_to_entry() {
    let doc = document_with(1, 0);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Attorney, true),
        Target::to(Section::ChooseAttorneys)
    );
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, true),
        Target::to(Section::ChooseReplacementAttorneys)
    );
}

#[test]
fn attorney_summary_asks_for_mode_when_several() {
    let doc = document_with(2, 0);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Attorney, false),
        Target::to(Section::HowShouldAttorneysMakeDecisions)
    );

    let doc = with_mode(document_with(2, 0), DecisionMode::Jointly);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Attorney, false),
        Target::to(Section::DoYouWantReplacementAttorneys)
    );

    let single = document_with(1, 0);
    assert_eq!(
        after_attorney_summary(&single, AttorneyRole::Attorney, false),
        Target::to(Section::DoYouWantReplacementAttorneys)
    );
}

#[test]
fn attorney_summary_asks_happiness_for_jointly_and_severally() {
    let mut doc = with_mode(document_with(2, 0), DecisionMode::JointlyAndSeverally);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Attorney, false),
        Target::to(Section::AreYouHappyIfOneAttorneyCantAct)
    );

    doc.attorney_decisions.happy_if_one_cannot_act = YesNo::Yes;
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Attorney, false),
        Target::to(Section::DoYouWantReplacementAttorneys)
    );
}

#[test]
fn empty_summary_returns_to_entry_question() {
    let doc = document();
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::DoYouWantReplacementAttorneys)
    );
}

#[test]
fn one_attorney_two_replacements_asks_replacement_decisions() {
    let doc = document_with(1, 2);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::HowShouldReplacementAttorneysMakeDecisions)
    );
}

#[test]
fn replacement_summary_rule_order() {
    // jointly primary, several replacements
    let doc = with_mode(document_with(2, 2), DecisionMode::Jointly);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::HowShouldReplacementAttorneysMakeDecisions)
    );

    let doc = with_mode(document_with(2, 2), DecisionMode::JointlyForSomeSeverallyForOthers);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::HowShouldReplacementAttorneysMakeDecisions)
    );

    let doc = with_mode(document_with(2, 2), DecisionMode::JointlyAndSeverally);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::HowShouldReplacementAttorneysStepIn)
    );

    let doc = with_mode(document_with(2, 1), DecisionMode::JointlyAndSeverally);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::HowShouldReplacementAttorneysStepIn)
    );

    let doc = with_mode(document_with(2, 2), DecisionMode::Severally);
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::TaskList)
    );
}

#[test]
fn replacement_happiness_takes_precedence() {
    let mut doc = document_with(1, 2);
    doc.replacement_attorney_decisions =
        AttorneyDecisions::default().apply(DecisionMode::JointlyAndSeverally, "");
    assert_eq!(
        after_attorney_summary(&doc, AttorneyRole::Replacement, false),
        Target::to(Section::AreYouHappyIfOneReplacementAttorneyCantAct)
    );
}

#[test]
fn step_in_all_with_several_replacements_asks_decisions() {
    let mut doc = with_mode(document_with(2, 2), DecisionMode::JointlyAndSeverally);
    doc.how_replacements_step_in = ReplacementStepIn::new(StepIn::WhenAllCanNoLongerAct, "");
    assert_eq!(
        after_step_in(&doc),
        Target::to(Section::HowShouldReplacementAttorneysMakeDecisions)
    );

    doc.how_replacements_step_in = ReplacementStepIn::new(StepIn::WhenOneCanNoLongerAct, "");
    assert_eq!(after_step_in(&doc), Target::to(Section::TaskList));

    let mut single = with_mode(document_with(2, 1), DecisionMode::JointlyAndSeverally);
    single.how_replacements_step_in = ReplacementStepIn::new(StepIn::WhenAllCanNoLongerAct, "");
    assert_eq!(after_step_in(&single), Target::to(Section::TaskList));
}

#[test]
fn decisions_and_happiness_pages() {
    let doc = with_mode(document_with(2, 0), DecisionMode::Jointly);
    assert_eq!(
        after_decisions(&doc, AttorneyRole::Attorney),
        Target::to(Section::DoYouWantReplacementAttorneys)
    );

    let doc = with_mode(document_with(2, 0), DecisionMode::JointlyAndSeverally);
    assert_eq!(
        after_decisions(&doc, AttorneyRole::Attorney),
        Target::to(Section::AreYouHappyIfOneAttorneyCantAct)
    );

    assert_eq!(
        after_happiness(AttorneyRole::Attorney, YesNo::No),
        Target::to(Section::HowShouldAttorneysMakeDecisions)
    );
    assert_eq!(
        after_happiness(AttorneyRole::Replacement, YesNo::Yes),
        Target::to(Section::TaskList)
    );
    assert_eq!(
        after_happiness(AttorneyRole::Replacement, YesNo::No),
        Target::to(Section::HowShouldReplacementAttorneysMakeDecisions)
    );
}

#[test]
fn want_questions() {
    let mut doc = document();
    doc.want_replacement_attorneys = YesNo::No;
    assert_eq!(after_want_replacements(&doc), Target::to(Section::TaskList));

    doc.want_replacement_attorneys = YesNo::Yes;
    assert_eq!(
        after_want_replacements(&doc),
        Target::to(Section::ChooseReplacementAttorneys)
    );

    let mut doc = document_with(0, 1);
    doc.want_replacement_attorneys = YesNo::Yes;
    assert_eq!(
        after_want_replacements(&doc),
        Target::to(Section::ChooseReplacementAttorneysSummary)
    );

    let mut doc = document();
    doc.want_to_notify_people = YesNo::Yes;
    assert_eq!(
        after_want_to_notify(&doc),
        Target::to(Section::ChoosePeopleToNotify)
    );
}

#[test]
fn removal_targets() {
    let mut doc = document_with(1, 1);
    assert_eq!(
        after_attorney_removal(&doc, AttorneyRole::Replacement),
        Target::to(Section::ChooseReplacementAttorneysSummary)
    );

    doc.replacement_attorneys.delete(uid(101));
    assert_eq!(
        after_attorney_removal(&doc, AttorneyRole::Replacement),
        Target::to(Section::DoYouWantReplacementAttorneys)
    );

    doc.attorneys.delete(uid(1));
    assert_eq!(
        after_attorney_removal(&doc, AttorneyRole::Attorney),
        Target::to(Section::ChooseAttorneys)
    );
    assert_eq!(
        after_person_to_notify_removal(&doc),
        Target::to(Section::DoYouWantToNotifyPeople)
    );
}

#[test]
fn reachability_follows_completed_tasks() {
    let doc = document();
    assert!(is_reachable(&doc, Section::YourDetails));
    assert!(!is_reachable(&doc, Section::CheckYourLpa));
    assert!(!is_reachable(&doc, Section::LifeSustainingTreatment));

    let mut doc = filled_document();
    assert!(is_reachable(&doc, Section::CheckYourLpa));
    assert!(!is_reachable(&doc, Section::AboutPayment));

    doc.tasks.check_your_lpa = TaskState::Completed;
    assert!(is_reachable(&doc, Section::AboutPayment));
    assert!(!is_reachable(&doc, Section::ConfirmYourIdentityAndSign));

    doc.payment_reference = "REF1".to_string();
    doc.tasks.pay_for_lpa = TaskState::Completed;
    assert!(is_reachable(&doc, Section::ConfirmYourIdentityAndSign));
    assert!(!is_reachable(&doc, Section::RegisterTheLpa));

    doc.tasks.confirm_your_identity_and_sign = TaskState::Completed;
    assert!(is_reachable(&doc, Section::RegisterTheLpa));
}

#[test]
fn stale_completed_flags_do_not_open_check_your_lpa() {
    let mut doc = document();
    for task in fill_in_tasks(doc.lpa_type) {
        doc.tasks.set(task, TaskState::Completed);
    }

    assert!(!is_reachable(&doc, Section::CheckYourLpa));
}

#[test]
fn losing_the_last_attorney_closes_payment_and_signing() {
    let mut doc = filled_document();
    doc.tasks.check_your_lpa = TaskState::Completed;
    doc.payment_reference = "REF1".to_string();
    doc.tasks.pay_for_lpa = TaskState::Completed;
    doc.tasks.confirm_your_identity_and_sign = TaskState::Completed;
    assert!(is_reachable(&doc, Section::RegisterTheLpa));

    doc.attorneys.delete(uid(1));

    assert!(!is_reachable(&doc, Section::CheckYourLpa));
    assert!(!is_reachable(&doc, Section::AboutPayment));
    assert!(!is_reachable(&doc, Section::ConfirmYourIdentityAndSign));
    assert!(!is_reachable(&doc, Section::RegisterTheLpa));
}

#[test]
fn personal_welfare_uses_life_sustaining_treatment() {
    let mut doc = document();
    doc.lpa_type = LpaType::PersonalWelfare;
    assert!(is_reachable(&doc, Section::LifeSustainingTreatment));
    assert!(!is_reachable(&doc, Section::WhenCanTheLpaBeUsed));
    assert!(fill_in_tasks(doc.lpa_type).contains(&Task::LifeSustainingTreatment));
}
