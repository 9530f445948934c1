use super::*;
use crate::config::JourneyConfig;
use crate::navigation::Target;
use crate::testing::{context, document, feedback, form, saved, services, StubLookup};

#[test]
fn test_when_can_be_used_completes_task() {
    let (doc, target) = saved(when_can_be_used(
        document(),
        &form(&[("when", "when-capacity-lost")]),
    ));

    assert_eq!(target, Target::to(Section::TaskList));
    assert_eq!(doc.when_can_be_used, Some(CanBeUsedWhen::CapacityLost));
    assert_eq!(doc.tasks.when_can_the_lpa_be_used, TaskState::Completed);
}

#[test]
fn test_when_can_be_used_rejects_unknown_option() {
    let shown = feedback(when_can_be_used(document(), &form(&[("when", "sometimes")])));
    assert_eq!(
        shown.errors.get("when"),
        Some(&Problem::Select {
            label: "whenYourAttorneysCanUseYourLpa"
        })
    );
}

#[test]
fn test_answer_later_leaves_data_and_marks_in_progress() {
    let mut doc = document();
    doc.when_can_be_used = Some(CanBeUsedWhen::HasCapacity);

    let (doc, target) = saved(when_can_be_used(
        doc,
        &form(&[("answer-later", "yes"), ("when", "garbage")]),
    ));

    assert_eq!(target, Target::to(Section::TaskList));
    assert_eq!(doc.when_can_be_used, Some(CanBeUsedWhen::HasCapacity));
    assert_eq!(doc.tasks.when_can_the_lpa_be_used, TaskState::InProgress);
}

#[test]
fn test_life_sustaining_treatment_option() {
    let (doc, _) = saved(life_sustaining_treatment(
        document(),
        &form(&[("option", "option-b")]),
    ));
    assert_eq!(
        doc.life_sustaining_treatment,
        Some(LifeSustainingTreatment::OptionB)
    );
    assert_eq!(doc.tasks.life_sustaining_treatment, TaskState::Completed);

    let shown = feedback(life_sustaining_treatment(document(), &form(&[])));
    assert!(shown.errors.has("option"));
}

#[test]
fn test_restrictions_may_be_empty() {
    let services = services();
    let config = JourneyConfig::default();
    let lookup = StubLookup::found(Vec::new());
    let ctx = context(&services, &config, &lookup);

    let (doc, _) = saved(restrictions(document(), &form(&[]), &ctx));

    assert_eq!(doc.restrictions, "");
    assert_eq!(doc.tasks.restrictions, TaskState::Completed);
}

#[test]
fn test_restrictions_length_comes_from_config() {
    let services = services();
    let mut config = JourneyConfig::default();
    config.limits.max_restrictions_length = 5;
    let lookup = StubLookup::found(Vec::new());
    let ctx = context(&services, &config, &lookup);

    let shown = feedback(restrictions(
        document(),
        &form(&[("restrictions", "far too long")]),
        &ctx,
    ));
    assert_eq!(
        shown.errors.get("restrictions"),
        Some(&Problem::TooLong {
            label: "restrictions",
            length: 5
        })
    );

    let (doc, _) = saved(restrictions(
        document(),
        &form(&[("restrictions", "short")]),
        &ctx,
    ));
    assert_eq!(doc.restrictions, "short");
}

#[test]
fn test_restrictions_answer_later() {
    let services = services();
    let config = JourneyConfig::default();
    let lookup = StubLookup::found(Vec::new());
    let ctx = context(&services, &config, &lookup);

    let (doc, _) = saved(restrictions(
        document(),
        &form(&[("answer-later", "yes")]),
        &ctx,
    ));
    assert_eq!(doc.tasks.restrictions, TaskState::InProgress);
}

#[test]
fn test_end_of_journey_sections_chain() {
    let (doc, target) = saved(check_your_lpa(document(), &form(&[("checked", "yes")])));
    assert_eq!(target, Target::to(Section::AboutPayment));
    assert_eq!(doc.tasks.check_your_lpa, TaskState::Completed);

    let (doc, target) = saved(about_payment(
        doc,
        &form(&[("payment-reference", "PAY-123")]),
    ));
    assert_eq!(target, Target::to(Section::ConfirmYourIdentityAndSign));
    assert_eq!(doc.payment_reference, "PAY-123");
    assert_eq!(doc.tasks.pay_for_lpa, TaskState::Completed);

    let (doc, target) = saved(confirm_and_sign(doc, &form(&[("signed", "yes")])));
    assert_eq!(target, Target::to(Section::RegisterTheLpa));
    assert_eq!(doc.tasks.confirm_your_identity_and_sign, TaskState::Completed);
}

#[test]
fn test_end_of_journey_sections_require_confirmation() {
    assert!(feedback(check_your_lpa(document(), &form(&[("checked", "no")])))
        .errors
        .has("checked"));
    assert!(feedback(about_payment(document(), &form(&[])))
        .errors
        .has("payment-reference"));
    assert!(feedback(confirm_and_sign(document(), &form(&[])))
        .errors
        .has("signed"));
}
