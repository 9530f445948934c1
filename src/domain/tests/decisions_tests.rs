use super::*;

fn parse(mode: &str) -> DecisionMode {
    mode.parse().expect("valid decision mode")
}

#[test]
fn happiness_confirmation_only_for_jointly_and_severally_groups() {
    assert!(requires_happiness_confirmation(
        DecisionMode::JointlyAndSeverally,
        2
    ));
    assert!(!requires_happiness_confirmation(
        DecisionMode::JointlyAndSeverally,
        1
    ));
    assert!(!requires_happiness_confirmation(DecisionMode::Jointly, 5));
    assert!(!requires_happiness_confirmation(
        DecisionMode::JointlyForSomeSeverallyForOthers,
        3
    ));
}

#[test]
fn apply_clears_details_unless_mixed() {
    let existing = AttorneyDecisions::default();

    let jointly = existing.apply(parse("jointly"), "ignored text");
    assert_eq!(jointly.how, Some(DecisionMode::Jointly));
    assert_eq!(jointly.details, "");

    let mixed = existing.apply(parse("mixed"), "x");
    assert_eq!(mixed.how, Some(DecisionMode::JointlyForSomeSeverallyForOthers));
    assert_eq!(mixed.details, "x");

    let back = mixed.apply(parse("severally"), "still ignored");
    assert_eq!(back.details, "");
}

#[test]
fn apply_keeps_happiness_only_when_mode_unchanged() {
    let existing = AttorneyDecisions {
        how: Some(DecisionMode::JointlyAndSeverally),
        details: String::new(),
        happy_if_one_cannot_act: YesNo::Yes,
    };

    let same = existing.apply(DecisionMode::JointlyAndSeverally, "");
    assert_eq!(same.happy_if_one_cannot_act, YesNo::Yes);

    let changed = existing.apply(DecisionMode::Jointly, "");
    assert_eq!(changed.happy_if_one_cannot_act, YesNo::Unset);
}

#[test]
fn settled_rules() {
    let unset = AttorneyDecisions::default();
    assert!(unset.is_settled(1));
    assert!(!unset.is_settled(2));

    let mixed_without_details = unset.apply(DecisionMode::JointlyForSomeSeverallyForOthers, " ");
    assert!(!mixed_without_details.is_settled(2));

    let js = unset.apply(DecisionMode::JointlyAndSeverally, "");
    assert!(!js.is_settled(2));
    let js_happy = AttorneyDecisions {
        happy_if_one_cannot_act: YesNo::Yes,
        ..js.clone()
    };
    assert!(js_happy.is_settled(2));
    let js_unhappy = AttorneyDecisions {
        happy_if_one_cannot_act: YesNo::No,
        ..js
    };
    assert!(!js_unhappy.is_settled(2));
}

#[test]
fn prune_removes_stale_happiness_after_shrinking() {
    let mut decisions = AttorneyDecisions {
        how: Some(DecisionMode::JointlyAndSeverally),
        details: "left over".to_string(),
        happy_if_one_cannot_act: YesNo::Yes,
    };

    decisions.prune(2, true);
    assert_eq!(decisions.details, "");
    assert_eq!(decisions.happy_if_one_cannot_act, YesNo::Yes);

    decisions.prune(1, true);
    assert_eq!(decisions.happy_if_one_cannot_act, YesNo::Unset);

    decisions.prune(1, false);
    assert_eq!(decisions, AttorneyDecisions::default());
}

#[test]
fn decision_mode_parsing() {
    assert_eq!(parse("jointly-and-severally"), DecisionMode::JointlyAndSeverally);
    assert_eq!(
        parse("jointly-for-some-severally-for-others"),
        DecisionMode::JointlyForSomeSeverallyForOthers
    );
    assert!("sometimes".parse::<DecisionMode>().is_err());
    assert_eq!(
        parse(DecisionMode::Severally.slug()),
        DecisionMode::Severally
    );
}

#[test]
fn step_in_details_only_for_another_way() {
    let one = ReplacementStepIn::new(StepIn::WhenOneCanNoLongerAct, "ignored");
    assert_eq!(one.details, "");
    assert!(one.is_settled());

    let other = ReplacementStepIn::new(StepIn::AnotherWay, "");
    assert!(!other.is_settled());

    let other = ReplacementStepIn::new(StepIn::AnotherWay, "when two cannot act");
    assert!(other.is_settled());
    assert!(!ReplacementStepIn::default().is_settled());
}
