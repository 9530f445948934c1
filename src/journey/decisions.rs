//! Decision-mode, happiness, step-in and "do you want replacements" pages.

use crate::domain::actor::AttorneyRole;
use crate::domain::decisions::{DecisionMode, ReplacementStepIn, StepIn};
use crate::domain::document::Document;
use crate::journey::form::FormValues;
use crate::journey::validation::{Problem, ValidationErrors};
use crate::journey::Outcome;
use crate::navigation::router;
use crate::task::tracker;

const DETAILS_MAX: usize = 10000;

pub fn how_decide(mut doc: Document, role: AttorneyRole, form: &FormValues) -> Outcome {
    let mut errors = ValidationErrors::default();
    let label = match role {
        AttorneyRole::Attorney => "howAttorneysShouldMakeDecisions",
        AttorneyRole::Replacement => "howReplacementAttorneysShouldMakeDecisions",
    };
    let mode: Option<DecisionMode> = errors.select(form, "decision-type", label);
    let details = form.get("mixed-details");
    if mode.is_some_and(|m| m.is_mixed()) {
        if details.is_empty() {
            errors.add("mixed-details", Problem::Enter { label: "details" });
        } else {
            errors.max_length("mixed-details", "details", details, DETAILS_MAX);
        }
    }
    let mode = match mode {
        Some(mode) if errors.is_empty() => mode,
        _ => return Outcome::invalid(errors),
    };

    let decisions = doc.decisions_for(role).apply(mode, details);
    *doc.decisions_for_mut(role) = decisions;
    doc.reconcile_decisions();
    tracker::refresh_attorney_tasks(&mut doc);

    let target = router::after_decisions(&doc, role);
    Outcome::saved(doc, target)
}

/// "Are you happy if one attorney cannot act?" Only "yes" settles the mode.
pub fn happiness(mut doc: Document, role: AttorneyRole, form: &FormValues) -> Outcome {
    let answer = form.yes_no("yes-no");
    if answer.is_unset() {
        return Outcome::invalid(ValidationErrors::with(
            "yes-no",
            Problem::Select {
                label: "yesIfYouAreHappy",
            },
        ));
    }

    doc.decisions_for_mut(role).happy_if_one_cannot_act = answer;
    doc.reconcile_decisions();
    tracker::refresh_attorney_tasks(&mut doc);

    Outcome::saved(doc, router::after_happiness(role, answer))
}

pub fn step_in(mut doc: Document, form: &FormValues) -> Outcome {
    let mut errors = ValidationErrors::default();
    let how: Option<StepIn> = errors.select(form, "when-to-step-in", "whenYourReplacementAttorneysStepIn");
    let details = form.get("other-details");
    if how == Some(StepIn::AnotherWay) {
        if details.is_empty() {
            errors.add(
                "other-details",
                Problem::Enter {
                    label: "detailsOfWhenToStepIn",
                },
            );
        } else {
            errors.max_length("other-details", "detailsOfWhenToStepIn", details, DETAILS_MAX);
        }
    }
    let how = match how {
        Some(how) if errors.is_empty() => how,
        _ => return Outcome::invalid(errors),
    };

    doc.how_replacements_step_in = ReplacementStepIn::new(how, details);
    doc.reconcile_decisions();
    tracker::refresh_attorney_tasks(&mut doc);

    let target = router::after_step_in(&doc);
    Outcome::saved(doc, target)
}

/// "No" clears every replacement attorney and what was decided about them.
pub fn want_replacements(mut doc: Document, form: &FormValues) -> Outcome {
    let answer = form.yes_no("yes-no");
    if answer.is_unset() {
        return Outcome::invalid(ValidationErrors::with(
            "yes-no",
            Problem::Select {
                label: "yesToAddReplacementAttorneys",
            },
        ));
    }

    doc.want_replacement_attorneys = answer;
    if answer.is_no() {
        doc.clear_replacements();
    }
    doc.reconcile_decisions();
    tracker::refresh_attorney_tasks(&mut doc);

    let target = router::after_want_replacements(&doc);
    Outcome::saved(doc, target)
}

#[cfg(test)]
#[path = "tests/decisions_tests.rs"]
mod tests;
