//! Single-question sections and the end of the journey.

use crate::domain::document::Document;
use crate::domain::types::{CanBeUsedWhen, LifeSustainingTreatment};
use crate::journey::form::FormValues;
use crate::journey::validation::{Problem, ValidationErrors};
use crate::journey::{JourneyContext, Outcome};
use crate::navigation::Section;
use crate::task::{Task, TaskState};

const PAYMENT_REFERENCE_MAX: usize = 100;

/// Records a deferred answer: data untouched, task in progress.
fn answered_later(mut doc: Document, task: Task) -> Outcome {
    doc.tasks.set(task, TaskState::InProgress);
    Outcome::saved(doc, Section::TaskList)
}

pub fn when_can_be_used(mut doc: Document, form: &FormValues) -> Outcome {
    if form.answer_later() {
        return answered_later(doc, Task::WhenCanTheLpaBeUsed);
    }

    let mut errors = ValidationErrors::default();
    let when: Option<CanBeUsedWhen> = errors.select(form, "when", "whenYourAttorneysCanUseYourLpa");
    let Some(when) = when else {
        return Outcome::invalid(errors);
    };

    doc.when_can_be_used = Some(when);
    doc.tasks.when_can_the_lpa_be_used = TaskState::Completed;
    Outcome::saved(doc, Section::TaskList)
}

pub fn life_sustaining_treatment(mut doc: Document, form: &FormValues) -> Outcome {
    if form.answer_later() {
        return answered_later(doc, Task::LifeSustainingTreatment);
    }

    let mut errors = ValidationErrors::default();
    let option: Option<LifeSustainingTreatment> =
        errors.select(form, "option", "ifTheDonorGivesConsentToLifeSustainingTreatment");
    let Some(option) = option else {
        return Outcome::invalid(errors);
    };

    doc.life_sustaining_treatment = Some(option);
    doc.tasks.life_sustaining_treatment = TaskState::Completed;
    Outcome::saved(doc, Section::TaskList)
}

/// Restrictions are optional; an empty answer still completes the task.
pub fn restrictions(mut doc: Document, form: &FormValues, ctx: &JourneyContext<'_>) -> Outcome {
    if form.answer_later() {
        return answered_later(doc, Task::Restrictions);
    }

    let mut errors = ValidationErrors::default();
    let text = form.get("restrictions");
    errors.max_length(
        "restrictions",
        "restrictions",
        text,
        ctx.config.limits.max_restrictions_length,
    );
    if !errors.is_empty() {
        return Outcome::invalid(errors);
    }

    doc.restrictions = text.to_string();
    doc.tasks.restrictions = TaskState::Completed;
    Outcome::saved(doc, Section::TaskList)
}

pub fn check_your_lpa(mut doc: Document, form: &FormValues) -> Outcome {
    if !form.yes_no("checked").is_yes() {
        return Outcome::invalid(ValidationErrors::with(
            "checked",
            Problem::Select {
                label: "checkedAndHappy",
            },
        ));
    }

    doc.tasks.check_your_lpa = TaskState::Completed;
    Outcome::saved(doc, Section::AboutPayment)
}

/// Records the reference of a payment taken elsewhere.
pub fn about_payment(mut doc: Document, form: &FormValues) -> Outcome {
    let mut errors = ValidationErrors::default();
    let reference = errors.text(
        form,
        "payment-reference",
        "paymentReference",
        PAYMENT_REFERENCE_MAX,
    );
    if !errors.is_empty() {
        return Outcome::invalid(errors);
    }

    doc.payment_reference = reference;
    doc.tasks.pay_for_lpa = TaskState::Completed;
    Outcome::saved(doc, Section::ConfirmYourIdentityAndSign)
}

pub fn confirm_and_sign(mut doc: Document, form: &FormValues) -> Outcome {
    if !form.yes_no("signed").is_yes() {
        return Outcome::invalid(ValidationErrors::with(
            "signed",
            Problem::Select {
                label: "confirmYouHaveSigned",
            },
        ));
    }

    doc.tasks.confirm_your_identity_and_sign = TaskState::Completed;
    Outcome::saved(doc, Section::RegisterTheLpa)
}

#[cfg(test)]
#[path = "tests/sections_tests.rs"]
mod tests;
