//! The next-section rule table.
//!
//! Each function is evaluated against the document *after* the section's
//! mutation has been applied, so edits made out of order (shrinking a group
//! after a mode was chosen, changing the primary mode after replacements
//! were set up) always re-enter the rule table from current data.

use crate::domain::actor::AttorneyRole;
use crate::domain::decisions::{DecisionMode, StepIn};
use crate::domain::document::Document;
use crate::domain::registry::ActorRegistry;
use crate::domain::types::{LpaType, YesNo};
use crate::navigation::{Section, Target};
use crate::task::{tracker, Task};

/// Leaving an attorney summary page.
pub fn after_attorney_summary(doc: &Document, role: AttorneyRole, add_another: bool) -> Target {
    if add_another {
        return Target::to(Section::enter_attorney(role));
    }
    if doc.attorneys_for(role).is_empty() {
        return Target::to(Section::attorney_entry(role));
    }
    match role {
        AttorneyRole::Attorney => after_primary_summary(doc),
        AttorneyRole::Replacement => after_replacement_summary(doc),
    }
}

fn after_primary_summary(doc: &Document) -> Target {
    let count = doc.attorneys.len();
    let decisions = &doc.attorney_decisions;

    if count > 1
        && (decisions.how.is_none()
            || (decisions.is(DecisionMode::JointlyForSomeSeverallyForOthers)
                && decisions.details.trim().is_empty()))
    {
        return Target::to(Section::HowShouldAttorneysMakeDecisions);
    }
    if decisions.requires_happiness_confirmation(count)
        && !decisions.happy_if_one_cannot_act.is_yes()
    {
        return Target::to(Section::AreYouHappyIfOneAttorneyCantAct);
    }
    Target::to(Section::DoYouWantReplacementAttorneys)
}

fn after_replacement_summary(doc: &Document) -> Target {
    let attorney_count = doc.attorneys.len();
    let replacement_count = doc.replacement_attorneys.len();
    let primary = &doc.attorney_decisions;
    let replacement = &doc.replacement_attorney_decisions;

    if replacement.requires_happiness_confirmation(replacement_count)
        && !replacement.happy_if_one_cannot_act.is_yes()
    {
        return Target::to(Section::AreYouHappyIfOneReplacementAttorneyCantAct);
    }
    if replacement_count > 1
        && (attorney_count == 1
            || primary.is(DecisionMode::Jointly)
            || primary.is(DecisionMode::JointlyForSomeSeverallyForOthers))
    {
        return Target::to(Section::HowShouldReplacementAttorneysMakeDecisions);
    }
    if primary.is(DecisionMode::JointlyAndSeverally) {
        return Target::to(Section::HowShouldReplacementAttorneysStepIn);
    }
    Target::to(Section::TaskList)
}

/// Leaving a "how should attorneys make decisions" page.
pub fn after_decisions(doc: &Document, role: AttorneyRole) -> Target {
    let decisions = doc.decisions_for(role);
    let count = doc.attorneys_for(role).len();

    if decisions.requires_happiness_confirmation(count)
        && !decisions.happy_if_one_cannot_act.is_yes()
    {
        return Target::to(Section::attorney_happiness(role));
    }
    match role {
        AttorneyRole::Attorney => Target::to(Section::DoYouWantReplacementAttorneys),
        AttorneyRole::Replacement => Target::to(Section::TaskList),
    }
}

/// Leaving an "are you happy if one cannot act" page.
pub fn after_happiness(role: AttorneyRole, happy: YesNo) -> Target {
    if !happy.is_yes() {
        return Target::to(Section::attorney_decisions(role));
    }
    match role {
        AttorneyRole::Attorney => Target::to(Section::DoYouWantReplacementAttorneys),
        AttorneyRole::Replacement => Target::to(Section::TaskList),
    }
}

/// Leaving "how should replacement attorneys step in".
pub fn after_step_in(doc: &Document) -> Target {
    if doc.attorneys.len() > 1
        && doc.attorney_decisions.is(DecisionMode::JointlyAndSeverally)
        && doc.how_replacements_step_in.how == Some(StepIn::WhenAllCanNoLongerAct)
        && doc.replacement_attorneys.len() > 1
    {
        return Target::to(Section::HowShouldReplacementAttorneysMakeDecisions);
    }
    Target::to(Section::TaskList)
}

/// Leaving "do you want replacement attorneys".
pub fn after_want_replacements(doc: &Document) -> Target {
    if !doc.want_replacement_attorneys.is_yes() {
        return Target::to(Section::TaskList);
    }
    if doc.replacement_attorneys.is_empty() {
        Target::to(Section::ChooseReplacementAttorneys)
    } else {
        Target::to(Section::ChooseReplacementAttorneysSummary)
    }
}

/// Leaving "do you want to notify people".
pub fn after_want_to_notify(doc: &Document) -> Target {
    if !doc.want_to_notify_people.is_yes() {
        return Target::to(Section::TaskList);
    }
    if doc.people_to_notify.is_empty() {
        Target::to(Section::ChoosePeopleToNotify)
    } else {
        Target::to(Section::ChoosePeopleToNotifySummary)
    }
}

/// After an attorney is removed: back to the entry question once the group is empty.
pub fn after_attorney_removal(doc: &Document, role: AttorneyRole) -> Target {
    if doc.attorneys_for(role).is_empty() {
        Target::to(Section::attorney_entry(role))
    } else {
        Target::to(Section::attorney_summary(role))
    }
}

pub fn after_person_to_notify_removal(doc: &Document) -> Target {
    if doc.people_to_notify.is_empty() {
        Target::to(Section::DoYouWantToNotifyPeople)
    } else {
        Target::to(Section::ChoosePeopleToNotifySummary)
    }
}

/// Whether the donor may open `section` given what is complete once stale
/// states are healed.
pub fn is_reachable(doc: &Document, section: Section) -> bool {
    let completed = |task| tracker::shown(doc, task).is_completed();
    match section {
        Section::WhenCanTheLpaBeUsed => doc.lpa_type == LpaType::PropertyAndAffairs,
        Section::LifeSustainingTreatment => doc.lpa_type == LpaType::PersonalWelfare,
        Section::CheckYourLpa => tracker::fill_in_complete(doc),
        Section::AboutPayment => completed(Task::CheckYourLpa),
        Section::ConfirmYourIdentityAndSign => completed(Task::PayForLpa),
        Section::RegisterTheLpa => completed(Task::ConfirmYourIdentityAndSign),
        _ => true,
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
