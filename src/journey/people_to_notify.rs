//! People the donor wants told about the LPA.

use crate::domain::actor::{ActorType, PersonToNotify};
use crate::domain::document::Document;
use crate::domain::errors::JourneyError;
use crate::domain::registry::ActorRegistry;
use crate::domain::types::{ActorUid, YesNo};
use crate::journey::address::{self, AddressStep};
use crate::journey::form::FormValues;
use crate::journey::validation::{Problem, ValidationErrors, FIRST_NAMES_MAX, LAST_NAME_MAX};
use crate::journey::{warned, JourneyContext, Outcome};
use crate::navigation::{router, Section, Target};
use crate::task::{tracker, TaskState};
use crate::warnings::{self, find_match};

fn lookup(doc: &Document, section: Section, uid: ActorUid) -> Result<PersonToNotify, JourneyError> {
    doc.people_to_notify
        .get(uid)
        .cloned()
        .ok_or(JourneyError::ActorNotFound { section, uid })
}

fn limit_reached(max: usize) -> ValidationErrors {
    ValidationErrors::with(
        "add-person-to-notify",
        Problem::Limit {
            label: "peopleToNotify",
            max,
        },
    )
}

/// "No" clears everyone already entered.
pub fn want(mut doc: Document, form: &FormValues) -> Outcome {
    let answer = form.yes_no("yes-no");
    if answer.is_unset() {
        return Outcome::invalid(ValidationErrors::with(
            "yes-no",
            Problem::Select {
                label: "yesToNotifySomeoneAboutYourLpa",
            },
        ));
    }

    doc.want_to_notify_people = answer;
    if answer.is_no() {
        doc.people_to_notify.clear();
    }
    doc.tasks.people_to_notify = tracker::people_to_notify(&doc);

    let target = router::after_want_to_notify(&doc);
    Outcome::saved(doc, target)
}

/// Adds a person, or edits the one named by `actor`.
pub fn enter(
    mut doc: Document,
    actor: Option<ActorUid>,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    let existing = actor
        .map(|uid| lookup(&doc, Section::ChoosePeopleToNotify, uid))
        .transpose()?;

    let max = ctx.config.limits.max_people_to_notify;
    if existing.is_none() && doc.people_to_notify.len() >= max {
        return Ok(Outcome::invalid(limit_reached(max)));
    }

    let mut errors = ValidationErrors::default();
    let first_names = errors.text(form, "first-names", "firstNames", FIRST_NAMES_MAX);
    let last_name = errors.text(form, "last-name", "lastName", LAST_NAME_MAX);
    if !errors.is_empty() {
        return Ok(Outcome::invalid(errors));
    }

    let name_warning = warnings::name_warning(
        ActorType::PersonToNotify,
        find_match(ActorType::PersonToNotify, actor, &first_names, &last_name, &doc),
        &first_names,
        &last_name,
        form.get("ignore-name-warning"),
    );
    if let Some(outcome) = warned(name_warning, None) {
        return Ok(outcome);
    }

    let mut person = existing.unwrap_or_else(|| PersonToNotify::new(ctx.services.uids.next_uid()));
    person.first_names = first_names;
    person.last_name = last_name;

    let uid = person.uid;
    let target = if actor.is_none() || person.address.is_empty() {
        Target::for_actor(Section::ChoosePeopleToNotifyAddress, uid)
    } else {
        Target::to(Section::ChoosePeopleToNotifySummary)
    };
    doc.people_to_notify.put(person);
    doc.want_to_notify_people = YesNo::Yes;
    doc.tasks.people_to_notify = tracker::people_to_notify(&doc);

    Ok(Outcome::saved(doc, target))
}

pub async fn address(
    mut doc: Document,
    uid: ActorUid,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    let mut person = lookup(&doc, Section::ChoosePeopleToNotifyAddress, uid)?;

    match address::resolve(form, ctx.lookup).await? {
        AddressStep::Feedback(feedback) => Ok(Outcome::Invalid(feedback)),
        AddressStep::Chosen(chosen) => {
            person.address = chosen;
            doc.people_to_notify.put(person);
            doc.tasks.people_to_notify = tracker::people_to_notify(&doc);
            Ok(Outcome::saved(doc, Section::ChoosePeopleToNotifySummary))
        }
    }
}

/// "Do you want to add another?" Refused once the configured limit is reached.
pub fn summary(doc: Document, form: &FormValues, ctx: &JourneyContext<'_>) -> Outcome {
    let add_another = form.yes_no("add-person-to-notify");
    if add_another.is_unset() {
        return Outcome::invalid(ValidationErrors::with(
            "add-person-to-notify",
            Problem::Select {
                label: "yesToAddAnotherPersonToNotify",
            },
        ));
    }

    let max = ctx.config.limits.max_people_to_notify;
    if add_another.is_yes() {
        if doc.people_to_notify.len() >= max {
            return Outcome::invalid(limit_reached(max));
        }
        return Outcome::saved(doc, Section::ChoosePeopleToNotify);
    }

    let target = if doc.people_to_notify.is_empty() {
        Section::DoYouWantToNotifyPeople
    } else {
        Section::TaskList
    };
    Outcome::saved(doc, target)
}

pub fn remove(mut doc: Document, uid: ActorUid, form: &FormValues) -> Result<Outcome, JourneyError> {
    lookup(&doc, Section::RemovePersonToNotify, uid)?;

    let answer = form.yes_no("remove-person-to-notify");
    if answer.is_unset() {
        return Ok(Outcome::invalid(ValidationErrors::with(
            "remove-person-to-notify",
            Problem::Select {
                label: "yesToRemovePersonToNotify",
            },
        )));
    }
    if answer.is_no() {
        return Ok(Outcome::saved(doc, Section::ChoosePeopleToNotifySummary));
    }

    doc.people_to_notify.delete(uid);
    doc.tasks.people_to_notify = if doc.people_to_notify.is_empty() {
        TaskState::InProgress
    } else {
        tracker::people_to_notify(&doc)
    };

    let target = router::after_person_to_notify_removal(&doc);
    Ok(Outcome::saved(doc, target))
}

#[cfg(test)]
#[path = "tests/people_to_notify_tests.rs"]
mod tests;
