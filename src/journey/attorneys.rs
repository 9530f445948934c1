//! Attorney and replacement attorney pages.
//!
//! Both collections share one set of handlers, parameterized by
//! `AttorneyRole`; only the router's rules differ between them.

use crate::domain::actor::{Attorney, AttorneyRole, TrustCorporation};
use crate::domain::document::Document;
use crate::domain::errors::JourneyError;
use crate::domain::registry::ActorRegistry;
use crate::domain::types::{ActorUid, YesNo};
use crate::journey::address::{self, AddressStep};
use crate::journey::form::FormValues;
use crate::journey::validation::{Problem, ValidationErrors, FIRST_NAMES_MAX, LAST_NAME_MAX};
use crate::journey::{warned, JourneyContext, Outcome};
use crate::navigation::{router, Section, Target};
use crate::task::tracker;
use crate::warnings::{self, dob, find_match};

const TRUST_CORPORATION_NAME_MAX: usize = 100;

fn lookup(doc: &Document, role: AttorneyRole, section: Section, uid: ActorUid) -> Result<Attorney, JourneyError> {
    doc.attorneys_for(role)
        .get(uid)
        .cloned()
        .ok_or(JourneyError::ActorNotFound { section, uid })
}

/// Re-derives decision answers and both attorney tasks after any change.
fn settle(doc: &mut Document) {
    doc.reconcile_decisions();
    tracker::refresh_attorney_tasks(doc);
}

/// Adds an attorney, or edits the one named by `actor`.
pub fn enter(
    mut doc: Document,
    role: AttorneyRole,
    actor: Option<ActorUid>,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    let section = Section::enter_attorney(role);
    let existing = actor
        .map(|uid| lookup(&doc, role, section, uid))
        .transpose()?;

    let today = ctx.services.clock.today();
    let mut errors = ValidationErrors::default();
    let first_names = errors.text(form, "first-names", "firstNames", FIRST_NAMES_MAX);
    let last_name = errors.text(form, "last-name", "lastName", LAST_NAME_MAX);
    let email = errors.email(form, "email", "email");
    let dob = errors.past_date("date-of-birth", "dateOfBirth", &form.date("date-of-birth"), today);

    let date_of_birth = match dob {
        Some(date) if errors.is_empty() => date,
        _ => return Ok(Outcome::invalid(errors)),
    };

    let candidate = role.actor_type();
    let dob_warning = warnings::dob_warning(
        dob::attorney_warning(date_of_birth, today, &ctx.config.warnings),
        form.get("ignore-dob-warning"),
    );
    let name_warning = warnings::name_warning(
        candidate,
        find_match(candidate, actor, &first_names, &last_name, &doc),
        &first_names,
        &last_name,
        form.get("ignore-name-warning"),
    );
    if let Some(outcome) = warned(name_warning, dob_warning) {
        return Ok(outcome);
    }

    let mut attorney = existing.unwrap_or_else(|| Attorney::new(ctx.services.uids.next_uid()));
    let is_new = actor.is_none();
    attorney.first_names = first_names;
    attorney.last_name = last_name;
    attorney.email = email;
    attorney.date_of_birth = Some(date_of_birth);

    let uid = attorney.uid;
    let needs_address = is_new || attorney.address.is_empty();
    doc.attorneys_for_mut(role).put(attorney);
    if role == AttorneyRole::Replacement {
        doc.want_replacement_attorneys = YesNo::Yes;
    }
    settle(&mut doc);

    let target = if needs_address {
        Target::for_actor(Section::attorney_address(role), uid)
    } else {
        Target::to(Section::attorney_summary(role))
    };
    Ok(Outcome::saved(doc, target))
}

pub async fn address(
    mut doc: Document,
    role: AttorneyRole,
    uid: ActorUid,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    let mut attorney = lookup(&doc, role, Section::attorney_address(role), uid)?;

    match address::resolve(form, ctx.lookup).await? {
        AddressStep::Feedback(feedback) => Ok(Outcome::Invalid(feedback)),
        AddressStep::Chosen(chosen) => {
            attorney.address = chosen;
            doc.attorneys_for_mut(role).put(attorney);
            settle(&mut doc);
            Ok(Outcome::saved(doc, Section::attorney_summary(role)))
        }
    }
}

/// "Do you want to add another?" on the summary page.
pub fn summary(doc: Document, role: AttorneyRole, form: &FormValues) -> Outcome {
    let add_another = form.yes_no("add-attorney");
    if add_another.is_unset() {
        return Outcome::invalid(ValidationErrors::with(
            "add-attorney",
            Problem::Select {
                label: "yesToAddAnotherAttorney",
            },
        ));
    }

    let target = router::after_attorney_summary(&doc, role, add_another.is_yes());
    Outcome::saved(doc, target)
}

pub fn remove(
    mut doc: Document,
    role: AttorneyRole,
    uid: ActorUid,
    form: &FormValues,
) -> Result<Outcome, JourneyError> {
    let section = match role {
        AttorneyRole::Attorney => Section::RemoveAttorney,
        AttorneyRole::Replacement => Section::RemoveReplacementAttorney,
    };
    lookup(&doc, role, section, uid)?;

    let answer = form.yes_no("remove-attorney");
    if answer.is_unset() {
        return Ok(Outcome::invalid(ValidationErrors::with(
            "remove-attorney",
            Problem::Select {
                label: "yesToRemoveAttorney",
            },
        )));
    }
    if answer.is_no() {
        return Ok(Outcome::saved(doc, Section::attorney_summary(role)));
    }

    doc.attorneys_for_mut(role).delete(uid);
    doc.reconcile_decisions();
    tracker::refresh_after_removal(&mut doc, role);

    let target = router::after_attorney_removal(&doc, role);
    Ok(Outcome::saved(doc, target))
}

/// Adds or edits the trust corporation, including its address.
///
/// A document holds at most one trust corporation across both collections.
pub fn enter_trust_corporation(mut doc: Document, role: AttorneyRole, form: &FormValues) -> Outcome {
    let mut errors = ValidationErrors::default();
    let name = errors.text(form, "name", "nameOfTrustCorporation", TRUST_CORPORATION_NAME_MAX);
    let company_number = errors.text(form, "company-number", "companyNumber", TRUST_CORPORATION_NAME_MAX);
    let email = errors.email(form, "email", "email");
    let (address, address_errors) = address::read_manual(form);
    for error in address_errors.iter() {
        errors.add(&error.field, error.problem.clone());
    }
    if doc.attorneys_for(role.other()).trust_corporation.is_some() {
        errors.add(
            "name",
            Problem::Custom {
                label: "trustCorporationAlreadyChosen",
            },
        );
    }
    if !errors.is_empty() {
        return Outcome::invalid(errors);
    }

    doc.attorneys_for_mut(role).trust_corporation = Some(TrustCorporation {
        name,
        company_number,
        email,
        address,
    });
    if role == AttorneyRole::Replacement {
        doc.want_replacement_attorneys = YesNo::Yes;
    }
    settle(&mut doc);

    Outcome::saved(doc, Section::attorney_summary(role))
}

pub fn remove_trust_corporation(
    mut doc: Document,
    role: AttorneyRole,
    form: &FormValues,
) -> Result<Outcome, JourneyError> {
    let section = match role {
        AttorneyRole::Attorney => Section::RemoveTrustCorporation,
        AttorneyRole::Replacement => Section::RemoveReplacementTrustCorporation,
    };
    if doc.attorneys_for(role).trust_corporation.is_none() {
        return Err(JourneyError::MissingActor(section));
    }

    let answer = form.yes_no("remove-trust-corporation");
    if answer.is_unset() {
        return Ok(Outcome::invalid(ValidationErrors::with(
            "remove-trust-corporation",
            Problem::Select {
                label: "yesToRemoveTrustCorporation",
            },
        )));
    }
    if answer.is_no() {
        return Ok(Outcome::saved(doc, Section::attorney_summary(role)));
    }

    doc.attorneys_for_mut(role).trust_corporation = None;
    doc.reconcile_decisions();
    tracker::refresh_after_removal(&mut doc, role);

    let target = router::after_attorney_removal(&doc, role);
    Ok(Outcome::saved(doc, target))
}

#[cfg(test)]
#[path = "tests/attorneys_tests.rs"]
mod tests;
