//! Finds an existing actor with the same full name as a candidate.

use crate::domain::actor::{ActorType, Named};
use crate::domain::document::Document;
use crate::domain::types::ActorUid;

fn same_name(actor: &impl Named, first_names: &str, last_name: &str) -> bool {
    actor.first_names().trim().to_lowercase() == first_names
        && actor.last_name().trim().to_lowercase() == last_name
}

/// Returns the first role holding `first_names last_name`, checked in the
/// order donor, attorneys, replacement attorneys, certificate provider,
/// people to notify.
///
/// `exclude` skips one actor, but only within the candidate's own
/// collection, so an attorney is never excluded from the replacement check.
/// The candidate's own singleton role (donor, certificate provider) is
/// never compared against itself. Two blank names never match.
pub fn find_match(
    candidate: ActorType,
    exclude: Option<ActorUid>,
    first_names: &str,
    last_name: &str,
    doc: &Document,
) -> Option<ActorType> {
    let first_names = first_names.trim().to_lowercase();
    let last_name = last_name.trim().to_lowercase();
    if first_names.is_empty() && last_name.is_empty() {
        return None;
    }

    let excluded = |role: ActorType, uid: ActorUid| role == candidate && exclude == Some(uid);

    if candidate != ActorType::Donor && same_name(&doc.donor, &first_names, &last_name) {
        return Some(ActorType::Donor);
    }

    if doc.attorneys.iter().any(|a| {
        !excluded(ActorType::Attorney, a.uid) && same_name(a, &first_names, &last_name)
    }) {
        return Some(ActorType::Attorney);
    }

    if doc.replacement_attorneys.iter().any(|a| {
        !excluded(ActorType::ReplacementAttorney, a.uid) && same_name(a, &first_names, &last_name)
    }) {
        return Some(ActorType::ReplacementAttorney);
    }

    if candidate != ActorType::CertificateProvider
        && doc
            .certificate_provider
            .as_ref()
            .is_some_and(|cp| same_name(cp, &first_names, &last_name))
    {
        return Some(ActorType::CertificateProvider);
    }

    if doc.people_to_notify.iter().any(|p| {
        !excluded(ActorType::PersonToNotify, p.uid) && same_name(p, &first_names, &last_name)
    }) {
        return Some(ActorType::PersonToNotify);
    }

    None
}

#[cfg(test)]
#[path = "tests/collision_tests.rs"]
mod tests;
