//! The certificate provider's details and address.

use crate::domain::actor::{ActorType, CertificateProvider};
use crate::domain::document::Document;
use crate::domain::errors::JourneyError;
use crate::journey::address::{self, AddressStep};
use crate::journey::form::FormValues;
use crate::journey::validation::{ValidationErrors, FIRST_NAMES_MAX, LAST_NAME_MAX};
use crate::journey::{warned, JourneyContext, Outcome};
use crate::navigation::Section;
use crate::task::tracker;
use crate::warnings::{self, find_match};

pub fn details(mut doc: Document, form: &FormValues, ctx: &JourneyContext<'_>) -> Outcome {
    let mut errors = ValidationErrors::default();
    let first_names = errors.text(form, "first-names", "firstNames", FIRST_NAMES_MAX);
    let last_name = errors.text(form, "last-name", "lastName", LAST_NAME_MAX);
    let email = errors.email(form, "email", "email");
    if !errors.is_empty() {
        return Outcome::invalid(errors);
    }

    let name_warning = warnings::name_warning(
        ActorType::CertificateProvider,
        find_match(ActorType::CertificateProvider, None, &first_names, &last_name, &doc),
        &first_names,
        &last_name,
        form.get("ignore-name-warning"),
    );
    if let Some(outcome) = warned(name_warning, None) {
        return outcome;
    }

    let provider = match doc.certificate_provider.take() {
        Some(existing) => CertificateProvider {
            first_names,
            last_name,
            email,
            ..existing
        },
        None => CertificateProvider {
            uid: ctx.services.uids.next_uid(),
            first_names,
            last_name,
            email,
            address: Default::default(),
        },
    };
    let target = if provider.address.is_empty() {
        Section::CertificateProviderAddress
    } else {
        Section::TaskList
    };
    doc.certificate_provider = Some(provider);
    doc.tasks.certificate_provider = tracker::certificate_provider(&doc);

    Outcome::saved(doc, target)
}

pub async fn address(
    mut doc: Document,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    if doc.certificate_provider.is_none() {
        return Err(JourneyError::MissingActor(Section::CertificateProviderAddress));
    }

    match address::resolve(form, ctx.lookup).await? {
        AddressStep::Feedback(feedback) => Ok(Outcome::Invalid(feedback)),
        AddressStep::Chosen(chosen) => {
            if let Some(provider) = doc.certificate_provider.as_mut() {
                provider.address = chosen;
            }
            doc.tasks.certificate_provider = tracker::certificate_provider(&doc);
            Ok(Outcome::saved(doc, Section::TaskList))
        }
    }
}

#[cfg(test)]
#[path = "tests/certificate_provider_tests.rs"]
mod tests;
