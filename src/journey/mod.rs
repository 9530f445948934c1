//! Section handlers: read a form, validate it, mutate the document.
//!
//! A handler takes the current document by value and returns either the
//! updated document with the next navigation target, or feedback for the
//! same section. Nothing is persisted here; the engine saves the document
//! once per successful submission.
//!
//! # Handlers
//!
//! - **donor**: your details and address
//! - **attorneys**: entering, addressing, listing and removing attorneys of either
//!   role, plus trust corporations
//! - **decisions**: decision modes, happiness confirmation, step-in rule,
//!   "do you want replacement attorneys"
//! - **certificate_provider**, **people_to_notify**
//! - **sections**: the single-question and end-of-journey sections

pub mod address;
pub mod attorneys;
pub mod certificate_provider;
pub mod decisions;
pub mod donor;
pub mod form;
pub mod people_to_notify;
pub mod sections;
pub mod validation;

use serde::Serialize;

use crate::config::JourneyConfig;
use crate::domain::actor::AttorneyRole;
use crate::domain::document::Document;
use crate::domain::errors::JourneyError;
use crate::domain::services::JourneyServices;
use crate::domain::types::{ActorUid, Address};
use crate::navigation::{Section, Target};
use crate::store::AddressLookup;
use crate::warnings::{DobWarning, SameNameWarning};

pub use form::FormValues;
pub use validation::{FieldError, Problem, ValidationErrors};

/// Everything a handler may consult besides the document and the form.
pub struct JourneyContext<'a> {
    pub services: &'a JourneyServices,
    pub config: &'a JourneyConfig,
    pub lookup: &'a dyn AddressLookup,
}

/// What the donor sees when a submission does not move them on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_warning: Option<SameNameWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob_warning: Option<DobWarning>,
    /// Candidates from a postcode lookup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
}

impl Feedback {
    pub fn errors(errors: ValidationErrors) -> Self {
        Self {
            errors,
            ..Default::default()
        }
    }

    /// Keys of the warnings shown, for logging.
    pub fn warning_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.name_warning.is_some() {
            keys.push("sameNameWarning");
        }
        if let Some(warning) = self.dob_warning {
            keys.push(warning.key());
        }
        keys
    }

    fn has_warnings(&self) -> bool {
        self.name_warning.is_some() || self.dob_warning.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved { document: Document, target: Target },
    Invalid(Feedback),
}

impl Outcome {
    pub fn saved(document: Document, target: impl Into<Target>) -> Self {
        Self::Saved {
            document,
            target: target.into(),
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self::Invalid(Feedback::errors(errors))
    }
}

/// Stops the submission while a warning is unacknowledged.
fn warned(name_warning: Option<SameNameWarning>, dob_warning: Option<DobWarning>) -> Option<Outcome> {
    let feedback = Feedback {
        name_warning,
        dob_warning,
        ..Default::default()
    };
    feedback.has_warnings().then_some(Outcome::Invalid(feedback))
}

/// Routes a submission to its section handler.
pub async fn dispatch(
    doc: Document,
    section: Section,
    actor: Option<ActorUid>,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    use AttorneyRole::{Attorney, Replacement};

    if section.needs_actor() {
        let uid = actor.ok_or(JourneyError::MissingActor(section))?;
        return dispatch_for_actor(doc, section, uid, form, ctx).await;
    }

    match section {
        Section::YourDetails => Ok(donor::details(doc, form, ctx)),
        Section::YourAddress => donor::address(doc, form, ctx).await,

        Section::ChooseAttorneys => attorneys::enter(doc, Attorney, actor, form, ctx),
        Section::ChooseReplacementAttorneys => attorneys::enter(doc, Replacement, actor, form, ctx),
        Section::ChooseAttorneysSummary => Ok(attorneys::summary(doc, Attorney, form)),
        Section::ChooseReplacementAttorneysSummary => Ok(attorneys::summary(doc, Replacement, form)),
        Section::EnterTrustCorporation => Ok(attorneys::enter_trust_corporation(doc, Attorney, form)),
        Section::EnterReplacementTrustCorporation => {
            Ok(attorneys::enter_trust_corporation(doc, Replacement, form))
        }
        Section::RemoveTrustCorporation => attorneys::remove_trust_corporation(doc, Attorney, form),
        Section::RemoveReplacementTrustCorporation => {
            attorneys::remove_trust_corporation(doc, Replacement, form)
        }

        Section::HowShouldAttorneysMakeDecisions => Ok(decisions::how_decide(doc, Attorney, form)),
        Section::HowShouldReplacementAttorneysMakeDecisions => {
            Ok(decisions::how_decide(doc, Replacement, form))
        }
        Section::AreYouHappyIfOneAttorneyCantAct => Ok(decisions::happiness(doc, Attorney, form)),
        Section::AreYouHappyIfOneReplacementAttorneyCantAct => {
            Ok(decisions::happiness(doc, Replacement, form))
        }
        Section::HowShouldReplacementAttorneysStepIn => Ok(decisions::step_in(doc, form)),
        Section::DoYouWantReplacementAttorneys => Ok(decisions::want_replacements(doc, form)),

        Section::WhenCanTheLpaBeUsed => Ok(sections::when_can_be_used(doc, form)),
        Section::LifeSustainingTreatment => Ok(sections::life_sustaining_treatment(doc, form)),
        Section::Restrictions => Ok(sections::restrictions(doc, form, ctx)),

        Section::CertificateProvider => Ok(certificate_provider::details(doc, form, ctx)),
        Section::CertificateProviderAddress => certificate_provider::address(doc, form, ctx).await,

        Section::DoYouWantToNotifyPeople => Ok(people_to_notify::want(doc, form)),
        Section::ChoosePeopleToNotify => people_to_notify::enter(doc, actor, form, ctx),
        Section::ChoosePeopleToNotifySummary => Ok(people_to_notify::summary(doc, form, ctx)),

        Section::CheckYourLpa => Ok(sections::check_your_lpa(doc, form)),
        Section::AboutPayment => Ok(sections::about_payment(doc, form)),
        Section::ConfirmYourIdentityAndSign => Ok(sections::confirm_and_sign(doc, form)),
        // task list, register, and the per-actor sections handled above
        _ => Err(JourneyError::NotSubmittable(section)),
    }
}

/// Sections about one existing actor, identified by `uid`.
async fn dispatch_for_actor(
    doc: Document,
    section: Section,
    uid: ActorUid,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    use AttorneyRole::{Attorney, Replacement};

    match section {
        Section::ChooseAttorneysAddress => attorneys::address(doc, Attorney, uid, form, ctx).await,
        Section::ChooseReplacementAttorneysAddress => {
            attorneys::address(doc, Replacement, uid, form, ctx).await
        }
        Section::RemoveAttorney => attorneys::remove(doc, Attorney, uid, form),
        Section::RemoveReplacementAttorney => attorneys::remove(doc, Replacement, uid, form),
        Section::ChoosePeopleToNotifyAddress => people_to_notify::address(doc, uid, form, ctx).await,
        Section::RemovePersonToNotify => people_to_notify::remove(doc, uid, form),
        _ => Err(JourneyError::NotSubmittable(section)),
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
