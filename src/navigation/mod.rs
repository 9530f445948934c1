//! Section identifiers and navigation targets.
//!
//! Every page of the donor journey is a `Section` with a stable slug;
//! `router` decides which one follows a successful submission.

pub mod router;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::actor::AttorneyRole;
use crate::domain::types::{ActorUid, LpaId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    TaskList,
    YourDetails,
    YourAddress,
    ChooseAttorneys,
    ChooseAttorneysAddress,
    ChooseAttorneysSummary,
    RemoveAttorney,
    EnterTrustCorporation,
    RemoveTrustCorporation,
    HowShouldAttorneysMakeDecisions,
    AreYouHappyIfOneAttorneyCantAct,
    DoYouWantReplacementAttorneys,
    ChooseReplacementAttorneys,
    ChooseReplacementAttorneysAddress,
    ChooseReplacementAttorneysSummary,
    RemoveReplacementAttorney,
    EnterReplacementTrustCorporation,
    RemoveReplacementTrustCorporation,
    HowShouldReplacementAttorneysMakeDecisions,
    AreYouHappyIfOneReplacementAttorneyCantAct,
    HowShouldReplacementAttorneysStepIn,
    WhenCanTheLpaBeUsed,
    LifeSustainingTreatment,
    Restrictions,
    CertificateProvider,
    CertificateProviderAddress,
    DoYouWantToNotifyPeople,
    ChoosePeopleToNotify,
    ChoosePeopleToNotifyAddress,
    ChoosePeopleToNotifySummary,
    RemovePersonToNotify,
    CheckYourLpa,
    AboutPayment,
    ConfirmYourIdentityAndSign,
    RegisterTheLpa,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::TaskList,
        Section::YourDetails,
        Section::YourAddress,
        Section::ChooseAttorneys,
        Section::ChooseAttorneysAddress,
        Section::ChooseAttorneysSummary,
        Section::RemoveAttorney,
        Section::EnterTrustCorporation,
        Section::RemoveTrustCorporation,
        Section::HowShouldAttorneysMakeDecisions,
        Section::AreYouHappyIfOneAttorneyCantAct,
        Section::DoYouWantReplacementAttorneys,
        Section::ChooseReplacementAttorneys,
        Section::ChooseReplacementAttorneysAddress,
        Section::ChooseReplacementAttorneysSummary,
        Section::RemoveReplacementAttorney,
        Section::EnterReplacementTrustCorporation,
        Section::RemoveReplacementTrustCorporation,
        Section::HowShouldReplacementAttorneysMakeDecisions,
        Section::AreYouHappyIfOneReplacementAttorneyCantAct,
        Section::HowShouldReplacementAttorneysStepIn,
        Section::WhenCanTheLpaBeUsed,
        Section::LifeSustainingTreatment,
        Section::Restrictions,
        Section::CertificateProvider,
        Section::CertificateProviderAddress,
        Section::DoYouWantToNotifyPeople,
        Section::ChoosePeopleToNotify,
        Section::ChoosePeopleToNotifyAddress,
        Section::ChoosePeopleToNotifySummary,
        Section::RemovePersonToNotify,
        Section::CheckYourLpa,
        Section::AboutPayment,
        Section::ConfirmYourIdentityAndSign,
        Section::RegisterTheLpa,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::TaskList => "task-list",
            Self::YourDetails => "your-details",
            Self::YourAddress => "your-address",
            Self::ChooseAttorneys => "choose-attorneys",
            Self::ChooseAttorneysAddress => "choose-attorneys-address",
            Self::ChooseAttorneysSummary => "choose-attorneys-summary",
            Self::RemoveAttorney => "remove-attorney",
            Self::EnterTrustCorporation => "enter-trust-corporation",
            Self::RemoveTrustCorporation => "remove-trust-corporation",
            Self::HowShouldAttorneysMakeDecisions => "how-should-attorneys-make-decisions",
            Self::AreYouHappyIfOneAttorneyCantAct => "are-you-happy-if-one-attorney-cant-act",
            Self::DoYouWantReplacementAttorneys => "do-you-want-replacement-attorneys",
            Self::ChooseReplacementAttorneys => "choose-replacement-attorneys",
            Self::ChooseReplacementAttorneysAddress => "choose-replacement-attorneys-address",
            Self::ChooseReplacementAttorneysSummary => "choose-replacement-attorneys-summary",
            Self::RemoveReplacementAttorney => "remove-replacement-attorney",
            Self::EnterReplacementTrustCorporation => "enter-replacement-trust-corporation",
            Self::RemoveReplacementTrustCorporation => "remove-replacement-trust-corporation",
            Self::HowShouldReplacementAttorneysMakeDecisions => {
                "how-should-replacement-attorneys-make-decisions"
            }
            Self::AreYouHappyIfOneReplacementAttorneyCantAct => {
                "are-you-happy-if-one-replacement-attorney-cant-act"
            }
            Self::HowShouldReplacementAttorneysStepIn => "how-should-replacement-attorneys-step-in",
            Self::WhenCanTheLpaBeUsed => "when-can-the-lpa-be-used",
            Self::LifeSustainingTreatment => "life-sustaining-treatment",
            Self::Restrictions => "restrictions",
            Self::CertificateProvider => "certificate-provider",
            Self::CertificateProviderAddress => "certificate-provider-address",
            Self::DoYouWantToNotifyPeople => "do-you-want-to-notify-people",
            Self::ChoosePeopleToNotify => "choose-people-to-notify",
            Self::ChoosePeopleToNotifyAddress => "choose-people-to-notify-address",
            Self::ChoosePeopleToNotifySummary => "choose-people-to-notify-summary",
            Self::RemovePersonToNotify => "remove-person-to-notify",
            Self::CheckYourLpa => "check-your-lpa",
            Self::AboutPayment => "about-payment",
            Self::ConfirmYourIdentityAndSign => "confirm-your-identity-and-sign",
            Self::RegisterTheLpa => "register-the-lpa",
        }
    }

    /// Sections that act on a single actor and need its identifier.
    pub fn needs_actor(&self) -> bool {
        matches!(
            self,
            Self::ChooseAttorneysAddress
                | Self::RemoveAttorney
                | Self::ChooseReplacementAttorneysAddress
                | Self::RemoveReplacementAttorney
                | Self::ChoosePeopleToNotifyAddress
                | Self::RemovePersonToNotify
        )
    }

    pub fn enter_attorney(role: AttorneyRole) -> Self {
        match role {
            AttorneyRole::Attorney => Self::ChooseAttorneys,
            AttorneyRole::Replacement => Self::ChooseReplacementAttorneys,
        }
    }

    pub fn attorney_address(role: AttorneyRole) -> Self {
        match role {
            AttorneyRole::Attorney => Self::ChooseAttorneysAddress,
            AttorneyRole::Replacement => Self::ChooseReplacementAttorneysAddress,
        }
    }

    pub fn attorney_summary(role: AttorneyRole) -> Self {
        match role {
            AttorneyRole::Attorney => Self::ChooseAttorneysSummary,
            AttorneyRole::Replacement => Self::ChooseReplacementAttorneysSummary,
        }
    }

    pub fn attorney_decisions(role: AttorneyRole) -> Self {
        match role {
            AttorneyRole::Attorney => Self::HowShouldAttorneysMakeDecisions,
            AttorneyRole::Replacement => Self::HowShouldReplacementAttorneysMakeDecisions,
        }
    }

    pub fn attorney_happiness(role: AttorneyRole) -> Self {
        match role {
            AttorneyRole::Attorney => Self::AreYouHappyIfOneAttorneyCantAct,
            AttorneyRole::Replacement => Self::AreYouHappyIfOneReplacementAttorneyCantAct,
        }
    }

    /// The question a donor lands on when a collection has no members.
    pub fn attorney_entry(role: AttorneyRole) -> Self {
        match role {
            AttorneyRole::Attorney => Self::ChooseAttorneys,
            AttorneyRole::Replacement => Self::DoYouWantReplacementAttorneys,
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().trim_matches('/');
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.slug() == slug)
            .ok_or_else(|| format!("unknown section: {}", s))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Where the donor goes next: a section, optionally about one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub section: Section,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<ActorUid>,
}

impl Target {
    pub fn to(section: Section) -> Self {
        Self {
            section,
            actor: None,
        }
    }

    pub fn for_actor(section: Section, actor: ActorUid) -> Self {
        Self {
            section,
            actor: Some(actor),
        }
    }

    /// Path form used by the CLI and logs, e.g. `/lpa/M-1/choose-attorneys-address?id=...`.
    pub fn path(&self, lpa_id: &LpaId) -> String {
        match self.actor {
            Some(uid) => format!("/lpa/{}/{}?id={}", lpa_id, self.section.slug(), uid),
            None => format!("/lpa/{}/{}", lpa_id, self.section.slug()),
        }
    }
}

impl From<Section> for Target {
    fn from(section: Section) -> Self {
        Self::to(section)
    }
}

#[cfg(test)]
#[path = "tests/section_tests.rs"]
mod tests;
