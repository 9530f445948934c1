//! Actor records held by an LPA document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ActorUid, Address};

/// The role an actor holds in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    Donor,
    Attorney,
    ReplacementAttorney,
    CertificateProvider,
    PersonToNotify,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Attorney => "attorney",
            Self::ReplacementAttorney => "replacement_attorney",
            Self::CertificateProvider => "certificate_provider",
            Self::PersonToNotify => "person_to_notify",
        }
    }
}

impl std::fmt::Display for ActorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which of the two attorney collections an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttorneyRole {
    Attorney,
    Replacement,
}

impl AttorneyRole {
    pub fn actor_type(&self) -> ActorType {
        match self {
            Self::Attorney => ActorType::Attorney,
            Self::Replacement => ActorType::ReplacementAttorney,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::Attorney => Self::Replacement,
            Self::Replacement => Self::Attorney,
        }
    }
}

/// An actor that lives in a keyed collection.
pub trait Keyed {
    fn uid(&self) -> ActorUid;
}

/// A natural person with a name that can collide with another actor's.
pub trait Named {
    fn first_names(&self) -> &str;
    fn last_name(&self) -> &str;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_names().trim(), self.last_name().trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Donor {
    pub first_names: String,
    pub last_name: String,
    #[serde(default)]
    pub other_names: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attorney {
    pub uid: ActorUid,
    pub first_names: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
}

impl Attorney {
    pub fn new(uid: ActorUid) -> Self {
        Self {
            uid,
            first_names: String::new(),
            last_name: String::new(),
            date_of_birth: None,
            email: String::new(),
            address: Address::default(),
        }
    }

    /// Details are complete once names, date of birth and an address are held.
    pub fn is_complete(&self) -> bool {
        !self.first_names.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && self.date_of_birth.is_some()
            && !self.address.is_empty()
    }
}

/// A company acting as attorney. There is at most one per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrustCorporation {
    pub name: String,
    pub company_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
}

impl TrustCorporation {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.company_number.trim().is_empty()
            && !self.address.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateProvider {
    pub uid: ActorUid,
    pub first_names: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
}

impl CertificateProvider {
    pub fn is_complete(&self) -> bool {
        !self.first_names.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.address.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonToNotify {
    pub uid: ActorUid,
    pub first_names: String,
    pub last_name: String,
    #[serde(default)]
    pub address: Address,
}

impl PersonToNotify {
    pub fn new(uid: ActorUid) -> Self {
        Self {
            uid,
            first_names: String::new(),
            last_name: String::new(),
            address: Address::default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.first_names.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.address.is_empty()
    }
}

impl Keyed for Attorney {
    fn uid(&self) -> ActorUid {
        self.uid
    }
}

impl Keyed for PersonToNotify {
    fn uid(&self) -> ActorUid {
        self.uid
    }
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(
            impl Named for $ty {
                fn first_names(&self) -> &str {
                    &self.first_names
                }

                fn last_name(&self) -> &str {
                    &self.last_name
                }
            }
        )*
    };
}

impl_named!(Donor, Attorney, CertificateProvider, PersonToNotify);
