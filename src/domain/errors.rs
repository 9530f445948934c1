//! Error types for the journey engine and its collaborators.

use std::fmt::{Display, Formatter};

use crate::domain::types::{ActorUid, LpaId};
use crate::navigation::Section;

/// Failures raised by a `DonorStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No document is stored under the identifier.
    NotFound(LpaId),
    /// Reading or writing failed.
    Io { message: String },
    /// A stored document could not be decoded.
    Corrupt { message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "document not found: {}", id),
            Self::Io { message } => write!(f, "storage failure: {}", message),
            Self::Corrupt { message } => write!(f, "corrupt document: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

/// Failures raised by an `AddressLookup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The postcode was malformed. Shown to the donor as a field error.
    BadRequest(String),
    /// Anything else. Propagated to the caller unchanged.
    Other(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "bad postcode lookup request: {}", message),
            Self::Other(message) => write!(f, "postcode lookup failed: {}", message),
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors that stop a submission from being handled at all.
///
/// Validation problems and warnings are not errors; they come back as
/// feedback for the current section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyError {
    Store(StoreError),
    Lookup(LookupError),
    /// The section only renders; there is nothing to submit.
    NotSubmittable(Section),
    /// The section works on one actor and none was given.
    MissingActor(Section),
    /// The actor named in the request is not in the document.
    ActorNotFound { section: Section, uid: ActorUid },
}

impl Display for JourneyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(e) => write!(f, "{}", e),
            Self::Lookup(e) => write!(f, "{}", e),
            Self::NotSubmittable(section) => {
                write!(f, "section does not accept submissions: {}", section)
            }
            Self::MissingActor(section) => write!(f, "section requires an actor id: {}", section),
            Self::ActorNotFound { section, uid } => {
                write!(f, "actor {} not found for section {}", uid, section)
            }
        }
    }
}

impl std::error::Error for JourneyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for JourneyError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<LookupError> for JourneyError {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}
