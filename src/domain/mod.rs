//! Domain model for the LPA document.
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): identifiers and small value types
//! - **Actors** (`actor.rs`, `registry.rs`): people in the document and their collections
//! - **Decisions** (`decisions.rs`): how attorneys act and when replacements step in
//! - **Document** (`document.rs`): the aggregate persisted by the store

pub mod actor;
pub mod decisions;
pub mod document;
pub mod errors;
pub mod registry;
pub mod services;
pub mod types;

pub use actor::{
    ActorType, Attorney, AttorneyRole, CertificateProvider, Donor, Keyed, Named, PersonToNotify,
    TrustCorporation,
};
pub use decisions::{
    requires_happiness_confirmation, AttorneyDecisions, DecisionMode, ReplacementStepIn, StepIn,
};
pub use document::Document;
pub use errors::{JourneyError, LookupError, StoreError};
pub use registry::{ActorList, ActorRegistry, Attorneys};
pub use services::{JourneyClock, JourneyServices, RandomUids, SequentialUids, UidSource};
pub use types::{
    ActorUid, Address, CanBeUsedWhen, LifeSustainingTreatment, LpaId, LpaType, YesNo,
};
