//! Collaborators the journey engine talks to: document storage and postcode lookup.

pub mod file_store;
pub mod memory;

use async_trait::async_trait;

use crate::domain::document::Document;
use crate::domain::errors::{LookupError, StoreError};
use crate::domain::types::{Address, LpaId};

pub use file_store::FileDonorStore;
pub use memory::{FixtureAddressLookup, MemoryDonorStore};

/// Loads and saves whole documents. Last writer wins.
#[async_trait]
pub trait DonorStore: Send + Sync {
    async fn get(&self, lpa_id: &LpaId) -> Result<Document, StoreError>;

    /// Saves `document` and increments its `version`.
    async fn put(&self, document: &mut Document) -> Result<(), StoreError>;
}

/// Finds the addresses registered at a postcode.
///
/// An empty result means nothing was found and is not an error.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup_postcode(&self, postcode: &str) -> Result<Vec<Address>, LookupError>;
}

/// Upper-cases and collapses whitespace so `b14  7ed` and `B14 7ED` are the same key.
pub fn normalize_postcode(postcode: &str) -> String {
    postcode
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
