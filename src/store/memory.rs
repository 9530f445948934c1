//! In-process collaborators for tests and the offline CLI.

use async_trait::async_trait;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use crate::domain::document::Document;
use crate::domain::errors::{LookupError, StoreError};
use crate::domain::types::{Address, LpaId};
use crate::store::{normalize_postcode, AddressLookup, DonorStore};

#[derive(Debug, Default)]
pub struct MemoryDonorStore {
    documents: Mutex<HashMap<LpaId, Document>>,
}

impl MemoryDonorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn document_count(&self) -> usize {
        self.documents.lock().await.len()
    }
}

#[async_trait]
impl DonorStore for MemoryDonorStore {
    async fn get(&self, lpa_id: &LpaId) -> Result<Document, StoreError> {
        self.documents
            .lock()
            .await
            .get(lpa_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(lpa_id.clone()))
    }

    async fn put(&self, document: &mut Document) -> Result<(), StoreError> {
        document.version += 1;
        self.documents
            .lock()
            .await
            .insert(document.lpa_id.clone(), document.clone());
        Ok(())
    }
}

/// Looks postcodes up in a fixed table.
///
/// Anything that does not look like a UK postcode is a bad request.
#[derive(Debug)]
pub struct FixtureAddressLookup {
    addresses: BTreeMap<String, Vec<Address>>,
    pattern: Regex,
}

impl FixtureAddressLookup {
    pub fn new(fixtures: &BTreeMap<String, Vec<Address>>) -> Self {
        let addresses = fixtures
            .iter()
            .map(|(postcode, addresses)| (normalize_postcode(postcode), addresses.clone()))
            .collect();
        Self {
            addresses,
            pattern: Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]?( ?[0-9][A-Z]{2})?$")
                .expect("postcode pattern is a valid regex"),
        }
    }
}

#[async_trait]
impl AddressLookup for FixtureAddressLookup {
    async fn lookup_postcode(&self, postcode: &str) -> Result<Vec<Address>, LookupError> {
        let key = normalize_postcode(postcode);
        if !self.pattern.is_match(&key) {
            return Err(LookupError::BadRequest(format!(
                "not a valid postcode: {}",
                postcode
            )));
        }
        Ok(self.addresses.get(&key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
