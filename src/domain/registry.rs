//! Ordered, keyed actor collections.
//!
//! Insertion order is what the summary pages show, so replacing an actor
//! keeps its position and only a brand new identifier is appended.

use serde::{Deserialize, Serialize};

use crate::domain::actor::{Attorney, Keyed, TrustCorporation};
use crate::domain::types::ActorUid;

/// Uniform access to an actor collection.
///
/// All operations are total; absence is reported through `Option` or `bool`.
pub trait ActorRegistry<T> {
    fn get(&self, uid: ActorUid) -> Option<&T>;

    /// Inserts or replaces by identifier.
    fn put(&mut self, actor: T);

    /// Removes by identifier. Returns whether anything was removed.
    fn delete(&mut self, uid: ActorUid) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A list of keyed actors in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorList<T> {
    items: Vec<T>,
}

impl<T> Default for ActorList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ActorList<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Keyed> FromIterator<T> for ActorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        for actor in iter {
            list.put(actor);
        }
        list
    }
}

impl<T: Keyed> ActorRegistry<T> for ActorList<T> {
    fn get(&self, uid: ActorUid) -> Option<&T> {
        self.items.iter().find(|actor| actor.uid() == uid)
    }

    fn put(&mut self, actor: T) {
        match self.items.iter().position(|a| a.uid() == actor.uid()) {
            Some(index) => self.items[index] = actor,
            None => self.items.push(actor),
        }
    }

    fn delete(&mut self, uid: ActorUid) -> bool {
        let before = self.items.len();
        self.items.retain(|actor| actor.uid() != uid);
        self.items.len() != before
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// An attorney collection: natural persons plus an optional trust corporation.
///
/// The trust corporation counts towards `len`, so it takes part in every
/// decision-mode rule exactly like a person would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Attorneys {
    #[serde(default)]
    pub attorneys: ActorList<Attorney>,
    #[serde(default)]
    pub trust_corporation: Option<TrustCorporation>,
}

impl Attorneys {
    pub fn iter(&self) -> std::slice::Iter<'_, Attorney> {
        self.attorneys.iter()
    }

    /// True when every attorney and the trust corporation have full details.
    pub fn is_complete(&self) -> bool {
        self.attorneys.iter().all(Attorney::is_complete)
            && self
                .trust_corporation
                .as_ref()
                .is_none_or(TrustCorporation::is_complete)
    }

    pub fn clear(&mut self) {
        self.attorneys.clear();
        self.trust_corporation = None;
    }
}

impl ActorRegistry<Attorney> for Attorneys {
    fn get(&self, uid: ActorUid) -> Option<&Attorney> {
        self.attorneys.get(uid)
    }

    fn put(&mut self, actor: Attorney) {
        self.attorneys.put(actor);
    }

    fn delete(&mut self, uid: ActorUid) -> bool {
        self.attorneys.delete(uid)
    }

    fn len(&self) -> usize {
        self.attorneys.len() + usize::from(self.trust_corporation.is_some())
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
