//! External services for the journey engine.
//!
//! Services provide side-effecting dependencies (time, identifiers) to the
//! section handlers without coupling them to specific implementations.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::types::ActorUid;

/// Services injected into section handlers.
#[derive(Debug, Clone)]
pub struct JourneyServices {
    pub clock: JourneyClock,
    pub uids: Arc<dyn UidSource>,
}

impl Default for JourneyServices {
    fn default() -> Self {
        Self {
            clock: JourneyClock::default(),
            uids: Arc::new(RandomUids),
        }
    }
}

/// Clock service. Can be pinned to a date so age checks are reproducible.
#[derive(Debug, Clone, Default)]
pub struct JourneyClock {
    fixed_today: Option<NaiveDate>,
}

impl JourneyClock {
    pub fn fixed(today: NaiveDate) -> Self {
        Self {
            fixed_today: Some(today),
        }
    }

    /// Returns the current UTC timestamp.
    pub fn now(&self) -> DateTime<Utc> {
        match self.fixed_today.and_then(|d| d.and_hms_opt(12, 0, 0)) {
            Some(naive) => naive.and_utc(),
            None => Utc::now(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Source of new actor identifiers.
pub trait UidSource: Send + Sync + Debug {
    fn next_uid(&self) -> ActorUid;
}

#[derive(Debug, Default)]
pub struct RandomUids;

impl UidSource for RandomUids {
    fn next_uid(&self) -> ActorUid {
        ActorUid::new()
    }
}

/// Deterministic identifiers counting up from a starting value.
#[derive(Debug)]
pub struct SequentialUids {
    next: AtomicU64,
}

impl SequentialUids {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl UidSource for SequentialUids {
    fn next_uid(&self) -> ActorUid {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        ActorUid(Uuid::from_u128(u128::from(n)))
    }
}
