//! Shared fixtures for unit tests.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::JourneyConfig;
use crate::domain::actor::{Attorney, CertificateProvider, PersonToNotify};
use crate::domain::document::Document;
use crate::domain::errors::LookupError;
use crate::domain::registry::ActorRegistry;
use crate::domain::services::{JourneyClock, JourneyServices, SequentialUids};
use crate::domain::types::{ActorUid, Address, CanBeUsedWhen, LpaId, LpaType, YesNo};
use crate::journey::form::FormValues;
use crate::journey::{Feedback, JourneyContext, Outcome};
use crate::navigation::Target;
use crate::store::AddressLookup;
use crate::task::{fill_in_tasks, TaskState};

pub fn uid(n: u128) -> ActorUid {
    ActorUid(Uuid::from_u128(n))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// The fixed "today" used by every fixture clock.
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn address(line1: &str) -> Address {
    Address {
        line1: line1.to_string(),
        town: "Town".to_string(),
        postcode: "B14 7ED".to_string(),
        ..Default::default()
    }
}

pub fn document() -> Document {
    let now = Utc
        .with_ymd_and_hms(2024, 6, 15, 9, 0, 0)
        .single()
        .expect("valid fixture time");
    Document::new(
        LpaId::from("M-TEST-0000-0001"),
        LpaType::PropertyAndAffairs,
        "donor@example.org",
        now,
    )
}

pub fn attorney(n: u128, first: &str, last: &str) -> Attorney {
    Attorney {
        uid: uid(n),
        first_names: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: Some(date(1980, 1, 2)),
        email: String::new(),
        address: address("1 Road"),
    }
}

/// An attorney with no address yet.
pub fn incomplete_attorney(n: u128, first: &str, last: &str) -> Attorney {
    Attorney {
        address: Address::default(),
        ..attorney(n, first, last)
    }
}

pub fn person_to_notify(n: u128, first: &str, last: &str) -> PersonToNotify {
    PersonToNotify {
        uid: uid(n),
        first_names: first.to_string(),
        last_name: last.to_string(),
        address: address("2 Road"),
    }
}

pub fn certificate_provider(first: &str, last: &str) -> CertificateProvider {
    CertificateProvider {
        uid: uid(900),
        first_names: first.to_string(),
        last_name: last.to_string(),
        email: String::new(),
        address: address("3 Road"),
    }
}

/// A document holding `attorneys` complete attorneys and `replacements` complete replacements.
pub fn document_with(attorneys: u128, replacements: u128) -> Document {
    let mut doc = document();
    for n in 0..attorneys {
        doc.attorneys
            .put(attorney(n + 1, &format!("Attorney{}", n + 1), "Smith"));
    }
    for n in 0..replacements {
        doc.replacement_attorneys.put(attorney(
            n + 101,
            &format!("Replacement{}", n + 1),
            "Jones",
        ));
    }
    doc
}

/// A property and affairs document whose data backs every "fill in the LPA" task.
pub fn filled_document() -> Document {
    let mut doc = document_with(1, 0);
    doc.donor.first_names = "Joan".to_string();
    doc.donor.last_name = "Smith".to_string();
    doc.donor.date_of_birth = Some(date(1950, 3, 4));
    doc.donor.address = address("10 Road");
    doc.want_replacement_attorneys = YesNo::No;
    doc.when_can_be_used = Some(CanBeUsedWhen::HasCapacity);
    doc.certificate_provider = Some(certificate_provider("Cee", "Pee"));
    doc.want_to_notify_people = YesNo::No;
    for task in fill_in_tasks(doc.lpa_type) {
        doc.tasks.set(task, TaskState::Completed);
    }
    doc
}

pub fn form(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Name and date of birth fields as the details pages submit them.
pub fn details_form(first: &str, last: &str, dob: NaiveDate) -> FormValues {
    let mut values = form(&[("first-names", first), ("last-name", last)]);
    values.insert("date-of-birth-day", &dob.day().to_string());
    values.insert("date-of-birth-month", &dob.month().to_string());
    values.insert("date-of-birth-year", &dob.year().to_string());
    values
}

pub fn services() -> JourneyServices {
    JourneyServices {
        clock: JourneyClock::fixed(today()),
        uids: Arc::new(SequentialUids::starting_at(500)),
    }
}

/// Address lookup that always answers with the same result.
#[derive(Debug)]
pub struct StubLookup {
    pub result: Result<Vec<Address>, LookupError>,
}

impl StubLookup {
    pub fn found(addresses: Vec<Address>) -> Self {
        Self {
            result: Ok(addresses),
        }
    }

    pub fn failing(error: LookupError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl AddressLookup for StubLookup {
    async fn lookup_postcode(&self, _postcode: &str) -> Result<Vec<Address>, LookupError> {
        self.result.clone()
    }
}

/// Handler context over the default configuration and `lookup`.
pub fn context<'a>(
    services: &'a JourneyServices,
    config: &'a JourneyConfig,
    lookup: &'a dyn AddressLookup,
) -> JourneyContext<'a> {
    JourneyContext {
        services,
        config,
        lookup,
    }
}

/// Unwraps a saved outcome, failing the test with the feedback otherwise.
pub fn saved(outcome: Outcome) -> (Document, Target) {
    match outcome {
        Outcome::Saved { document, target } => (document, target),
        Outcome::Invalid(feedback) => panic!("expected a saved outcome, got {:?}", feedback),
    }
}

pub fn feedback(outcome: Outcome) -> Feedback {
    match outcome {
        Outcome::Invalid(feedback) => feedback,
        Outcome::Saved { target, .. } => panic!("expected feedback, got redirect to {:?}", target),
    }
}
