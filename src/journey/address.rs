//! The shared address step: postcode lookup, pick from the list, or type it in.

use crate::domain::errors::{JourneyError, LookupError};
use crate::domain::types::Address;
use crate::journey::form::FormValues;
use crate::journey::validation::{Problem, ValidationErrors, ADDRESS_LINE_MAX};
use crate::journey::Feedback;
use crate::store::AddressLookup;

#[derive(Debug)]
pub enum AddressStep {
    /// The donor settled on an address.
    Chosen(Address),
    /// Stay on the page: errors, or lookup candidates to choose from.
    Feedback(Feedback),
}

/// Resolves the address form's `action`.
///
/// A malformed postcode is a field error on `lookup-postcode`; any other
/// lookup failure is returned as an error.
pub async fn resolve(form: &FormValues, lookup: &dyn AddressLookup) -> Result<AddressStep, JourneyError> {
    match form.get("action") {
        "postcode-lookup" => lookup_candidates(form, lookup).await,
        "postcode-select" => select(form, lookup).await,
        "manual" => Ok(manual(form)),
        _ => Ok(stay(ValidationErrors::with(
            "action",
            Problem::Select {
                label: "howToEnterAddress",
            },
        ))),
    }
}

fn stay(errors: ValidationErrors) -> AddressStep {
    AddressStep::Feedback(Feedback::errors(errors))
}

async fn lookup(
    postcode: &str,
    lookup: &dyn AddressLookup,
) -> Result<Result<Vec<Address>, ValidationErrors>, JourneyError> {
    if postcode.is_empty() {
        return Ok(Err(ValidationErrors::with(
            "lookup-postcode",
            Problem::Enter { label: "aPostcode" },
        )));
    }
    match lookup.lookup_postcode(postcode).await {
        Ok(addresses) => Ok(Ok(addresses)),
        Err(LookupError::BadRequest(_)) => Ok(Err(ValidationErrors::with(
            "lookup-postcode",
            Problem::Custom {
                label: "couldNotLookupPostcode",
            },
        ))),
        Err(e) => Err(e.into()),
    }
}

async fn lookup_candidates(
    form: &FormValues,
    lookup_service: &dyn AddressLookup,
) -> Result<AddressStep, JourneyError> {
    match lookup(form.get("lookup-postcode"), lookup_service).await? {
        Ok(addresses) => Ok(AddressStep::Feedback(Feedback {
            addresses,
            ..Default::default()
        })),
        Err(errors) => Ok(stay(errors)),
    }
}

/// `select-address` is the position of the chosen candidate, counting from 1.
async fn select(form: &FormValues, lookup_service: &dyn AddressLookup) -> Result<AddressStep, JourneyError> {
    let addresses = match lookup(form.get("lookup-postcode"), lookup_service).await? {
        Ok(addresses) => addresses,
        Err(errors) => return Ok(stay(errors)),
    };

    let chosen = form
        .get("select-address")
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| addresses.get(index).cloned());

    match chosen {
        Some(address) => Ok(AddressStep::Chosen(address)),
        None => Ok(AddressStep::Feedback(Feedback {
            errors: ValidationErrors::with(
                "select-address",
                Problem::Select {
                    label: "anAddressFromTheList",
                },
            ),
            addresses,
            ..Default::default()
        })),
    }
}

fn manual(form: &FormValues) -> AddressStep {
    let (address, errors) = read_manual(form);
    if errors.is_empty() {
        AddressStep::Chosen(address)
    } else {
        stay(errors)
    }
}

/// Reads the typed-in address fields. Line 1 and town are required.
pub fn read_manual(form: &FormValues) -> (Address, ValidationErrors) {
    let mut errors = ValidationErrors::default();
    let line1 = errors.text(form, "address-line-1", "addressLine1", ADDRESS_LINE_MAX);
    let line2 = form.get("address-line-2");
    errors.max_length("address-line-2", "addressLine2Label", line2, ADDRESS_LINE_MAX);
    let line3 = form.get("address-line-3");
    errors.max_length("address-line-3", "addressLine3Label", line3, ADDRESS_LINE_MAX);
    let town = errors.text(form, "address-town", "townOrCity", ADDRESS_LINE_MAX);

    let address = Address {
        line1,
        line2: line2.to_string(),
        line3: line3.to_string(),
        town,
        postcode: form.get("address-postcode").to_uppercase(),
        country: "GB".to_string(),
    };
    (address, errors)
}

#[cfg(test)]
#[path = "tests/address_tests.rs"]
mod tests;
