//! The donor's own details and address.

use crate::domain::actor::ActorType;
use crate::domain::document::Document;
use crate::domain::errors::JourneyError;
use crate::journey::address::{self, AddressStep};
use crate::journey::form::FormValues;
use crate::journey::validation::{ValidationErrors, FIRST_NAMES_MAX, LAST_NAME_MAX};
use crate::journey::{warned, JourneyContext, Outcome};
use crate::navigation::Section;
use crate::task::tracker;
use crate::warnings::{self, dob, find_match};

const OTHER_NAMES_MAX: usize = 50;

pub fn details(mut doc: Document, form: &FormValues, ctx: &JourneyContext<'_>) -> Outcome {
    let today = ctx.services.clock.today();
    let mut errors = ValidationErrors::default();
    let first_names = errors.text(form, "first-names", "firstNames", FIRST_NAMES_MAX);
    let last_name = errors.text(form, "last-name", "lastName", LAST_NAME_MAX);
    let other_names = form.get("other-names");
    errors.max_length(
        "other-names",
        "otherNamesYouAreKnownBy",
        other_names,
        OTHER_NAMES_MAX,
    );
    let dob = errors.past_date("date-of-birth", "dateOfBirth", &form.date("date-of-birth"), today);

    let date_of_birth = match dob {
        Some(date) if errors.is_empty() => date,
        _ => return Outcome::invalid(errors),
    };

    let dob_warning = warnings::dob_warning(
        dob::donor_warning(date_of_birth, today, &ctx.config.warnings),
        form.get("ignore-dob-warning"),
    );
    let name_warning = warnings::name_warning(
        ActorType::Donor,
        find_match(ActorType::Donor, None, &first_names, &last_name, &doc),
        &first_names,
        &last_name,
        form.get("ignore-name-warning"),
    );
    if let Some(outcome) = warned(name_warning, dob_warning) {
        return outcome;
    }

    doc.donor.first_names = first_names;
    doc.donor.last_name = last_name;
    doc.donor.other_names = other_names.to_string();
    doc.donor.date_of_birth = Some(date_of_birth);
    doc.tasks.your_details = tracker::your_details(&doc);

    Outcome::saved(doc, Section::YourAddress)
}

pub async fn address(
    mut doc: Document,
    form: &FormValues,
    ctx: &JourneyContext<'_>,
) -> Result<Outcome, JourneyError> {
    match address::resolve(form, ctx.lookup).await? {
        AddressStep::Feedback(feedback) => Ok(Outcome::Invalid(feedback)),
        AddressStep::Chosen(chosen) => {
            doc.donor.address = chosen;
            doc.tasks.your_details = tracker::your_details(&doc);
            Ok(Outcome::saved(doc, Section::TaskList))
        }
    }
}

#[cfg(test)]
#[path = "tests/donor_tests.rs"]
mod tests;
