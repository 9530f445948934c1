//! Implausible date of birth warnings.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WarningsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DobWarning {
    AttorneyUnder18,
    DonorUnder18,
    Over100,
}

impl DobWarning {
    /// The key a donor echoes back in `ignore-dob-warning` to continue.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AttorneyUnder18 => "attorneyDateOfBirthIsUnder18",
            Self::DonorUnder18 => "donorDateOfBirthIsUnder18",
            Self::Over100 => "dateOfBirthIsOver100",
        }
    }
}

fn years_before(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(years.saturating_mul(12)))
}

fn is_under(dob: NaiveDate, today: NaiveDate, years: u32) -> bool {
    years_before(today, years).is_some_and(|limit| dob > limit)
}

fn is_over(dob: NaiveDate, today: NaiveDate, years: u32) -> bool {
    years_before(today, years).is_some_and(|limit| dob < limit)
}

/// Attorneys must be adults; both attorney collections use this check.
pub fn attorney_warning(
    dob: NaiveDate,
    today: NaiveDate,
    config: &WarningsConfig,
) -> Option<DobWarning> {
    if is_under(dob, today, config.minimum_attorney_age) {
        Some(DobWarning::AttorneyUnder18)
    } else if is_over(dob, today, config.maximum_plausible_age) {
        Some(DobWarning::Over100)
    } else {
        None
    }
}

pub fn donor_warning(
    dob: NaiveDate,
    today: NaiveDate,
    config: &WarningsConfig,
) -> Option<DobWarning> {
    if is_under(dob, today, config.minimum_attorney_age) {
        Some(DobWarning::DonorUnder18)
    } else if is_over(dob, today, config.maximum_plausible_age) {
        Some(DobWarning::Over100)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests/dob_tests.rs"]
mod tests;
