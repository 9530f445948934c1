//! Submitted form values.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::types::YesNo;

/// Field values of one submission, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// Parses `KEY=VALUE` arguments. A repeated key keeps the last value.
    pub fn parse_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut form = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", arg))?;
            if key.trim().is_empty() {
                return Err(format!("empty field name in '{}'", arg));
            }
            form.insert(key.trim(), value);
        }
        Ok(form)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// The trimmed value of `key`, empty when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(|v| v.trim()).unwrap_or_default()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// `yes`/`no` answer; anything else is unset.
    pub fn yes_no(&self, key: &str) -> YesNo {
        self.get(key).parse().unwrap_or_default()
    }

    /// Whether the donor chose to come back to this section later.
    pub fn answer_later(&self) -> bool {
        self.yes_no("answer-later").is_yes()
    }

    /// Reads the `<prefix>-day`, `<prefix>-month` and `<prefix>-year` trio.
    pub fn date(&self, prefix: &str) -> DateField {
        DateField {
            day: self.get(&format!("{}-day", prefix)).to_string(),
            month: self.get(&format!("{}-month", prefix)).to_string(),
            year: self.get(&format!("{}-year", prefix)).to_string(),
        }
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The three parts of a date input as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateField {
    pub day: String,
    pub month: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateProblem {
    Blank,
    Missing {
        day: bool,
        month: bool,
        year: bool,
    },
    NotReal,
}

impl DateField {
    pub fn parse(&self) -> Result<NaiveDate, DateProblem> {
        let day = self.day.is_empty();
        let month = self.month.is_empty();
        let year = self.year.is_empty();
        if day && month && year {
            return Err(DateProblem::Blank);
        }
        if day || month || year {
            return Err(DateProblem::Missing { day, month, year });
        }

        let four_digit_year = self.year.len() == 4 && self.year.chars().all(|c| c.is_ascii_digit());
        let parts = (
            self.day.parse::<u32>(),
            self.month.parse::<u32>(),
            self.year.parse::<i32>(),
        );
        match parts {
            (Ok(d), Ok(m), Ok(y)) if four_digit_year => {
                NaiveDate::from_ymd_opt(y, m, d).ok_or(DateProblem::NotReal)
            }
            _ => Err(DateProblem::NotReal),
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
