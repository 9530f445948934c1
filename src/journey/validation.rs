//! Field-level validation errors and the checks that produce them.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::journey::form::{DateField, DateProblem, FormValues};

pub const FIRST_NAMES_MAX: usize = 53;
pub const LAST_NAME_MAX: usize = 61;
pub const ADDRESS_LINE_MAX: usize = 50;

/// What is wrong with a field. `label` is a translation key for the template layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    Enter {
        label: &'static str,
    },
    Select {
        label: &'static str,
    },
    TooLong {
        label: &'static str,
        length: usize,
    },
    Email {
        label: &'static str,
    },
    DateMissing {
        label: &'static str,
        missing_day: bool,
        missing_month: bool,
        missing_year: bool,
    },
    DateMustBeReal {
        label: &'static str,
    },
    DateMustBePast {
        label: &'static str,
    },
    Limit {
        label: &'static str,
        max: usize,
    },
    Custom {
        label: &'static str,
    },
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enter { label } => write!(f, "enter {}", label),
            Self::Select { label } => write!(f, "select {}", label),
            Self::TooLong { label, length } => {
                write!(f, "{} must be {} characters or less", label, length)
            }
            Self::Email { label } => write!(f, "{} must be a valid email address", label),
            Self::DateMissing { label, .. } => write!(f, "{} must include a day, month and year", label),
            Self::DateMustBeReal { label } => write!(f, "{} must be a real date", label),
            Self::DateMustBePast { label } => write!(f, "{} must be in the past", label),
            Self::Limit { label, max } => write!(f, "{} is limited to {}", label, max),
            Self::Custom { label } => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub problem: Problem,
}

/// Errors in field order of discovery. Only the first error per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn with(field: &str, problem: Problem) -> Self {
        let mut errors = Self::default();
        errors.add(field, problem);
        errors
    }

    pub fn add(&mut self, field: &str, problem: Problem) {
        if !self.has(field) {
            self.0.push(FieldError {
                field: field.to_string(),
                problem,
            });
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn get(&self, field: &str) -> Option<&Problem> {
        self.0.iter().find(|e| e.field == field).map(|e| &e.problem)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn fields(&self) -> Vec<String> {
        self.0.iter().map(|e| e.field.clone()).collect()
    }

    /// Required text with a maximum length.
    pub fn text(&mut self, form: &FormValues, field: &str, label: &'static str, max: usize) -> String {
        let value = form.get(field);
        if value.is_empty() {
            self.add(field, Problem::Enter { label });
        } else {
            self.max_length(field, label, value, max);
        }
        value.to_string()
    }

    pub fn max_length(&mut self, field: &str, label: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, Problem::TooLong { label, length: max });
        }
    }

    /// Optional email: blank is accepted, anything else must look like an address.
    pub fn email(&mut self, form: &FormValues, field: &str, label: &'static str) -> String {
        let value = form.get(field);
        if !value.is_empty() && !email_pattern().is_match(value) {
            self.add(field, Problem::Email { label });
        }
        value.to_string()
    }

    /// One option out of a fixed set.
    pub fn select<T: FromStr>(&mut self, form: &FormValues, field: &str, label: &'static str) -> Option<T> {
        match form.get(field).parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.add(field, Problem::Select { label });
                None
            }
        }
    }

    /// A required date that must be real and not after `today`.
    pub fn past_date(
        &mut self,
        field: &str,
        label: &'static str,
        date: &DateField,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        match date.parse() {
            Ok(parsed) if parsed > today => {
                self.add(field, Problem::DateMustBePast { label });
                None
            }
            Ok(parsed) => Some(parsed),
            Err(DateProblem::Blank) => {
                self.add(field, Problem::Enter { label });
                None
            }
            Err(DateProblem::Missing { day, month, year }) => {
                self.add(
                    field,
                    Problem::DateMissing {
                        label,
                        missing_day: day,
                        missing_month: month,
                        missing_year: year,
                    },
                );
                None
            }
            Err(DateProblem::NotReal) => {
                self.add(field, Problem::DateMustBeReal { label });
                None
            }
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
