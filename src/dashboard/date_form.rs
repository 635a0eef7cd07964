//! Date-range form state and validation.
//!
//! The form keeps the raw text of both inputs. Submitting validates them and,
//! only when valid, hands back the two strings exactly as typed. An invalid
//! form never produces a submission, so no request is issued for it.

use crate::constants::{ERROR_DATE_INVALID, ERROR_DATE_REQUIRED, ERROR_END_BEFORE_START};
use crate::models::DateRange;
use crate::utils::datetime;

/// Longest accepted input (`YYYY-MM-DD`)
const MAX_INPUT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormError {
    pub field: FormField,
    pub message: String,
}

impl FormError {
    fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeForm {
    pub start: String,
    pub end: String,
    pub focus: FormField,
    errors: Vec<FormError>,
}

impl DateRangeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill both inputs, e.g. with the active filter
    pub fn with_values(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Start => &mut self.start,
            FormField::End => &mut self.end,
        }
    }

    /// Type a character into the focused input; only digits and `-` are kept
    pub fn input(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '-') {
            return;
        }
        let value = self.focused_mut();
        if value.len() < MAX_INPUT_LEN {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Start => FormField::End,
            FormField::End => FormField::Start,
        };
    }

    /// Validate the inputs; on success return them exactly as typed
    pub fn submit(&mut self) -> Option<(String, String)> {
        match Self::validate(&self.start, &self.end) {
            Ok(_) => {
                self.errors.clear();
                Some((self.start.clone(), self.end.clone()))
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Check both inputs and their order
    ///
    /// Each field must hold an ISO date; with both valid the start must not be
    /// after the end, otherwise the error is reported on the end field.
    pub fn validate(start: &str, end: &str) -> Result<DateRange, Vec<FormError>> {
        let mut errors = Vec::new();
        let start_date = Self::parse_field(FormField::Start, start, &mut errors);
        let end_date = Self::parse_field(FormField::End, end, &mut errors);

        match (start_date, end_date) {
            (Some(s), Some(e)) if s <= e => Ok(DateRange::new(s, e)),
            (Some(_), Some(_)) => Err(vec![FormError::new(FormField::End, ERROR_END_BEFORE_START)]),
            _ => Err(errors),
        }
    }

    fn parse_field(field: FormField, value: &str, errors: &mut Vec<FormError>) -> Option<chrono::NaiveDate> {
        if value.trim().is_empty() {
            errors.push(FormError::new(field, ERROR_DATE_REQUIRED));
            return None;
        }
        match datetime::parse_date(value) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FormError::new(field, ERROR_DATE_INVALID));
                None
            }
        }
    }
}
