// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input rules a conference must pass before it can be booked

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Allow expect here as the patterns are constant and known to be valid
#[allow(clippy::expect_used)]
static ANCHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2]):[0-5][0-9] (AM|PM)$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/(19|20)\d\d$")
        .expect("constant regex pattern is valid")
});

/// Display format of conference dates
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Reasons a conference field is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("anchor name may only contain letters and spaces: {0:?}")]
    Anchor(String),
    #[error("time must look like HH:MM AM or HH:MM PM: {0:?}")]
    Time(String),
    #[error("date must be a real date written DD/MM/YYYY: {0:?}")]
    Date(String),
    #[error("date {0} is in the past")]
    PastDate(String),
}

pub fn validate_anchor(anchor: &str) -> Result<(), ValidationError> {
    if ANCHOR_PATTERN.is_match(anchor) {
        Ok(())
    } else {
        Err(ValidationError::Anchor(anchor.to_string()))
    }
}

pub fn validate_time(time: &str) -> Result<(), ValidationError> {
    if TIME_PATTERN.is_match(time) {
        Ok(())
    } else {
        Err(ValidationError::Time(time.to_string()))
    }
}

/// Parse a `DD/MM/YYYY` date, rejecting days that do not exist
pub fn parse_date(date: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_PATTERN.is_match(date) {
        return Err(ValidationError::Date(date.to_string()));
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| ValidationError::Date(date.to_string()))
}

/// Parse a date that may be booked: well formed and not before `today`
pub fn validate_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let parsed = parse_date(date)?;
    if parsed < today {
        return Err(ValidationError::PastDate(date.to_string()));
    }
    Ok(parsed)
}

/// Whether a conference date falls on `today`. Unparseable dates never do.
pub fn is_today(date: &str, today: NaiveDate) -> bool {
    parse_date(date).is_ok_and(|d| d == today)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
