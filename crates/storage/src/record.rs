// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line format of the booking record
//!
//! One booking per line: `name,anchor,time,date,slot`. Fields are written
//! verbatim with no quoting, so a comma inside a field shifts every later
//! field when the line is read back.

use rb_core::{Conference, SlotId};
use serde::Serialize;
use std::fmt;

/// Field separator of a record line
pub const SEPARATOR: char = ',';

/// One replayed record, with missing fields left empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub anchor: String,
    pub time: String,
    pub date: String,
    pub slot: String,
}

impl Record {
    /// Parse one line. Fields past the fifth are dropped.
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split(SEPARATOR).map(str::to_string);
        let mut next = || fields.next().unwrap_or_default();
        Self {
            name: next(),
            anchor: next(),
            time: next(),
            date: next(),
            slot: next(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conference Name: {}", self.name)?;
        writeln!(f, "Anchor: {}", self.anchor)?;
        writeln!(f, "Time: {}", self.time)?;
        writeln!(f, "Date: {}", self.date)?;
        write!(f, "Room Number: {}", self.slot)
    }
}

/// Render a booking as a record line, without the trailing newline
pub fn format_line(conference: &Conference, slot: SlotId) -> String {
    format!(
        "{name}{sep}{anchor}{sep}{time}{sep}{date}{sep}{slot}",
        name = conference.name,
        anchor = conference.anchor,
        time = conference.time,
        date = conference.date,
        sep = SEPARATOR,
    )
}

/// Names of fields that cannot be stored faithfully in a record line
pub fn unsafe_fields(conference: &Conference) -> Vec<&'static str> {
    [
        ("name", &conference.name),
        ("anchor", &conference.anchor),
        ("time", &conference.time),
        ("date", &conference.date),
    ]
    .into_iter()
    .filter(|(_, value)| value.contains([SEPARATOR, '\n', '\r']))
    .map(|(field, _)| field)
    .collect()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
