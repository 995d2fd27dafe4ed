// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conference and booking value types

use crate::slot::SlotId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used for a conference created without time or date
pub const NOT_AVAILABLE: &str = "N/A";

/// A conference to be booked. Time and date are kept as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub name: String,
    pub anchor: String,
    pub time: String,
    pub date: String,
}

impl Conference {
    pub fn new(
        name: impl Into<String>,
        anchor: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            anchor: anchor.into(),
            time: time.into(),
            date: date.into(),
        }
    }

    /// Conference with no scheduled time or date yet
    pub fn with_defaults(name: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self::new(name, anchor, NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

/// A conference together with the room slot it was assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub conference: Conference,
    pub slot: SlotId,
}

impl Booking {
    pub fn new(conference: Conference, slot: SlotId) -> Self {
        Self { conference, slot }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conference Name: {}", self.conference.name)?;
        writeln!(f, "Anchor: {}", self.conference.anchor)?;
        writeln!(f, "Time: {}", self.conference.time)?;
        writeln!(f, "Date: {}", self.conference.date)?;
        write!(f, "Room Number: {}", self.slot)
    }
}
