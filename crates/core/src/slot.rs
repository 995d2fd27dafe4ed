// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Room slot identifiers
//!
//! A slot id is the prefix letter `C` followed by a number in
//! `1..=MAX_SLOTS`, e.g. `C1` or `C15`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Letter every room identifier starts with
pub const SLOT_PREFIX: char = 'C';

/// Number of bookable room slots
pub const MAX_SLOTS: u8 = 15;

/// Errors from parsing a slot id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotIdError {
    #[error("slot id must start with '{prefix}': {0:?}", prefix = SLOT_PREFIX)]
    Prefix(String),
    #[error("slot id has no valid number: {0:?}")]
    Number(String),
    #[error("slot number {0} is outside 1..={max}", max = MAX_SLOTS)]
    OutOfRange(u32),
}

/// Identifier of a booked room slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SlotId(u8);

impl SlotId {
    /// The first assignable slot
    pub const FIRST: SlotId = SlotId(1);

    /// Build a slot id from its number, if it lies in `1..=MAX_SLOTS`
    pub fn new(number: u8) -> Option<Self> {
        (1..=MAX_SLOTS).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SLOT_PREFIX, self.0)
    }
}

impl FromStr for SlotId {
    type Err = SlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(SLOT_PREFIX)
            .ok_or_else(|| SlotIdError::Prefix(s.to_string()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SlotIdError::Number(s.to_string()));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| SlotIdError::Number(s.to_string()))?;
        u8::try_from(number)
            .ok()
            .and_then(SlotId::new)
            .ok_or(SlotIdError::OutOfRange(number))
    }
}

impl From<SlotId> for String {
    fn from(slot: SlotId) -> Self {
        slot.to_string()
    }
}

impl TryFrom<String> for SlotId {
    type Error = SlotIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
