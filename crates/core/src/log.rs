// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable booking log abstraction

use crate::conference::{Booking, Conference};
use crate::slot::SlotId;

/// Destination that makes a booking durable.
///
/// Implementations open, write and release their backing resource within a
/// single `append` call.
pub trait BookingLog {
    type Error: std::error::Error + Send + Sync + 'static;

    fn append(&self, conference: &Conference, slot: SlotId) -> Result<(), Self::Error>;
}

#[cfg(test)]
pub use memory::{MemoryLog, MemoryLogError};

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Error returned by a [`MemoryLog`] set to fail
    #[derive(Debug, thiserror::Error)]
    #[error("memory log rejected write for {0}")]
    pub struct MemoryLogError(pub SlotId);

    /// In-memory log for tests; records every accepted booking
    #[derive(Debug, Default)]
    pub struct MemoryLog {
        entries: RefCell<Vec<Booking>>,
        failing: Cell<bool>,
    }

    impl MemoryLog {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make subsequent appends fail (or succeed again)
        pub fn set_failing(&self, failing: bool) {
            self.failing.set(failing);
        }

        pub fn entries(&self) -> Vec<Booking> {
            self.entries.borrow().clone()
        }
    }

    impl BookingLog for MemoryLog {
        type Error = MemoryLogError;

        fn append(&self, conference: &Conference, slot: SlotId) -> Result<(), Self::Error> {
            if self.failing.get() {
                return Err(MemoryLogError(slot));
            }
            self.entries
                .borrow_mut()
                .push(Booking::new(conference.clone(), slot));
            Ok(())
        }
    }
}
