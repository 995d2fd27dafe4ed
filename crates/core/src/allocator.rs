// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential room slot allocation
//!
//! The allocator hands out slot ids in strictly increasing order and keeps the
//! session's bookings in memory. Durability is delegated to a [`BookingLog`];
//! a failed write is reported but never undoes the booking.

use crate::conference::{Booking, Conference};
use crate::log::BookingLog;
use crate::slot::{SlotId, MAX_SLOTS};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while booking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("all {capacity} room slots are booked")]
    CapacityExhausted { capacity: u8 },
}

/// Requested slot count outside `1..=MAX_SLOTS`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("capacity must be between 1 and {max}, got {requested}", max = MAX_SLOTS)]
pub struct CapacityError {
    pub requested: u8,
}

/// Read-only view of the bookings made so far
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    pub bookings: &'a [Booking],
    pub slots_left: usize,
    pub slots_booked: usize,
}

/// Assigns room slots and tracks the bookings of one session
pub struct RoomAllocator<L: BookingLog> {
    log: L,
    bookings: Vec<Booking>,
    /// Number of the last assigned slot; 0 before the first booking
    last: u8,
    capacity: u8,
    unpersisted: Vec<SlotId>,
}

impl<L: BookingLog> RoomAllocator<L> {
    /// Allocator offering all `MAX_SLOTS` slots
    pub fn new(log: L) -> Self {
        Self {
            log,
            bookings: Vec::new(),
            last: 0,
            capacity: MAX_SLOTS,
            unpersisted: Vec::new(),
        }
    }

    /// Allocator offering only the first `capacity` slots
    pub fn with_capacity(log: L, capacity: u8) -> Result<Self, CapacityError> {
        if !(1..=MAX_SLOTS).contains(&capacity) {
            return Err(CapacityError {
                requested: capacity,
            });
        }
        let mut allocator = Self::new(log);
        allocator.capacity = capacity;
        Ok(allocator)
    }

    /// Book a conference into the next free slot.
    ///
    /// The conference must already be validated. Fails only when every slot
    /// is taken, in which case nothing changes.
    pub fn book(&mut self, conference: Conference) -> Result<SlotId, BookingError> {
        let slot = self
            .last
            .checked_add(1)
            .filter(|next| *next <= self.capacity)
            .and_then(SlotId::new)
            .ok_or(BookingError::CapacityExhausted {
                capacity: self.capacity,
            })?;

        self.last = slot.number();
        let booking = Booking::new(conference, slot);
        info!(%slot, "conference booked");

        // Persistence is best effort: the in-memory booking stands either way
        match self.log.append(&booking.conference, slot) {
            Ok(()) => debug!(%slot, "booking persisted"),
            Err(e) => {
                warn!(%slot, error = %e, "booking accepted but not persisted");
                self.unpersisted.push(slot);
            }
        }
        self.bookings.push(booking);

        Ok(slot)
    }

    /// Bookings of this session in booking order, with slot counts
    pub fn list_booked(&self) -> Roster<'_> {
        let booked = self.bookings.len();
        Roster {
            bookings: &self.bookings,
            slots_left: usize::from(self.capacity).saturating_sub(booked),
            slots_booked: booked,
        }
    }

    /// The most recent booking, if any
    pub fn last_booked(&self) -> Option<&Booking> {
        self.bookings.last()
    }

    /// Slots whose booking could not be written to the log
    pub fn unpersisted(&self) -> &[SlotId] {
        &self.unpersisted
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;
