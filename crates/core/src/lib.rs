// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rb-core: booking model and slot allocation for the room booking tracker
//!
//! This crate provides:
//! - Conference, slot id and booking value types
//! - The sequential room allocator and its durable log seam
//! - Input validation rules for anchors, dates and times
//! - A clock abstraction for date-dependent rules

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod allocator;
pub mod clock;
pub mod conference;
pub mod log;
pub mod slot;
pub mod validate;

pub use allocator::{BookingError, CapacityError, Roster, RoomAllocator};
pub use clock::{Clock, FakeClock, SystemClock};
pub use conference::{Booking, Conference};
pub use log::BookingLog;
pub use slot::{SlotId, SlotIdError, MAX_SLOTS, SLOT_PREFIX};
pub use validate::ValidationError;
