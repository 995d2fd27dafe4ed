// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rb-storage: durable booking records
//!
//! A flat text file with one booking per line, appended to as bookings are
//! made and replayed in full for history display.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod record;
mod store;

pub use record::Record;
pub use store::{RecordStore, Replay, StoreError};
