// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive booking command

use crate::config::Config;
use crate::session::Session;
use rb_core::{RoomAllocator, SystemClock};
use rb_storage::RecordStore;
use std::io;
use tracing::info;

pub fn handle(config: &Config) -> anyhow::Result<()> {
    let store = RecordStore::new(&config.records);
    let rooms = RoomAllocator::with_capacity(store, config.capacity)?;
    info!(
        records = %config.records.display(),
        capacity = config.capacity,
        "starting booking session"
    );

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), SystemClock, rooms);
    session.run()?;
    Ok(())
}
