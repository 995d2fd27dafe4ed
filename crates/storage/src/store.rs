// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only booking record file

use crate::record::{self, Record};
use rb_core::{BookingLog, Conference, SlotId};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot write booking record to {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable, append-only log of bookings in a flat text file.
///
/// The file is opened and closed inside each call; no handle is held
/// between calls.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one booking as a single line
    pub fn append(&self, conference: &Conference, slot: SlotId) -> Result<(), StoreError> {
        for field in record::unsafe_fields(conference) {
            warn!(
                %slot,
                field,
                "field contains a separator or line break; record will not replay faithfully"
            );
        }

        let line = record::format_line(conference, slot);
        let unwritable = |source| StoreError::Unwritable {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(unwritable)?;
        writeln!(file, "{}", line).map_err(unwritable)?;

        debug!(path = %self.path.display(), %slot, "record appended");
        Ok(())
    }

    /// Replay every record in the file, oldest first.
    ///
    /// A missing or unreadable file is reported with a warning and treated
    /// as an empty history.
    pub fn replay_all(&self) -> Replay {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "no booking records yet");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read booking records");
                Vec::new()
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        Replay {
            lines: lines.into_iter(),
        }
    }
}

impl BookingLog for RecordStore {
    type Error = StoreError;

    fn append(&self, conference: &Conference, slot: SlotId) -> Result<(), Self::Error> {
        RecordStore::append(self, conference, slot)
    }
}

/// Records read by one [`RecordStore::replay_all`] call.
///
/// The file content is captured when the replay is created; each record is
/// parsed as the iterator reaches it. Every line is a record, so a blank line
/// replays with all fields empty.
#[derive(Debug)]
pub struct Replay {
    lines: std::vec::IntoIter<String>,
}

impl Iterator for Replay {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| Record::parse(&line))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
