// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration resolution
//!
//! Later sources win:
//! 1. Built-in defaults (`conferences.csv` in the working directory, 15 slots)
//! 2. `rb.toml` in the working directory
//! 3. Environment (`RB_RECORDS`, `RB_CAPACITY`) and command-line flags
//!
//! ```toml
//! records = "bookings/conferences.csv"
//! capacity = 10
//! ```

use rb_core::MAX_SLOTS;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default record file name
pub const DEFAULT_RECORDS: &str = "conferences.csv";

/// Optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "rb.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("capacity must be between 1 and {max}, got {0}", max = MAX_SLOTS)]
    Capacity(u8),
}

/// Values given on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub records: Option<PathBuf>,
    pub capacity: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    records: Option<PathBuf>,
    capacity: Option<u8>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the booking record file
    pub records: PathBuf,
    /// Number of bookable slots per session
    pub capacity: u8,
}

impl Config {
    /// Resolve configuration for a working directory
    pub fn load(dir: &Path, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = read_file_config(&dir.join(CONFIG_FILE))?;

        let records = overrides
            .records
            .or_else(|| file.records.map(|p| dir.join(p)))
            .unwrap_or_else(|| dir.join(DEFAULT_RECORDS));

        let capacity = overrides
            .capacity
            .or(file.capacity)
            .unwrap_or(MAX_SLOTS);
        if !(1..=MAX_SLOTS).contains(&capacity) {
            return Err(ConfigError::Capacity(capacity));
        }

        Ok(Self { records, capacity })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
