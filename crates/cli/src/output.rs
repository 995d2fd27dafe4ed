// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// Line printed after each booking in text listings
pub const ENTRY_SEPARATOR: &str = "----------------------";

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write a list of items, each followed by a separator line in text mode
pub fn write_list<T: Serialize + std::fmt::Display>(
    out: &mut impl Write,
    items: &[T],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", item)?;
                writeln!(out, "{}", ENTRY_SEPARATOR)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
