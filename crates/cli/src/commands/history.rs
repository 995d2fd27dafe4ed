// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History command: replay the record file

use crate::config::Config;
use crate::output::OutputFormat;
use crate::session::write_history;
use clap::Args;
use rb_storage::{Record, RecordStore};
use std::io;

#[derive(Args)]
pub struct HistoryArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle(config: &Config, args: HistoryArgs) -> anyhow::Result<()> {
    let records: Vec<Record> = RecordStore::new(&config.records).replay_all().collect();
    write_history(&mut io::stdout().lock(), &records, args.format)?;
    Ok(())
}
