// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly problem display with context and suggestions.
//!
//! Each report carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use rb_core::SlotId;
use std::fmt;
use std::path::Path;

/// How serious a reported problem is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Problem with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct RbError {
    pub severity: Severity,
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl RbError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::new(message)
        }
    }

    /// Add context about why this happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix it.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Every room slot of the session is taken.
    pub fn capacity_exhausted(capacity: usize) -> Self {
        RbError::new("No room slots left")
            .with_context(format!("All {} slots in this session are booked", capacity))
            .with_suggestion("Review recorded bookings: choose option 1 in the menu")
            .with_suggestion("Start a new session to book more rooms: rb book")
    }

    /// A booking was accepted but could not be written to the record file.
    pub fn not_saved(slot: SlotId, records: &Path) -> Self {
        RbError::warning(format!("Booking for Room {} was not saved", slot))
            .with_context(format!("Could not write to {}", records.display()))
            .with_context("The booking stays valid for this session only")
            .with_suggestion("Check that the directory exists and is writable")
            .with_suggestion("Use another record file: rb --records <PATH>")
    }
}

impl fmt::Display for RbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        writeln!(f, "{}: {}", label, self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RbError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RbError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.starts_with("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_capacity_exhausted() {
        let output = RbError::capacity_exhausted(15).to_string();
        assert!(output.starts_with("error: No room slots left"));
        assert!(output.contains("All 15 slots"));
    }

    #[test]
    fn test_not_saved_is_warning() {
        let err = RbError::not_saved(SlotId::FIRST, Path::new("/nope/conferences.csv"));
        assert_eq!(err.severity, Severity::Warning);
        let output = err.to_string();
        assert!(output.starts_with("warning: Booking for Room C1 was not saved"));
        assert!(output.contains("/nope/conferences.csv"));
    }
}
