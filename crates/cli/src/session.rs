// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive booking session
//!
//! Prompts for conference details, re-asking until each field is valid,
//! books the conference and offers a menu to show the full record history,
//! book again, or exit. Once every slot is taken the details are no longer
//! asked for. End of input ends the session at any prompt.

use crate::error::RbError;
use crate::output::{self, OutputFormat};
use rb_core::validate::{self, ValidationError};
use rb_core::{BookingError, Clock, Conference, RoomAllocator};
use rb_storage::{Record, RecordStore};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Choice made at the end-of-booking menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ShowAll,
    BookAnother,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ShowAll),
            "2" => Some(Self::BookAnother),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Session<R, W, C> {
    input: R,
    output: W,
    clock: C,
    rooms: RoomAllocator<RecordStore>,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    pub fn new(input: R, output: W, clock: C, rooms: RoomAllocator<RecordStore>) -> Self {
        Self {
            input,
            output,
            clock,
            rooms,
        }
    }

    /// Run the booking loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let roster = self.rooms.list_booked();
            if roster.slots_left == 0 {
                let error = RbError::capacity_exhausted(roster.slots_booked);
                write!(self.output, "{}", error)?;
            } else {
                let Some(conference) = self.read_conference()? else {
                    break;
                };
                self.book(conference)?;
            }

            match self.read_menu_choice()? {
                Some(MenuChoice::ShowAll) => self.show_history()?,
                Some(MenuChoice::BookAnother) => {}
                Some(MenuChoice::Exit) | None => break,
            }
        }

        writeln!(
            self.output,
            "Thank you for using the Conference Room Booking System!"
        )?;
        self.output.flush()
    }

    #[cfg(test)]
    pub fn rooms(&self) -> &RoomAllocator<RecordStore> {
        &self.rooms
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_conference(&mut self) -> io::Result<Option<Conference>> {
        let Some(name) = self.prompt("Enter conference name: ")? else {
            return Ok(None);
        };
        let Some(anchor) =
            self.prompt_until("Enter anchor name: ", validate::validate_anchor)?
        else {
            return Ok(None);
        };
        let today = self.clock.today();
        let check_date = |d: &str| validate::validate_date(d, today).map(|_| ());
        let Some(date) = self.prompt_until("Enter date (DD/MM/YYYY): ", check_date)? else {
            return Ok(None);
        };
        let Some(time) =
            self.prompt_until("Enter time (HH:MM AM/PM): ", validate::validate_time)?
        else {
            return Ok(None);
        };

        Ok(Some(Conference::new(name, anchor, time, date)))
    }

    fn book(&mut self, conference: Conference) -> io::Result<()> {
        let slot = match self.rooms.book(conference) {
            Ok(slot) => slot,
            Err(BookingError::CapacityExhausted { capacity }) => {
                let error = RbError::capacity_exhausted(usize::from(capacity));
                write!(self.output, "{}", error)?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "Thank you for booking the conference in Room {}!",
            slot
        )?;
        if self.rooms.unpersisted().contains(&slot) {
            let warning = RbError::not_saved(slot, self.rooms.log().path());
            write!(self.output, "{}", warning)?;
        }

        self.show_booked()?;

        if let Some(booking) = self.rooms.last_booked() {
            let conference = &booking.conference;
            writeln!(self.output, "Conference Details:")?;
            writeln!(self.output, "Name: {}", conference.name)?;
            writeln!(self.output, "Anchor: {}", conference.anchor)?;
            writeln!(self.output, "Time: {}", conference.time)?;
            writeln!(self.output, "Date: {}", conference.date)?;
            writeln!(self.output, "Room Number: {}", booking.slot)?;

            if validate::is_today(&conference.date, self.clock.today()) {
                writeln!(self.output, "Conference is happening today!")?;
            } else {
                writeln!(self.output, "Conference is not happening today.")?;
            }
        }
        Ok(())
    }

    /// Print this session's bookings and slot counts
    fn show_booked(&mut self) -> io::Result<()> {
        let roster = self.rooms.list_booked();
        if roster.bookings.is_empty() {
            writeln!(self.output, "No conferences booked in this session.")?;
        } else {
            writeln!(self.output, "Conferences booked in this session:")?;
            output::write_list(&mut self.output, roster.bookings, OutputFormat::Text)?;
        }
        writeln!(self.output, "Slots left: {}", roster.slots_left)?;
        writeln!(self.output, "Slots booked: {}", roster.slots_booked)
    }

    /// Print every booking in the record file
    fn show_history(&mut self) -> io::Result<()> {
        let records: Vec<Record> = self.rooms.log().replay_all().collect();
        write_history(&mut self.output, &records, OutputFormat::Text)
    }

    fn read_menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        writeln!(self.output, "Choose an option:")?;
        writeln!(self.output, "1. Display all conferences")?;
        writeln!(self.output, "2. Book another conference")?;
        writeln!(self.output, "3. Exit")?;
        loop {
            let Some(answer) = self.prompt("Enter your choice (1/2/3): ")? else {
                return Ok(None);
            };
            match MenuChoice::parse(&answer) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "Please enter 1, 2 or 3.")?,
            }
        }
    }

    /// Prompt until `check` accepts the answer; `None` at end of input
    fn prompt_until(
        &mut self,
        message: &str,
        check: impl Fn(&str) -> Result<(), ValidationError>,
    ) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.prompt(message)? else {
                return Ok(None);
            };
            match check(&answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(e) => {
                    debug!(error = %e, "rejected input");
                    writeln!(self.output, "Invalid input: {}", e)?;
                }
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Write replayed records, or a notice when there are none
pub fn write_history(
    out: &mut impl Write,
    records: &[Record],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text if records.is_empty() => writeln!(out, "No conferences recorded."),
        OutputFormat::Text => {
            writeln!(out, "All recorded conferences:")?;
            output::write_list(out, records, format)?;
            writeln!(out, "Conferences recorded: {}", records.len())
        }
        OutputFormat::Json => output::write_list(out, records, format),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
