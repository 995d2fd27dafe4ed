// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn system_clock_matches_local_date() {
    let before = Local::now().date_naive();
    let today = SystemClock.today();
    let after = Local::now().date_naive();
    assert!(before <= today && today <= after);
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::new(date(2025, 12, 31));
    clock.advance_days(1);
    assert_eq!(clock.today(), date(2026, 1, 1));
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new(date(2025, 1, 5));
    let clock2 = clock1.clone();
    clock2.set(date(2025, 3, 1));
    assert_eq!(clock1.today(), date(2025, 3, 1));
}
