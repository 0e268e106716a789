//! Appointment slot computation.
//!
//! All times are minutes since midnight and all intervals are half-open:
//! a slot starting at `start` with duration `d` occupies `[start, start+d)`.
//! Two intervals overlap iff `start_a < end_b && start_b < end_a`, so
//! intervals that merely touch do not conflict.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Service duration must be a positive number of minutes")]
    NonPositiveDuration,

    #[error("Slot granularity must be a positive number of minutes")]
    NonPositiveGranularity,

    #[error("Business hours must open before they close")]
    EmptyWindow,
}

/// The daily window appointments must fit inside, `[open, close)` in
/// minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open: u16,
    pub close: u16,
}

/// The occupied interval of an existing, non-cancelled reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: u16,
    pub duration: u16,
}

impl BusyInterval {
    fn end(self) -> u16 {
        self.start.saturating_add(self.duration)
    }
}

/// Computes the bookable start times for one day, in ascending order.
///
/// Candidate starts are generated at `granularity`-minute steps from
/// `hours.open` while they remain before `hours.close`. A candidate
/// survives if the whole appointment fits in the window (ending exactly at
/// close is allowed) and it does not overlap any busy interval. An empty
/// result is a normal outcome, not an error.
pub fn compute_available_slots(
    service_duration: u16,
    hours: BusinessHours,
    granularity: u16,
    busy: &[BusyInterval],
) -> Result<Vec<u16>, SchedulingError> {
    if service_duration == 0 {
        return Err(SchedulingError::NonPositiveDuration);
    }
    if granularity == 0 {
        return Err(SchedulingError::NonPositiveGranularity);
    }
    if hours.open >= hours.close {
        return Err(SchedulingError::EmptyWindow);
    }

    let mut slots = Vec::new();
    let mut start = hours.open;
    while start < hours.close {
        let end = start.saturating_add(service_duration);
        let fits = end <= hours.close;
        let conflicts = busy
            .iter()
            .any(|interval| start < interval.end() && interval.start < end);
        if fits && !conflicts {
            slots.push(start);
        }
        start = match start.checked_add(granularity) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(slots)
}
