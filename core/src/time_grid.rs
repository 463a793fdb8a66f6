//! Time grid & configuration.
//!
//! Converts the operating-hour strings of a [`crate::model::SolverConfig`]
//! into a uniform integer grid of 15-minute slots, the unit every other
//! component reasons in.

use chrono::NaiveTime;

use crate::error::SolveError;

pub const SLOT_SIZE_MINUTES: u32 = 15;
pub const LUNCH_DURATION_SLOTS: u32 = 2;
pub const MAX_SESSIONS_PER_PAIR: usize = 2;
pub const MAX_NOTES_PER_THERAPIST: u32 = 4;

fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

fn minutes_since_midnight(t: NaiveTime) -> u32 {
    (t.hour_minutes()) as u32
}

trait HourMinutes {
    fn hour_minutes(&self) -> i64;
}

impl HourMinutes for NaiveTime {
    fn hour_minutes(&self) -> i64 {
        self.signed_duration_since(NaiveTime::from_hms_opt(0, 0, 0).expect("midnight is valid"))
            .num_minutes()
    }
}

/// The frozen time grid for one solve: operating-hour bounds, slot count,
/// and the lunch start window, all expressed in slot indices relative to
/// `operating_hours_start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub op_start_minutes: u32,
    pub op_end_minutes: u32,
    pub num_slots: u32,
    pub lunch_window_start_slot: u32,
    pub lunch_window_end_slot: u32,
    pub worker_count: u32,
}

impl Grid {
    pub fn new(config: &crate::model::SolverConfig) -> Result<Self, SolveError> {
        if config.slot_size_minutes != SLOT_SIZE_MINUTES {
            return Err(SolveError::InvalidSlotSize(config.slot_size_minutes));
        }

        let op_start = parse_hhmm(&config.operating_hours_start).ok_or_else(|| {
            SolveError::InvalidOperatingHours {
                start: config.operating_hours_start.clone(),
                end: config.operating_hours_end.clone(),
            }
        })?;
        let op_end = parse_hhmm(&config.operating_hours_end).ok_or_else(|| {
            SolveError::InvalidOperatingHours {
                start: config.operating_hours_start.clone(),
                end: config.operating_hours_end.clone(),
            }
        })?;

        let op_start_minutes = minutes_since_midnight(op_start);
        let op_end_minutes = minutes_since_midnight(op_end);

        if op_end_minutes <= op_start_minutes {
            return Err(SolveError::InvalidOperatingHours {
                start: config.operating_hours_start.clone(),
                end: config.operating_hours_end.clone(),
            });
        }

        let num_slots = (op_end_minutes - op_start_minutes) / SLOT_SIZE_MINUTES;

        let lunch_start = parse_hhmm(&config.ideal_lunch_window_start).ok_or_else(|| {
            SolveError::InvalidLunchWindow {
                start: config.ideal_lunch_window_start.clone(),
                end: config.ideal_lunch_window_end_for_start.clone(),
            }
        })?;
        let lunch_end = parse_hhmm(&config.ideal_lunch_window_end_for_start).ok_or_else(|| {
            SolveError::InvalidLunchWindow {
                start: config.ideal_lunch_window_start.clone(),
                end: config.ideal_lunch_window_end_for_start.clone(),
            }
        })?;

        if minutes_since_midnight(lunch_end) < minutes_since_midnight(lunch_start) {
            return Err(SolveError::InvalidLunchWindow {
                start: config.ideal_lunch_window_start.clone(),
                end: config.ideal_lunch_window_end_for_start.clone(),
            });
        }

        let lunch_window_start_slot = Self::time_to_slot_raw(op_start_minutes, lunch_start);
        let lunch_window_end_slot = num_slots
            .saturating_sub(2)
            .min(Self::time_to_slot_raw(op_start_minutes, lunch_end));

        Ok(Grid {
            op_start_minutes,
            op_end_minutes,
            num_slots,
            lunch_window_start_slot,
            lunch_window_end_slot,
            worker_count: config.worker_count.max(1),
        })
    }

    fn time_to_slot_raw(op_start_minutes: u32, t: NaiveTime) -> u32 {
        let minutes = minutes_since_midnight(t);
        minutes.saturating_sub(op_start_minutes) / SLOT_SIZE_MINUTES
    }

    /// Converts a wall-clock "HH:MM" string to a slot index relative to
    /// `operating_hours_start`, clamped to `[0, num_slots]`.
    pub fn time_to_slot(&self, s: &str) -> Option<u32> {
        let t = parse_hhmm(s)?;
        let minutes = minutes_since_midnight(t);
        let slot = minutes.saturating_sub(self.op_start_minutes) / SLOT_SIZE_MINUTES;
        Some(slot.min(self.num_slots))
    }

    /// As [`Self::time_to_slot`] but rounds up to the next slot boundary,
    /// for computing need lengths from a `start`/`end` pair.
    pub fn time_to_slot_ceil(&self, s: &str) -> Option<u32> {
        let t = parse_hhmm(s)?;
        let minutes = minutes_since_midnight(t);
        let offset = minutes.saturating_sub(self.op_start_minutes);
        let slot = (offset + SLOT_SIZE_MINUTES - 1) / SLOT_SIZE_MINUTES;
        Some(slot.min(self.num_slots))
    }

    pub fn slot_to_time(&self, slot: u32) -> String {
        let minutes = self.op_start_minutes + slot * SLOT_SIZE_MINUTES;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    pub fn minutes_to_slots_ceil(minutes: u32) -> u32 {
        (minutes + SLOT_SIZE_MINUTES - 1) / SLOT_SIZE_MINUTES
    }

    pub fn minutes_to_slots_floor(minutes: u32) -> u32 {
        minutes / SLOT_SIZE_MINUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SolverConfig;
    use std::collections::BTreeMap;

    fn config(start: &str, end: &str) -> SolverConfig {
        SolverConfig {
            operating_hours_start: start.to_string(),
            operating_hours_end: end.to_string(),
            staff_availability_start: None,
            staff_availability_end: None,
            lunch_coverage_start: None,
            lunch_coverage_end: None,
            ideal_lunch_window_start: "11:00".to_string(),
            ideal_lunch_window_end_for_start: "13:00".to_string(),
            slot_size_minutes: 15,
            default_role_rank: BTreeMap::new(),
            worker_count: 4,
        }
    }

    #[test]
    fn num_slots_is_derived_from_operating_hours() {
        let grid = Grid::new(&config("09:00", "17:00")).unwrap();
        assert_eq!(grid.num_slots, 32);
    }

    #[test]
    fn rejects_non_15_minute_slot_size() {
        let mut c = config("09:00", "17:00");
        c.slot_size_minutes = 30;
        assert_eq!(Grid::new(&c), Err(SolveError::InvalidSlotSize(30)));
    }

    #[test]
    fn slot_round_trip() {
        let grid = Grid::new(&config("09:00", "17:00")).unwrap();
        assert_eq!(grid.time_to_slot("09:30"), Some(2));
        assert_eq!(grid.slot_to_time(2), "09:30");
    }

    #[test]
    fn lunch_window_is_clamped_below_num_slots_minus_two() {
        let grid = Grid::new(&config("09:00", "17:00")).unwrap();
        assert!(grid.lunch_window_end_slot <= grid.num_slots - 2);
    }
}
