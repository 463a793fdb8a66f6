//! Expands raw [`crate::model::Callout`] records into per-entity blocked
//! slot ranges for the selected day. A callout whose dates or times cannot
//! be parsed, or whose range lands entirely outside operating hours, is
//! dropped rather than failing the whole solve: one bad callout must not
//! block the day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::model::{Callout, CalloutEntityKind, SolveRequest};
use crate::time_grid::Grid;

/// Half-open `[start, end)` slot ranges blocking an entity for the day,
/// keyed by entity id.
pub type BlockedSlots = BTreeMap<String, Vec<(u32, u32)>>;

pub struct Blackouts {
    pub clients: BlockedSlots,
    pub therapists: BlockedSlots,
}

impl Blackouts {
    pub fn total_blocked(ranges: &[(u32, u32)]) -> u32 {
        // Ranges may overlap; merge before summing so double-booked callouts
        // don't inflate the pruning threshold.
        let mut sorted = ranges.to_vec();
        sorted.sort_unstable();
        let mut total = 0u32;
        let mut cursor: Option<(u32, u32)> = None;
        for (start, end) in sorted {
            match cursor {
                None => cursor = Some((start, end)),
                Some((cs, ce)) if start <= ce => {
                    cursor = Some((cs, ce.max(end)));
                }
                Some((cs, ce)) => {
                    total += ce - cs;
                    cursor = Some((start, end));
                }
            }
        }
        if let Some((cs, ce)) = cursor {
            total += ce - cs;
        }
        total
    }
}

pub fn expand_callouts(request: &SolveRequest, grid: &Grid) -> Blackouts {
    let mut clients: BlockedSlots = BTreeMap::new();
    let mut therapists: BlockedSlots = BTreeMap::new();

    let selected_date = match NaiveDate::parse_from_str(&request.selected_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(e) => {
            warn!(date = %request.selected_date, error = %e, "malformed selectedDate; treating as no callouts apply");
            return Blackouts { clients, therapists };
        }
    };

    for callout in &request.callouts {
        match expand_one(callout, selected_date, grid) {
            Some(range) => {
                let table = match callout.entity_kind {
                    CalloutEntityKind::Client => &mut clients,
                    CalloutEntityKind::Therapist => &mut therapists,
                };
                table.entry(callout.entity_id.clone()).or_default().push(range);
            }
            None => {
                warn!(
                    entity_id = %callout.entity_id,
                    reason = "unparseable or out-of-range callout",
                    "dropping malformed callout"
                );
            }
        }
    }

    Blackouts { clients, therapists }
}

fn expand_one(callout: &Callout, selected_date: NaiveDate, grid: &Grid) -> Option<(u32, u32)> {
    let start_date = NaiveDate::parse_from_str(&callout.start_date, "%Y-%m-%d").ok()?;
    let end_date = NaiveDate::parse_from_str(&callout.end_date, "%Y-%m-%d").ok()?;

    if selected_date < start_date || selected_date > end_date {
        return None;
    }

    let start_slot = grid.time_to_slot(&callout.start_time)?;
    let end_slot = grid.time_to_slot_ceil(&callout.end_time)?;

    if end_slot <= start_slot {
        return None;
    }

    Some((start_slot.min(grid.num_slots), end_slot.min(grid.num_slots)))
}
