//! Per-client duration and frequency caps.
//!
//! Folds every `InsuranceQualification` a client's `insuranceRequirementIds`
//! points at into one strictest-wins `ClientCaps` record, computed once
//! before variable creation alongside [`crate::eligibility`].

use std::collections::BTreeMap;

use crate::model::{Client, InsuranceQualification};
use crate::time_grid::Grid;

const DEFAULT_MIN_DURATION_MINUTES: u32 = 60;
const DEFAULT_MAX_DURATION_MINUTES: u32 = 180;

/// Derived per-client bounds, in slots (duration) or raw counts (caps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientCaps {
    pub min_dur_slots: u32,
    pub max_dur_slots: u32,
    pub max_therapists_per_day: Option<u32>,
    /// Remaining weekly ABA minutes, converted to slots, after subtracting
    /// what other days already consumed. `None` means unconstrained.
    pub remaining_weekly_slots: Option<u32>,
}

fn qualifications_for<'a>(
    client: &Client,
    quals_by_id: &BTreeMap<&str, &'a InsuranceQualification>,
) -> Vec<&'a InsuranceQualification> {
    client
        .insurance_requirement_ids
        .iter()
        .filter_map(|id| quals_by_id.get(id.as_str()).copied())
        .collect()
}

pub fn compute(
    clients: &[Client],
    qualifications: &[InsuranceQualification],
    other_day_minutes_per_client: &BTreeMap<String, f64>,
    grid: &Grid,
) -> Vec<ClientCaps> {
    let quals_by_id: BTreeMap<&str, &InsuranceQualification> =
        qualifications.iter().map(|q| (q.id.as_str(), q)).collect();

    clients
        .iter()
        .map(|client| {
            let quals = qualifications_for(client, &quals_by_id);

            // Strictest wins: the largest of the per-qualification minimums,
            // the smallest of the per-qualification maximums.
            let min_minutes = quals
                .iter()
                .filter_map(|q| q.min_session_duration_minutes)
                .max()
                .unwrap_or(DEFAULT_MIN_DURATION_MINUTES);
            let max_minutes = quals
                .iter()
                .filter_map(|q| q.max_session_duration_minutes)
                .min()
                .unwrap_or(DEFAULT_MAX_DURATION_MINUTES);
            let max_minutes = max_minutes.max(min_minutes);

            let max_therapists_per_day = quals
                .iter()
                .filter_map(|q| q.max_therapists_per_day)
                .min();

            let remaining_weekly_slots = quals
                .iter()
                .filter_map(|q| q.max_hours_per_week)
                .map(|hours| hours * 60.0)
                .fold(None, |acc: Option<f64>, minutes| {
                    Some(acc.map_or(minutes, |a| a.min(minutes)))
                })
                .map(|weekly_minutes| {
                    let already_used = other_day_minutes_per_client
                        .get(&client.id)
                        .copied()
                        .unwrap_or(0.0);
                    let remaining_minutes = (weekly_minutes - already_used).max(0.0);
                    Grid::minutes_to_slots_floor(remaining_minutes.floor() as u32)
                });

            ClientCaps {
                min_dur_slots: Grid::minutes_to_slots_ceil(min_minutes),
                max_dur_slots: Grid::minutes_to_slots_floor(max_minutes),
                max_therapists_per_day,
                remaining_weekly_slots,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, reqs: &[&str]) -> Client {
        Client {
            id: id.to_string(),
            team_id: None,
            insurance_requirement_ids: reqs.iter().map(|s| s.to_string()).collect(),
            allied_health_needs: vec![],
        }
    }

    fn qual(id: &str) -> InsuranceQualification {
        InsuranceQualification {
            id: id.to_string(),
            max_therapists_per_day: None,
            min_session_duration_minutes: None,
            max_session_duration_minutes: None,
            max_hours_per_week: None,
            role_hierarchy_order: None,
        }
    }

    #[test]
    fn defaults_apply_with_no_matching_qualification() {
        let caps = compute(&[client("c1", &[])], &[], &BTreeMap::new(), &grid());
        assert_eq!(caps[0].min_dur_slots, 4);
        assert_eq!(caps[0].max_dur_slots, 12);
        assert_eq!(caps[0].max_therapists_per_day, None);
        assert_eq!(caps[0].remaining_weekly_slots, None);
    }

    #[test]
    fn strictest_bound_wins_across_multiple_qualifications() {
        let mut q1 = qual("q1");
        q1.min_session_duration_minutes = Some(30);
        q1.max_session_duration_minutes = Some(120);
        let mut q2 = qual("q2");
        q2.min_session_duration_minutes = Some(45);
        q2.max_session_duration_minutes = Some(90);

        let caps = compute(
            &[client("c1", &["q1", "q2"])],
            &[q1, q2],
            &BTreeMap::new(),
            &grid(),
        );

        // max-of-mins = 45 -> ceil to 3 slots; min-of-maxes = 90 -> floor to 6 slots.
        assert_eq!(caps[0].min_dur_slots, 3);
        assert_eq!(caps[0].max_dur_slots, 6);
    }

    #[test]
    fn weekly_cap_subtracts_other_day_minutes() {
        let mut q = qual("q1");
        q.max_hours_per_week = Some(2.0);
        let mut other = BTreeMap::new();
        other.insert("c1".to_string(), 60.0);

        let caps = compute(&[client("c1", &["q1"])], &[q], &other, &grid());

        // 120 total - 60 used = 60 remaining minutes = 4 slots.
        assert_eq!(caps[0].remaining_weekly_slots, Some(4));
    }

    #[test]
    fn weekly_cap_never_goes_negative() {
        let mut q = qual("q1");
        q.max_hours_per_week = Some(1.0);
        let mut other = BTreeMap::new();
        other.insert("c1".to_string(), 9000.0);

        let caps = compute(&[client("c1", &["q1"])], &[q], &other, &grid());

        assert_eq!(caps[0].remaining_weekly_slots, Some(0));
    }

    fn grid() -> Grid {
        use crate::model::SolverConfig;
        Grid::new(&SolverConfig {
            operating_hours_start: "09:00".into(),
            operating_hours_end: "17:00".into(),
            staff_availability_start: None,
            staff_availability_end: None,
            lunch_coverage_start: None,
            lunch_coverage_end: None,
            ideal_lunch_window_start: "11:00".into(),
            ideal_lunch_window_end_for_start: "13:00".into(),
            slot_size_minutes: 15,
            default_role_rank: BTreeMap::new(),
            worker_count: 4,
        })
        .unwrap()
    }
}
