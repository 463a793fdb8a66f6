//! Property-style invariant checks over small randomly generated requests,
//! capped to a handful of cases per run since each one drives a real
//! external-solver invocation rather than a pure-Rust computation.

use std::collections::BTreeMap;

use aba_sched_core::model::{
    Client, CoverageMode, SolveRequest, SolverConfig, Therapist, Weekday,
};
use aba_sched_core::solve;
use proptest::prelude::*;

const SLOT_SIZE_MINUTES: u32 = 15;

fn config() -> SolverConfig {
    SolverConfig {
        operating_hours_start: "09:00".to_string(),
        operating_hours_end: "17:00".to_string(),
        staff_availability_start: None,
        staff_availability_end: None,
        lunch_coverage_start: None,
        lunch_coverage_end: None,
        ideal_lunch_window_start: "11:00".to_string(),
        ideal_lunch_window_end_for_start: "13:00".to_string(),
        slot_size_minutes: 15,
        default_role_rank: BTreeMap::from([
            ("BT".to_string(), 0),
            ("BCBA".to_string(), 2),
        ]),
        worker_count: 4,
    }
}

fn to_minutes(hhmm: &str) -> u32 {
    let (h, m) = hhmm.split_once(':').unwrap();
    h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
}

fn build_request(num_clients: usize, num_therapists: usize) -> SolveRequest {
    let clients = (0..num_clients)
        .map(|i| Client {
            id: format!("c{i}"),
            team_id: Some("A".to_string()),
            insurance_requirement_ids: vec![],
            allied_health_needs: vec![],
        })
        .collect();

    let therapists = (0..num_therapists)
        .map(|i| Therapist {
            id: format!("t{i}"),
            role: "BT".to_string(),
            team_id: Some("A".to_string()),
            qualification_ids: vec![],
        })
        .collect();

    SolveRequest {
        clients,
        therapists,
        insurance_qualifications: vec![],
        selected_date: "2026-07-27".to_string(),
        day: Weekday::Monday,
        callouts: vec![],
        other_day_minutes_per_client: BTreeMap::new(),
        initial_schedule: None,
        config: config(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Invariants 1/2: no two emitted intervals for the same therapist or
    /// the same client overlap.
    #[test]
    fn no_overlap(num_clients in 1usize..=3, num_therapists in 1usize..=3) {
        let request = build_request(num_clients, num_therapists);
        let response = solve(&request).expect("solve never errors on a well-formed request");
        prop_assume!(response.success);

        for by_entity in [group_by_therapist(&response.schedule), group_by_client(&response.schedule)] {
            for intervals in by_entity.values() {
                for i in 0..intervals.len() {
                    for j in (i + 1)..intervals.len() {
                        let (s0, e0) = intervals[i];
                        let (s1, e1) = intervals[j];
                        prop_assert!(e0 <= s1 || e1 <= s0, "overlapping intervals {:?} vs {:?}", intervals[i], intervals[j]);
                    }
                }
            }
        }
    }

    /// Invariant 9: two ABA sessions for the same (client, therapist) pair
    /// are separated by at least one empty slot, not merely non-overlapping.
    #[test]
    fn session_separation(num_clients in 1usize..=3, num_therapists in 1usize..=3) {
        let request = build_request(num_clients, num_therapists);
        let response = solve(&request).expect("solve never errors on a well-formed request");
        prop_assume!(response.success);

        for intervals in group_by_aba_pair(&response.schedule).values() {
            for i in 0..intervals.len() {
                for j in (i + 1)..intervals.len() {
                    let (s0, e0) = intervals[i];
                    let (s1, e1) = intervals[j];
                    let (earlier_end, later_start) = if s0 <= s1 { (e0, s1) } else { (e1, s0) };
                    prop_assert!(
                        later_start >= earlier_end + SLOT_SIZE_MINUTES,
                        "same-pair sessions {:?} and {:?} leave no gap slot",
                        intervals[i],
                        intervals[j]
                    );
                }
            }
        }
    }

    /// Invariant 3: every ABA session's duration lies within the default
    /// [60, 180]-minute bounds these requests carry (no insurance override).
    #[test]
    fn aba_duration_within_default_bounds(num_clients in 1usize..=3, num_therapists in 1usize..=3) {
        let request = build_request(num_clients, num_therapists);
        let response = solve(&request).expect("solve never errors on a well-formed request");
        prop_assume!(response.success);

        for entry in response.schedule.iter().filter(|e| e.session_type == aba_sched_core::model::SessionType::Aba) {
            let minutes = to_minutes(&entry.end_time) - to_minutes(&entry.start_time);
            prop_assert!((60..=180).contains(&minutes));
        }
    }

    /// Invariant 8: no therapist carries more than four billable sessions
    /// (ABA plus Allied Health) in one day.
    #[test]
    fn max_four_billable_sessions_per_therapist(num_clients in 1usize..=3, num_therapists in 1usize..=3) {
        let request = build_request(num_clients, num_therapists);
        let response = solve(&request).expect("solve never errors on a well-formed request");
        prop_assume!(response.success);

        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for entry in &response.schedule {
            if entry.session_type == aba_sched_core::model::SessionType::IndirectTime {
                continue;
            }
            if let Some(t) = entry.therapist_id.as_deref() {
                *counts.entry(t).or_insert(0) += 1;
            }
        }
        for count in counts.values() {
            prop_assert!(*count <= 4);
        }
    }

    /// `coverageMode` is always reported, and is soft whenever the capacity
    /// precondition cannot hold (more client-slots demanded than therapist
    /// capacity can ever supply).
    #[test]
    fn insufficient_capacity_always_reports_soft(num_clients in 4usize..=6) {
        let request = build_request(num_clients, 1);
        let response = solve(&request).expect("solve never errors on a well-formed request");
        prop_assert_eq!(response.coverage_mode, CoverageMode::Soft);
    }
}

fn group_by_therapist(schedule: &[aba_sched_core::model::ScheduleEntry]) -> BTreeMap<String, Vec<(u32, u32)>> {
    let mut map: BTreeMap<String, Vec<(u32, u32)>> = BTreeMap::new();
    for entry in schedule {
        if let Some(t) = &entry.therapist_id {
            map.entry(t.clone())
                .or_default()
                .push((to_minutes(&entry.start_time), to_minutes(&entry.end_time)));
        }
    }
    for intervals in map.values_mut() {
        intervals.sort_unstable();
    }
    map
}

fn group_by_client(schedule: &[aba_sched_core::model::ScheduleEntry]) -> BTreeMap<String, Vec<(u32, u32)>> {
    let mut map: BTreeMap<String, Vec<(u32, u32)>> = BTreeMap::new();
    for entry in schedule {
        if let Some(c) = &entry.client_id {
            map.entry(c.clone())
                .or_default()
                .push((to_minutes(&entry.start_time), to_minutes(&entry.end_time)));
        }
    }
    for intervals in map.values_mut() {
        intervals.sort_unstable();
    }
    map
}

fn group_by_aba_pair(
    schedule: &[aba_sched_core::model::ScheduleEntry],
) -> BTreeMap<(String, String), Vec<(u32, u32)>> {
    let mut map: BTreeMap<(String, String), Vec<(u32, u32)>> = BTreeMap::new();
    for entry in schedule {
        if entry.session_type != aba_sched_core::model::SessionType::Aba {
            continue;
        }
        if let (Some(c), Some(t)) = (&entry.client_id, &entry.therapist_id) {
            map.entry((c.clone(), t.clone()))
                .or_default()
                .push((to_minutes(&entry.start_time), to_minutes(&entry.end_time)));
        }
    }
    for intervals in map.values_mut() {
        intervals.sort_unstable();
    }
    map
}
