//! Boundary-scenario coverage for the top-level `solve` entry point, run
//! against the real `good_lp` backend: build a small request by hand, call
//! the entry point, assert on the returned solution.

use std::collections::BTreeMap;

use aba_sched_core::model::{
    AlliedHealthKind, AlliedHealthNeed, Client, CoverageMode, InsuranceQualification,
    ScheduleEntry, SessionType, SolveRequest, SolverConfig, Therapist, Weekday,
};
use aba_sched_core::solve;

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

fn client(id: &str, team: Option<&str>) -> Client {
    Client {
        id: id.to_string(),
        team_id: team.map(|s| s.to_string()),
        insurance_requirement_ids: vec![],
        allied_health_needs: vec![],
    }
}

fn therapist(id: &str, role: &str, team: Option<&str>) -> Therapist {
    Therapist {
        id: id.to_string(),
        role: role.to_string(),
        team_id: team.map(|s| s.to_string()),
        qualification_ids: vec![],
    }
}

fn request(
    clients: Vec<Client>,
    therapists: Vec<Therapist>,
    day: Weekday,
) -> SolveRequest {
    SolveRequest {
        clients,
        therapists,
        insurance_qualifications: vec![],
        selected_date: "2026-07-27".to_string(),
        day,
        callouts: vec![],
        other_day_minutes_per_client: BTreeMap::new(),
        initial_schedule: None,
        config: config(),
    }
}

fn aba_entries<'a>(schedule: &'a [ScheduleEntry]) -> impl Iterator<Item = &'a ScheduleEntry> {
    schedule.iter().filter(|e| e.session_type == SessionType::Aba)
}

fn to_minutes(hhmm: &str) -> u32 {
    let (h, m) = hhmm.split_once(':').unwrap();
    h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
}

fn entries_overlap(a: &ScheduleEntry, b: &ScheduleEntry) -> bool {
    to_minutes(&a.start_time) < to_minutes(&b.end_time)
        && to_minutes(&b.start_time) < to_minutes(&a.end_time)
}

/// S1: no clients and no therapists solves trivially.
#[test]
fn empty_request_yields_empty_success() {
    let response = solve(&request(vec![], vec![], Weekday::Monday)).unwrap();
    assert!(response.success);
    assert!(response.schedule.is_empty());
}

/// S2: a weekend request with exactly one Allied Health need and one
/// matching therapist emits exactly that need plus the therapist's lunch,
/// and no ABA entries at all.
#[test]
fn weekend_allied_health_need_is_materialized_with_no_aba() {
    let mut c = client("c1", None);
    c.allied_health_needs.push(AlliedHealthNeed {
        kind: AlliedHealthKind::OccupationalTherapy,
        specific_days: vec![Weekday::Saturday],
        start_time: "10:00".to_string(),
        end_time: "11:00".to_string(),
        preferred_provider_id: None,
    });

    let t = therapist("t-ot", "OT", None);

    let response = solve(&request(vec![c], vec![t], Weekday::Saturday)).unwrap();

    assert!(response.success);
    assert_eq!(response.coverage_mode, CoverageMode::Soft);
    assert!(aba_entries(&response.schedule).next().is_none());

    let ah: Vec<_> = response
        .schedule
        .iter()
        .filter(|e| e.session_type == SessionType::AlliedHealthOt)
        .collect();
    assert_eq!(ah.len(), 1);
    assert_eq!(ah[0].therapist_id.as_deref(), Some("t-ot"));
    assert_eq!(ah[0].start_time, "10:00");
    assert_eq!(ah[0].end_time, "11:00");

    let lunches: Vec<_> = response
        .schedule
        .iter()
        .filter(|e| e.session_type == SessionType::IndirectTime)
        .collect();
    assert_eq!(lunches.len(), 1);
    assert_eq!(lunches[0].therapist_id.as_deref(), Some("t-ot"));
}

/// S3: one client and one same-team BT across a full day produces a
/// feasible, non-overlapping ABA schedule respecting the duration bounds
/// derived from the default 60/180-minute caps.
#[test]
fn full_day_single_pair_respects_duration_and_overlap_bounds() {
    let c = client("c1", Some("A"));
    let t = therapist("t1", "BT", Some("A"));

    let response = solve(&request(vec![c], vec![t], Weekday::Monday)).unwrap();
    assert!(response.success);

    let sessions: Vec<_> = aba_entries(&response.schedule).collect();
    assert!(sessions.len() <= 2);

    for session in &sessions {
        let minutes = to_minutes(&session.end_time) - to_minutes(&session.start_time);
        assert!((60..=180).contains(&minutes), "session duration {minutes} out of [60, 180]");
    }

    for i in 0..sessions.len() {
        for j in (i + 1)..sessions.len() {
            assert!(!entries_overlap(sessions[i], sessions[j]));
        }
    }
}

/// S4: a therapist callout blocks the corresponding window entirely; no
/// emitted interval for that therapist overlaps it.
#[test]
fn therapist_callout_blocks_its_window() {
    use aba_sched_core::model::{Callout, CalloutEntityKind};

    let c = client("c1", Some("A"));
    let t = therapist("t1", "BT", Some("A"));

    let mut req = request(vec![c], vec![t], Weekday::Monday);
    req.callouts.push(Callout {
        entity_kind: CalloutEntityKind::Therapist,
        entity_id: "t1".to_string(),
        start_date: "2026-07-27".to_string(),
        end_date: "2026-07-27".to_string(),
        start_time: "12:00".to_string(),
        end_time: "14:00".to_string(),
        reason: None,
    });

    let response = solve(&req).unwrap();
    assert!(response.success);

    let blocked_start = to_minutes("12:00");
    let blocked_end = to_minutes("14:00");
    for entry in &response.schedule {
        let start = to_minutes(&entry.start_time);
        let end = to_minutes(&entry.end_time);
        assert!(
            end <= blocked_start || start >= blocked_end,
            "entry {entry:?} overlaps the callout window"
        );
    }
}

/// S5: a client capped at one provider never receives ABA sessions from more
/// than one distinct therapist, even with three eligible BTs.
#[test]
fn max_therapists_per_day_caps_distinct_providers() {
    let mut c = client("c1", Some("A"));
    c.insurance_requirement_ids.push("cap-one".to_string());

    let therapists = vec![
        therapist("t1", "BT", Some("A")),
        therapist("t2", "BT", Some("A")),
        therapist("t3", "BT", Some("A")),
    ];

    let mut req = request(vec![c], therapists, Weekday::Monday);
    req.insurance_qualifications.push(InsuranceQualification {
        id: "cap-one".to_string(),
        max_therapists_per_day: Some(1),
        min_session_duration_minutes: None,
        max_session_duration_minutes: None,
        max_hours_per_week: None,
        role_hierarchy_order: None,
    });

    let response = solve(&req).unwrap();
    assert!(response.success);

    let distinct_therapists: std::collections::BTreeSet<_> =
        aba_entries(&response.schedule).filter_map(|e| e.therapist_id.as_deref()).collect();
    assert!(distinct_therapists.len() <= 1);
}

/// S6: demand far exceeding capacity still returns a (soft) schedule rather
/// than failing outright.
#[test]
fn overwhelming_demand_falls_back_to_soft_coverage() {
    let clients: Vec<_> = (0..10).map(|i| client(&format!("c{i}"), Some("A"))).collect();
    let therapists = vec![therapist("t1", "BT", Some("A"))];

    let response = solve(&request(clients, therapists, Weekday::Monday)).unwrap();

    assert!(response.success);
    assert_eq!(response.coverage_mode, CoverageMode::Soft);
}
