//! Solution extractor.
//!
//! Decodes a solved configuration's variable assignments into the
//! `ScheduleEntry` list the caller sees, attaching status metadata: walk
//! every declared variable family once, filter on the boolean that gates
//! it, and materialize one output record per active interval.

use std::time::Duration;

use aba_sched_ilp::solvers::{SolveOutcome, SolveStatus};
use aba_sched_ilp::{DefaultRepr, FeasableConfig};

use crate::id::generate_entry_id;
use crate::model::{CoverageMode, ScheduleEntry, SessionType, SolveRequest, SolveResponse};
use crate::time_grid::{Grid, LUNCH_DURATION_SLOTS};
use crate::vars::{Tag, Var, VarFactory};

type Outcome<'a> = SolveOutcome<'a, Var, Tag, DefaultRepr<Var>>;

/// A variable's value is read as "on" once it clears the midpoint between 0
/// and 1; MILP backends return exact 0/1 for binaries barring floating-point
/// noise, so this is a tolerant round rather than a meaningful threshold.
const ON_THRESHOLD: f64 = 0.5;

fn round_slot(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Builds the final [`SolveResponse`] for one solve attempt: on Optimal or
/// Feasible, decodes every active interval into a [`ScheduleEntry`]; on
/// Infeasible or Unknown, returns an empty schedule with a status message
/// naming the terminal solver state.
pub fn build_response(
    request: &SolveRequest,
    grid: &Grid,
    vf: &VarFactory,
    outcome: &Outcome<'_>,
    coverage_mode: CoverageMode,
    elapsed: Duration,
) -> SolveResponse {
    let solve_time_seconds = elapsed.as_secs_f64();

    match (&outcome.status, &outcome.config) {
        (SolveStatus::Optimal, Some(config)) => SolveResponse {
            schedule: decode(request, grid, vf, config),
            success: true,
            status_message: "Optimal!".to_string(),
            solve_time_seconds,
            objective_value: outcome.objective_value.map(round_objective),
            coverage_mode,
        },
        (SolveStatus::Feasible, Some(config)) => SolveResponse {
            schedule: decode(request, grid, vf, config),
            success: true,
            status_message: "Feasible (time limit reached).".to_string(),
            solve_time_seconds,
            objective_value: outcome.objective_value.map(round_objective),
            coverage_mode,
        },
        (SolveStatus::Infeasible, _) => SolveResponse {
            schedule: Vec::new(),
            success: false,
            status_message: "Infeasible: no schedule satisfies every constraint.".to_string(),
            solve_time_seconds,
            objective_value: None,
            coverage_mode,
        },
        (SolveStatus::Unknown, _) | (_, None) => SolveResponse {
            schedule: Vec::new(),
            success: false,
            status_message: "Unknown: the solver backend failed to produce a result."
                .to_string(),
            solve_time_seconds,
            objective_value: None,
            coverage_mode,
        },
    }
}

fn round_objective(value: f64) -> i64 {
    value.round() as i64
}

fn decode(
    request: &SolveRequest,
    grid: &Grid,
    vf: &VarFactory,
    config: &FeasableConfig<'_, Var, Tag, DefaultRepr<Var>>,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();

    for session in &vf.aba_sessions {
        if config.get(&Var::AbaActive(session.id)) <= ON_THRESHOLD {
            continue;
        }
        let start = round_slot(config.get(&Var::AbaStart(session.id)));
        let duration = round_slot(config.get(&Var::AbaDuration(session.id)));

        entries.push(ScheduleEntry {
            id: generate_entry_id(),
            client_id: Some(request.clients[session.client_idx].id.clone()),
            therapist_id: Some(request.therapists[session.therapist_idx].id.clone()),
            day: request.day,
            start_time: grid.slot_to_time(start),
            end_time: grid.slot_to_time(start + duration),
            session_type: SessionType::Aba,
        });
    }

    for (need_idx, need) in vf.ah_needs.iter().enumerate() {
        let chosen_therapist_idx = vf.ah_by_need[need_idx].iter().find_map(|&candidate_id| {
            if config.get(&Var::AhChosen(candidate_id)) > ON_THRESHOLD {
                Some(vf.ah_candidates[candidate_id as usize].therapist_idx)
            } else {
                None
            }
        });

        entries.push(ScheduleEntry {
            id: generate_entry_id(),
            client_id: Some(request.clients[need.client_idx].id.clone()),
            therapist_id: chosen_therapist_idx.map(|idx| request.therapists[idx].id.clone()),
            day: request.day,
            start_time: grid.slot_to_time(need.start_slot),
            end_time: grid.slot_to_time(need.end_slot),
            session_type: need.kind.into(),
        });
    }

    for (therapist_idx, &lunch_id) in vf.lunch_by_therapist.iter().enumerate() {
        if config.get(&Var::LunchActive(lunch_id)) <= ON_THRESHOLD {
            continue;
        }
        let start = round_slot(config.get(&Var::LunchStart(lunch_id)));

        entries.push(ScheduleEntry {
            id: generate_entry_id(),
            client_id: None,
            therapist_id: Some(request.therapists[therapist_idx].id.clone()),
            day: request.day,
            start_time: grid.slot_to_time(start),
            end_time: grid.slot_to_time(start + LUNCH_DURATION_SLOTS),
            session_type: SessionType::IndirectTime,
        });
    }

    entries
}
