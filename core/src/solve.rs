//! Solve orchestrator.
//!
//! Wires the grid, eligibility, variable, constraint and objective
//! components together: empty/weekend special cases, the two-phase
//! hard→soft coverage fallback gated on the capacity precondition, and a
//! warm-start bias folded into the objective.

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use aba_sched_ilp::solvers::good_lp::GoodSolver;
use aba_sched_ilp::{LinExpr, Objective, ObjectiveSense, ProblemBuilder};
use tracing::{info, info_span};

use crate::caps;
use crate::callouts;
use crate::constraints;
use crate::eligibility;
use crate::error::SolveError;
use crate::extract;
use crate::model::{CoverageMode, SessionType, SolveRequest, SolveResponse};
use crate::objective::{self, CoveragePhase};
use crate::time_grid::Grid;
use crate::vars::{self, Var, VarFactory};

/// Wall-clock budget per solve attempt (hard phase and each retry
/// independently), per §4.6.
const WALL_CLOCK_CAP: Duration = Duration::from_secs(45);

/// Nudge applied to every un-hinted ABA `active` variable, biasing the
/// relaxation's first incumbent toward activating sessions. The closest
/// this backend gets to CP-SAT's `CHOOSE_FIRST, SELECT_MAX_VALUE` decision
/// strategy: `good_lp`/`lp_solvers` exposes no branching-hint API to inject
/// directly, so the bias is folded into the objective instead.
const DEFAULT_ACTIVATION_PULL: f64 = 0.01;

/// Nudge applied to a session matched by `initialSchedule`, and to the
/// sibling sessions of a (client, therapist) pair that received no hint
/// (pulled the other way, toward 0) — the "complete warm start" rule.
const HINT_PULL: f64 = 0.5;

/// Runs one full solve for `request`, from grid construction through
/// extraction.
pub fn solve(request: &SolveRequest) -> Result<SolveResponse, SolveError> {
    let start = Instant::now();
    let _span = info_span!(
        "solve",
        clients = request.clients.len(),
        therapists = request.therapists.len(),
        day = %request.day,
    )
    .entered();

    if request.clients.is_empty() || request.therapists.is_empty() {
        info!("no clients or therapists; returning trivial empty schedule");
        return Ok(SolveResponse {
            schedule: Vec::new(),
            success: true,
            status_message: "No clients or therapists to schedule.".to_string(),
            solve_time_seconds: start.elapsed().as_secs_f64(),
            objective_value: None,
            coverage_mode: CoverageMode::Hard,
        });
    }

    let grid = Grid::new(&request.config)?;
    let blackouts = callouts::expand_callouts(request, &grid);
    let caps = caps::compute(
        &request.clients,
        &request.insurance_qualifications,
        &request.other_day_minutes_per_client,
        &grid,
    );
    let eligibility = eligibility::compute(
        &request.config,
        &request.clients,
        &request.therapists,
        &request.insurance_qualifications,
        &blackouts,
        &grid,
    );

    let is_weekend = request.day.is_weekend();
    let solver = GoodSolver::new();

    if is_weekend {
        let (vf, builder) = assemble(request, &grid, &eligibility, &caps, &blackouts, None);
        let problem = builder
            .build()
            .map_err(|e| SolveError::ModelBuild(e.to_string()))?;
        let outcome = solver.solve_with_outcome(&problem, Some(WALL_CLOCK_CAP));
        return Ok(extract::build_response(
            request,
            &grid,
            &vf,
            &outcome,
            CoverageMode::Soft,
            start.elapsed(),
        ));
    }

    let num_clients = request.clients.len() as u32;
    let num_therapists = request.therapists.len() as u32;
    let capacity_ok =
        num_clients * grid.num_slots <= num_therapists * grid.num_slots.saturating_sub(2);

    let phases: &[(CoveragePhase, CoverageMode)] = if capacity_ok {
        &[
            (CoveragePhase::Hard, CoverageMode::Hard),
            (CoveragePhase::Soft, CoverageMode::Soft),
        ]
    } else {
        &[(CoveragePhase::Soft, CoverageMode::Soft)]
    };

    let mut last = None;
    for &(phase, mode) in phases {
        let (vf, builder) = assemble(request, &grid, &eligibility, &caps, &blackouts, Some(phase));
        let problem = builder
            .build()
            .map_err(|e| SolveError::ModelBuild(e.to_string()))?;
        let outcome = solver.solve_with_outcome(&problem, Some(WALL_CLOCK_CAP));

        let solved = matches!(
            outcome.status,
            aba_sched_ilp::solvers::SolveStatus::Optimal | aba_sched_ilp::solvers::SolveStatus::Feasible
        );
        info!(phase = ?phase, status = ?outcome.status, "coverage phase attempt finished");

        let is_last_phase = std::ptr::eq(&(phase, mode), phases.last().unwrap());
        last = Some((outcome, vf, mode));
        if solved || is_last_phase {
            break;
        }
    }

    let (outcome, vf, mode) = last.expect("phases is never empty");
    Ok(extract::build_response(
        request,
        &grid,
        &vf,
        &outcome,
        mode,
        start.elapsed(),
    ))
}

/// Builds variables, constraints and the (possibly warm-start-biased)
/// objective for one attempt, returning the arena and the ready-to-build
/// `ProblemBuilder`.
fn assemble(
    request: &SolveRequest,
    grid: &Grid,
    eligibility: &eligibility::Eligibility,
    caps: &[caps::ClientCaps],
    blackouts: &callouts::Blackouts,
    phase: Option<CoveragePhase>,
) -> (
    VarFactory,
    ProblemBuilder<Var, crate::vars::Tag, aba_sched_ilp::DefaultRepr<Var>>,
) {
    let (vf, builder) = vars::build(request, grid, eligibility, caps, ProblemBuilder::new());
    let builder = constraints::build(builder, &vf, request, grid, caps, blackouts);

    let avail = objective::compute_avail(request, grid, blackouts, &vf);
    let (builder, obj) = objective::build(
        builder, &vf, request, grid, caps, blackouts, eligibility, &avail, phase,
    );

    let bias = warm_start_bias(&vf, request)
        + lunch_warm_start_bias(&vf, request, grid)
        + preferred_provider_bias(&vf);
    let biased = Objective::new(obj.get_function().clone() + bias, ObjectiveSense::Minimize);

    (vf, builder.set_objective(biased))
}

/// Nudges an Allied Health need's `chosen` toward its materialized
/// `preferredProviderId` candidate, when one was named.
fn preferred_provider_bias(vf: &VarFactory) -> LinExpr<Var> {
    let mut bias = LinExpr::constant(0.0);
    for need in &vf.ah_needs {
        if let Some(candidate_id) = need.preferred_candidate {
            bias = bias - HINT_PULL * LinExpr::var(Var::AhChosen(candidate_id));
        }
    }
    bias
}

/// Warm-start bias over ABA `active` variables: sessions matched against
/// `initialSchedule` are pulled toward 1, the remaining un-hinted sessions
/// of an otherwise-hinted pair are pulled toward 0 (the "complete warm
/// start" rule), and every other session defaults to a weak pull toward 1
/// (the decision strategy's "try activating first").
fn warm_start_bias(vf: &VarFactory, request: &SolveRequest) -> LinExpr<Var> {
    let mut hinted_on: BTreeSet<u32> = BTreeSet::new();
    let mut hinted_pairs: BTreeSet<(usize, usize)> = BTreeSet::new();

    if let Some(initial) = &request.initial_schedule {
        let mut next_k: BTreeMap<(usize, usize), u32> = BTreeMap::new();
        for entry in initial {
            if entry.session_type != SessionType::Aba {
                continue;
            }
            let (Some(client_id), Some(therapist_id)) = (&entry.client_id, &entry.therapist_id) else {
                continue;
            };
            let Some(client_idx) = request.clients.iter().position(|c| &c.id == client_id) else {
                continue;
            };
            let Some(therapist_idx) = request.therapists.iter().position(|t| &t.id == therapist_id) else {
                continue;
            };
            let Some(&(first_id, count)) = vf.aba_by_pair.get(&(client_idx, therapist_idx)) else {
                continue;
            };
            let k = next_k.entry((client_idx, therapist_idx)).or_insert(0);
            if *k >= count {
                continue;
            }
            hinted_on.insert(first_id + *k);
            hinted_pairs.insert((client_idx, therapist_idx));
            *k += 1;
        }
    }

    let mut bias = LinExpr::constant(0.0);
    for session in &vf.aba_sessions {
        let active = LinExpr::var(Var::AbaActive(session.id));
        if hinted_on.contains(&session.id) {
            bias = bias - HINT_PULL * active;
        } else if hinted_pairs.contains(&(session.client_idx, session.therapist_idx)) {
            bias = bias + HINT_PULL * active;
        } else {
            bias = bias - DEFAULT_ACTIVATION_PULL * active;
        }
    }
    bias
}

/// Warm-start bias over `LunchActive`: a therapist whose prior schedule had
/// a lunch inside today's window is pulled toward keeping it.
fn lunch_warm_start_bias(vf: &VarFactory, request: &SolveRequest, grid: &Grid) -> LinExpr<Var> {
    let mut bias = LinExpr::constant(0.0);

    let Some(initial) = &request.initial_schedule else {
        return bias;
    };

    for entry in initial {
        if entry.session_type != SessionType::IndirectTime {
            continue;
        }
        let Some(therapist_id) = &entry.therapist_id else {
            continue;
        };
        let Some(therapist_idx) = request.therapists.iter().position(|t| &t.id == therapist_id) else {
            continue;
        };
        let Some(start_slot) = grid.time_to_slot(&entry.start_time) else {
            continue;
        };
        if start_slot < grid.lunch_window_start_slot || start_slot > grid.lunch_window_end_slot {
            continue;
        }
        let lunch_id = vf.lunch_by_therapist[therapist_idx];
        bias = bias - HINT_PULL * LinExpr::var(Var::LunchActive(lunch_id));
    }

    bias
}
