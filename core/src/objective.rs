//! Objective builder.
//!
//! Assembles the weighted minimization: coverage gap, workload-balance
//! excess, team-tier preference, and session-count penalties. Also owns the
//! hard/soft coverage constraint each phase adds, since the two are only
//! meaningful together (the gap term is identically zero under the hard
//! phase's equality constraint).

use std::collections::BTreeMap;

use aba_sched_ilp::{LinExpr, Objective, ObjectiveSense, ProblemBuilder, Variable};

use crate::caps::ClientCaps;
use crate::callouts::Blackouts;
use crate::eligibility::Eligibility;
use crate::model::SolveRequest;
use crate::time_grid::Grid;
use crate::vars::{tag, Tag, Var, VarFactory};

type Bldr = ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>;

const COVERAGE_GAP_WEIGHT: f64 = 100_000.0;
const BALANCE_EXCESS_WEIGHT: f64 = 10.0;
const NOTE_COUNT_WEIGHT: f64 = 500.0;

fn team_tier_weight(tier: u8) -> f64 {
    match tier {
        0 => 0.0,
        1 => 500.0,
        2 => 800.0,
        _ => 1500.0,
    }
}

/// Which coverage regime the objective (and the constraint it adds) is being
/// built for; see §4.6's two-phase fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoveragePhase {
    Hard,
    Soft,
}

/// Per-client available ABA slots, `num_slots - blocked - ah_length`,
/// clipped to `>= 0`. Computed once and shared by both coverage phases.
pub fn compute_avail(
    request: &SolveRequest,
    grid: &Grid,
    blackouts: &Blackouts,
    vf: &VarFactory,
) -> Vec<u32> {
    let mut ah_length_by_client = vec![0u32; request.clients.len()];
    for need in &vf.ah_needs {
        ah_length_by_client[need.client_idx] += need.end_slot - need.start_slot;
    }

    request
        .clients
        .iter()
        .enumerate()
        .map(|(client_idx, client)| {
            let blocked = blackouts
                .clients
                .get(&client.id)
                .map(|ranges| Blackouts::total_blocked(ranges))
                .unwrap_or(0);
            grid.num_slots
                .saturating_sub(blocked)
                .saturating_sub(ah_length_by_client[client_idx])
        })
        .collect()
}

/// Total ABA duration committed to client `client_idx`, as a linear
/// expression over that client's session `duration` variables.
fn client_duration_expr(vf: &VarFactory, client_idx: usize) -> LinExpr<Var> {
    vf.aba_sessions
        .iter()
        .filter(|s| s.client_idx == client_idx)
        .fold(LinExpr::constant(0.0), |acc, s| {
            acc + LinExpr::var(Var::AbaDuration(s.id))
        })
}

/// Total billable slots therapist `therapist_idx` is committed to: ABA
/// session duration plus chosen Allied Health need length.
fn therapist_billable_expr(vf: &VarFactory, therapist_idx: usize) -> LinExpr<Var> {
    let mut expr = vf
        .aba_sessions
        .iter()
        .filter(|s| s.therapist_idx == therapist_idx)
        .fold(LinExpr::constant(0.0), |acc, s| {
            acc + LinExpr::var(Var::AbaDuration(s.id))
        });

    for candidate in vf
        .ah_candidates
        .iter()
        .filter(|c| c.therapist_idx == therapist_idx)
    {
        let need = &vf.ah_needs[candidate.need_instance as usize];
        let length = (need.end_slot - need.start_slot) as f64;
        expr = expr + length * LinExpr::var(Var::AhChosen(candidate.id));
    }

    expr
}

/// Adds the coverage constraint for `phase` and returns the (always linear,
/// identically zero under the hard phase) coverage-gap term.
fn coverage_term(
    mut builder: Bldr,
    vf: &VarFactory,
    request: &SolveRequest,
    grid: &Grid,
    caps: &[ClientCaps],
    avail: &[u32],
    phase: CoveragePhase,
) -> (Bldr, LinExpr<Var>) {
    let total_therapist_capacity = (request.therapists.len() as u32 * grid.num_slots.saturating_sub(2)) as f64;
    let total_client_available: f64 = avail.iter().map(|&a| a as f64).sum();
    let capacity_ratio = if total_client_available > 0.0 {
        (total_therapist_capacity / total_client_available).min(1.0)
    } else {
        1.0
    };

    let mut gap = LinExpr::constant(0.0);

    for (client_idx, &avail_c) in avail.iter().enumerate() {
        if avail_c == 0 {
            continue;
        }
        let duration = client_duration_expr(vf, client_idx);

        match phase {
            CoveragePhase::Hard => {
                builder = builder.add_constraint(
                    duration.eq(&LinExpr::constant(avail_c as f64)),
                    tag(format!("client[{client_idx}] hard coverage = avail")),
                );
            }
            CoveragePhase::Soft => {
                let ratio_bound = ((avail_c as f64) * capacity_ratio * 0.85).floor() as u32;
                let mut min_cov = caps[client_idx].min_dur_slots.max(ratio_bound).min(avail_c);
                if let Some(remaining) = caps[client_idx].remaining_weekly_slots {
                    min_cov = min_cov.min(remaining);
                }

                builder = builder.add_constraint(
                    duration.geq(&LinExpr::constant(min_cov as f64)),
                    tag(format!("client[{client_idx}] soft coverage >= min_cov")),
                );

                gap = gap + (LinExpr::constant(avail_c as f64) - duration);
            }
        }
    }

    (builder, COVERAGE_GAP_WEIGHT * gap)
}

/// Adds one `Excess` variable and its two defining constraints per ordered
/// therapist pair with `rank(i) > rank(j)`, returning the weighted sum.
fn balance_excess_term(mut builder: Bldr, vf: &VarFactory, request: &SolveRequest) -> (Bldr, LinExpr<Var>) {
    let ranks: Vec<i32> = request
        .therapists
        .iter()
        .map(|t| crate::eligibility::role_rank(&request.config, &t.role))
        .collect();

    let billable: Vec<LinExpr<Var>> = (0..request.therapists.len())
        .map(|idx| therapist_billable_expr(vf, idx))
        .collect();

    let mut total = LinExpr::constant(0.0);
    let mut excess_id = 0u32;

    for i in 0..request.therapists.len() {
        for j in 0..request.therapists.len() {
            if ranks[i] <= ranks[j] {
                continue;
            }
            let id = excess_id;
            excess_id += 1;
            builder = builder.set_variable(
                Var::Excess(id),
                Variable::continuous().min(0.0).max(
                    // Billable time can never exceed a full day, so this is a
                    // safe, finite big-M bound for the minimization to push
                    // the variable down from.
                    3600.0,
                ),
            );
            let excess = LinExpr::var(Var::Excess(id));

            builder = builder.add_constraint(
                excess.geq(&(billable[i].clone() - billable[j].clone())),
                tag(format!("excess[{id}] >= billable[{i}] - billable[{j}]")),
            );

            total = total + excess;
        }
    }

    (builder, BALANCE_EXCESS_WEIGHT * total)
}

/// Per-(client, therapist) team-tier weight times ABA duration, summed over
/// every session.
fn team_tier_term(vf: &VarFactory, eligibility: &Eligibility) -> LinExpr<Var> {
    let mut term = LinExpr::constant(0.0);

    for session in &vf.aba_sessions {
        let Some(&local_idx) = eligibility.local_index_of[session.client_idx].get(&session.therapist_idx) else {
            continue;
        };
        let tier = eligibility.eligible[session.client_idx][local_idx].tier;
        let weight = team_tier_weight(tier);
        if weight != 0.0 {
            term = term + weight * LinExpr::var(Var::AbaDuration(session.id));
        }
    }

    term
}

/// Discourages fragmenting coverage into many short sessions.
fn note_count_term(vf: &VarFactory) -> LinExpr<Var> {
    vf.aba_sessions.iter().fold(LinExpr::constant(0.0), |acc, s| {
        acc + NOTE_COUNT_WEIGHT * LinExpr::var(Var::AbaActive(s.id))
    })
}

/// Builds the full weighted minimization objective. `phase` selects which
/// coverage constraint/penalty to add; `None` skips the coverage term
/// entirely (weekend solves, where no ABA variables exist to cover).
pub fn build(
    builder: Bldr,
    vf: &VarFactory,
    request: &SolveRequest,
    grid: &Grid,
    caps: &[ClientCaps],
    blackouts: &Blackouts,
    eligibility: &Eligibility,
    avail: &[u32],
    phase: Option<CoveragePhase>,
) -> (Bldr, Objective<Var>) {
    let (builder, coverage) = match phase {
        Some(phase) => coverage_term(builder, vf, request, grid, caps, avail, phase),
        None => (builder, LinExpr::constant(0.0)),
    };
    let (builder, balance) = balance_excess_term(builder, vf, request);
    let tier = team_tier_term(vf, eligibility);
    let notes = note_count_term(vf);

    let total = coverage + balance + tier + notes;

    (builder, Objective::new(total, ObjectiveSense::Minimize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    #[test]
    fn team_tier_weights_match_preference_table() {
        assert_eq!(team_tier_weight(0), 0.0);
        assert_eq!(team_tier_weight(1), 500.0);
        assert_eq!(team_tier_weight(2), 800.0);
        assert_eq!(team_tier_weight(3), 1500.0);
    }

    #[test]
    fn avail_excludes_blocked_and_allied_health_slots() {
        use crate::model::{Client, SolverConfig};

        let cfg = SolverConfig {
            operating_hours_start: "09:00".into(),
            operating_hours_end: "17:00".into(),
            staff_availability_start: None,
            staff_availability_end: None,
            lunch_coverage_start: None,
            lunch_coverage_end: None,
            ideal_lunch_window_start: "11:00".into(),
            ideal_lunch_window_end_for_start: "13:00".into(),
            slot_size_minutes: 15,
            default_role_rank: Map::new(),
            worker_count: 4,
        };
        let grid = Grid::new(&cfg).unwrap();

        let request = SolveRequest {
            clients: vec![Client {
                id: "c1".into(),
                team_id: None,
                insurance_requirement_ids: vec![],
                allied_health_needs: vec![],
            }],
            therapists: vec![],
            insurance_qualifications: vec![],
            selected_date: "2026-07-27".into(),
            day: crate::model::Weekday::Monday,
            callouts: vec![],
            other_day_minutes_per_client: Map::new(),
            initial_schedule: None,
            config: cfg,
        };

        let mut blocked = Map::new();
        blocked.insert("c1".to_string(), vec![(0u32, 4u32)]);
        let blackouts = Blackouts {
            clients: blocked,
            therapists: Map::new(),
        };

        let vf = crate::vars::VarFactory {
            aba_sessions: vec![],
            aba_by_pair: Map::new(),
            ah_needs: vec![],
            ah_candidates: vec![],
            ah_by_need: vec![],
            lunch_by_therapist: vec![],
            ah_offset: 0,
            lunch_offset: 0,
            num_intervals: 0,
        };

        let avail = compute_avail(&request, &grid, &blackouts, &vf);
        // 32 total slots - 4 blocked - 0 AH = 28.
        assert_eq!(avail[0], 28);
    }
}
