//! Constraint assembler.
//!
//! Adds no-overlap per therapist and per client, per-client max-providers,
//! per-client remaining weekly minutes, symmetry-breaking and ordering for
//! session pairs, lunch staggering, lunch-iff-billable linkage, and max
//! notes per therapist. The backend has no native interval/no-overlap
//! global constraint, so overlap exclusion is encoded as the standard
//! big-M disjunction instead.

use std::collections::BTreeSet;

use aba_sched_ilp::{LinExpr, ProblemBuilder, Variable};

use crate::caps::ClientCaps;
use crate::callouts::Blackouts;
use crate::model::SolveRequest;
use crate::time_grid::{Grid, LUNCH_DURATION_SLOTS, MAX_NOTES_PER_THERAPIST};
use crate::vars::{tag, Tag, Var, VarFactory};

type Bldr = ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>;

/// Resolves `(active, start, end)` linear expressions for a global id, which
/// may name either a real decision-variable interval or a fixed callout
/// blackout range appended after `vf.num_intervals`.
fn terms_for(vf: &VarFactory, blackout_ranges: &[(f64, f64)], id: u32) -> (LinExpr<Var>, LinExpr<Var>, LinExpr<Var>) {
    if id < vf.num_intervals {
        vf.interval_terms(id)
    } else {
        let (start, end) = blackout_ranges[(id - vf.num_intervals) as usize];
        (LinExpr::constant(1.0), LinExpr::constant(start), LinExpr::constant(end))
    }
}

/// Adds the big-M disjunctive pair forbidding intervals `a` and `b` from
/// overlapping while both are active, deduplicating against `seen` since the
/// same unordered pair can legitimately arise from both a client pool and a
/// therapist pool.
fn no_overlap_pair(
    mut builder: Bldr,
    seen: &mut BTreeSet<(u32, u32)>,
    vf: &VarFactory,
    blackout_ranges: &[(f64, f64)],
    m: f64,
    a: u32,
    b: u32,
) -> Bldr {
    if a == b {
        return builder;
    }
    let key = if a < b { (a, b) } else { (b, a) };
    if !seen.insert(key) {
        return builder;
    }

    let (active_a, start_a, end_a) = terms_for(vf, blackout_ranges, key.0);
    let (active_b, start_b, end_b) = terms_for(vf, blackout_ranges, key.1);

    builder = builder.set_variable(Var::Before(key.0, key.1), Variable::binary());
    let before = LinExpr::var(Var::Before(key.0, key.1));

    // start_a + duration_a <= start_b + M*(1 - before), relaxed further by
    // M*(2 - active_a - active_b) so the pair is unconstrained unless both
    // intervals are actually in use.
    let rhs1 = start_b.clone() + LinExpr::constant(3.0 * m)
        - m * before.clone()
        - m * active_a.clone()
        - m * active_b.clone();
    builder = builder.add_constraint(
        end_a.leq(&rhs1),
        tag(format!("no_overlap[{},{}] a-before-b", key.0, key.1)),
    );

    let rhs2 = start_a + m * before + LinExpr::constant(2.0 * m) - m * active_a - m * active_b;
    builder = builder.add_constraint(
        end_b.leq(&rhs2),
        tag(format!("no_overlap[{},{}] b-before-a", key.0, key.1)),
    );

    builder
}

pub fn build(
    mut builder: Bldr,
    vf: &VarFactory,
    request: &SolveRequest,
    grid: &Grid,
    caps: &[ClientCaps],
    blackouts: &Blackouts,
) -> Bldr {
    let m = grid.num_slots as f64;

    let mut blackout_ranges: Vec<(f64, f64)> = Vec::new();
    let mut therapist_blackout_globals: Vec<Vec<u32>> = vec![Vec::new(); request.therapists.len()];
    for (t_idx, t) in request.therapists.iter().enumerate() {
        if let Some(ranges) = blackouts.therapists.get(&t.id) {
            for &(s, e) in ranges {
                let pseudo_id = vf.num_intervals + blackout_ranges.len() as u32;
                blackout_ranges.push((s as f64, e as f64));
                therapist_blackout_globals[t_idx].push(pseudo_id);
            }
        }
    }
    let mut client_blackout_globals: Vec<Vec<u32>> = vec![Vec::new(); request.clients.len()];
    for (c_idx, c) in request.clients.iter().enumerate() {
        if let Some(ranges) = blackouts.clients.get(&c.id) {
            for &(s, e) in ranges {
                let pseudo_id = vf.num_intervals + blackout_ranges.len() as u32;
                blackout_ranges.push((s as f64, e as f64));
                client_blackout_globals[c_idx].push(pseudo_id);
            }
        }
    }

    let mut seen: BTreeSet<(u32, u32)> = BTreeSet::new();

    // No-overlap per therapist: every ABA interval of that therapist, every
    // AH candidate interval where the therapist is a candidate, its lunch
    // interval, and its callout blackout ranges.
    let mut per_therapist_pool: Vec<Vec<u32>> = vec![Vec::new(); request.therapists.len()];
    for session in &vf.aba_sessions {
        per_therapist_pool[session.therapist_idx].push(vf.global_of_aba(session.id));
    }
    for candidate in &vf.ah_candidates {
        per_therapist_pool[candidate.therapist_idx].push(vf.global_of_ah(candidate.id));
    }
    for (t_idx, &lunch_id) in vf.lunch_by_therapist.iter().enumerate() {
        per_therapist_pool[t_idx].push(vf.global_of_lunch(lunch_id));
    }
    for (t_idx, globals) in therapist_blackout_globals.iter().enumerate() {
        per_therapist_pool[t_idx].extend(globals);
    }

    for pool in &per_therapist_pool {
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                builder = no_overlap_pair(builder, &mut seen, vf, &blackout_ranges, m, pool[i], pool[j]);
            }
        }
    }

    // No-overlap per client: every ABA interval for that client, every AH
    // candidate interval for that client's needs, and callout blackout
    // ranges.
    let mut per_client_pool: Vec<Vec<u32>> = vec![Vec::new(); request.clients.len()];
    for session in &vf.aba_sessions {
        per_client_pool[session.client_idx].push(vf.global_of_aba(session.id));
    }
    for candidate in &vf.ah_candidates {
        per_client_pool[candidate.client_idx].push(vf.global_of_ah(candidate.id));
    }
    for (c_idx, globals) in client_blackout_globals.iter().enumerate() {
        per_client_pool[c_idx].extend(globals);
    }

    for pool in &per_client_pool {
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                builder = no_overlap_pair(builder, &mut seen, vf, &blackout_ranges, m, pool[i], pool[j]);
            }
        }
    }

    // Symmetry breaking and session ordering: for each (client, therapist)
    // pair, session 1 may only be used if session 0 is, and when both are
    // active, session 1 must start at least one slot after session 0 ends.
    for (&(_client_idx, _therapist_idx), &(first_id, _count)) in &vf.aba_by_pair {
        let id0 = first_id;
        let id1 = first_id + 1;

        builder = builder.add_constraint(
            LinExpr::var(Var::AbaActive(id1)).leq(&LinExpr::var(Var::AbaActive(id0))),
            tag(format!("aba[{id1}] requires aba[{id0}] (fill lower index first)")),
        );

        // end0 + 1 <= start1 <= M*(1 - active1): at least one empty slot
        // between the two sessions, only binding once session 1 is active.
        let rhs = LinExpr::var(Var::AbaStart(id1)) + LinExpr::constant(m + 1.0)
            - (m + 1.0) * LinExpr::var(Var::AbaActive(id1));
        builder = builder.add_constraint(
            (LinExpr::var(Var::AbaEnd(id0)) + LinExpr::constant(1.0)).leq(&rhs),
            tag(format!("aba[{id0}] ends at least one slot before aba[{id1}] starts")),
        );
    }

    // Max providers per client and weekly minutes.
    let mut provider_seq = 0u32;
    for (client_idx, _client) in request.clients.iter().enumerate() {
        let mut contributors = Vec::new();

        for (&(c_idx, therapist_idx), &(first_id, _count)) in &vf.aba_by_pair {
            if c_idx != client_idx {
                continue;
            }
            let serves = LinExpr::var(Var::AbaActive(first_id)) + LinExpr::var(Var::AbaActive(first_id + 1));
            contributors.push((therapist_idx, serves));
        }
        for candidate in vf.ah_candidates.iter().filter(|c| c.client_idx == client_idx) {
            contributors.push((candidate.therapist_idx, LinExpr::var(Var::AhChosen(candidate.id))));
        }

        if contributors.is_empty() {
            continue;
        }

        let mut provider_terms = Vec::new();
        for (_therapist_idx, contribution) in &contributors {
            let provider_id = provider_seq;
            provider_seq += 1;
            builder = builder.set_variable(Var::Provider(provider_id), Variable::binary());
            let provider = LinExpr::var(Var::Provider(provider_id));

            builder = builder.add_constraint(
                provider.leq(contribution),
                tag(format!("provider[{provider_id}] indicates nonzero contribution")),
            );
            builder = builder.add_constraint(
                contribution.clone().leq(&(2.0 * provider.clone())),
                tag(format!("provider[{provider_id}] activates when contribution nonzero")),
            );
            provider_terms.push(provider);
        }

        let total = provider_terms
            .into_iter()
            .fold(LinExpr::constant(0.0), |acc, p| acc + p);

        if let Some(max_therapists) = caps[client_idx].max_therapists_per_day {
            builder = builder.add_constraint(
                total.leq(&LinExpr::constant(max_therapists as f64)),
                tag(format!("client[{client_idx}] max_therapists_per_day")),
            );
        }
    }

    // Weekly minutes: total ABA duration plus Allied Health length for the
    // client must not exceed the remaining weekly budget.
    for (client_idx, _client) in request.clients.iter().enumerate() {
        let Some(remaining) = caps[client_idx].remaining_weekly_slots else {
            continue;
        };
        if remaining >= grid.num_slots * 2 {
            continue;
        }

        let mut total = LinExpr::constant(0.0);
        for session in vf.aba_sessions.iter().filter(|s| s.client_idx == client_idx) {
            total = total + LinExpr::var(Var::AbaDuration(session.id));
        }
        for (need_idx, need) in vf.ah_needs.iter().enumerate() {
            if need.client_idx != client_idx {
                continue;
            }
            let length = (need.end_slot - need.start_slot) as f64;
            for &cand_id in &vf.ah_by_need[need_idx] {
                total = total + length * LinExpr::var(Var::AhChosen(cand_id));
            }
        }

        builder = builder.add_constraint(
            total.leq(&LinExpr::constant(remaining as f64)),
            tag(format!("client[{client_idx}] remaining_weekly_slots")),
        );
    }

    // Lunch staggering: no more than capacity therapists lunching at once.
    // A therapist whose one-hot offset is `o` covers every absolute slot in
    // `[start_slot + o, start_slot + o + LUNCH_DURATION_SLOTS)`; summing the
    // one-hot columns whose interval covers a given slot gives an exact
    // simultaneous-lunch count there, unlike a single window-wide bound.
    let capacity = (request.therapists.len() as u32 / 4).max(1) as f64;
    let width = crate::vars::lunch_window_width(grid);
    for slot in grid.lunch_window_start_slot..(grid.lunch_window_end_slot + LUNCH_DURATION_SLOTS) {
        let mut covering = LinExpr::constant(0.0);
        for &lunch_id in &vf.lunch_by_therapist {
            for offset in 0..width {
                let abs_start = grid.lunch_window_start_slot + offset;
                let abs_end = abs_start + LUNCH_DURATION_SLOTS;
                if abs_start <= slot && slot < abs_end {
                    covering = covering + LinExpr::var(Var::LunchOnehot(lunch_id, offset));
                }
            }
        }
        builder = builder.add_constraint(
            covering.leq(&LinExpr::constant(capacity)),
            tag(format!("lunch staggering at slot {slot}")),
        );
    }

    // Lunch iff billable: lunch_active_t = OR of every active/chosen
    // variable consuming therapist t.
    for (t_idx, &lunch_id) in vf.lunch_by_therapist.iter().enumerate() {
        let mut contributions = Vec::new();
        for session in vf.aba_sessions.iter().filter(|s| s.therapist_idx == t_idx) {
            contributions.push(LinExpr::var(Var::AbaActive(session.id)));
        }
        for candidate in vf.ah_candidates.iter().filter(|c| c.therapist_idx == t_idx) {
            contributions.push(LinExpr::var(Var::AhChosen(candidate.id)));
        }

        let lunch_active = LinExpr::var(Var::LunchActive(lunch_id));
        if contributions.is_empty() {
            builder = builder.add_constraint(
                lunch_active.eq(&LinExpr::constant(0.0)),
                tag(format!("therapist[{t_idx}] no possible work, no lunch")),
            );
            continue;
        }

        let sum = contributions
            .iter()
            .fold(LinExpr::constant(0.0), |acc, c| acc + c.clone());

        for contribution in &contributions {
            builder = builder.add_constraint(
                lunch_active.clone().geq(contribution),
                tag(format!("therapist[{t_idx}] lunch_active >= each contribution")),
            );
        }
        builder = builder.add_constraint(
            lunch_active.clone().leq(&sum),
            tag(format!("therapist[{t_idx}] lunch_active <= sum of contributions")),
        );
    }

    // Max notes per therapist: active ABA sessions plus chosen AH candidates.
    for (t_idx, _t) in request.therapists.iter().enumerate() {
        let mut total = LinExpr::constant(0.0);
        for session in vf.aba_sessions.iter().filter(|s| s.therapist_idx == t_idx) {
            total = total + LinExpr::var(Var::AbaActive(session.id));
        }
        for candidate in vf.ah_candidates.iter().filter(|c| c.therapist_idx == t_idx) {
            total = total + LinExpr::var(Var::AhChosen(candidate.id));
        }
        builder = builder.add_constraint(
            total.leq(&LinExpr::constant(MAX_NOTES_PER_THERAPIST as f64)),
            tag(format!("therapist[{t_idx}] max_notes_per_therapist")),
        );
    }

    builder
}
