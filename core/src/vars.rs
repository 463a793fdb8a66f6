//! Variable factory.
//!
//! Declares every decision variable the solve needs and the arenas that give
//! each one a stable, compact index: one enum variant per variable family,
//! each carrying the indices that identify it.

use std::collections::BTreeMap;
use std::fmt;

use aba_sched_ilp::{LinExpr, ProblemBuilder, Variable};

use crate::caps::ClientCaps;
use crate::eligibility::Eligibility;
use crate::model::{AlliedHealthKind, Client, SolveRequest, Therapist};
use crate::time_grid::Grid;

/// Variable name type for this domain's ILP problem.
///
/// A hand-rolled enum rather than a bare `String`: every variable is
/// identified by small integer indices into the arenas below, and matching on
/// a closed enum catches a mismatched variable family at compile time instead
/// of at a string-parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    /// Whether ABA session `k` of a (client, therapist) pair is scheduled.
    AbaActive(u32),
    AbaStart(u32),
    AbaDuration(u32),
    AbaEnd(u32),
    /// Whether Allied Health candidate `k` is the therapist chosen for its need.
    AhChosen(u32),
    LunchActive(u32),
    LunchStart(u32),
    /// Ordering helper: 1 if interval `a` starts no later than interval `b`,
    /// for one unordered pair of intervals sharing a no-overlap pool.
    Before(u32, u32),
    /// Whether one particular contributor (therapist, pair, or AH candidate)
    /// counts toward a client's distinct-provider count today.
    Provider(u32),
    /// One-hot encoding of a therapist's lunch start slot: 1 iff therapist
    /// `.0`'s lunch starts exactly at slot `.1` of the lunch window.
    LunchOnehot(u32, u32),
    /// Workload-balance auxiliary: `max(0, billable_i - billable_j)` for one
    /// ordered pair of therapists with `rank(i) > rank(j)`.
    Excess(u32),
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::AbaActive(i) => write!(f, "aba_active[{i}]"),
            Var::AbaStart(i) => write!(f, "aba_start[{i}]"),
            Var::AbaDuration(i) => write!(f, "aba_duration[{i}]"),
            Var::AbaEnd(i) => write!(f, "aba_end[{i}]"),
            Var::AhChosen(i) => write!(f, "ah_chosen[{i}]"),
            Var::LunchActive(i) => write!(f, "lunch_active[{i}]"),
            Var::LunchStart(i) => write!(f, "lunch_start[{i}]"),
            Var::Before(a, b) => write!(f, "before[{a},{b}]"),
            Var::Provider(c) => write!(f, "provider[{c}]"),
            Var::LunchOnehot(t, s) => write!(f, "lunch_onehot[{t},{s}]"),
            Var::Excess(i) => write!(f, "excess[{i}]"),
        }
    }
}

impl From<&Var> for Var {
    fn from(v: &Var) -> Var {
        *v
    }
}

/// Constraint description type for this domain's ILP problem.
///
/// A thin newtype rather than a bare `String`, so the
/// `for<'a> From<&'a Self>` bound `aba_sched_ilp::UsableData` requires is
/// satisfied by an explicit clone instead of leaning on `String`'s own blanket
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag(pub String);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Tag> for Tag {
    fn from(t: &Tag) -> Tag {
        t.clone()
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Tag {
        Tag(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Tag {
        Tag(s)
    }
}

pub fn tag(s: impl Into<String>) -> Tag {
    Tag(s.into())
}

/// One potential ABA session slot: the `k`-th (0 or 1) session of one
/// (client, therapist) pair, per the "at most two sessions per pair per day"
/// invariant.
#[derive(Debug, Clone, Copy)]
pub struct AbaSessionMeta {
    pub id: u32,
    pub client_idx: usize,
    pub therapist_idx: usize,
    pub k: u32,
}

/// One Allied Health candidate: one eligible-role therapist who could be
/// chosen to deliver one materialized need instance.
#[derive(Debug, Clone, Copy)]
pub struct AhCandidate {
    pub id: u32,
    pub need_instance: u32,
    pub client_idx: usize,
    pub therapist_idx: usize,
}

/// One materialized Allied Health need: a client's need whose `specificDays`
/// includes today, paired with its fixed start/end slots.
#[derive(Debug, Clone, Copy)]
pub struct AhNeedInstance {
    pub client_idx: usize,
    pub need_idx: usize,
    pub kind: AlliedHealthKind,
    pub start_slot: u32,
    pub end_slot: u32,
    /// Candidate id of the requested `preferredProviderId`, if it names a
    /// valid role-matching therapist. Not an eligibility filter: every
    /// role-matching therapist stays a candidate, this only marks which one
    /// the solve orchestrator should bias toward via its warm-start hint.
    pub preferred_candidate: Option<u32>,
}

/// Every declared variable plus the arenas needed to interpret them later,
/// during constraint assembly, objective assembly and extraction.
pub struct VarFactory {
    pub aba_sessions: Vec<AbaSessionMeta>,
    /// `(client_idx, therapist_idx) -> (first_session_id, session_count)`.
    pub aba_by_pair: BTreeMap<(usize, usize), (u32, u32)>,

    pub ah_needs: Vec<AhNeedInstance>,
    pub ah_candidates: Vec<AhCandidate>,
    /// `need_instance -> [candidate ids]`.
    pub ah_by_need: Vec<Vec<u32>>,

    /// One lunch pair of variables per therapist, indexed by therapist_idx.
    pub lunch_by_therapist: Vec<u32>,

    /// Offsets into the unified global interval numbering used by the
    /// no-overlap helper in `constraints.rs`: ABA sessions first, then
    /// Allied Health candidates, then lunches.
    pub ah_offset: u32,
    pub lunch_offset: u32,
    pub num_intervals: u32,
}

/// Identifies which arena a global interval id (used only to key
/// `Var::Before` pairs) actually refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalRef {
    Aba(u32),
    Ah(u32),
    Lunch(u32),
}

impl VarFactory {
    pub fn duration_slots(&self, session: &AbaSessionMeta, caps: &[ClientCaps]) -> (u32, u32) {
        let c = &caps[session.client_idx];
        (c.min_dur_slots, c.max_dur_slots)
    }

    pub fn global_of_aba(&self, id: u32) -> u32 {
        id
    }

    pub fn global_of_ah(&self, id: u32) -> u32 {
        self.ah_offset + id
    }

    pub fn global_of_lunch(&self, id: u32) -> u32 {
        self.lunch_offset + id
    }

    pub fn interval_kind(&self, global_id: u32) -> IntervalRef {
        if global_id < self.ah_offset {
            IntervalRef::Aba(global_id)
        } else if global_id < self.lunch_offset {
            IntervalRef::Ah(global_id - self.ah_offset)
        } else {
            IntervalRef::Lunch(global_id - self.lunch_offset)
        }
    }

    /// Returns `(active, start, end)` linear expressions for a global
    /// interval id, used to build a big-M disjunction against another
    /// interval in the same no-overlap pool.
    pub fn interval_terms(&self, global_id: u32) -> (LinExpr<Var>, LinExpr<Var>, LinExpr<Var>) {
        match self.interval_kind(global_id) {
            IntervalRef::Aba(id) => (
                LinExpr::var(Var::AbaActive(id)),
                LinExpr::var(Var::AbaStart(id)),
                LinExpr::var(Var::AbaEnd(id)),
            ),
            IntervalRef::Ah(id) => {
                let candidate = &self.ah_candidates[id as usize];
                let need = &self.ah_needs[candidate.need_instance as usize];
                (
                    LinExpr::var(Var::AhChosen(id)),
                    LinExpr::constant(need.start_slot as f64),
                    LinExpr::constant(need.end_slot as f64),
                )
            }
            IntervalRef::Lunch(id) => (
                LinExpr::var(Var::LunchActive(id)),
                LinExpr::var(Var::LunchStart(id)),
                LinExpr::var(Var::LunchStart(id)) + LinExpr::constant(crate::time_grid::LUNCH_DURATION_SLOTS as f64),
            ),
        }
    }
}

/// Builds every decision variable the day's problem needs, declaring each in
/// `builder` and returning the arenas used to interpret and constrain them.
#[allow(clippy::too_many_arguments)]
pub fn build(
    request: &SolveRequest,
    grid: &Grid,
    eligibility: &Eligibility,
    caps: &[ClientCaps],
    mut builder: ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>,
) -> (VarFactory, ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>) {
    let mut next_id = 0u32;
    let mut aba_sessions = Vec::new();
    let mut aba_by_pair = BTreeMap::new();

    // Weekends carry no ABA variables at all, and a client with no weekly
    // budget left produces none either (its Allied Health may still run).
    let weekend = request.day.is_weekend();

    for (client_idx, _client) in request.clients.iter().enumerate() {
        if weekend {
            continue;
        }
        let c = &caps[client_idx];
        if c.remaining_weekly_slots == Some(0) {
            continue;
        }
        for entry in &eligibility.eligible[client_idx] {
            let therapist_idx = entry.therapist_idx;
            let first_id = next_id;
            for k in 0..2u32 {
                let id = next_id;
                next_id += 1;
                aba_sessions.push(AbaSessionMeta {
                    id,
                    client_idx,
                    therapist_idx,
                    k,
                });

                builder = builder
                    .set_variable(Var::AbaActive(id), Variable::binary())
                    .set_variable(
                        Var::AbaStart(id),
                        Variable::integer().min(0.0).max(grid.num_slots as f64),
                    )
                    .set_variable(
                        Var::AbaDuration(id),
                        Variable::integer().min(0.0).max(c.max_dur_slots as f64),
                    )
                    .set_variable(
                        Var::AbaEnd(id),
                        Variable::integer().min(0.0).max(grid.num_slots as f64),
                    );

                // end = start + duration
                builder = builder.add_constraint(
                    LinExpr::var(Var::AbaEnd(id))
                        .eq(&(LinExpr::var(Var::AbaStart(id)) + LinExpr::var(Var::AbaDuration(id)))),
                    tag(format!("aba[{id}] end = start + duration")),
                );

                // duration bounded by the client's caps whenever the session is active,
                // zero otherwise: min*active <= duration <= max*active.
                builder = builder.add_constraint(
                    LinExpr::var(Var::AbaDuration(id))
                        .leq(&(c.max_dur_slots as f64 * LinExpr::var(Var::AbaActive(id)))),
                    tag(format!("aba[{id}] duration <= max * active")),
                );
                builder = builder.add_constraint(
                    (c.min_dur_slots as f64 * LinExpr::var(Var::AbaActive(id)))
                        .leq(&LinExpr::var(Var::AbaDuration(id))),
                    tag(format!("aba[{id}] duration >= min * active")),
                );

                // start/end confined to operating hours whenever active.
                builder = builder.add_constraint(
                    LinExpr::var(Var::AbaEnd(id))
                        .leq(&(grid.num_slots as f64 * LinExpr::var(Var::AbaActive(id)))),
                    tag(format!("aba[{id}] end <= num_slots * active")),
                );
            }
            aba_by_pair.insert((client_idx, therapist_idx), (first_id, 2));
        }
    }

    let (ah_needs, ah_candidates, ah_by_need, builder) =
        build_allied_health(request, grid, builder);

    let (lunch_by_therapist, builder) = build_lunch(request, grid, builder);

    let ah_offset = next_id;
    let lunch_offset = ah_offset + ah_candidates.len() as u32;
    let num_intervals = lunch_offset + lunch_by_therapist.len() as u32;

    (
        VarFactory {
            aba_sessions,
            aba_by_pair,
            ah_needs,
            ah_candidates,
            ah_by_need,
            lunch_by_therapist,
            ah_offset,
            lunch_offset,
            num_intervals,
        },
        builder,
    )
}

fn allied_health_role_matches(role: &str, kind: AlliedHealthKind) -> bool {
    match kind {
        AlliedHealthKind::OccupationalTherapy => role.eq_ignore_ascii_case("OT"),
        AlliedHealthKind::SpeechLanguagePathology => role.eq_ignore_ascii_case("SLP"),
    }
}

fn build_allied_health(
    request: &SolveRequest,
    grid: &Grid,
    mut owned: ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>,
) -> (
    Vec<AhNeedInstance>,
    Vec<AhCandidate>,
    Vec<Vec<u32>>,
    ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>,
) {
    let mut needs = Vec::new();
    let mut candidates = Vec::new();
    let mut by_need: Vec<Vec<u32>> = Vec::new();

    for (client_idx, client) in request.clients.iter().enumerate() {
        for (need_idx, need) in client.allied_health_needs.iter().enumerate() {
            if !need.specific_days.contains(&request.day) {
                continue;
            }
            let (Some(start_slot), Some(end_slot)) = (
                grid.time_to_slot(&need.start_time),
                grid.time_to_slot_ceil(&need.end_time),
            ) else {
                continue;
            };
            if end_slot <= start_slot || end_slot > grid.num_slots {
                continue;
            }

            let need_instance = needs.len() as u32;

            let mut candidate_ids = Vec::new();
            let mut preferred_candidate = None;
            for (therapist_idx, therapist) in request.therapists.iter().enumerate() {
                if !allied_health_role_matches(&therapist.role, need.kind) {
                    continue;
                }

                let id = candidates.len() as u32;
                candidates.push(AhCandidate {
                    id,
                    need_instance,
                    client_idx,
                    therapist_idx,
                });
                candidate_ids.push(id);

                owned = owned.set_variable(Var::AhChosen(id), Variable::binary());

                // All role-matching therapists remain eligible candidates; a
                // preferred provider only biases which one the objective's
                // warm-start hint nudges toward, per the need's own field.
                if need.preferred_provider_id.as_deref() == Some(therapist.id.as_str()) {
                    preferred_candidate = Some(id);
                }
            }

            needs.push(AhNeedInstance {
                client_idx,
                need_idx,
                kind: need.kind,
                start_slot,
                end_slot,
                preferred_candidate,
            });

            if !candidate_ids.is_empty() {
                // Exactly one therapist delivers a materialized need once any
                // role-matching candidate exists; only the no-candidate case
                // (empty `candidate_ids`) is left unassigned for extraction.
                let sum = candidate_ids
                    .iter()
                    .fold(LinExpr::constant(0.0), |acc, &id| {
                        acc + LinExpr::var(Var::AhChosen(id))
                    });
                owned = owned.add_constraint(
                    sum.eq(&LinExpr::constant(1.0)),
                    tag(format!("ah_need[{need_instance}] exactly one provider")),
                );
            }

            by_need.push(candidate_ids);
        }
    }

    (needs, candidates, by_need, owned)
}

/// Number of distinct lunch start offsets a therapist may choose within the
/// ideal lunch window, one per [`Var::LunchOnehot`] column.
pub fn lunch_window_width(grid: &Grid) -> u32 {
    grid.lunch_window_end_slot - grid.lunch_window_start_slot + 1
}

fn build_lunch(
    request: &SolveRequest,
    grid: &Grid,
    mut builder: ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>,
) -> (Vec<u32>, ProblemBuilder<Var, Tag, aba_sched_ilp::DefaultRepr<Var>>) {
    let mut lunch_by_therapist = Vec::with_capacity(request.therapists.len());
    let width = lunch_window_width(grid);

    for (therapist_idx, _t) in request.therapists.iter().enumerate() {
        let id = therapist_idx as u32;
        lunch_by_therapist.push(id);

        builder = builder
            .set_variable(Var::LunchActive(id), Variable::binary())
            .set_variable(
                Var::LunchStart(id),
                // Lower bound 0, not `lunch_window_start_slot`: the linking
                // constraint below collapses this to 0 when the therapist
                // has no lunch today, which must stay feasible.
                Variable::integer().min(0.0).max(grid.lunch_window_end_slot as f64),
            );

        // One-hot encoding of the chosen start offset, used by the
        // constraint assembler to build an exact per-slot lunch-coverage
        // count instead of a vacuous window-wide bound.
        let mut onehot_sum = LinExpr::constant(0.0);
        let mut weighted_sum = LinExpr::constant(0.0);
        for offset in 0..width {
            builder = builder.set_variable(Var::LunchOnehot(id, offset), Variable::binary());
            onehot_sum = onehot_sum + LinExpr::var(Var::LunchOnehot(id, offset));
            weighted_sum = weighted_sum + (offset as f64) * LinExpr::var(Var::LunchOnehot(id, offset));
        }

        // Exactly one offset chosen when lunching, none when not.
        builder = builder.add_constraint(
            onehot_sum.eq(&LinExpr::var(Var::LunchActive(id))),
            tag(format!("lunch_onehot[{id}] picks exactly one offset iff lunching")),
        );
        // Ties LunchStart to the chosen offset so extraction can read either.
        builder = builder.add_constraint(
            LinExpr::var(Var::LunchStart(id)).eq(
                &(weighted_sum + (grid.lunch_window_start_slot as f64) * LinExpr::var(Var::LunchActive(id))),
            ),
            tag(format!("lunch_start[{id}] matches its one-hot offset")),
        );
    }

    (lunch_by_therapist, builder)
}

/// Convenience accessors used by constraint/objective assembly to look up a
/// `Client`/`Therapist` by arena index without re-deriving it each time.
pub fn client_at<'a>(request: &'a SolveRequest, idx: usize) -> &'a Client {
    &request.clients[idx]
}

pub fn therapist_at<'a>(request: &'a SolveRequest, idx: usize) -> &'a Therapist {
    &request.therapists[idx]
}
