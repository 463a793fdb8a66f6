//! Solver abstraction
//!
//! This module defines the [Solver] trait, the common interface every solver backend
//! implements, plus [SolverWithTimeLimit] for backends that can be given a wall-clock
//! budget.
//!
//! The only backend currently implemented is [good_lp], which delegates to whatever
//! MILP backend the [good_lp] crate has available.

pub mod good_lp;

use super::mat_repr::ProblemRepr;
use super::{FeasableConfig, Problem, UsableData};

/// A solver turns a [Problem] into a feasible, (locally) optimal [FeasableConfig], or
/// gives up and returns `None`.
///
/// Implementors are expected to be stateless with respect to any one solve: nothing
/// about the problem or its solution is retained beyond the call to [Solver::solve].
pub trait Solver<V: UsableData, C: UsableData, P: ProblemRepr<V>>: Send + Sync {
    fn solve<'a>(&self, problem: &'a Problem<V, C, P>) -> Option<FeasableConfig<'a, V, C, P>>;
}

/// A solver that can additionally be given a wall-clock time budget.
///
/// A blanket [Solver] impl is provided for every [SolverWithTimeLimit], calling it with
/// no time limit.
pub trait SolverWithTimeLimit<V: UsableData, C: UsableData, P: ProblemRepr<V>>: Send + Sync {
    fn solve_with_time_limit<'a>(
        &self,
        problem: &'a Problem<V, C, P>,
        time_limit: Option<std::time::Duration>,
    ) -> Option<FeasableConfig<'a, V, C, P>>;
}

impl<V: UsableData, C: UsableData, P: ProblemRepr<V>, T: SolverWithTimeLimit<V, C, P>>
    Solver<V, C, P> for T
{
    fn solve<'a>(&self, problem: &'a Problem<V, C, P>) -> Option<FeasableConfig<'a, V, C, P>> {
        self.solve_with_time_limit(problem, None)
    }
}

/// Coarse outcome of a solve attempt, distinguishing a proven-infeasible
/// problem from one that merely ran out of time or hit a backend error.
///
/// `good_lp`'s `lp_solvers` feature shells out to an external solver binary,
/// so a time limit here is advisory rather than preemptive: the call still
/// blocks until the external process exits, and `Feasible` only means the
/// wall clock had already passed the limit by the time it returned, not that
/// the solver was told to stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Solved to optimality within the time budget (or no budget was given).
    Optimal,
    /// A solution was found, but only after the time budget had elapsed.
    Feasible,
    /// The backend proved the problem has no feasible solution.
    Infeasible,
    /// The backend failed for a reason other than infeasibility (solver
    /// missing, malformed model, etc.); no solution is available.
    Unknown,
}

/// Everything [`SolverWithTimeLimit::solve_with_time_limit`]'s `Option`
/// collapses away: the status that produced the outcome, and (when one
/// exists) the objective value of the returned configuration.
pub struct SolveOutcome<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>> {
    pub status: SolveStatus,
    pub config: Option<FeasableConfig<'a, V, C, P>>,
    pub objective_value: Option<f64>,
}
