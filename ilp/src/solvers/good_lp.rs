//! good-lp solver
//!
//! This module implements a solver which uses the
//! [good_lp] crate as a backend. [good_lp] itself delegates to whichever
//! underlying MILP solver is available at runtime through its `lp_solvers`
//! feature, so this backend is not tied to any particular solver binary.


use std::time::{Duration, Instant};

use super::{ProblemRepr, SolveOutcome, SolveStatus, Solver, SolverWithTimeLimit};
use crate::{linexpr::EqSymbol, ConfigData, FeasableConfig, ObjectiveSense, Problem, UsableData};

/// [good_lp] solver
///
/// To create such a solver, use [GoodSolver::new].
#[derive(Debug, Clone)]
pub struct GoodSolver {}

impl<V: UsableData, C: UsableData, P: ProblemRepr<V>> Solver<V, C, P> for GoodSolver {
    fn solve<'a>(&self, problem: &'a Problem<V, C, P>) -> Option<FeasableConfig<'a, V, C, P>> {
        self.solve_internal(problem)
    }
}

impl<V: UsableData, C: UsableData, P: ProblemRepr<V>> SolverWithTimeLimit<V, C, P> for GoodSolver {
    fn solve_with_time_limit<'a>(
        &self,
        problem: &'a Problem<V, C, P>,
        time_limit: Option<Duration>,
    ) -> Option<FeasableConfig<'a, V, C, P>> {
        self.solve_with_outcome(problem, time_limit).config
    }
}

struct GoodModel<V: UsableData> {
    unsolved_problem: good_lp::variable::UnsolvedProblem,
    vars: std::collections::BTreeMap<V, good_lp::Variable>,
}

impl Default for GoodSolver {
    fn default() -> Self {
        GoodSolver::new()
    }
}

impl GoodSolver {
    /// Returns a default [good_lp] solver.
    ///
    /// At this moment, no configuration is allowed.
    /// This will use the lp_solvers feature of [good_lp]
    /// and try various solvers.
    pub fn new() -> Self {
        GoodSolver {}
    }
}

impl GoodSolver {
    fn solve_internal<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>>(
        &self,
        problem: &'a Problem<V, C, P>,
    ) -> Option<FeasableConfig<'a, V, C, P>> {
        let good_model = Self::build_model(problem);
        let (sol, vars) = Self::solve_problem(good_model, problem)?;
        Self::reconstruct_config(problem, sol, &vars)
    }

    fn build_model<V: UsableData, C: UsableData, P: ProblemRepr<V>>(
        problem: &Problem<V, C, P>,
    ) -> GoodModel<V> {
        use good_lp::ProblemVariables;
        use std::collections::BTreeMap;

        let mut pb_vars = ProblemVariables::new();
        let vars: BTreeMap<_, _> = problem
            .get_variables()
            .iter()
            .map(|(var, desc)| {
                let col = pb_vars.add({
                    let mut var_def = good_lp::VariableDefinition::new();

                    if desc.is_integer() {
                        var_def = var_def.integer();
                    }

                    if let Some(m) = desc.get_min() {
                        var_def = var_def.min(m);
                    }

                    if let Some(m) = desc.get_max() {
                        var_def = var_def.max(m);
                    }

                    var_def
                });

                (var.clone(), col)
            })
            .collect();

        let objective = problem.get_objective();

        let mut expr =
            good_lp::Expression::with_capacity(objective.get_function().variables().len());

        for (v, c) in objective.get_function().coefficients() {
            expr.add_mul(c, vars[v]);
        }

        let unsolved_problem = match objective.get_sense() {
            ObjectiveSense::Maximize => pb_vars.maximise(expr),
            ObjectiveSense::Minimize => pb_vars.minimise(expr),
        };

        GoodModel {
            unsolved_problem,
            vars,
        }
    }

    fn solve_problem<V: UsableData, C: UsableData, P: ProblemRepr<V>>(
        good_model: GoodModel<V>,
        problem: &Problem<V, C, P>,
    ) -> Result<
        (
            Box<dyn good_lp::Solution>,
            std::collections::BTreeMap<V, good_lp::Variable>,
        ),
        good_lp::ResolutionError,
    > {
        use good_lp::SolverModel;

        let solver = good_lp::solvers::lp_solvers::auto::AllSolvers::new();
        let mut vars_desc = good_model.unsolved_problem.using(good_lp::LpSolver(solver));

        for (c, _desc) in problem.get_constraints() {
            let mut expr = good_lp::Expression::from_other_affine(c.get_constant());

            for (v, c) in c.coefficients() {
                expr.add_mul(c, good_model.vars[v]);
            }

            let constraint = match c.get_symbol() {
                EqSymbol::Equals => expr.eq(0.0),
                EqSymbol::LessThan => expr.leq(0.0),
            };

            vars_desc = vars_desc.with(constraint);
        }

        let solution = vars_desc.solve()?;

        Ok((Box::new(solution), good_model.vars))
    }

    fn reconstruct_config<'a, 'b, 'c, V: UsableData, C: UsableData, P: ProblemRepr<V>>(
        problem: &'a Problem<V, C, P>,
        sol: Box<dyn good_lp::Solution>,
        vars: &'c std::collections::BTreeMap<V, good_lp::Variable>,
    ) -> Option<FeasableConfig<'a, V, C, P>> {
        let config_data =
            ConfigData::new().set_iter(vars.iter().map(|(v, var)| (v.clone(), sol.value(*var))));

        let config = problem.build_config(config_data).ok()?;

        config.into_feasable()
    }

    /// As [`Solver::solve`], but reports the status that produced the result
    /// and the resulting objective value instead of collapsing every
    /// non-solution into `None`.
    pub fn solve_with_outcome<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>>(
        &self,
        problem: &'a Problem<V, C, P>,
        time_limit: Option<Duration>,
    ) -> SolveOutcome<'a, V, C, P> {
        let start = Instant::now();
        let good_model = Self::build_model(problem);

        match Self::solve_problem(good_model, problem) {
            Err(good_lp::ResolutionError::Infeasible) => SolveOutcome {
                status: SolveStatus::Infeasible,
                config: None,
                objective_value: None,
            },
            Err(_) => SolveOutcome {
                status: SolveStatus::Unknown,
                config: None,
                objective_value: None,
            },
            Ok((sol, vars)) => match Self::reconstruct_config(problem, sol, &vars) {
                None => SolveOutcome {
                    status: SolveStatus::Unknown,
                    config: None,
                    objective_value: None,
                },
                Some(config) => {
                    let values: std::collections::BTreeMap<V, f64> = problem
                        .get_variables()
                        .keys()
                        .map(|v| (v.clone(), config.get(v)))
                        .collect();
                    let objective_value = problem.get_objective().get_function().eval(&values).ok();

                    let ran_over = time_limit.is_some_and(|limit| start.elapsed() > limit);
                    let status = if ran_over {
                        SolveStatus::Feasible
                    } else {
                        SolveStatus::Optimal
                    };

                    SolveOutcome {
                        status,
                        config: Some(config),
                        objective_value,
                    }
                }
            },
        }
    }
}
