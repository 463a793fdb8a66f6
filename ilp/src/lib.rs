//! Generic Integer Linear Programming (ILP) problem representation.
//!
//! ILP problems (or MILP problems, for Mixed-ILP) are linear problems containing
//! equations and inequations over several unknown variables. They look like:
//!
//! a<sub>11</sub> x<sub>1</sub> + a<sub>12</sub> x<sub>2</sub> + ... <= b<sub>1</sub>\
//! a<sub>21</sub> x<sub>1</sub> + a<sub>22</sub> x<sub>2</sub> + ... <= b<sub>2</sub>\
//! ...
//!
//! together with bounds on each variable and a linear objective function to minimize
//! or maximize. Such problems are NP-hard in general, but they turn out to be a
//! convenient way to express scheduling problems (see
//! <https://doi.org/10.1016/S0377-2217(03)00095-X> for a survey), which is what this
//! crate is for.
//!
//! This crate does not implement a solver itself. It provides a generic, typed
//! representation of variables, linear expressions and constraints
//! ([ProblemBuilder]/[Problem]), a cheap way to check whether a candidate assignment
//! actually satisfies a problem without calling a solver ([Config]/[FeasableConfig]),
//! and a thin [solvers::Solver] trait implemented against [good_lp] as the actual
//! backend.
//!
//! The normal workflow is to start with a [ProblemBuilder], declare variables and
//! constraints, call [ProblemBuilder::build], then hand the resulting [Problem] to a
//! [solvers::Solver].

pub mod linexpr;
pub mod mat_repr;
pub mod solvers;

mod objectives;

pub use linexpr::{Constraint, LinExpr};
pub use mat_repr::sparse::SprsProblem;
pub use objectives::{Objective, ObjectiveSense};
pub use solvers::Solver;

use mat_repr::ProblemRepr;
use std::collections::BTreeMap;
use thiserror::Error;

pub(crate) fn f64_is_zero(x: f64) -> bool {
    x.abs() < 1e-6
}

pub(crate) fn f64_is_positive(x: f64) -> bool {
    x > 1e-6
}

/// Trait for displayable, ordonnable, comparable, clonable, sendable data.
///
/// The crate is generic over the types used to name variables and describe
/// constraints, so it is possible to use plain `String`s as well as domain-specific
/// enums. This trait bundles the properties needed for that to work.
pub trait UsableData:
    std::fmt::Debug
    + std::fmt::Display
    + PartialOrd
    + Ord
    + PartialEq
    + Eq
    + Clone
    + for<'a> From<&'a Self>
    + Send
    + Sync
{
}

impl<
        T: std::fmt::Debug
            + std::fmt::Display
            + PartialOrd
            + Ord
            + PartialEq
            + Eq
            + Clone
            + for<'a> From<&'a T>
            + Send
            + Sync,
    > UsableData for T
{
}

/// The default matrix representation used by [Problem] when none is specified.
pub type DefaultRepr<V> = SprsProblem<V>;

/// Possible types of a declared variable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum VariableType {
    /// Continuous variable, represented as an `f64`.
    #[default]
    Continuous,
    /// Integer variable: still represented as an `f64`, but restricted to integer
    /// values.
    Integer,
    /// Binary variable: restricted to 0 and 1. Defaults to the range `[0, 1]`.
    Binary,
}

/// Complete description of the range of possible values for a variable.
///
/// Built with [Variable::integer], [Variable::binary] or [Variable::continuous], then
/// optionally refined with [Variable::min] and [Variable::max].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable {
    var_type: VariableType,
    min: Option<ordered_float::OrderedFloat<f64>>,
    max: Option<ordered_float::OrderedFloat<f64>>,
}

impl Default for Variable {
    fn default() -> Self {
        Variable {
            var_type: VariableType::default(),
            min: None,
            max: None,
        }
    }
}

impl Variable {
    /// Builds the description of an integer variable, unbounded unless [Variable::min]
    /// / [Variable::max] are applied.
    pub fn integer() -> Self {
        Variable {
            var_type: VariableType::Integer,
            min: None,
            max: None,
        }
    }

    /// Builds the description of a binary variable, bounded to `[0, 1]` by default.
    pub fn binary() -> Self {
        Variable {
            var_type: VariableType::Binary,
            min: Some(ordered_float::OrderedFloat(0.0)),
            max: Some(ordered_float::OrderedFloat(1.0)),
        }
    }

    /// Builds the description of a continuous (real) variable.
    pub fn continuous() -> Self {
        Variable {
            var_type: VariableType::Continuous,
            min: None,
            max: None,
        }
    }

    /// Sets a minimum bound for the variable.
    pub fn min(mut self, m: f64) -> Self {
        self.min = Some(ordered_float::OrderedFloat(m));
        self
    }

    /// Sets a maximum bound for the variable.
    pub fn max(mut self, m: f64) -> Self {
        self.max = Some(ordered_float::OrderedFloat(m));
        self
    }

    /// Returns the type of the variable.
    pub fn get_type(&self) -> VariableType {
        self.var_type
    }

    /// Returns whether the solver must restrict this variable's value to integers.
    /// True for [VariableType::Integer] and [VariableType::Binary].
    pub fn is_integer(&self) -> bool {
        self.var_type != VariableType::Continuous
    }

    /// Returns the minimum bound of the variable, if any.
    pub fn get_min(&self) -> Option<f64> {
        self.min.map(|x| x.into_inner())
    }

    /// Returns the maximum bound of the variable, if any.
    pub fn get_max(&self) -> Option<f64> {
        self.max.map(|x| x.into_inner())
    }
}

/// Errors returned by [ProblemBuilder::build].
///
/// All of these correspond to a variable used in a constraint or the objective
/// function without having been declared via [ProblemBuilder::set_variable] /
/// [ProblemBuilder::set_variables].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError<V: UsableData, C: UsableData> {
    #[error("Variable {0} is used in constraint {2} ({1}) but not explicitly declared")]
    UndeclaredVariableInConstraint(V, Constraint<V>, C),
    #[error("Variable {0} is used in the objective function ({1}) but not explicitly declared")]
    UndeclaredVariableInObjective(V, LinExpr<V>),
}

pub type BuildResult<T, V, C> = std::result::Result<T, BuildError<V, C>>;

/// Errors returned by [Problem::build_config].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError<V: UsableData> {
    #[error("Variable {0} is not declared in this problem")]
    UnknownVariable(V),
}

pub type ConfigResult<T, V> = std::result::Result<T, ConfigError<V>>;

/// A partial or complete assignment of float values to variable names, as handed back
/// by a solver. Built with [ConfigData::new] and [ConfigData::set] / [ConfigData::set_iter].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigData<V: UsableData> {
    values: BTreeMap<V, f64>,
}

impl<V: UsableData> ConfigData<V> {
    pub fn new() -> Self {
        ConfigData {
            values: BTreeMap::new(),
        }
    }

    pub fn set<T: Into<V>>(mut self, var: T, val: f64) -> Self {
        self.values.insert(var.into(), val);
        self
    }

    pub fn set_iter<U: Into<V>, T: IntoIterator<Item = (U, f64)>>(mut self, vars: T) -> Self {
        for (var, val) in vars {
            self.values.insert(var.into(), val);
        }
        self
    }
}

/// Builder for [Problem].
///
/// Declare variables with [ProblemBuilder::set_variable] / [ProblemBuilder::set_variables],
/// add constraints with [ProblemBuilder::add_constraint] / [ProblemBuilder::add_constraints],
/// optionally set an [Objective] with [ProblemBuilder::set_objective], then call
/// [ProblemBuilder::build].
///
/// Every variable used by a constraint or the objective function must be declared:
/// this is checked at build time and is also the main reason this crate doesn't just
/// hand a `HashMap<String, f64>` to a solver directly.
#[derive(Debug, Clone)]
pub struct ProblemBuilder<V: UsableData, C: UsableData, P: ProblemRepr<V> = DefaultRepr<V>> {
    constraints: Vec<(Constraint<V>, C)>,
    variables: BTreeMap<V, Variable>,
    objective: Objective<V>,
    _repr: std::marker::PhantomData<P>,
}

impl<V: UsableData, C: UsableData, P: ProblemRepr<V>> Default for ProblemBuilder<V, C, P> {
    fn default() -> Self {
        ProblemBuilder {
            constraints: Vec::new(),
            variables: BTreeMap::new(),
            objective: Objective::default(),
            _repr: std::marker::PhantomData,
        }
    }
}

impl<V: UsableData, C: UsableData, P: ProblemRepr<V>> ProblemBuilder<V, C, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable, overwriting its description if already declared.
    pub fn set_variable<T: Into<V>>(mut self, name: T, var: Variable) -> Self {
        self.variables.insert(name.into(), var);
        self
    }

    /// Declares multiple variables at once.
    pub fn set_variables<U: Into<V>, T: IntoIterator<Item = (U, Variable)>>(
        mut self,
        vars: T,
    ) -> Self {
        for (name, var) in vars {
            self.variables.insert(name.into(), var);
        }
        self
    }

    /// Adds a constraint with an attached description.
    pub fn add_constraint<T: Into<C>>(mut self, constraint: Constraint<V>, desc: T) -> Self {
        self.constraints.push((constraint, desc.into()));
        self
    }

    /// Adds multiple constraints at once.
    pub fn add_constraints<U: Into<C>, T: IntoIterator<Item = (Constraint<V>, U)>>(
        mut self,
        constraints: T,
    ) -> Self {
        for (constraint, desc) in constraints {
            self.constraints.push((constraint, desc.into()));
        }
        self
    }

    /// Sets the objective of the problem. Defaults to minimizing the zero function,
    /// i.e. a pure feasibility problem, if never called.
    pub fn set_objective(mut self, objective: Objective<V>) -> Self {
        self.objective = objective;
        self
    }

    /// Builds the problem, checking that every variable used in a constraint or in the
    /// objective function was declared.
    pub fn build(self) -> BuildResult<Problem<V, C, P>, V, C> {
        for (constraint, desc) in &self.constraints {
            if let Some(var) = self.undeclared_variable_in(constraint.get_lhs()) {
                return Err(BuildError::UndeclaredVariableInConstraint(
                    var,
                    constraint.clone(),
                    desc.clone(),
                ));
            }
        }

        if let Some(var) = self.undeclared_variable_in(self.objective.get_function()) {
            return Err(BuildError::UndeclaredVariableInObjective(
                var,
                self.objective.get_function().clone(),
            ));
        }

        let pb_repr = P::new(&self.variables, self.constraints.iter().map(|(c, _)| c));

        Ok(Problem {
            constraints: self.constraints,
            variables: self.variables,
            objective: self.objective,
            pb_repr,
        })
    }

    fn undeclared_variable_in(&self, expr: &LinExpr<V>) -> Option<V> {
        expr.variables()
            .into_iter()
            .find(|var| !self.variables.contains_key(var))
    }
}

/// A fully specified ILP problem: variables, constraints and an objective function.
///
/// Built with [ProblemBuilder::build]. Use a [solvers::Solver] to obtain a
/// [FeasableConfig], or [Problem::build_config] to check a candidate assignment
/// directly.
#[derive(Debug, Clone)]
pub struct Problem<V: UsableData, C: UsableData, P: ProblemRepr<V> = DefaultRepr<V>> {
    constraints: Vec<(Constraint<V>, C)>,
    variables: BTreeMap<V, Variable>,
    objective: Objective<V>,
    pb_repr: P,
}

impl<V: UsableData, C: UsableData, P: ProblemRepr<V>> Problem<V, C, P> {
    pub fn into_builder(self) -> ProblemBuilder<V, C, P> {
        ProblemBuilder {
            constraints: self.constraints,
            variables: self.variables,
            objective: self.objective,
            _repr: std::marker::PhantomData,
        }
    }

    pub fn get_constraints(&self) -> &[(Constraint<V>, C)] {
        &self.constraints
    }

    pub fn get_variables(&self) -> &BTreeMap<V, Variable> {
        &self.variables
    }

    pub fn get_objective(&self) -> &Objective<V> {
        &self.objective
    }

    /// Checks a candidate assignment against this problem's constraints, without
    /// calling a solver.
    ///
    /// Any variable absent from `data` is treated as zero. Returns an error if `data`
    /// names a variable this problem never declared.
    pub fn build_config(&self, data: ConfigData<V>) -> ConfigResult<Config<'_, V, C, P>, V> {
        let mut values = BTreeMap::new();
        let mut repr_values = BTreeMap::new();

        for (var, val) in data.values {
            if !self.variables.contains_key(&var) {
                return Err(ConfigError::UnknownVariable(var));
            }
            if !f64_is_zero(val) {
                repr_values.insert(var.clone(), ordered_float::OrderedFloat(val));
            }
            values.insert(var, val);
        }

        Ok(Config {
            problem: self,
            values,
            cfg_repr: self.pb_repr.config_from(&repr_values),
        })
    }
}

/// A candidate variable assignment for a [Problem], with the means to check whether it
/// actually satisfies every constraint.
#[derive(Debug, Clone)]
pub struct Config<'a, V: UsableData, C: UsableData, P: ProblemRepr<V> = DefaultRepr<V>> {
    problem: &'a Problem<V, C, P>,
    values: BTreeMap<V, f64>,
    cfg_repr: P::Config<'a>,
}

impl<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>> Config<'a, V, C, P> {
    pub fn get_problem(&self) -> &'a Problem<V, C, P> {
        self.problem
    }

    /// Returns the value assigned to `var`, or `0.0` if it was never set.
    pub fn get<T>(&self, var: &T) -> f64
    where
        V: std::borrow::Borrow<T>,
        T: Ord + ?Sized,
    {
        self.values.get(var).copied().unwrap_or(0.0)
    }

    /// Returns the indices of every constraint this configuration does not satisfy.
    pub fn unsatisfied_constraints(&self) -> std::collections::BTreeSet<usize> {
        self.cfg_repr.unsatisfied_constraints()
    }

    pub fn is_feasable(&self) -> bool {
        self.cfg_repr.unsatisfied_constraints().is_empty()
    }

    /// Converts into a [FeasableConfig] if this configuration satisfies every
    /// constraint, otherwise returns `None`.
    pub fn into_feasable(self) -> Option<FeasableConfig<'a, V, C, P>> {
        if !self.is_feasable() {
            return None;
        }
        Some(FeasableConfig(self))
    }
}

impl<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>> PartialEq for Config<'a, V, C, P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.problem, other.problem) && self.values == other.values
    }
}

impl<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>> Eq for Config<'a, V, C, P> {}

/// A [Config] known to satisfy every constraint of its [Problem].
///
/// The only way to build one is [Config::into_feasable], which checks feasibility, or
/// a [solvers::Solver] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasableConfig<'a, V: UsableData, C: UsableData, P: ProblemRepr<V> = DefaultRepr<V>>(
    Config<'a, V, C, P>,
);

impl<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>> FeasableConfig<'a, V, C, P> {
    pub fn into_inner(self) -> Config<'a, V, C, P> {
        self.0
    }

    pub fn inner(&self) -> &Config<'a, V, C, P> {
        &self.0
    }
}

impl<'a, V: UsableData, C: UsableData, P: ProblemRepr<V>> std::ops::Deref
    for FeasableConfig<'a, V, C, P>
{
    type Target = Config<'a, V, C, P>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
