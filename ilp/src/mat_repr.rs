//! Matrix representation of problems and configurations
//!
//! This module contains the definition of two traits [ProblemRepr] and [ConfigRepr].
//! These traits are used to represent an ILP problem and a corresponding configuration
//! (a candidate variable assignment) as some actual numerical representation, usually
//! a matrix.
//!
//! This module contains a single implementation, [sparse], using [sprs] as a backend,
//! since the scheduling problems this crate builds have tens of thousands of
//! constraints and variables but each constraint only touches a handful of them.
//!
//! Technically, it would be possible to represent problems and configurations using
//! something else than matrices, but this is the straightforward way to do it and it
//! is all that's needed here: a cheap way to check whether a candidate assignment
//! actually satisfies every constraint, without involving a solver.

pub mod sparse;

use crate::{Constraint, UsableData, Variable};
use std::collections::{BTreeMap, BTreeSet};

/// A numerical representation of an ILP problem's constraint matrix.
///
/// Implementors turn the symbolic [Constraint]s of a problem into whatever
/// representation lets [ConfigRepr::unsatisfied_constraints] be computed cheaply.
pub trait ProblemRepr<V: UsableData>: std::fmt::Debug + Clone + Eq + Ord + Send + Sync {
    /// The associated configuration representation for this problem representation.
    type Config<'a>: ConfigRepr<'a, V>
    where
        V: 'a,
        Self: 'a;

    /// Builds the representation from the declared variables and the (ordered) constraints.
    fn new<'a, T>(variables: &BTreeMap<V, Variable>, constraints: T) -> Self
    where
        V: 'a,
        T: ExactSizeIterator<Item = &'a Constraint<V>>;

    /// Builds a configuration representation from a (possibly partial) assignment of
    /// non-zero variable values.
    fn config_from<'a>(
        &'a self,
        vars: &BTreeMap<V, ordered_float::OrderedFloat<f64>>,
    ) -> Self::Config<'a>;
}

/// A numerical representation of a candidate variable assignment.
pub trait ConfigRepr<'a, V: UsableData>: std::fmt::Debug + Clone + Eq + Ord {
    /// Returns the indices (in constraint declaration order) of every constraint that
    /// this assignment does not satisfy. An empty set means the assignment is feasible.
    fn unsatisfied_constraints(&self) -> BTreeSet<usize>;
}
