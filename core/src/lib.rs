//! Daily workforce-scheduling engine for a pediatric ABA / Allied Health
//! clinic: takes one day's roster, availability and constraints in, and
//! returns a conflict-free schedule (or the best schedule it could find
//! within budget) out.
//!
//! The pipeline, in order, lives one module per stage:
//! [`time_grid`] turns operating hours into a slot grid, [`callouts`] expands
//! callouts into per-entity blocked ranges, [`caps`] folds insurance
//! qualifications into per-client duration/weekly bounds, [`eligibility`]
//! computes which therapists may see which clients today, [`vars`] declares
//! the ILP decision variables, [`constraints`] and [`objective`] build the
//! model, [`solve`] orchestrates the two-phase hard/soft solve, and
//! [`extract`] decodes the winning configuration back into wire types.

pub mod callouts;
pub mod caps;
pub mod constraints;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod id;
pub mod model;
pub mod objective;
pub mod solve;
pub mod time_grid;
pub mod vars;

pub use error::SolveError;
pub use model::{
    AlliedHealthKind, AlliedHealthNeed, Callout, CalloutEntityKind, Client, CoverageMode,
    InsuranceQualification, ScheduleEntry, SessionType, SolveRequest, SolveResponse,
    SolverConfig, Therapist, Weekday,
};
pub use solve::solve;
