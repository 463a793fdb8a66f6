//! Wire types for the daily scheduling core: `SolveRequest` in,
//! `SolveResponse` out. Field names use `camelCase` on the wire while Rust
//! identifiers stay `snake_case`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A closed weekday enum rather than a bare string.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown weekday: {0}")]
pub struct ParseWeekdayError(String);

impl std::str::FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            other => Err(ParseWeekdayError(other.to_string())),
        }
    }
}

/// The kind of allied-health service an `AlliedHealthNeed` requests, and the
/// corresponding therapist role.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum AlliedHealthKind {
    #[serde(rename = "OT")]
    OccupationalTherapy,
    #[serde(rename = "SLP")]
    SpeechLanguagePathology,
}

impl std::fmt::Display for AlliedHealthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlliedHealthKind::OccupationalTherapy => write!(f, "OT"),
            AlliedHealthKind::SpeechLanguagePathology => write!(f, "SLP"),
        }
    }
}

/// The session type an extracted `ScheduleEntry` carries.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "ABA")]
    Aba,
    #[serde(rename = "AlliedHealth_OT")]
    AlliedHealthOt,
    #[serde(rename = "AlliedHealth_SLP")]
    AlliedHealthSlp,
    IndirectTime,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionType::Aba => "ABA",
            SessionType::AlliedHealthOt => "AlliedHealth_OT",
            SessionType::AlliedHealthSlp => "AlliedHealth_SLP",
            SessionType::IndirectTime => "IndirectTime",
        };
        write!(f, "{}", s)
    }
}

impl From<AlliedHealthKind> for SessionType {
    fn from(kind: AlliedHealthKind) -> Self {
        match kind {
            AlliedHealthKind::OccupationalTherapy => SessionType::AlliedHealthOt,
            AlliedHealthKind::SpeechLanguagePathology => SessionType::AlliedHealthSlp,
        }
    }
}

pub type ClientId = String;
pub type TherapistId = String;
pub type TeamId = String;
pub type QualificationId = String;
pub type RoleName = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlliedHealthNeed {
    pub kind: AlliedHealthKind,
    /// Weekdays this need is materialized on.
    pub specific_days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub preferred_provider_id: Option<TherapistId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub insurance_requirement_ids: Vec<QualificationId>,
    #[serde(default)]
    pub allied_health_needs: Vec<AlliedHealthNeed>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: TherapistId,
    pub role: RoleName,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub qualification_ids: Vec<QualificationId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceQualification {
    pub id: QualificationId,
    #[serde(default)]
    pub max_therapists_per_day: Option<u32>,
    #[serde(default)]
    pub min_session_duration_minutes: Option<u32>,
    #[serde(default)]
    pub max_session_duration_minutes: Option<u32>,
    #[serde(default)]
    pub max_hours_per_week: Option<f64>,
    #[serde(default)]
    pub role_hierarchy_order: Option<i32>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum CalloutEntityKind {
    Client,
    Therapist,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callout {
    pub entity_kind: CalloutEntityKind,
    pub entity_id: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub client_id: Option<ClientId>,
    pub therapist_id: Option<TherapistId>,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub session_type: SessionType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    pub operating_hours_start: String,
    pub operating_hours_end: String,
    /// Accepted and validated, but not used as an additional scheduling
    /// constraint — see DESIGN.md for the rationale.
    #[serde(default)]
    pub staff_availability_start: Option<String>,
    #[serde(default)]
    pub staff_availability_end: Option<String>,
    /// Accepted for wire compatibility; unused by this engine, same as the
    /// staff availability window above.
    #[serde(default)]
    pub lunch_coverage_start: Option<String>,
    #[serde(default)]
    pub lunch_coverage_end: Option<String>,
    pub ideal_lunch_window_start: String,
    pub ideal_lunch_window_end_for_start: String,
    pub slot_size_minutes: u32,
    #[serde(default)]
    pub default_role_rank: BTreeMap<RoleName, i32>,
    #[serde(default = "default_worker_count")]
    pub worker_count: u32,
}

fn default_worker_count() -> u32 {
    4
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub therapists: Vec<Therapist>,
    #[serde(default)]
    pub insurance_qualifications: Vec<InsuranceQualification>,
    pub selected_date: String,
    pub day: Weekday,
    #[serde(default)]
    pub callouts: Vec<Callout>,
    #[serde(default)]
    pub other_day_minutes_per_client: BTreeMap<ClientId, f64>,
    #[serde(default)]
    pub initial_schedule: Option<Vec<ScheduleEntry>>,
    pub config: SolverConfig,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageMode {
    Hard,
    Soft,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub schedule: Vec<ScheduleEntry>,
    pub success: bool,
    pub status_message: String,
    pub solve_time_seconds: f64,
    pub objective_value: Option<i64>,
    pub coverage_mode: CoverageMode,
}
