//! Eligibility pre-computer.
//!
//! For each client, derives the ordered list of therapists permitted to
//! deliver ABA and tags each pair with a team-affinity tier, once, before any
//! variable is created.

use std::collections::BTreeMap;

use crate::callouts::{Blackouts, BlockedSlots};
use crate::model::{InsuranceQualification, SolverConfig, Therapist};
use crate::time_grid::Grid;

fn is_bt(role: &str) -> bool {
    role.eq_ignore_ascii_case("BT") || role.eq_ignore_ascii_case("RBT")
}

fn is_bcba(role: &str) -> bool {
    role.eq_ignore_ascii_case("BCBA")
}

fn is_allied_health_role(role: &str) -> bool {
    role.eq_ignore_ascii_case("OT") || role.eq_ignore_ascii_case("SLP")
}

/// Rank of a role per `config.default_role_rank`, or `-1` if the role is
/// unknown to the configuration ("never subsumes", per §3 Role hierarchy).
pub fn role_rank(config: &SolverConfig, role: &str) -> i32 {
    config.default_role_rank.get(role).copied().unwrap_or(-1)
}

/// Team-affinity tier of a (client, therapist) pair, or `None` if the pair is
/// excluded outright (a behavior technician assigned cross-team).
pub fn tier(therapist_role: &str, therapist_team: Option<&str>, client_team: Option<&str>) -> Option<u8> {
    let Some(client_team) = client_team else {
        return Some(0);
    };
    let same_team = therapist_team == Some(client_team);

    if same_team {
        Some(if is_bcba(therapist_role) { 2 } else { 0 })
    } else if is_bt(therapist_role) {
        None
    } else if is_bcba(therapist_role) {
        Some(3)
    } else {
        Some(1)
    }
}

/// Whether `therapist` satisfies every insurance requirement id in `required`.
pub fn meets_insurance(
    config: &SolverConfig,
    therapist: &Therapist,
    required: &[String],
    quals_by_id: &BTreeMap<&str, &InsuranceQualification>,
) -> bool {
    required.iter().all(|r| {
        if therapist.qualification_ids.iter().any(|q| q == r) {
            return true;
        }

        if let Some(qual) = quals_by_id.get(r.as_str()) {
            if let Some(required_rank) = qual.role_hierarchy_order {
                let therapist_rank = role_rank(config, &therapist.role);
                if therapist_rank != -1 && required_rank != -1 && therapist_rank >= required_rank {
                    return true;
                }
            }
        }

        therapist.role == *r
    })
}

/// A single (client, therapist) eligibility entry, ordered as described below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibleTherapist {
    /// Index into the `therapists` slice of the `SolveRequest`.
    pub therapist_idx: usize,
    pub tier: u8,
    pub role_rank: i32,
}

/// Frozen eligibility data for every client, computed once before variable
/// creation.
#[derive(Debug, Clone)]
pub struct Eligibility {
    /// `eligible[client_idx]`, ordered primarily by tier ascending, then by
    /// role rank ascending (biases search toward same-team, lower-ranked
    /// therapists first).
    pub eligible: Vec<Vec<EligibleTherapist>>,
    /// `local_index_of[client_idx][therapist_idx] -> position in eligible[client_idx]`.
    pub local_index_of: Vec<BTreeMap<usize, usize>>,
}

/// Sum of a therapist's merged callout blackout ranges, in slots.
fn therapist_blocked_slots(blocked: &BlockedSlots, therapist_id: &str) -> u32 {
    blocked
        .get(therapist_id)
        .map(|ranges| Blackouts::total_blocked(ranges))
        .unwrap_or(0)
}

pub fn compute(
    config: &SolverConfig,
    clients: &[crate::model::Client],
    therapists: &[Therapist],
    qualifications: &[InsuranceQualification],
    blackouts: &Blackouts,
    grid: &Grid,
) -> Eligibility {
    let quals_by_id: BTreeMap<&str, &InsuranceQualification> =
        qualifications.iter().map(|q| (q.id.as_str(), q)).collect();

    // A therapist blacked out for the whole day can never be assigned
    // anything, so it is dropped from every client's eligible list up
    // front rather than re-checked per client.
    let fully_blocked: Vec<bool> = therapists
        .iter()
        .map(|t| therapist_blocked_slots(&blackouts.therapists, &t.id) >= grid.num_slots)
        .collect();

    let mut eligible = Vec::with_capacity(clients.len());
    let mut local_index_of = Vec::with_capacity(clients.len());

    for client in clients {
        let mut entries = Vec::new();

        for (therapist_idx, therapist) in therapists.iter().enumerate() {
            if fully_blocked[therapist_idx] {
                continue;
            }
            if is_allied_health_role(&therapist.role) {
                continue;
            }
            if !meets_insurance(
                config,
                therapist,
                &client.insurance_requirement_ids,
                &quals_by_id,
            ) {
                continue;
            }
            let Some(t) = tier(
                &therapist.role,
                therapist.team_id.as_deref(),
                client.team_id.as_deref(),
            ) else {
                continue;
            };

            entries.push(EligibleTherapist {
                therapist_idx,
                tier: t,
                role_rank: role_rank(config, &therapist.role),
            });
        }

        entries.sort_by(|a, b| a.tier.cmp(&b.tier).then(a.role_rank.cmp(&b.role_rank)));

        let mut index = BTreeMap::new();
        for (local_idx, entry) in entries.iter().enumerate() {
            index.insert(entry.therapist_idx, local_idx);
        }

        eligible.push(entries);
        local_index_of.push(index);
    }

    Eligibility {
        eligible,
        local_index_of,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Client;
    use std::collections::BTreeMap as Map;

    fn config() -> SolverConfig {
        SolverConfig {
            operating_hours_start: "09:00".into(),
            operating_hours_end: "17:00".into(),
            staff_availability_start: None,
            staff_availability_end: None,
            lunch_coverage_start: None,
            lunch_coverage_end: None,
            ideal_lunch_window_start: "11:00".into(),
            ideal_lunch_window_end_for_start: "13:00".into(),
            slot_size_minutes: 15,
            default_role_rank: Map::from([
                ("BT".to_string(), 0),
                ("BCBA".to_string(), 2),
            ]),
            worker_count: 4,
        }
    }

    fn therapist(id: &str, role: &str, team: Option<&str>) -> Therapist {
        Therapist {
            id: id.into(),
            role: role.into(),
            team_id: team.map(|s| s.to_string()),
            qualification_ids: vec![],
        }
    }

    #[test]
    fn same_team_bt_is_tier_zero() {
        assert_eq!(tier("BT", Some("A"), Some("A")), Some(0));
    }

    #[test]
    fn cross_team_bt_is_excluded() {
        assert_eq!(tier("BT", Some("A"), Some("B")), None);
    }

    #[test]
    fn cross_team_bcba_is_tier_three() {
        assert_eq!(tier("BCBA", Some("A"), Some("B")), Some(3));
    }

    #[test]
    fn same_team_bcba_is_tier_two() {
        assert_eq!(tier("BCBA", Some("A"), Some("A")), Some(2));
    }

    #[test]
    fn client_without_team_is_never_penalized() {
        assert_eq!(tier("BCBA", Some("A"), None), Some(0));
    }

    #[test]
    fn cross_team_non_bcba_non_bt_is_tier_one() {
        assert_eq!(tier("OT_LEAD", Some("A"), Some("B")), Some(1));
    }

    #[test]
    fn eligibility_excludes_allied_health_roles_and_cross_team_bts() {
        let cfg = config();
        let clients = vec![Client {
            id: "c1".into(),
            team_id: Some("A".into()),
            insurance_requirement_ids: vec![],
            allied_health_needs: vec![],
        }];
        let therapists = vec![
            therapist("t-ot", "OT", Some("A")),
            therapist("t-bt-cross", "BT", Some("B")),
            therapist("t-bt-same", "BT", Some("A")),
        ];
        let grid = Grid::new(&cfg).unwrap();
        let blackouts = Blackouts {
            clients: Map::new(),
            therapists: Map::new(),
        };

        let elig = compute(&cfg, &clients, &therapists, &[], &blackouts, &grid);

        assert_eq!(elig.eligible[0].len(), 1);
        assert_eq!(elig.eligible[0][0].therapist_idx, 2);
    }

    #[test]
    fn eligibility_orders_by_tier_then_role_rank() {
        let cfg = config();
        let clients = vec![Client {
            id: "c1".into(),
            team_id: Some("A".into()),
            insurance_requirement_ids: vec![],
            allied_health_needs: vec![],
        }];
        let therapists = vec![
            therapist("t-bcba-same", "BCBA", Some("A")),
            therapist("t-bt-same", "BT", Some("A")),
        ];
        let grid = Grid::new(&cfg).unwrap();
        let blackouts = Blackouts {
            clients: Map::new(),
            therapists: Map::new(),
        };

        let elig = compute(&cfg, &clients, &therapists, &[], &blackouts, &grid);

        // Same-team BT (tier 0) must sort before same-team BCBA (tier 2).
        assert_eq!(elig.eligible[0][0].therapist_idx, 1);
        assert_eq!(elig.eligible[0][1].therapist_idx, 0);
    }
}
