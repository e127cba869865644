//! Property tests for stale-response handling in the history view.

use proptest::prelude::*;

use chrono::{TimeZone, Utc};
use fleetcheck::domain::ports::SilentNotifier;
use fleetcheck::{
    ApiResult, Check, CheckHistory, HistoryDisplay, InspectionApi, IssueFilter, NewCheck, Vehicle,
};

struct Unused;

impl InspectionApi for Unused {
    fn get_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        Ok(Vec::new())
    }

    fn create_check(&self, _check: &NewCheck) -> ApiResult<Check> {
        unreachable!("history never creates checks")
    }

    fn get_checks(&self, _vehicle_id: &str, _has_issue: Option<bool>) -> ApiResult<Vec<Check>> {
        unreachable!("fetches are completed by hand")
    }

    fn delete_check(&self, _check_id: &str) -> ApiResult<()> {
        Ok(())
    }
}

fn check(id: String) -> Check {
    Check {
        id,
        vehicle_id: "V1".to_string(),
        odometer_km: 1.0,
        items: Vec::new(),
        note: None,
        has_issue: false,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[derive(Debug, Clone)]
enum Change {
    Vehicle(u8),
    Filter(u8),
    Trigger,
}

fn change() -> impl Strategy<Value = Change> {
    prop_oneof![
        (0u8..3).prop_map(Change::Vehicle),
        (0u8..3).prop_map(Change::Filter),
        Just(Change::Trigger),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever order responses arrive in, only the response to
    /// the latest parameters is ever displayed.
    #[test]
    fn property_only_latest_fetch_is_displayed(
        changes in prop::collection::vec(change(), 1..12),
        order in any::<u64>()
    ) {
        let mut history = CheckHistory::new(Unused, SilentNotifier);
        let mut tickets = Vec::new();
        if let Some(t) = history.select_vehicle("V0") {
            tickets.push(t);
        }

        let mut trigger = 0;
        for change in &changes {
            let ticket = match change {
                Change::Vehicle(n) => history.select_vehicle(&format!("V{n}")),
                Change::Filter(n) => {
                    history.set_issue_filter(IssueFilter::ALL_VARIANTS[*n as usize])
                }
                Change::Trigger => {
                    trigger += 1;
                    history.set_refresh_trigger(trigger)
                }
            };
            tickets.extend(ticket);
        }

        let latest_seq = tickets.last().map(|t| t.seq()).unwrap();

        // Deterministic shuffle driven by the generated seed.
        let mut pending: Vec<_> = tickets.into_iter().enumerate().collect();
        let mut seed = order;
        while !pending.is_empty() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let (i, ticket) = pending.remove((seed >> 33) as usize % pending.len());
            let seq = ticket.seq();
            let applied = history.complete_fetch(ticket, Ok(vec![check(format!("r{i}"))]));
            prop_assert_eq!(applied, seq == latest_seq);
        }

        match history.display() {
            HistoryDisplay::Checks(checks) => {
                prop_assert_eq!(checks.len(), 1);
                prop_assert!(!history.is_loading());
            }
            other => prop_assert!(false, "expected checks, got {:?}", other),
        }
    }
}
