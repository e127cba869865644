//! Property tests for the checklist payload.

use proptest::prelude::*;

use fleetcheck::{CheckItemKey, CheckItemStatus, Checklist};

fn key() -> impl Strategy<Value = CheckItemKey> {
    prop::sample::select(CheckItemKey::ALL.to_vec())
}

fn status() -> impl Strategy<Value = CheckItemStatus> {
    prop_oneof![Just(CheckItemStatus::Ok), Just(CheckItemStatus::Fail)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any sequence of edits the payload has each key exactly
    /// once, in the fixed order.
    #[test]
    fn property_checklist_always_has_five_ordered_items(
        edits in prop::collection::vec((key(), status()), 0..32)
    ) {
        let mut list = Checklist::default();
        for (key, status) in &edits {
            list.set(*key, *status);
        }

        let json = serde_json::to_value(list).unwrap();
        let keys: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["key"].as_str().unwrap())
            .collect();
        prop_assert_eq!(keys, vec!["TYRES", "BRAKES", "LIGHTS", "OIL", "COOLANT"]);
    }

    /// PROPERTY: Each key ends with the status of its last edit; untouched
    /// keys stay OK.
    #[test]
    fn property_last_edit_wins(
        edits in prop::collection::vec((key(), status()), 0..32)
    ) {
        let mut list = Checklist::default();
        for (key, status) in &edits {
            list.set(*key, *status);
        }

        for key in CheckItemKey::ALL {
            let expected = edits
                .iter()
                .rev()
                .find(|(k, _)| *k == key)
                .map(|(_, s)| *s)
                .unwrap_or(CheckItemStatus::Ok);
            prop_assert_eq!(list.status(key), expected);
        }
        prop_assert_eq!(
            list.has_failure(),
            CheckItemKey::ALL.iter().any(|k| list.status(*k) == CheckItemStatus::Fail)
        );
    }
}
