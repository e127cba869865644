//! Property tests for the odometer mask and the note limit.

use proptest::prelude::*;

use fleetcheck::domain::value_objects::{NoteInput, OdometerInput, NOTE_MAX_LENGTH};

fn odometer_like() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[0-9]{0,7}(\\.[0-9]{0,3})?").unwrap(),
        proptest::string::string_regex("[0-9.,a-z -]{0,10}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The odometer text only ever holds digits and at most one
    /// point; a rejected edit leaves the previous text in place.
    #[test]
    fn property_odometer_text_stays_masked(
        edits in prop::collection::vec(odometer_like(), 1..16)
    ) {
        let mut odometer = OdometerInput::default();
        for edit in &edits {
            let before = odometer.as_str().to_string();
            let applied = odometer.input(edit);

            let valid = edit.chars().all(|c| c.is_ascii_digit() || c == '.')
                && edit.matches('.').count() <= 1;
            prop_assert_eq!(applied, valid);
            if !applied {
                prop_assert_eq!(odometer.as_str(), before.as_str());
            }
        }

        let text = odometer.as_str();
        prop_assert!(text.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(text.matches('.').count() <= 1);
        if let Some(km) = odometer.parse() {
            prop_assert!(km.is_finite() && km >= 0.0);
        }
    }

    /// PROPERTY: The note never exceeds the limit and the payload is trimmed
    /// or absent.
    #[test]
    fn property_note_limit_and_payload(
        edits in prop::collection::vec(".{0,320}", 1..6)
    ) {
        let mut note = NoteInput::default();
        for edit in &edits {
            let applied = note.input(edit);
            prop_assert_eq!(applied, edit.chars().count() <= NOTE_MAX_LENGTH);
        }

        prop_assert!(note.len() <= NOTE_MAX_LENGTH);
        prop_assert_eq!(note.counter(), format!("{}/{}", note.len(), NOTE_MAX_LENGTH));
        match note.payload() {
            None => prop_assert!(note.as_str().trim().is_empty()),
            Some(payload) => {
                prop_assert_eq!(payload.as_str(), note.as_str().trim());
                prop_assert!(!payload.is_empty());
            }
        }
    }
}
