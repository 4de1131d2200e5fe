//! Unit tests for the Identifiers module
//!
//! Tests cover bill identifier parsing and display, the bill sequence,
//! and username comparisons.

use core_kernel::{BillId, BillSequence, CoreError, Username};

mod bill_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(BillId::prefix(), "BILL");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(BillId::from_raw(12).to_string(), "BILL-12");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let parsed: BillId = "BILL-3".parse().unwrap();
        assert_eq!(parsed, BillId::from_raw(3));
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: BillId = "3".parse().unwrap();
        assert_eq!(parsed.value(), 3);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        let result = "BILL-x".parse::<BillId>();
        assert!(matches!(result, Err(CoreError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_ordering_follows_sequence_number() {
        assert!(BillId::from_raw(2) > BillId::from_raw(1));
    }

    #[test]
    fn test_json_serialization_is_a_plain_number() {
        let id = BillId::from_raw(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let deserialized: BillId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod sequence_tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut sequence = BillSequence::new();
        let ids: Vec<BillId> = (0..50).map(|_| sequence.next_id()).collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_last_issued_tracks_latest() {
        let mut sequence = BillSequence::new();
        let id = sequence.next_id();
        assert_eq!(sequence.last_issued(), Some(id));
    }
}

mod username_tests {
    use super::*;

    #[test]
    fn test_from_string_and_str_agree() {
        assert_eq!(Username::from("bob"), Username::from("bob".to_string()));
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Username::from("Bob"), Username::from("bob"));
    }

    #[test]
    fn test_json_serialization_is_a_plain_string() {
        let json = serde_json::to_string(&Username::new("carol")).unwrap();
        assert_eq!(json, "\"carol\"");
    }
}
