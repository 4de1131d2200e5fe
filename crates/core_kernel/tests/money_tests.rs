//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic, parsing, display
//! and rate application.

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_exact_amount() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_from_cents_converts_correctly() {
        assert_eq!(Money::from_cents(10050).amount(), dec!(100.50));
    }

    #[test]
    fn test_from_dollars() {
        assert_eq!(Money::from_dollars(20).amount(), dec!(20));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_negative() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::zero().is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let a = Money::from_dollars(100);
        let b = Money::from_dollars(30);
        assert_eq!((a + b).amount(), dec!(130));
        assert_eq!((a - b).amount(), dec!(70));
        assert_eq!((b - a).amount(), dec!(-70));
    }

    #[test]
    fn test_per_unit() {
        assert_eq!(Money::from_dollars(10).per_unit(10), Money::from_dollars(100));
        assert!(Money::from_dollars(10).per_unit(0).is_zero());
    }

    #[test]
    fn test_multiply_operator() {
        assert_eq!((Money::from_dollars(100) * dec!(0.025)).amount(), dec!(2.5));
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(12562) < Money::from_cents(12563));
        assert!(Money::new(dec!(125.625)) > Money::from_cents(12562));
    }
}

mod display_and_parse {
    use super::*;

    #[test]
    fn test_display_pads_two_places() {
        assert_eq!(Money::from_dollars(5).to_string(), "$5.00");
    }

    #[test]
    fn test_display_rounds_extra_precision() {
        assert_eq!(Money::new(dec!(10.004)).to_string(), "$10.00");
        assert_eq!(Money::new(dec!(10.006)).to_string(), "$10.01");
    }

    #[test]
    fn test_display_rounds_halves_up() {
        assert_eq!(Money::new(dec!(125.625)).to_string(), "$125.63");
        assert_eq!(Money::new(dec!(0.125)).rounded().amount(), dec!(0.13));
    }

    #[test]
    fn test_parse_plain_and_prefixed() {
        assert_eq!("12.5".parse::<Money>().unwrap().amount(), dec!(12.5));
        assert_eq!(" $12.5 ".parse::<Money>().unwrap().amount(), dec!(12.5));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let result = "twelve".parse::<Money>();
        assert_eq!(result, Err(MoneyError::InvalidAmount("twelve".to_string())));
    }

    #[test]
    fn test_json_is_transparent_decimal() {
        let m = Money::from_cents(1999);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_display_as_percentage() {
        let rate = Rate::new(dec!(0.025));
        assert_eq!(rate.to_string(), "2.5%");
    }

    #[test]
    fn test_rate_apply() {
        let rate = Rate::new(dec!(0.025));
        let charged = rate.apply(&Money::from_dollars(25));
        assert_eq!(charged.amount(), dec!(0.625));
    }

    #[test]
    fn test_zero_rate() {
        let rate = Rate::new(Decimal::ZERO);
        assert!(rate.apply(&Money::from_dollars(99)).is_zero());
    }
}
