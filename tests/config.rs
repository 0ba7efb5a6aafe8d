#[cfg(test)]
mod tests {
    use klg::libs::config::{coerce_int, normalize_work_hours, validate_and_normalize_config, ConfigInput, Configuration};
    use serde_json::{json, Value};

    fn input(value: Value) -> ConfigInput {
        value.as_object().cloned().unwrap()
    }

    fn config(show_priority: bool, show_duration: bool, work_hours_per_day: u8) -> Configuration {
        Configuration {
            show_priority,
            show_duration,
            work_hours_per_day,
        }
    }

    #[test]
    fn test_default_config() {
        assert_eq!(Configuration::default(), config(true, true, 7));
    }

    #[test]
    fn test_resolve_without_record_returns_defaults() {
        assert_eq!(Configuration::resolve(None), config(true, true, 7));
    }

    #[test]
    fn test_resolve_reads_stored_record() {
        let record = input(json!({"show_priority": 1, "show_duration": 0, "work_hours_per_day": 8}));
        assert_eq!(Configuration::resolve(Some(&record)), config(true, false, 8));
    }

    #[test]
    fn test_resolve_treats_non_zero_flags_as_enabled() {
        let record = input(json!({"show_priority": 2, "show_duration": "1", "work_hours_per_day": 7}));
        assert_eq!(Configuration::resolve(Some(&record)), config(true, true, 7));
    }

    #[test]
    fn test_resolve_repairs_work_hours() {
        for hours in [json!(0), json!(25), json!(-4), json!("abc"), json!(null)] {
            let record = input(json!({"show_priority": 1, "show_duration": 1, "work_hours_per_day": hours}));
            assert_eq!(Configuration::resolve(Some(&record)).work_hours_per_day, 7);
        }
    }

    #[test]
    fn test_resolve_keeps_defaults_for_missing_keys() {
        let record = input(json!({"show_priority": 0}));
        assert_eq!(Configuration::resolve(Some(&record)), config(false, true, 7));
    }

    #[test]
    fn test_validate_for_save_repairs_out_of_range_hours() {
        let form = input(json!({"show_priority": 1, "show_duration": 0, "work_hours_per_day": 30}));
        assert_eq!(Configuration::validate_for_save(&form), config(true, false, 7));
    }

    #[test]
    fn test_validate_for_save_empty_input() {
        assert_eq!(Configuration::validate_for_save(&ConfigInput::new()), config(false, false, 7));
    }

    #[test]
    fn test_validate_for_save_flags_require_exactly_one() {
        let cases = [
            (json!(1), true),
            (json!("1"), true),
            (json!(" 1"), true),
            (json!(true), true),
            (json!(1.0), true),
            (json!(0), false),
            (json!(2), false),
            (json!("yes"), false),
            (json!(""), false),
            (json!(null), false),
            (json!([1]), false),
        ];

        for (value, expected) in cases {
            let form = input(json!({"show_priority": value.clone(), "show_duration": value.clone()}));
            let config = Configuration::validate_for_save(&form);
            assert_eq!(config.show_priority, expected, "show_priority for {}", value);
            assert_eq!(config.show_duration, expected, "show_duration for {}", value);
        }
    }

    #[test]
    fn test_validate_for_save_coerces_hours() {
        let cases = [
            (json!(1), 1),
            (json!(24), 24),
            (json!("8"), 8),
            (json!("8.5"), 8),
            (json!(6.9), 6),
            (json!("12 hours"), 12),
            (json!(0), 7),
            (json!(25), 7),
            (json!("-3"), 7),
            (json!("abc"), 7),
        ];

        for (value, expected) in cases {
            let form = input(json!({"work_hours_per_day": value.clone()}));
            assert_eq!(Configuration::validate_for_save(&form).work_hours_per_day, expected, "hours for {}", value);
        }
    }

    #[test]
    fn test_validate_and_normalize_config_matches_validate_for_save() {
        let form = input(json!({"show_priority": "1", "show_duration": "1", "work_hours_per_day": "6"}));
        assert_eq!(validate_and_normalize_config(&form), config(true, true, 6));
        assert_eq!(validate_and_normalize_config(&form), Configuration::validate_for_save(&form));
    }

    #[test]
    fn test_resubmitting_resolved_config_is_stable() {
        let records = [
            None,
            Some(input(json!({"show_priority": 1, "show_duration": 0, "work_hours_per_day": 8}))),
            Some(input(json!({"show_priority": 0, "show_duration": 0, "work_hours_per_day": 99}))),
            Some(input(json!({"show_priority": 5, "show_duration": "1", "work_hours_per_day": "24"}))),
        ];

        for record in records {
            let resolved = Configuration::resolve(record.as_ref());
            assert_eq!(Configuration::validate_for_save(&resolved.to_input()), resolved);
        }
    }

    #[test]
    fn test_to_input_encodes_flags_as_integers() {
        let encoded = config(true, false, 9).to_input();
        assert_eq!(encoded.get("show_priority"), Some(&json!(1)));
        assert_eq!(encoded.get("show_duration"), Some(&json!(0)));
        assert_eq!(encoded.get("work_hours_per_day"), Some(&json!(9)));
    }

    #[test]
    fn test_is_disabled() {
        assert!(config(false, false, 7).is_disabled());
        assert!(!config(true, false, 7).is_disabled());
        assert!(!config(false, true, 7).is_disabled());
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int(&json!(42)), Some(42));
        assert_eq!(coerce_int(&json!(" 42abc")), Some(42));
        assert_eq!(coerce_int(&json!("-5")), Some(-5));
        assert_eq!(coerce_int(&json!("+3")), Some(3));
        assert_eq!(coerce_int(&json!("")), Some(0));
        assert_eq!(coerce_int(&json!(false)), Some(0));
        assert_eq!(coerce_int(&json!(-2.7)), Some(-2));
        assert_eq!(coerce_int(&json!(null)), None);
        assert_eq!(coerce_int(&json!({"a": 1})), None);
    }

    #[test]
    fn test_normalize_work_hours() {
        assert_eq!(normalize_work_hours(1), 1);
        assert_eq!(normalize_work_hours(24), 24);
        assert_eq!(normalize_work_hours(0), 7);
        assert_eq!(normalize_work_hours(i64::MAX), 7);
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(config(true, false, 8)).unwrap();
        assert_eq!(json, json!({"show_priority": true, "show_duration": false, "work_hours_per_day": 8}));
    }

    #[test]
    fn test_config_deserializes_through_resolve() {
        let loaded: Configuration =
            serde_json::from_value(json!({"show_priority": 0, "work_hours_per_day": 30})).unwrap();
        assert_eq!(loaded, config(false, true, 7));

        let json = serde_json::to_value(config(true, false, 8)).unwrap();
        assert_eq!(serde_json::from_value::<Configuration>(json).unwrap(), config(true, false, 8));

        assert!(serde_json::from_value::<Configuration>(json!([1, 2])).is_err());
    }
}
