#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use vplan::libs::excursion::Excursion;
    use vplan::libs::vacation::{Vacation, DATE_NOT_SET};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_vacation_validation() {
        let vacation = Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10));
        assert!(vacation.validate().is_ok());

        let untitled = Vacation::new("  ", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10));
        assert!(untitled.validate().is_err());

        let no_lodging = Vacation::new("Lisbon", "", date(2024, 6, 1), date(2024, 6, 10));
        assert!(no_lodging.validate().is_err());

        let reversed = Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 10), date(2024, 6, 1));
        assert!(reversed.validate().is_err());
    }

    #[test]
    fn test_single_day_vacation_is_valid() {
        let vacation = Vacation::new("Day trip", "Cabin", date(2024, 6, 1), date(2024, 6, 1));
        assert!(vacation.validate().is_ok());
    }

    #[test]
    fn test_vacation_date_formatting() {
        let vacation = Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10));
        assert_eq!(vacation.start_date_formatted(), "2024-06-01");
        assert_eq!(vacation.end_date_formatted(), "2024-06-10");
        assert_eq!(vacation.range_formatted(), "2024-06-01 .. 2024-06-10");

        let mut unset = vacation.clone();
        unset.start_date = None;
        unset.end_date = None;
        assert_eq!(unset.start_date_formatted(), DATE_NOT_SET);
        assert_eq!(unset.end_date_formatted(), DATE_NOT_SET);
    }

    #[test]
    fn test_vacation_contains_inclusive_range() {
        let vacation = Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10));
        assert!(vacation.contains(date(2024, 6, 1)));
        assert!(vacation.contains(date(2024, 6, 5)));
        assert!(vacation.contains(date(2024, 6, 10)));
        assert!(!vacation.contains(date(2024, 5, 31)));
        assert!(!vacation.contains(date(2024, 6, 11)));
    }

    #[test]
    fn test_vacation_serializes_dates_in_wire_format() {
        let vacation = Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10));
        let json = serde_json::to_string(&vacation).unwrap();
        assert!(json.contains("\"2024-06-01\""));
        assert!(json.contains("\"2024-06-10\""));

        let back: Vacation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vacation);
    }

    #[test]
    fn test_excursion_validation_and_formatting() {
        let excursion = Excursion::new("Tram tour", 1, date(2024, 6, 3));
        assert!(excursion.validate().is_ok());
        assert_eq!(excursion.date_formatted(), "2024-06-03");

        let untitled = Excursion::new("", 1, date(2024, 6, 3));
        assert!(untitled.validate().is_err());

        let mut dateless = excursion.clone();
        dateless.date = None;
        assert!(dateless.validate().is_err());
        assert_eq!(dateless.date_formatted(), DATE_NOT_SET);
    }
}
