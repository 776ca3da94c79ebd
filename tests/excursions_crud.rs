#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vplan::db::excursions::Excursions;
    use vplan::db::vacations::Vacations;
    use vplan::libs::excursion::Excursion;
    use vplan::libs::vacation::Vacation;

    struct ExcursionTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExcursionTestContext {
        fn setup() -> Self {
            ExcursionTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ExcursionTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("vplan.db")
        }

        fn vacation_id(&self) -> i64 {
            let mut vacations = Vacations::open(&self.db_path()).unwrap();
            let vacation = Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10));
            vacations.insert(&vacation).unwrap()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(ExcursionTestContext)]
    #[test]
    fn test_insert_and_fetch_excursion(ctx: &mut ExcursionTestContext) {
        let vacation_id = ctx.vacation_id();
        let mut excursions = Excursions::open(&ctx.db_path()).unwrap();

        let excursion = Excursion::new("Tram tour", vacation_id, date(2024, 6, 3));
        let id = excursions.insert(&excursion).unwrap();
        assert!(id > 0);

        let all = excursions.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(id));
        assert_eq!(all[0].title, "Tram tour");
        assert_eq!(all[0].date, Some(date(2024, 6, 3)));
        assert_eq!(all[0].vacation_id, vacation_id);
    }

    #[test_context(ExcursionTestContext)]
    #[test]
    fn test_orphan_insert_is_rejected(ctx: &mut ExcursionTestContext) {
        let mut excursions = Excursions::open(&ctx.db_path()).unwrap();

        let orphan = Excursion::new("Tram tour", 999, date(2024, 6, 3));
        assert!(excursions.insert(&orphan).is_err());
        assert!(excursions.fetch_all().unwrap().is_empty());
    }

    #[test_context(ExcursionTestContext)]
    #[test]
    fn test_update_excursion(ctx: &mut ExcursionTestContext) {
        let vacation_id = ctx.vacation_id();
        let mut excursions = Excursions::open(&ctx.db_path()).unwrap();

        let id = excursions.insert(&Excursion::new("Tram tour", vacation_id, date(2024, 6, 3))).unwrap();

        let mut updated = excursions.fetch_all().unwrap().remove(0);
        updated.title = "Boat trip".to_string();
        updated.date = Some(date(2024, 6, 4));
        let affected = excursions.update(&updated).unwrap();
        assert_eq!(affected, 1);

        let all = excursions.fetch_all().unwrap();
        assert_eq!(all[0].id, Some(id));
        assert_eq!(all[0].title, "Boat trip");
        assert_eq!(all[0].date, Some(date(2024, 6, 4)));
    }

    #[test_context(ExcursionTestContext)]
    #[test]
    fn test_delete_excursion_unblocks_vacation(ctx: &mut ExcursionTestContext) {
        let vacation_id = ctx.vacation_id();
        let mut vacations = Vacations::open(&ctx.db_path()).unwrap();
        let mut excursions = Excursions::open(&ctx.db_path()).unwrap();

        let id = excursions.insert(&Excursion::new("Tram tour", vacation_id, date(2024, 6, 3))).unwrap();
        assert!(vacations.delete(vacation_id).is_err());

        excursions.delete(id).unwrap();
        assert_eq!(vacations.delete(vacation_id).unwrap(), 1);
    }

    #[test_context(ExcursionTestContext)]
    #[test]
    fn test_fetch_for_vacation_filters_and_orders(ctx: &mut ExcursionTestContext) {
        let first = ctx.vacation_id();
        let mut vacations = Vacations::open(&ctx.db_path()).unwrap();
        let second = vacations
            .insert(&Vacation::new("Porto", "Ribeira Guesthouse", date(2024, 7, 1), date(2024, 7, 5)))
            .unwrap();

        let mut excursions = Excursions::open(&ctx.db_path()).unwrap();
        excursions.insert(&Excursion::new("Tram tour", first, date(2024, 6, 3))).unwrap();
        excursions.insert(&Excursion::new("River cruise", second, date(2024, 7, 2))).unwrap();
        excursions.insert(&Excursion::new("Castle walk", first, date(2024, 6, 5))).unwrap();

        let for_first = excursions.fetch_for_vacation(first).unwrap();
        let titles: Vec<&str> = for_first.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Tram tour", "Castle walk"]);
        assert!(for_first.iter().all(|e| e.vacation_id == first));
    }
}
