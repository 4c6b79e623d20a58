/// Tests for the synthetic analytics generators: historical series shape,
/// period window resolution, royalty payment invariants, and category
/// distributions.

#[cfg(test)]
mod history_series_tests {
    use chrono::{Duration, NaiveDate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;
    use scene_core::analytics::generate_series;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_series_has_days_plus_one_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series(7, 1000.0, 0.2, 0.1, today(), &mut rng);
        assert_eq!(series.len(), 8, "7-day window must produce 8 points");
    }

    #[test]
    fn test_series_dates_ascend_by_one_calendar_day() {
        let mut rng = StdRng::seed_from_u64(11);
        let series = generate_series(30, 500.0, 0.3, 0.2, today(), &mut rng);

        for pair in series.windows(2) {
            assert_eq!(
                pair[1].date - pair[0].date,
                Duration::days(1),
                "consecutive points must be one calendar day apart"
            );
        }
        assert_eq!(series.first().unwrap().date, today() - Duration::days(30));
        assert_eq!(series.last().unwrap().date, today());
    }

    #[test]
    fn test_final_point_pinned_to_current_value() {
        // Run several seeds: the pin must hold regardless of the walk.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = generate_series(7, 1000.0, 0.2, 0.1, today(), &mut rng);
            let last = series.last().unwrap();
            assert_eq!(last.date, today());
            assert_eq!(last.value, dec!(1000), "seed {} broke the pin", seed);
        }
    }

    #[test]
    fn test_zero_days_yields_single_current_point() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_series(0, 250.5, 0.4, 0.3, today(), &mut rng);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, today());
        assert_eq!(series[0].value, dec!(250.5));
    }

    #[test]
    fn test_values_are_positive_and_two_decimal_places() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = generate_series(90, 12_450_000.0, 0.08, 0.35, today(), &mut rng);

        for point in &series {
            assert!(point.value > dec!(0), "value must stay positive");
            assert_eq!(
                point.value,
                point.value.round_dp(2),
                "values are rounded to cents"
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_series() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_series(14, 800.0, 0.2, 0.1, today(), &mut a),
            generate_series(14, 800.0, 0.2, 0.1, today(), &mut b),
        );
    }
}

#[cfg(test)]
mod period_tests {
    use chrono::NaiveDate;
    use scene_core::analytics::Period;

    #[test]
    fn test_ytd_resolves_to_january_first() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let window = Period::YearToDate.resolve(today);

        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(window.end, today);
        assert_eq!(window.day_diff(), 180);
    }

    #[test]
    fn test_fixed_windows() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(Period::SevenDays.resolve(today).day_diff(), 7);
        assert_eq!(Period::ThirtyDays.resolve(today).day_diff(), 30);
        assert_eq!(Period::NinetyDays.resolve(today).day_diff(), 90);
        assert_eq!(Period::OneYear.resolve(today).day_diff(), 365);
    }

    #[test]
    fn test_ytd_on_new_years_day_is_empty_window() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let window = Period::YearToDate.resolve(today);
        assert_eq!(window.day_diff(), 0);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(Period::parse("7d").unwrap(), Period::SevenDays);
        assert_eq!(Period::parse("YTD").unwrap(), Period::YearToDate);
        assert_eq!(Period::parse(" 1y ").unwrap(), Period::OneYear);
        assert!(Period::parse("2w").is_err());
        assert!(Period::parse("").is_err());
    }
}

#[cfg(test)]
mod royalty_payment_tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;
    use scene_core::analytics::{generate_payments, Period};
    use scene_core::catalog::PROJECTS;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_ytd_count_clamps_at_maximum() {
        // day_diff 180 -> 360 candidate payments, clamped to 100.
        let window = Period::YearToDate.resolve(fixed_today());
        let mut rng = StdRng::seed_from_u64(1);
        let payments = generate_payments(&window, &mut rng);
        assert_eq!(payments.len(), 100);
    }

    #[test]
    fn test_seven_day_count_is_twice_day_diff() {
        let window = Period::SevenDays.resolve(fixed_today());
        let mut rng = StdRng::seed_from_u64(2);
        let payments = generate_payments(&window, &mut rng);
        assert_eq!(payments.len(), 14);
    }

    #[test]
    fn test_empty_window_clamps_at_minimum() {
        // ytd requested on Jan 1: day_diff 0, still 10 payments, flat base.
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let window = Period::YearToDate.resolve(today);
        let mut rng = StdRng::seed_from_u64(3);
        let payments = generate_payments(&window, &mut rng);

        assert_eq!(payments.len(), 10);
        for payment in &payments {
            assert!(
                payment.amount >= dec!(50) && payment.amount <= dec!(150),
                "flat base factor bounds amounts to [50, 150], got {}",
                payment.amount
            );
        }
    }

    #[test]
    fn test_category_always_matches_project_catalog() {
        let window = Period::OneYear.resolve(fixed_today());
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for payment in generate_payments(&window, &mut rng) {
                let project = PROJECTS
                    .iter()
                    .find(|p| p.name == payment.project)
                    .expect("payment references a catalog project");
                assert_eq!(payment.category, project.category);
            }
        }
    }

    #[test]
    fn test_payments_sorted_newest_first() {
        let window = Period::NinetyDays.resolve(fixed_today());
        let mut rng = StdRng::seed_from_u64(5);
        let payments = generate_payments(&window, &mut rng);

        for pair in payments.windows(2) {
            assert!(pair[0].date >= pair[1].date, "dates must be non-increasing");
        }
    }

    #[test]
    fn test_payment_dates_stay_inside_window() {
        let window = Period::ThirtyDays.resolve(fixed_today());
        let mut rng = StdRng::seed_from_u64(6);
        for payment in generate_payments(&window, &mut rng) {
            let day = payment.date.date();
            assert!(day >= window.start && day <= window.end);
        }
    }

    #[test]
    fn test_amounts_bounded_by_base_and_random_factor() {
        // base in [1, 2], random factor in [0.5, 1.5] -> amount in [50, 300].
        let window = Period::ThirtyDays.resolve(fixed_today());
        let mut rng = StdRng::seed_from_u64(7);
        for payment in generate_payments(&window, &mut rng) {
            assert!(payment.amount >= dec!(50) && payment.amount <= dec!(300));
        }
    }
}

#[cfg(test)]
mod distribution_tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use scene_core::analytics::distribute;
    use scene_core::catalog::Category;

    #[test]
    fn test_two_category_split() {
        let (total, distribution) = distribute(vec![
            (Category::Film, dec!(100)),
            (Category::Art, dec!(300)),
        ]);

        assert_eq!(total, dec!(400));
        assert_eq!(distribution.categories.len(), 2);

        let film = &distribution.categories[0];
        assert_eq!(film.category, Category::Film);
        assert_eq!(film.value, dec!(100));
        assert_eq!(film.percentage, dec!(25));

        let art = &distribution.categories[1];
        assert_eq!(art.category, Category::Art);
        assert_eq!(art.value, dec!(300));
        assert_eq!(art.percentage, dec!(75));
    }

    #[test]
    fn test_zero_total_yields_zero_percentages() {
        let (total, distribution) = distribute(vec![
            (Category::Film, dec!(0)),
            (Category::Music, dec!(0)),
            (Category::Gaming, dec!(0)),
        ]);

        assert_eq!(total, dec!(0));
        assert_eq!(distribution.categories.len(), 3);
        for share in &distribution.categories {
            assert_eq!(share.percentage, dec!(0), "never NaN, never infinite");
        }
    }

    #[test]
    fn test_empty_input_is_empty_distribution() {
        let (total, distribution) = distribute(Vec::new());
        assert_eq!(total, dec!(0));
        assert!(distribution.categories.is_empty());
    }

    #[test]
    fn test_category_values_sum_to_total() {
        let entries = vec![
            (Category::Film, dec!(120.55)),
            (Category::Music, dec!(89.10)),
            (Category::Film, dec!(14.35)),
            (Category::Literature, dec!(230.00)),
            (Category::Gaming, dec!(0.01)),
        ];
        let (total, distribution) = distribute(entries);

        let sum: Decimal = distribution.categories.iter().map(|s| s.value).sum();
        assert_eq!(sum, total);
        assert_eq!(total, dec!(454.01));
    }

    #[test]
    fn test_repeated_categories_merge() {
        let (_, distribution) = distribute(vec![
            (Category::Music, dec!(10)),
            (Category::Music, dec!(30)),
        ]);
        assert_eq!(distribution.categories.len(), 1);
        assert_eq!(distribution.categories[0].value, dec!(40));
        assert_eq!(distribution.categories[0].percentage, dec!(100));
    }
}
