use chrono::NaiveDate;
use liftlog_core::{build_series, build_series_between, DailySample, DateInterval, Observation, ProgressError};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn iv(a: &str, b: &str) -> DateInterval {
    DateInterval::new(d(a), d(b)).unwrap()
}

fn sample_obs() -> Vec<Observation> {
    vec![
        Observation::new("2024-01-01T08:00:00", 80.0),
        Observation::new("2024-01-01T18:00:00", 95.0),
        Observation::new("2024-01-03T09:00:00", 100.0),
    ]
}

#[test]
fn concrete_three_day_scenario() {
    let out = build_series(&sample_obs(), &iv("2024-01-01", "2024-01-03"));
    assert_eq!(
        out,
        vec![
            DailySample { date: d("2024-01-01"), weight: Some(95.0) },
            DailySample { date: d("2024-01-02"), weight: None },
            DailySample { date: d("2024-01-03"), weight: Some(100.0) },
        ]
    );
}

#[test]
fn length_matches_inclusive_day_count() {
    let obs = sample_obs();
    for (a, b) in [
        ("2024-01-01", "2024-01-01"),
        ("2023-12-25", "2024-01-07"),
        ("2024-02-01", "2024-03-01"),
        ("2023-01-01", "2023-12-31"),
    ] {
        let interval = iv(a, b);
        let out = build_series(&obs, &interval);
        let expected = (d(b) - d(a)).num_days() as usize + 1;
        assert_eq!(out.len(), expected, "{a}..={b}");
        assert_eq!(out.len(), interval.days());
    }
}

#[test]
fn dates_are_strictly_ascending_without_gaps() {
    let out = build_series(&sample_obs(), &iv("2023-12-30", "2024-01-05"));
    assert_eq!(out.first().unwrap().date, d("2023-12-30"));
    assert_eq!(out.last().unwrap().date, d("2024-01-05"));
    for pair in out.windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }
}

#[test]
fn input_order_does_not_matter() {
    let interval = iv("2024-01-01", "2024-01-03");
    let base = sample_obs();
    let expected = build_series(&base, &interval);

    let mut reversed = base.clone();
    reversed.reverse();
    assert_eq!(build_series(&reversed, &interval), expected);

    for k in 1..base.len() {
        let mut rotated = base.clone();
        rotated.rotate_left(k);
        assert_eq!(build_series(&rotated, &interval), expected);
    }

    // kjøres to ganger => likt
    assert_eq!(build_series(&base, &interval), expected);
}

#[test]
fn empty_input_gives_all_nulls() {
    let out = build_series(&[], &iv("2024-05-01", "2024-05-10"));
    assert_eq!(out.len(), 10);
    assert!(out.iter().all(|s| s.weight.is_none()));
}

#[test]
fn same_day_keeps_max_not_sum_or_last() {
    let obs = vec![
        Observation::new("2024-01-01T10:00:00", 95.0),
        Observation::new("2024-01-01T11:00:00", 80.0),
    ];
    let out = build_series(&obs, &iv("2024-01-01", "2024-01-01"));
    assert_eq!(out[0].weight, Some(95.0));
}

#[test]
fn single_day_interval_with_one_match() {
    let obs = vec![Observation::new("2024-06-15T12:34:56", 42.5)];
    let out = build_series(&obs, &DateInterval::single_day(d("2024-06-15")));
    assert_eq!(out, vec![DailySample { date: d("2024-06-15"), weight: Some(42.5) }]);
}

#[test]
fn observation_late_on_end_date_is_included() {
    let obs = vec![
        Observation::new("2024-01-03T23:59:59", 110.0),
        Observation::new("2024-01-04T00:00:00", 999.0),
        Observation::new("2023-12-31T23:59:59", 999.0),
    ];
    let out = build_series(&obs, &iv("2024-01-01", "2024-01-03"));
    assert_eq!(out.last().unwrap().weight, Some(110.0));
    assert!(out.iter().all(|s| s.weight != Some(999.0)));
}

#[test]
fn bad_dates_are_skipped_not_fatal() {
    let mut obs = sample_obs();
    obs.push(Observation::new("garbage", 500.0));
    obs.push(Observation::new("", 500.0));
    let out = build_series(&obs, &iv("2024-01-01", "2024-01-03"));
    assert_eq!(out[0].weight, Some(95.0));
    assert_eq!(out[2].weight, Some(100.0));
}

#[test]
fn reversed_interval_is_rejected() {
    let err = build_series_between(&sample_obs(), d("2024-01-03"), d("2024-01-01")).unwrap_err();
    match err {
        ProgressError::InvalidInterval { start, end } => {
            assert_eq!(start, d("2024-01-03"));
            assert_eq!(end, d("2024-01-01"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn series_serializes_null_weights_for_chart() {
    let out = build_series(&sample_obs(), &iv("2024-01-02", "2024-01-03"));
    let json = serde_json::to_string(&out).unwrap();
    assert_eq!(
        json,
        r#"[{"date":"2024-01-02","weight":null},{"date":"2024-01-03","weight":100.0}]"#
    );
}
