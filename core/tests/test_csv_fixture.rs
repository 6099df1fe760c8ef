// Ekte-ish logg fra en benkpress-periode (fixtures/bench_press.csv)
use chrono::NaiveDate;
use liftlog_core::{DateInterval, Observation, ProgressSeriesBuilder, ProgressStats};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Row {
    workout_date: String,
    weight: f64,
    #[allow(dead_code)]
    reps: u32,
}

fn load_fixture() -> Vec<Observation> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bench_press.csv");
    let mut rdr = csv::Reader::from_path(path).expect("open fixture");
    rdr.deserialize::<Row>()
        .map(|r| r.expect("fixture row"))
        .map(|r| Observation::new(r.workout_date, r.weight))
        .collect()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn fixture_builds_gap_filled_series() {
    let obs = load_fixture();
    let interval = DateInterval::new(d(2024, 3, 1), d(2024, 3, 9)).unwrap();
    let series = ProgressSeriesBuilder::new().build(&obs, &interval);

    let weights: Vec<Option<f64>> = series.iter().map(|s| s.weight).collect();
    assert_eq!(
        weights,
        vec![
            Some(65.0), // 1.: maks av 60 / 65 / 62.5
            None,
            Some(70.0),
            None,
            None,
            Some(72.5), // +01:00, samme dag i egen veggklokke
            None,
            None,
            Some(75.0), // 10. mars er utenfor
        ]
    );

    let stats = ProgressStats::from_series(&series);
    assert_eq!(stats.max, 75.0);
    assert_eq!(stats.min, 65.0);
    assert_eq!(stats.avg, 70.6); // (65 + 70 + 72.5 + 75) / 4 = 70.625
    assert_eq!(stats.improvement_pct, 15.4); // (75 - 65) / 65
}

#[test]
fn fixture_early_morning_sets_move_with_utc_offset() {
    let obs = load_fixture();
    let interval = DateInterval::new(d(2024, 3, 5), d(2024, 3, 6)).unwrap();

    // 06:30+01:00 = 05:30Z; i UTC-06:00 er det fortsatt 5. mars
    let series = ProgressSeriesBuilder::new()
        .with_utc_offset_minutes(-6 * 60)
        .build(&obs, &interval);
    assert_eq!(series[0].weight, Some(72.5));
    assert_eq!(series[1].weight, None);
}
