use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::dates::parse_timestamp;
use crate::error::{ProgressError, Result};
use crate::models::{DailySample, DateInterval, Observation};
use crate::series::ProgressSeriesBuilder;
use crate::source::ProgressSource;
use crate::stats::ProgressStats;
use crate::telemetry::Metrics;

/// Alt grafen og sammendragskortene trenger for én øvelse og ett intervall.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    pub interval: DateInterval,
    pub series: Vec<DailySample>,
    pub stats: ProgressStats,
    pub days_with_data: usize,
}

impl ProgressReport {
    pub fn from_observations(
        exercise_id: Option<String>,
        observations: &[Observation],
        interval: DateInterval,
        builder: &ProgressSeriesBuilder,
    ) -> Self {
        let series = builder.build(observations, &interval);
        let stats = ProgressStats::from_series(&series);
        let days_with_data = ProgressStats::days_with_data(&series);
        Self {
            exercise_id,
            interval,
            series,
            stats,
            days_with_data,
        }
    }
}

/// Henter observasjoner fra `source` og bygger rapporten.
pub fn build_report(
    source: &dyn ProgressSource,
    exercise_id: &str,
    interval: DateInterval,
    builder: &ProgressSeriesBuilder,
) -> Result<ProgressReport> {
    let observations = source.fetch_progress(exercise_id, &interval)?;
    Ok(ProgressReport::from_observations(
        Some(exercise_id.to_string()),
        &observations,
        interval,
        builder,
    ))
}

// JSON-inngang: { observations, startDate, endDate, utcOffsetMinutes?, exerciseId? }
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest {
    #[serde(default)]
    observations: Vec<Observation>,
    start_date: String,
    end_date: String,
    #[serde(default)]
    utc_offset_minutes: Option<i32>,
    #[serde(default)]
    exercise_id: Option<String>,
}

fn parse_request(json_in: &str) -> Result<ReportRequest> {
    let de = &mut serde_json::Deserializer::from_str(json_in);
    spte::deserialize(de).map_err(|e| {
        let path = e.path().to_string();
        ProgressError::Json(format!("{path}: {}", e.into_inner()))
    })
}

/// Grensedato fra datovelger/API: bare kalenderdatoen brukes.
fn boundary_date(raw: &str) -> Result<chrono::NaiveDate> {
    Ok(parse_timestamp(raw)?.wall_clock().date())
}

/// JSON inn, JSON ut. Brukes av Python-bindingen og av verktøy som ikke linker Rust-typene.
pub fn build_report_json(json_in: &str) -> Result<String> {
    let req = parse_request(json_in)?;
    let interval = DateInterval::new(boundary_date(&req.start_date)?, boundary_date(&req.end_date)?)?;

    let mut builder = ProgressSeriesBuilder::new().with_metrics(Metrics::global());
    if let Some(min) = req.utc_offset_minutes {
        builder = builder.with_utc_offset_minutes(min);
    }

    let report = ProgressReport::from_observations(req.exercise_id, &req.observations, interval, &builder);
    Ok(serde_json::to_string(&report)?)
}
