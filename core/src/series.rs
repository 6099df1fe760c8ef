use std::collections::HashMap;
use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use ordered_float::OrderedFloat;

use crate::dates::{offset_from_minutes, parse_timestamp};
use crate::error::Result;
use crate::models::{DailySample, DateInterval, Observation, ReportConfig};
use crate::telemetry::Metrics;

/// Bygger en hullfri, daglig vektserie for grafen.
///
/// 1) filtrer bort observasjoner utenfor `[start, end]`
/// 2) bøtt per kalenderdato (klokkeslett ignoreres)
/// 3) behold maks vekt per dag
/// 4) gå hver dag fra start til og med end; `None` der dagen mangler data
///
/// Ren funksjon av input: rekkefølgen på `observations` påvirker ikke resultatet.
#[derive(Debug, Clone, Default)]
pub struct ProgressSeriesBuilder {
    local_offset: Option<FixedOffset>,
    metrics: Option<Arc<Metrics>>,
}

impl ProgressSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prod-oppsett: offset fra konfig og globale tellere.
    pub fn from_config(cfg: &ReportConfig) -> Self {
        let builder = Self::new().with_metrics(Metrics::global());
        match cfg.utc_offset_minutes {
            Some(min) => builder.with_utc_offset_minutes(min),
            None => builder,
        }
    }

    /// Lokal tidssone for tidsstempler med offset. Uten denne brukes
    /// veggklokkedatoen i tidsstempelet selv.
    pub fn with_local_offset(mut self, offset: FixedOffset) -> Self {
        self.local_offset = Some(offset);
        self
    }

    /// Som `with_local_offset`, men i minutter. Ugyldig offset ignoreres (logges).
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        match offset_from_minutes(minutes) {
            Some(tz) => self.local_offset = Some(tz),
            None => log::warn!("ignoring out-of-range utc offset: {minutes} min"),
        }
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(&self, observations: &[Observation], interval: &DateInterval) -> Vec<DailySample> {
        let buckets = self.bucket_max_by_day(observations, interval);

        let series: Vec<DailySample> = interval
            .iter_days()
            .map(|date| DailySample {
                date,
                weight: buckets.get(&date).map(|w| w.into_inner()),
            })
            .collect();

        log::debug!(
            "progress series {}..={}: {} days, {} with data",
            interval.start(),
            interval.end(),
            series.len(),
            buckets.len()
        );
        if let Some(m) = &self.metrics {
            m.series_built().inc();
        }
        series
    }

    fn bucket_max_by_day(
        &self,
        observations: &[Observation],
        interval: &DateInterval,
    ) -> HashMap<NaiveDate, OrderedFloat<f64>> {
        let mut buckets: HashMap<NaiveDate, OrderedFloat<f64>> = HashMap::new();
        let mut used = 0u64;
        let mut dropped = 0u64;

        for obs in observations {
            let Some(raw_date) = obs.workout_date.as_deref() else {
                log::warn!("skipping observation without workout date (weight {})", obs.weight);
                dropped += 1;
                continue;
            };
            let ts = match parse_timestamp(raw_date) {
                Ok(ts) => ts,
                Err(_) => {
                    log::warn!("skipping observation with unparseable date {raw_date:?}");
                    dropped += 1;
                    continue;
                }
            };
            if !obs.weight.is_finite() {
                log::warn!(
                    "skipping observation on {raw_date} with non-finite weight {}",
                    obs.weight
                );
                dropped += 1;
                continue;
            }

            let day = ts.calendar_date(self.local_offset);
            if !interval.contains(day) {
                continue;
            }

            let w = OrderedFloat(obs.weight);
            buckets
                .entry(day)
                .and_modify(|cur| *cur = (*cur).max(w))
                .or_insert(w);
            used += 1;
        }

        if let Some(m) = &self.metrics {
            m.observations_used().inc_by(used);
            m.observations_dropped().inc_by(dropped);
        }
        buckets
    }
}

/// `ProgressSeriesBuilder` med standardoppsett.
pub fn build_series(observations: &[Observation], interval: &DateInterval) -> Vec<DailySample> {
    ProgressSeriesBuilder::new().build(observations, interval)
}

/// Som `build_series`, men validerer `start <= end` først.
pub fn build_series_between(
    observations: &[Observation],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailySample>> {
    let interval = DateInterval::new(start, end)?;
    Ok(build_series(observations, &interval))
}
