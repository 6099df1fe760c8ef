use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

static GLOBAL: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("static metric names are valid")));

/// Tellere for series-byggingen. Egen `Registry` per instans slik at tester
/// ikke deler tilstand; `global()` brukes i prod.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    series_built: IntCounter,
    observations_used: IntCounter,
    observations_dropped: IntCounter,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let series_built = IntCounter::new(
            "liftlog_series_built_total",
            "Number of daily progress series produced",
        )?;
        let observations_used = IntCounter::new(
            "liftlog_observations_used_total",
            "Observations that landed in a day bucket",
        )?;
        let observations_dropped = IntCounter::new(
            "liftlog_observations_dropped_total",
            "Observations skipped for bad date or non-finite weight",
        )?;
        registry.register(Box::new(series_built.clone()))?;
        registry.register(Box::new(observations_used.clone()))?;
        registry.register(Box::new(observations_dropped.clone()))?;
        Ok(Self {
            registry,
            series_built,
            observations_used,
            observations_dropped,
        })
    }

    pub fn global() -> Arc<Metrics> {
        Arc::clone(&GLOBAL)
    }

    pub fn series_built(&self) -> &IntCounter {
        &self.series_built
    }

    pub fn observations_used(&self) -> &IntCounter {
        &self.observations_used
    }

    pub fn observations_dropped(&self) -> &IntCounter {
        &self.observations_dropped
    }

    /// Prometheus tekstformat (for scraping/debug).
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            log::warn!("failed to encode metrics: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("series_built", &self.series_built.get())
            .field("observations_used", &self.observations_used.get())
            .field("observations_dropped", &self.observations_dropped.get())
            .finish()
    }
}
