use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;

use crate::dates::query_params;
use crate::error::{ProgressError, Result};
use crate::models::{DateInterval, Observation, ReportConfig};

/// Kilde for vektobservasjoner per øvelse og datointervall
/// (prod: HttpProgressSource, test: StaticProgressSource)
pub trait ProgressSource {
    fn fetch_progress(&self, exercise_id: &str, interval: &DateInterval) -> Result<Vec<Observation>>;
}

/// Fast liste, uavhengig av øvelse/intervall. Byggeren filtrerer på dato selv.
#[derive(Debug, Clone, Default)]
pub struct StaticProgressSource {
    pub observations: Vec<Observation>,
}

impl ProgressSource for StaticProgressSource {
    fn fetch_progress(&self, _exercise_id: &str, _interval: &DateInterval) -> Result<Vec<Observation>> {
        Ok(self.observations.clone())
    }
}

// API-feil kommer som { "message": "..." }
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// REST-klient mot `/api/exercises/{id}/weight-progress` – enkel blocking-versjon (ureq)
pub struct HttpProgressSource {
    agent: Agent,
    base_url: String,
    token: String,
}

impl HttpProgressSource {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn from_config(cfg: &ReportConfig, token: impl Into<String>) -> Self {
        Self::new(cfg.backend_url.clone(), token)
    }

    pub fn progress_url(&self, exercise_id: &str) -> String {
        format!("{}/api/exercises/{}/weight-progress", self.base_url, exercise_id)
    }
}

impl ProgressSource for HttpProgressSource {
    fn fetch_progress(&self, exercise_id: &str, interval: &DateInterval) -> Result<Vec<Observation>> {
        let url = self.progress_url(exercise_id);
        let (start, end) = query_params(interval);
        log::info!("fetching progress for exercise {exercise_id} ({start} .. {end})");

        let resp = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .query("startDate", &start)
            .query("endDate", &end)
            .call()
            .map_err(http_error)?;

        let observations: Vec<Observation> = resp
            .into_json()
            .map_err(|e| ProgressError::Json(e.to_string()))?;
        log::debug!("received {} observations for exercise {exercise_id}", observations.len());
        Ok(observations)
    }
}

fn http_error(err: ureq::Error) -> ProgressError {
    match err {
        ureq::Error::Status(code, resp) => {
            let message = resp
                .into_json::<ApiErrorBody>()
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("HTTP status {code}"));
            ProgressError::Http(message)
        }
        other => ProgressError::Http(other.to_string()),
    }
}
