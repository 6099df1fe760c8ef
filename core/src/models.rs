use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProgressError, Result};

/// Én logget vekt (ett sett) slik API-et returnerer den.
/// `workout_date` holdes som rå streng; parsing skjer i series-byggeren
/// slik at én ødelagt dato ikke velter hele batchen. Manglende, `null`
/// eller ikke-streng dato blir `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default, deserialize_with = "lenient_date")]
    pub workout_date: Option<String>,
    pub weight: f64,
}

impl Observation {
    pub fn new(workout_date: impl Into<String>, weight: f64) -> Self {
        Self {
            workout_date: Some(workout_date.into()),
            weight,
        }
    }
}

fn lenient_date<'de, D>(d: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match RawDate::deserialize(d)? {
        RawDate::Text(s) => Some(s),
        RawDate::Other(_) => None,
    })
}

/// Lukket, inkluderende datointervall `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawInterval> for DateInterval {
    type Error = ProgressError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        DateInterval::new(raw.start, raw.end)
    }
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ProgressError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Antall kalenderdager, inkludert begge endepunkter.
    pub fn days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Alle dager fra start til og med end, stigende.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.succ_opt()).take_while(move |d| *d <= end)
    }

    /// Grenser for range-spørring: start 00:00:00, end 23:59:59
    /// (hele sluttdagen skal være med).
    pub fn query_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let from = self.start.and_time(NaiveTime::MIN);
        let to = self
            .end
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| self.end.and_time(NaiveTime::MIN));
        (from, to)
    }
}

/// Ett punkt i grafen. `weight = None` tegnes som hull, ikke null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub backend_url: String,
    pub page_size: usize,
    /// Lokal tidssone som fast offset i minutter. None => bruk offset fra tidsstempelet.
    pub utc_offset_minutes: Option<i32>,
}

pub const BACKEND_URL_ENV: &str = "LIFTLOG_BACKEND_URL";

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            page_size: 5,
            utc_offset_minutes: None,
        }
    }
}

impl ReportConfig {
    /// Default-konfig med `backend_url` overstyrt fra miljøet hvis satt.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                self.backend_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        self
    }
}
