use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ProgressError, Result};
use crate::models::DateInterval;

/// Kanonisk sonefritt format for range-spørringer, f.eks. "2025-01-01T00:00:00".
pub const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Sonefrie varianter vi tåler fra API/brukerinput (`%.f` er valgfri ved parsing)
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Et tolket tidsstempel: enten allerede lokalt (sonefritt) eller med offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Kalenderdato brukt som bøttenøkkel. Sonefrie verdier er lokale allerede;
    /// verdier med offset flyttes til `local` hvis gitt, ellers egen veggklokke.
    pub fn calendar_date(&self, local: Option<FixedOffset>) -> NaiveDate {
        match (self, local) {
            (Timestamp::Local(ndt), _) => ndt.date(),
            (Timestamp::Offset(dt), Some(tz)) => dt.with_timezone(&tz).date_naive(),
            (Timestamp::Offset(dt), None) => dt.date_naive(),
        }
    }

    /// Veggklokketid uten sone.
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            Timestamp::Local(ndt) => *ndt,
            Timestamp::Offset(dt) => dt.naive_local(),
        }
    }
}

/// Tolker et tidsstempel i en av formene API-et og datovelgeren produserer.
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ProgressError::InvalidDateTime(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Timestamp::Offset(dt));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Timestamp::Local(ndt));
        }
    }

    // Bare dato (fra <input type="date">) => midnatt
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| Timestamp::Local(d.and_time(NaiveTime::MIN)))
        .map_err(|_| ProgressError::InvalidDateTime(input.to_string()))
}

pub fn format_local_datetime(ndt: NaiveDateTime) -> String {
    ndt.format(QUERY_FORMAT).to_string()
}

/// Normaliserer en dato/tid-streng til kanonisk `YYYY-MM-DDTHH:mm:ss`.
///
/// Nøyaktig riktig form slippes gjennom uendret (etter validering). Andre
/// tolkbare verdier skrives om; offset kastes og veggklokketiden beholdes.
pub fn normalize_query_datetime(input: &str) -> Result<String> {
    let s = input.trim();
    if s.len() == 19 && NaiveDateTime::parse_from_str(s, QUERY_FORMAT).is_ok() {
        return Ok(s.to_string());
    }
    let ts = parse_timestamp(s)?;
    Ok(format_local_datetime(ts.wall_clock()))
}

/// `(startDate, endDate)` som spørringsparametre for et intervall.
pub fn query_params(interval: &DateInterval) -> (String, String) {
    let (from, to) = interval.query_bounds();
    (format_local_datetime(from), format_local_datetime(to))
}

/// Fast offset fra minutter øst for UTC; ugyldige verdier gir None.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}
