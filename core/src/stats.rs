use serde::{Deserialize, Serialize};

use crate::models::DailySample;

// --- RoundTo trait (offentlig, brukt av stats og cli) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Sammendragskort over en serie (Peak / Average / Starting / Growth).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressStats {
    pub max: f64,
    pub min: f64,
    /// Snitt, avrundet til 1 desimal
    pub avg: f64,
    /// (siste - første) / første * 100, avrundet til 1 desimal
    pub improvement_pct: f64,
}

impl ProgressStats {
    /// Regnes over dager med data, i datorekkefølge. Ingen data => alt 0.
    pub fn from_series(series: &[DailySample]) -> Self {
        let weights: Vec<f64> = series.iter().filter_map(|s| s.weight).collect();
        let (first, last) = match (weights.first(), weights.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Self::default(),
        };

        let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
        let avg = weights.iter().sum::<f64>() / weights.len() as f64;

        let improvement_pct = if weights.len() > 1 && first != 0.0 {
            ((last - first) / first) * 100.0
        } else {
            0.0
        };

        Self {
            max,
            min,
            avg: avg.round_to(1),
            improvement_pct: improvement_pct.round_to(1),
        }
    }

    /// Antall dager med data i serien.
    pub fn days_with_data(series: &[DailySample]) -> usize {
        series.iter().filter(|s| s.weight.is_some()).count()
    }
}
