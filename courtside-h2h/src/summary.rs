//! Per-period averages of an aggregated record.

use courtside::stats::SliceExt;
use strum::IntoEnumIterator;

use crate::domain::ScoringPeriod;
use crate::totals::TeamContextRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodSummary {
    pub period: ScoringPeriod,
    pub samples: usize,
    pub personal_mean: Option<f64>,
    pub combined_mean: Option<f64>,
}

pub fn summarise(record: &TeamContextRecord) -> Vec<PeriodSummary> {
    ScoringPeriod::iter()
        .map(|period| {
            let personal = record.personal().get(period);
            let combined = record.combined().get(period);
            PeriodSummary {
                period,
                samples: personal.len(),
                personal_mean: personal.mean(),
                combined_mean: combined.mean(),
            }
        })
        .collect()
}
