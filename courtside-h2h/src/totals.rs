//! Per-period score accumulators.

use std::ops::Index;

use ordinalizer::Ordinal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};

use crate::domain::ScoringPeriod;

/// One sequence of values per [`ScoringPeriod`], appended to in row order. Values are never
/// removed or overwritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodTotals {
    values: [Vec<u32>; ScoringPeriod::COUNT],
}
impl PeriodTotals {
    pub fn push(&mut self, period: ScoringPeriod, value: u32) {
        self.values[period.ordinal()].push(value);
    }

    pub fn get(&self, period: ScoringPeriod) -> &[u32] {
        &self.values[period.ordinal()]
    }

    /// Periods paired with their values, in period order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoringPeriod, &[u32])> {
        ScoringPeriod::iter().map(|period| (period, self.get(period)))
    }

    /// The number of rows accumulated so far.
    pub fn rows(&self) -> usize {
        self.get(ScoringPeriod::Game).len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Vec::is_empty)
    }
}

impl Default for PeriodTotals {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl Index<ScoringPeriod> for PeriodTotals {
    type Output = [u32];

    fn index(&self, period: ScoringPeriod) -> &Self::Output {
        self.get(period)
    }
}

impl Serialize for PeriodTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ScoringPeriod::COUNT))?;
        for (period, values) in self.iter() {
            map.serialize_entry(&period.to_string(), values)?;
        }
        map.end()
    }
}

/// The personal and combined accumulators for one team in one context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Our team's points only.
    #[serde(rename = "Личный")]
    pub personal: PeriodTotals,

    /// Both teams' points.
    #[serde(rename = "Общий")]
    pub combined: PeriodTotals,
}

/// A completed aggregation for one (team, context) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TeamContextRecord {
    #[serde(rename = "Количество побед")]
    pub wins: usize,

    #[serde(rename = "Количество поражений")]
    pub losses: usize,

    #[serde(rename = "Тотал")]
    pub totals: Totals,
}
impl TeamContextRecord {
    pub fn personal(&self) -> &PeriodTotals {
        &self.totals.personal
    }

    pub fn combined(&self) -> &PeriodTotals {
        &self.totals.combined
    }
}
