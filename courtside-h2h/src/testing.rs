//! Row fixtures shared by unit tests.

use crate::domain::{Finish, HistoricalRow, Score};

pub fn row(first: &str, second: &str, scores: &[(u32, u32)], finish: Finish) -> HistoricalRow {
    HistoricalRow {
        participants: [first.into(), second.into()],
        period_scores: scores
            .iter()
            .map(|&(first, second)| Score::new(first, second))
            .collect(),
        finish,
    }
}

pub fn overtime(first: u32, second: u32) -> Finish {
    Finish::Overtime {
        regulation: Score::new(first, second),
    }
}

/// A regulation-time Lakers win over the Celtics.
pub fn lakers_regulation() -> HistoricalRow {
    row(
        "Lakers",
        "Celtics",
        &[(110, 105), (28, 25), (27, 30), (30, 25), (25, 25)],
        Finish::Regulation,
    )
}

/// A Lakers win over the Celtics after a 105-105 regulation tie.
pub fn lakers_overtime() -> HistoricalRow {
    row(
        "Lakers",
        "Celtics",
        &[(120, 115), (25, 30), (28, 25), (27, 25), (25, 25)],
        overtime(105, 105),
    )
}
