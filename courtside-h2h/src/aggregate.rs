//! Aggregation of one (team, context) row-set into a [`TeamContextRecord`].

use serde::{Deserialize, Serialize};

use crate::accumulate::accumulate;
use crate::domain::{HistoricalRow, OutcomeMarker};
use crate::error::AggregationError;
use crate::totals::TeamContextRecord;

/// Folds `rows`, in the given order, into a fresh record for `our_team`. Win and loss counts are
/// taken from `outcomes` independently of the rows; the two sequences may differ in length.
///
/// The first failing row aborts the aggregation; no partial record is returned.
pub fn aggregate<'a>(
    rows: impl IntoIterator<Item = &'a HistoricalRow>,
    outcomes: &[OutcomeMarker],
    our_team: &str,
) -> Result<TeamContextRecord, AggregationError> {
    let mut record = TeamContextRecord {
        wins: count(outcomes, OutcomeMarker::Win),
        losses: count(outcomes, OutcomeMarker::Loss),
        ..TeamContextRecord::default()
    };
    for row in rows {
        accumulate(row, our_team, &mut record.totals)?;
    }
    Ok(record)
}

fn count(outcomes: &[OutcomeMarker], marker: OutcomeMarker) -> usize {
    outcomes.iter().filter(|&&outcome| outcome == marker).count()
}

/// The rows and outcome markers of one team's H2H section in one context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFeed {
    pub rows: Vec<HistoricalRow>,
    pub outcomes: Vec<OutcomeMarker>,
}
impl ContextFeed {
    pub fn aggregate(&self, our_team: &str) -> Result<TeamContextRecord, AggregationError> {
        aggregate(&self.rows, &self.outcomes, our_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Finish, ScoringPeriod};
    use crate::testing::{lakers_overtime, lakers_regulation, row};
    use OutcomeMarker::{Loss, Other, Win};

    #[test]
    fn lakers_scenario() {
        let rows = [lakers_regulation(), lakers_overtime()];
        let record = aggregate(&rows, &[Win, Win], "Lakers").unwrap();
        assert_eq!(2, record.wins);
        assert_eq!(0, record.losses);
        assert_eq!(&[110, 105], record.personal().get(ScoringPeriod::Game));
        assert_eq!(&[215, 210], record.combined().get(ScoringPeriod::Game));
        assert_eq!(&[28, 25], record.personal().get(ScoringPeriod::Quarter1));
        assert_eq!(&[53, 55], record.combined().get(ScoringPeriod::Quarter1));
        assert_eq!(&[27, 28], record.personal().get(ScoringPeriod::Quarter2));
        assert_eq!(&[57, 53], record.combined().get(ScoringPeriod::Quarter2));
    }

    #[test]
    fn outcomes_counted_independently_of_rows() {
        let rows = vec![lakers_regulation(); 5];
        let record = aggregate(&rows, &[Win, Loss, Win, Other, Win], "Lakers").unwrap();
        assert_eq!(3, record.wins);
        assert_eq!(1, record.losses);
        assert_eq!(5, record.personal().rows());
    }

    #[test]
    fn outcomes_without_rows() {
        let record = aggregate(std::iter::empty(), &[Loss, Loss], "Lakers").unwrap();
        assert_eq!(0, record.wins);
        assert_eq!(2, record.losses);
        assert!(record.personal().is_empty());
        assert!(record.combined().is_empty());
    }

    #[test]
    fn failing_row_aborts() {
        let rows = [
            lakers_regulation(),
            row("Heat", "Celtics", &[(99, 98), (25, 25), (25, 25), (25, 25), (24, 23)], Finish::Regulation),
            lakers_overtime(),
        ];
        let err = aggregate(&rows, &[Win], "Lakers").unwrap_err();
        assert!(matches!(err, AggregationError::UnknownParticipant(_)));
    }

    #[test]
    fn context_feed() {
        let feed = ContextFeed {
            rows: vec![lakers_overtime()],
            outcomes: vec![Loss],
        };
        let record = feed.aggregate("Celtics").unwrap();
        assert_eq!(1, record.losses);
        assert_eq!(&[105], record.personal().get(ScoringPeriod::Game));
        assert_eq!(&[210], record.combined().get(ScoringPeriod::Game));
        assert_eq!(&[30], record.personal().get(ScoringPeriod::Quarter1));
    }
}
