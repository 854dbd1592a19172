//! Attribution of one historical row's period scores to a team's personal and combined totals.

use strum::{EnumCount, IntoEnumIterator};

use crate::domain::{Finish, HistoricalRow, ScoringPeriod};
use crate::error::{AggregationError, MalformedRow, ScoreOverflow};
use crate::totals::Totals;

/// Appends one value per period to both `totals.personal` and `totals.combined`, from the
/// perspective of `our_team`.
///
/// For [`ScoringPeriod::Game`], a row that went past regulation contributes the regulation-time
/// score instead of the final total: our regulation score to the personal total, and twice that
/// score to the combined total. Every other period contributes our score and the sum of both
/// scores, respectively.
///
/// The row is validated before anything is appended; on error, `totals` is left as it was.
pub fn accumulate(row: &HistoricalRow, our_team: &str, totals: &mut Totals) -> Result<(), AggregationError> {
    let ours = row.resolve(our_team)?;
    if row.period_scores.len() != ScoringPeriod::COUNT {
        return Err(MalformedRow {
            expected: ScoringPeriod::COUNT,
            actual: row.period_scores.len(),
            participants: row.participants.clone(),
        }
        .into());
    }

    let mut values = [(0, 0); ScoringPeriod::COUNT];
    for ((period, score), value) in ScoringPeriod::iter().zip(&row.period_scores).zip(&mut values) {
        let (personal, combined) = match (period, &row.finish) {
            (ScoringPeriod::Game, Finish::Overtime { regulation }) => {
                let (our_score, _) = regulation.split(ours);
                (our_score, our_score.checked_mul(2))
            }
            _ => {
                let (our_score, _) = score.split(ours);
                (our_score, score.total())
            }
        };
        let combined = combined.ok_or_else(|| ScoreOverflow {
            period: period.to_string(),
            participants: row.participants.clone(),
        })?;
        *value = (personal, combined);
    }

    for (period, (personal, combined)) in ScoringPeriod::iter().zip(values) {
        totals.personal.push(period, personal);
        totals.combined.push(period, combined);
    }
    Ok(())
}
