use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::error::UnknownParticipant;

/// A scoring segment of a match, in the order the segments appear in a source row: the game
/// total first, then the quarters.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Ordinal, EnumCount, EnumIter, Display, Serialize, Deserialize,
)]
pub enum ScoringPeriod {
    #[strum(serialize = "Матч")]
    Game,
    #[strum(serialize = "1 четверть")]
    Quarter1,
    #[strum(serialize = "2 четверть")]
    Quarter2,
    #[strum(serialize = "3 четверть")]
    Quarter3,
    #[strum(serialize = "4 четверть")]
    Quarter4,
}

/// Which of a row's two participants a team occupies.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

/// A score pair in the order the participants are presented.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub first: u32,
    pub second: u32,
}
impl Score {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// Sum of both scores, or `None` if it does not fit.
    pub fn total(&self) -> Option<u32> {
        self.first.checked_add(self.second)
    }

    /// Splits the pair into `(ours, opponent)`, given the slot our team occupies.
    pub fn split(&self, ours: Slot) -> (u32, u32) {
        match ours {
            Slot::First => (self.first, self.second),
            Slot::Second => (self.second, self.first),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finish {
    #[default]
    Regulation,
    Overtime { regulation: Score },
}

/// One past encounter between two named participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalRow {
    pub participants: [String; 2],

    /// One pair per [`ScoringPeriod`], game total first.
    pub period_scores: Vec<Score>,

    pub finish: Finish,
}
impl HistoricalRow {
    pub fn went_to_overtime(&self) -> bool {
        matches!(self.finish, Finish::Overtime { .. })
    }

    /// Locates `our_team` among the participants by exact match on the trimmed names. Should both
    /// names match, the first slot is taken.
    pub fn resolve(&self, our_team: &str) -> Result<Slot, UnknownParticipant> {
        let our_team = our_team.trim();
        if self.participants[0].trim() == our_team {
            Ok(Slot::First)
        } else if self.participants[1].trim() == our_team {
            Ok(Slot::Second)
        } else {
            Err(UnknownParticipant {
                team: our_team.to_owned(),
                participants: self.participants.clone(),
            })
        }
    }
}

/// A win/loss icon from the H2H summary strip.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeMarker {
    Win,
    Loss,
    Other,
}

impl From<&str> for OutcomeMarker {
    fn from(text: &str) -> Self {
        match text.trim().to_uppercase().as_str() {
            "В" | "W" => OutcomeMarker::Win,
            "П" | "L" => OutcomeMarker::Loss,
            _ => OutcomeMarker::Other,
        }
    }
}

/// The subset of history a record summarises.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum Context {
    Overall,
    Home,
    Away,
}
impl Context {
    /// The document key for this context. Venue-specific contexts embed the team name.
    pub fn label(&self, team: &str) -> String {
        match self {
            Context::Overall => "Итого".to_owned(),
            Context::Home => format!("{team} - Дома"),
            Context::Away => format!("{team} - В гостях"),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    fn row(first: &str, second: &str) -> HistoricalRow {
        HistoricalRow {
            participants: [first.into(), second.into()],
            period_scores: vec![],
            finish: Finish::Regulation,
        }
    }

    #[test]
    fn period_order_and_labels() {
        assert_eq!(5, ScoringPeriod::COUNT);
        let labels = ScoringPeriod::iter().map(|period| period.to_string()).collect::<Vec<_>>();
        assert_eq!(
            vec!["Матч", "1 четверть", "2 четверть", "3 четверть", "4 четверть"],
            labels
        );
        assert_eq!(0, ScoringPeriod::Game.ordinal());
        assert_eq!(4, ScoringPeriod::Quarter4.ordinal());
    }

    #[test]
    fn split_by_slot() {
        let score = Score::new(95, 90);
        assert_eq!((95, 90), score.split(Slot::First));
        assert_eq!((90, 95), score.split(Slot::Second));
        assert_eq!(Some(185), score.total());
        assert_eq!(None, Score::new(u32::MAX, 1).total());
    }

    #[test]
    fn resolve_trims_names() {
        let row = row(" Lakers ", "Celtics");
        assert_eq!(Slot::First, row.resolve("Lakers").unwrap());
        assert_eq!(Slot::Second, row.resolve(" Celtics\n").unwrap());
    }

    #[test]
    fn resolve_is_exact() {
        let row = row("Los Angeles Lakers", "Celtics");
        assert_eq!(
            "'Lakers' is not a participant of Los Angeles Lakers vs Celtics",
            row.resolve("Lakers").unwrap_err().to_string()
        );
    }

    #[test]
    fn resolve_prefers_first_slot() {
        assert_eq!(Slot::First, row("Lakers", "Lakers").resolve("Lakers").unwrap());
    }

    #[test]
    fn went_to_overtime() {
        let mut row = row("A", "B");
        assert!(!row.went_to_overtime());
        row.finish = Finish::Overtime {
            regulation: Score::new(105, 105),
        };
        assert!(row.went_to_overtime());
    }

    #[test]
    fn outcome_markers() {
        assert_eq!(OutcomeMarker::Win, OutcomeMarker::from("В"));
        assert_eq!(OutcomeMarker::Win, OutcomeMarker::from(" w "));
        assert_eq!(OutcomeMarker::Loss, OutcomeMarker::from("П"));
        assert_eq!(OutcomeMarker::Loss, OutcomeMarker::from("L"));
        assert_eq!(OutcomeMarker::Other, OutcomeMarker::from("Н"));
        assert_eq!(OutcomeMarker::Other, OutcomeMarker::from(""));
    }

    #[test]
    fn context_labels() {
        assert_eq!("Итого", Context::Overall.label("Lakers"));
        assert_eq!("Lakers - Дома", Context::Home.label("Lakers"));
        assert_eq!("Celtics - В гостях", Context::Away.label("Celtics"));
    }
}
