//! The H2H page content as captured by the page-automation layer, and its conversion into
//! aggregation inputs.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::EnumCount;
use tracing::{debug, warn};

use crate::aggregate::ContextFeed;
use crate::domain::{Finish, HistoricalRow, OutcomeMarker, Score, ScoringPeriod};
use crate::error::FeedError;
use crate::schedule::Fixture;

/// Status text of a match decided in regulation time.
const REGULATION_STATUSES: [&str; 2] = ["ЗАВЕРШЕН", "FINISHED"];

/// A full capture: the fixture list followed by the H2H pages of the fixtures that were opened.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub fixtures: Vec<Fixture>,
    pub pages: Vec<MatchPage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPage {
    pub url: String,
    pub participants: Vec<String>,
    pub tabs: Vec<H2hTab>,
}

/// One of the secondary H2H tabs (overall, home, away).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct H2hTab {
    pub title: String,
    pub sections: Vec<H2hSection>,
}

/// A team's block within a tab: the heading naming the team, the win/loss icon strip, and the
/// past-match rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct H2hSection {
    pub heading: String,
    #[serde(default)]
    pub markers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

/// A past match as shown on its detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub participants: Vec<RawParticipant>,
    pub status: String,

    /// The regulation-time score text, e.g. `"(105-105)"`; present when the match went past
    /// regulation.
    #[serde(default)]
    pub full_time: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParticipant {
    pub name: String,

    /// The game total followed by the quarter scores, possibly followed by an overtime score.
    pub scores: Vec<String>,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TabKind {
    Overall,
    Home,
    Away,
}
impl TabKind {
    pub fn classify(title: &str) -> Option<Self> {
        let title = title.trim().to_lowercase();
        if title == "итого" || title == "overall" {
            Some(TabKind::Overall)
        } else if title.contains("дома") || title.contains("home") {
            Some(TabKind::Home)
        } else if title.contains("в гостях") || title.contains("away") {
            Some(TabKind::Away)
        } else {
            None
        }
    }
}

impl H2hTab {
    /// The section whose heading mentions `team`.
    pub fn section_for(&self, team: &str) -> Option<&H2hSection> {
        let team = team.trim();
        self.sections
            .iter()
            .find(|section| section.heading.contains(team))
    }
}

impl H2hSection {
    pub fn to_context_feed(&self) -> Result<ContextFeed, FeedError> {
        let rows = self
            .rows
            .iter()
            .map(RawRow::to_historical)
            .collect::<Result<Vec<_>, _>>()?;
        let outcomes = self
            .markers
            .iter()
            .map(|marker| OutcomeMarker::from(marker.as_str()))
            .collect();
        Ok(ContextFeed { rows, outcomes })
    }
}

impl RawRow {
    /// Converts the captured text into a [`HistoricalRow`]. At most one score per
    /// [`ScoringPeriod`] is taken from each participant; a short row is passed through as is and
    /// rejected during aggregation.
    pub fn to_historical(&self) -> Result<HistoricalRow, FeedError> {
        let [first, second] = self.participants.as_slice() else {
            return Err(FeedError::ParticipantCount(self.participants.len()));
        };
        let first_scores = first.parse_scores()?;
        let second_scores = second.parse_scores()?;
        let period_scores = first_scores
            .into_iter()
            .zip(second_scores)
            .map(|(first, second)| Score::new(first, second))
            .collect();
        let finish = parse_finish(&self.status, self.full_time.as_deref(), &first.name, &second.name)?;
        Ok(HistoricalRow {
            participants: [first.name.trim().to_owned(), second.name.trim().to_owned()],
            period_scores,
            finish,
        })
    }
}

impl RawParticipant {
    fn parse_scores(&self) -> Result<Vec<u32>, FeedError> {
        self.scores
            .iter()
            .take(ScoringPeriod::COUNT)
            .map(|text| {
                text.trim().parse().map_err(|source| FeedError::Score {
                    participant: self.name.clone(),
                    text: text.clone(),
                    source,
                })
            })
            .collect()
    }
}

fn parse_finish(status: &str, full_time: Option<&str>, first: &str, second: &str) -> Result<Finish, FeedError> {
    let status = status.trim().to_uppercase();
    if REGULATION_STATUSES.contains(&status.as_str()) {
        return Ok(Finish::Regulation);
    }
    debug!("{first} vs {second} finished with status '{status}'");
    let text = full_time.ok_or_else(|| FeedError::MissingRegulationScore(first.to_owned(), second.to_owned()))?;
    let regulation = parse_score_pair(text).ok_or_else(|| FeedError::RegulationScore(text.to_owned()))?;
    Ok(Finish::Overtime { regulation })
}

/// Extracts the first two numbers from score text such as `"(105-105)"` or `"105 : 99"`.
pub fn parse_score_pair(text: &str) -> Option<Score> {
    static SCORE_PAIR: OnceLock<Regex> = OnceLock::new();
    let regex = SCORE_PAIR.get_or_init(|| Regex::new(r"(\d+)\D+(\d+)").expect("valid score pattern"));
    let captures = regex.captures(text)?;
    let first = captures[1].parse().ok()?;
    let second = captures[2].parse().ok()?;
    Some(Score::new(first, second))
}

/// The six context feeds of one match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchFeed {
    pub first: String,
    pub second: String,
    pub overall_first: ContextFeed,
    pub overall_second: ContextFeed,
    pub home_first: ContextFeed,
    pub away_second: ContextFeed,
}

impl MatchPage {
    pub fn teams(&self) -> Result<(&str, &str), FeedError> {
        match self.participants.as_slice() {
            [first, second] => Ok((first.trim(), second.trim())),
            other => Err(FeedError::ParticipantCount(other.len())),
        }
    }

    /// Distributes the page's tabs into per-team context feeds. The overall tab feeds both teams,
    /// the home tab the first team, and the away tab the second team. A missing tab or section
    /// yields an empty feed.
    pub fn to_match_feed(&self) -> Result<MatchFeed, FeedError> {
        let (first, second) = self.teams()?;
        let mut overall_first = None;
        let mut overall_second = None;
        let mut home_first = None;
        let mut away_second = None;

        for tab in &self.tabs {
            match TabKind::classify(&tab.title) {
                Some(TabKind::Overall) => {
                    overall_first = section_feed(tab, first)?;
                    overall_second = section_feed(tab, second)?;
                }
                Some(TabKind::Home) => home_first = section_feed(tab, first)?,
                Some(TabKind::Away) => away_second = section_feed(tab, second)?,
                None => debug!("ignoring tab '{}' on {}", tab.title, self.url),
            }
        }

        let or_empty = |feed: Option<ContextFeed>, description: String| {
            feed.unwrap_or_else(|| {
                warn!("no {description} H2H rows on {}", self.url);
                ContextFeed::default()
            })
        };
        Ok(MatchFeed {
            first: first.to_owned(),
            second: second.to_owned(),
            overall_first: or_empty(overall_first, format!("overall {first}")),
            overall_second: or_empty(overall_second, format!("overall {second}")),
            home_first: or_empty(home_first, format!("home {first}")),
            away_second: or_empty(away_second, format!("away {second}")),
        })
    }
}

fn section_feed(tab: &H2hTab, team: &str) -> Result<Option<ContextFeed>, FeedError> {
    tab.section_for(team)
        .map(H2hSection::to_context_feed)
        .transpose()
}
