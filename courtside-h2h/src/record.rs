//! Assembly of per-team context records into the per-match output document.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::Context;
use crate::error::DegenerateMatch;
use crate::totals::TeamContextRecord;

/// One team's overall record plus its venue-specific record (home for the first-listed team,
/// away for the second).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamEntry {
    pub team: String,
    pub overall: TeamContextRecord,
    pub venue: Context,
    pub venue_record: TeamContextRecord,
}
impl TeamEntry {
    pub fn get(&self, context: Context) -> Option<&TeamContextRecord> {
        match context {
            Context::Overall => Some(&self.overall),
            venue if venue == self.venue => Some(&self.venue_record),
            _ => None,
        }
    }
}

impl Serialize for TeamEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&Context::Overall.label(&self.team), &self.overall)?;
        map.serialize_entry(&self.venue.label(&self.team), &self.venue_record)?;
        map.end()
    }
}

/// The H2H statistics document for one match, serialised as
/// `{ "{A}-VS-{B}": { "{A}": {...}, "{B}": {...} } }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub name: String,
    pub first: TeamEntry,
    pub second: TeamEntry,
}
impl MatchRecord {
    pub fn name_for(first: &str, second: &str) -> String {
        format!("{first}-VS-{second}")
    }

    pub fn team(&self, team: &str) -> Option<&TeamEntry> {
        [&self.first, &self.second]
            .into_iter()
            .find(|entry| entry.team == team)
    }
}

impl Serialize for MatchRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Teams<'a>(&'a TeamEntry, &'a TeamEntry);
        impl Serialize for Teams<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(&self.0.team, self.0)?;
                map.serialize_entry(&self.1.team, self.1)?;
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &Teams(&self.first, &self.second))?;
        map.end()
    }
}

/// Composes a [`MatchRecord`] from the four records of a match. `team_a` is the first-listed
/// (home) team and `team_b` the second-listed (away) team; they must be distinct once trimmed.
pub fn build(
    match_name: impl Into<String>,
    team_a: &str,
    team_b: &str,
    overall_a: TeamContextRecord,
    overall_b: TeamContextRecord,
    home_a: TeamContextRecord,
    away_b: TeamContextRecord,
) -> Result<MatchRecord, DegenerateMatch> {
    if team_a.trim() == team_b.trim() {
        return Err(DegenerateMatch(team_a.trim().to_owned()));
    }
    Ok(MatchRecord {
        name: match_name.into(),
        first: TeamEntry {
            team: team_a.to_owned(),
            overall: overall_a,
            venue: Context::Home,
            venue_record: home_a,
        },
        second: TeamEntry {
            team: team_b.to_owned(),
            overall: overall_b,
            venue: Context::Away,
            venue_record: away_b,
        },
    })
}
