use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("{0}")]
    UnknownParticipant(#[from] UnknownParticipant),

    #[error("{0}")]
    MalformedRow(#[from] MalformedRow),

    #[error("{0}")]
    ScoreOverflow(#[from] ScoreOverflow),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{team}' is not a participant of {} vs {}", .participants[0], .participants[1])]
pub struct UnknownParticipant {
    pub team: String,
    pub participants: [String; 2],
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected {expected} period scores, got {actual} for {} vs {}", .participants[0], .participants[1])]
pub struct MalformedRow {
    pub expected: usize,
    pub actual: usize,
    pub participants: [String; 2],
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{period} total overflows for {} vs {}", .participants[0], .participants[1])]
pub struct ScoreOverflow {
    pub period: String,
    pub participants: [String; 2],
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("both participants resolve to '{0}'")]
pub struct DegenerateMatch(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("expected 2 participants, got {0}")]
    ParticipantCount(usize),

    #[error("unparsable score '{text}' for {participant}: {source}")]
    Score {
        participant: String,
        text: String,
        source: ParseIntError,
    },

    #[error("{0} vs {1} went past regulation, but no regulation score was captured")]
    MissingRegulationScore(String, String),

    #[error("unparsable regulation score '{0}'")]
    RegulationScore(String),
}

/// Failure to process one match; the unit the caller skips or aborts on.
#[derive(Debug, Error)]
#[error("{name}: {cause}")]
pub struct MatchError {
    pub name: String,
    pub cause: MatchErrorCause,
}

#[derive(Debug, Error)]
pub enum MatchErrorCause {
    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Aggregation(#[from] AggregationError),

    #[error("{0}")]
    Degenerate(#[from] DegenerateMatch),
}

impl MatchError {
    pub fn new(name: impl Into<String>, cause: impl Into<MatchErrorCause>) -> Self {
        Self {
            name: name.into(),
            cause: cause.into(),
        }
    }
}
