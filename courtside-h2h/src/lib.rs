//! Head-to-head scoring statistics: attribution of past encounters' period scores to a team's
//! personal and combined totals, aggregated per context (overall, home, away) and assembled into
//! one document per match.

pub mod accumulate;
pub mod aggregate;
pub mod declension;
pub mod domain;
pub mod error;
pub mod feed;
pub mod pipeline;
pub mod print;
pub mod record;
pub mod schedule;
pub mod summary;
pub mod totals;

#[cfg(test)]
pub(crate) mod testing;
