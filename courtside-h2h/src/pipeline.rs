//! End-to-end processing of one captured match page.

use tracing::debug;

use crate::error::{MatchError, MatchErrorCause};
use crate::feed::{MatchFeed, MatchPage};
use crate::record::{build, MatchRecord};

/// Converts, aggregates and assembles one match. Each call owns all of its intermediate state, so
/// matches may be processed on separate threads.
pub fn process_match(page: &MatchPage) -> Result<MatchRecord, MatchError> {
    let feed = page
        .to_match_feed()
        .map_err(|err| MatchError::new(&page.url, err))?;
    process_feed(&feed)
}

pub fn process_feed(feed: &MatchFeed) -> Result<MatchRecord, MatchError> {
    let name = MatchRecord::name_for(&feed.first, &feed.second);
    let fail = |cause: MatchErrorCause| MatchError::new(&name, cause);

    let overall_first = feed.overall_first.aggregate(&feed.first).map_err(|err| fail(err.into()))?;
    let overall_second = feed.overall_second.aggregate(&feed.second).map_err(|err| fail(err.into()))?;
    let home_first = feed.home_first.aggregate(&feed.first).map_err(|err| fail(err.into()))?;
    let away_second = feed.away_second.aggregate(&feed.second).map_err(|err| fail(err.into()))?;
    debug!(
        "{name}: aggregated {}/{} overall and {}/{} venue rows",
        overall_first.personal().rows(),
        overall_second.personal().rows(),
        home_first.personal().rows(),
        away_second.personal().rows()
    );

    build(
        name.clone(),
        &feed.first,
        &feed.second,
        overall_first,
        overall_second,
        home_first,
        away_second,
    )
    .map_err(|err| fail(err.into()))
}
