use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context as _};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rustc_hash::FxHashMap;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use courtside::file;
use courtside_h2h::declension::format_match_count;
use courtside_h2h::domain::Context;
use courtside_h2h::error::MatchError;
use courtside_h2h::feed::{Feed, MatchPage};
use courtside_h2h::pipeline::process_match;
use courtside_h2h::print::tabulate_summary;
use courtside_h2h::record::{MatchRecord, TeamEntry};
use courtside_h2h::schedule::todays_fixtures;
use courtside_h2h::summary::summarise;

const OUTPUT_PREFIX: &str = "matches_on";
const OUTPUT_EXTENSION: &str = "json";

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// captured fixture list and H2H pages
    #[clap(short = 'f', long)]
    feed: PathBuf,

    /// directory to write the match document into
    #[clap(short = 'o', long, default_value = "match_information")]
    out: PathBuf,

    /// processing date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    date: Option<NaiveDate>,

    /// print per-period averages
    #[clap(short = 's', long)]
    summary: bool,

    /// abort on the first failed match instead of skipping it
    #[clap(long)]
    fail_fast: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.feed.is_file() {
            bail!("feed file {} does not exist", self.feed.display());
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let start_time = Instant::now();
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let feed = read_feed(&args.feed).await?;
    let fixtures = todays_fixtures(&feed.fixtures, today)?;
    if fixtures.is_empty() {
        info!("На сегодня нет матчей");
        return Ok(());
    }
    info!("На сегодня есть {}", format_match_count(fixtures.len() as u64));
    info!("Начинаю собирать данные с матчей");

    let pages: FxHashMap<&str, &MatchPage> = feed
        .pages
        .iter()
        .map(|page| (page.url.as_str(), page))
        .collect();
    let mut selected = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        match pages.get(fixture.url.as_str()) {
            Some(&page) => selected.push(page.clone()),
            None => warn!("no H2H page captured for {} ({})", fixture.url, fixture.event_time),
        }
    }

    let num_matches = selected.len();
    let mut records = Vec::with_capacity(num_matches);
    for (index, outcome) in process_all(selected).await?.into_iter().enumerate() {
        match outcome {
            Ok(record) => {
                info!("processed {} ({} of {num_matches})", record.name, index + 1);
                if args.summary {
                    print_summary(&record);
                }
                records.push(record);
            }
            Err(err) if args.fail_fast => return Err(err.into()),
            Err(err) => warn!("skipping match: {err}"),
        }
    }

    let path = file::dated_path(&args.out, OUTPUT_PREFIX, today, OUTPUT_EXTENSION);
    file::write_json(&path, &records)?;
    let elapsed = start_time.elapsed();
    info!(
        "wrote {} of {num_matches} to {} in {}s",
        format_match_count(records.len() as u64),
        path.display(),
        elapsed.as_millis() as f64 / 1_000.
    );
    Ok(())
}

async fn read_feed(path: &Path) -> anyhow::Result<Feed> {
    let owned = path.to_owned();
    let feed = tokio::task::spawn_blocking(move || file::read_json(owned))
        .await?
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(feed)
}

/// Processes each match on the blocking pool, returning the outcomes in input order.
async fn process_all(pages: Vec<MatchPage>) -> anyhow::Result<Vec<Result<MatchRecord, MatchError>>> {
    let mut tasks = JoinSet::new();
    for (index, page) in pages.into_iter().enumerate() {
        tasks.spawn_blocking(move || (index, process_match(&page)));
    }
    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined?);
    }
    outcomes.sort_by_key(|(index, _)| *index);
    Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect())
}

fn print_summary(record: &MatchRecord) {
    fn print_entry(entry: &TeamEntry) {
        for context in [Context::Overall, entry.venue] {
            if let Some(team_record) = entry.get(context) {
                let table = tabulate_summary(&summarise(team_record));
                info!(
                    "{} / {} ({}W {}L):\n{}",
                    entry.team,
                    context.label(&entry.team),
                    team_record.wins,
                    team_record.losses,
                    Console::default().render(&table)
                );
            }
        }
    }
    print_entry(&record.first);
    print_entry(&record.second);
}
