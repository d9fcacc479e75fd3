//! Standalone depth-chart dump: fetches every team's depth chart from the
//! selected source and writes `depth_chart_data.json` keyed by team name,
//! for inspection before a full roster sync.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use roster_sync::depth_chart::{fetch_depth_chart, DepthEntry, DepthSource};
use roster_sync::persist::write_json;
use roster_sync::positions::PositionTable;
use roster_sync::teams::NFL_TEAMS;

const DEFAULT_OUTPUT: &str = "depth_chart_data.json";

#[derive(Debug, Serialize)]
struct DumpRow {
    #[serde(rename = "espnId", skip_serializing_if = "Option::is_none")]
    espn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    position: String,
    rank: u32,
    #[serde(rename = "depthChart")]
    depth_chart: String,
}

impl From<DepthEntry> for DumpRow {
    fn from(entry: DepthEntry) -> Self {
        let depth_chart = format!("{}{}", entry.position, entry.rank);
        Self {
            espn_id: entry.espn_id,
            name: entry.name,
            position: entry.position,
            rank: entry.rank,
            depth_chart,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let source = DepthSource::from_env();
    let output = match std::env::var("DEPTH_DUMP_OUTPUT") {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => PathBuf::from(DEFAULT_OUTPUT),
    };
    let positions = PositionTable::new();

    println!("Fetching depth charts for {} teams...", NFL_TEAMS.len());

    let mut by_team: BTreeMap<&str, Vec<DumpRow>> = BTreeMap::new();
    for (index, team) in NFL_TEAMS.iter().enumerate() {
        let entries = fetch_depth_chart(team, source, &positions).unwrap_or_else(|err| {
            eprintln!("  WARNING: depth chart fetch failed for {}: {err:#}", team.name);
            Vec::new()
        });
        println!(
            "[{}/{}] {}: {} entries",
            index + 1,
            NFL_TEAMS.len(),
            team.name,
            entries.len()
        );
        by_team.insert(team.name, entries.into_iter().map(DumpRow::from).collect());

        if index + 1 < NFL_TEAMS.len() {
            thread::sleep(Duration::from_millis(1000));
        }
    }

    let total: usize = by_team.values().map(Vec::len).sum();
    write_json(&output, &by_team)?;
    println!();
    println!("Saved {} depth chart entries to {}", total, output.display());

    Ok(())
}
