use std::collections::BTreeMap;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use roster_sync::assemble::{assemble_team, RosterAssembler};
use roster_sync::depth_chart::{self, DepthChart, DepthSource};
use roster_sync::persist;
use roster_sync::positions::PositionTable;
use roster_sync::reconcile::{annotate_depth, merge_sources, NameIdentity};
use roster_sync::roster_fetch::fetch_api_roster;
use roster_sync::roster_scrape::fetch_html_roster;
use roster_sync::teams::{team_by_abbr, NFL_TEAMS, TeamInfo};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let output = parse_path_arg("--output").unwrap_or_else(persist::default_output_path);
    let depth_source = parse_depth_source_arg().unwrap_or_else(DepthSource::from_env);
    let rate_limit = rate_limit_from_env();
    let teams = selected_teams()?;

    let positions = PositionTable::new();
    let identity = NameIdentity;
    let mut assembler = RosterAssembler::new();
    let mut team_counts: BTreeMap<&str, usize> = BTreeMap::new();

    println!("Fetching rosters for {} NFL teams...", teams.len());
    println!();

    for (index, team) in teams.iter().enumerate() {
        let api_players = fetch_api_roster(team).unwrap_or_else(|err| {
            eprintln!("  WARNING: API fetch failed for {}: {err:#}", team.name);
            Vec::new()
        });
        thread::sleep(rate_limit);

        let html_players = fetch_html_roster(team).unwrap_or_else(|err| {
            eprintln!("  WARNING: HTML fetch failed for {}: {err:#}", team.name);
            Vec::new()
        });
        thread::sleep(rate_limit);

        let depth_entries = depth_chart::fetch_depth_chart(team, depth_source, &positions)
            .unwrap_or_else(|err| {
                eprintln!("  WARNING: depth chart fetch failed for {}: {err:#}", team.name);
                Vec::new()
            });
        let chart = DepthChart::from_entries(&depth_entries);

        let api_count = api_players.len();
        let html_count = html_players.len();
        let mut merged = merge_sources(&identity, &[api_players, html_players]);
        annotate_depth(&mut merged, &chart);

        println!(
            "[{}/{}] {}... API: {}, HTML: {}, Depth: {}, merged: {}",
            index + 1,
            teams.len(),
            team.name,
            api_count,
            html_count,
            chart.len(),
            merged.len()
        );

        team_counts.insert(team.name, merged.len());
        assembler.add_team(assemble_team(team, merged, &positions));

        if index + 1 < teams.len() {
            thread::sleep(rate_limit * 2);
        }
    }

    println!();
    println!("--- Summary ---");
    for (team_name, count) in &team_counts {
        println!("  {team_name}: {count} players");
    }
    println!();
    println!("  Total: {} players", assembler.len());

    let players = assembler.finish();
    persist::write_players(&output, &players)?;
    println!("Wrote {} players to {}", players.len(), output.display());

    Ok(())
}

fn selected_teams() -> Result<Vec<TeamInfo>> {
    let filter = parse_string_arg("--team").or_else(|| {
        std::env::var("ROSTER_TEAM")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
    });
    match filter {
        Some(abbr) => {
            let team = team_by_abbr(&abbr)
                .ok_or_else(|| anyhow::anyhow!("unknown team abbreviation: {abbr}"))?;
            Ok(vec![*team])
        }
        None => Ok(NFL_TEAMS.to_vec()),
    }
}

fn rate_limit_from_env() -> Duration {
    let millis = std::env::var("RATE_LIMIT_MS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(500);
    Duration::from_millis(millis)
}

fn parse_depth_source_arg() -> Option<DepthSource> {
    parse_string_arg("--depth-source").and_then(|raw| DepthSource::parse(&raw))
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    parse_string_arg(flag).map(PathBuf::from)
}

fn parse_string_arg(flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
        {
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}
