//! Fantasy player database builder: scrapes FantasyPros per-position
//! stats pages, enriches the ranks with team data from the persisted
//! roster database, and writes `fantasy_players.json`.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use roster_sync::fantasy::{
    enrich_from_rosters, fetch_position_stats, FantasyPlayer, DEFAULT_POSITION_LIMITS,
};
use roster_sync::persist::{self, write_json};

const DEFAULT_OUTPUT: &str = "data/fantasy_players.json";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let output = match std::env::var("FANTASY_OUTPUT") {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => PathBuf::from(DEFAULT_OUTPUT),
    };
    let delay = delay_from_env();

    println!("Fantasy Rankings Scraper");
    println!("{}", "=".repeat(50));

    let rosters_path = persist::default_output_path();
    let rosters = persist::load_players(&rosters_path).unwrap_or_else(|err| {
        eprintln!(
            "  WARNING: could not load {} ({err:#}); team enrichment will be limited",
            rosters_path.display()
        );
        Vec::new()
    });
    println!("Loaded {} NFL players for team enrichment", rosters.len());
    println!();

    let mut players: Vec<FantasyPlayer> = Vec::new();
    for (index, &(position, slug, top_n)) in DEFAULT_POSITION_LIMITS.iter().enumerate() {
        let ranked = fetch_position_stats(position, slug, top_n).unwrap_or_else(|err| {
            eprintln!("  WARNING: {position} stats fetch failed: {err:#}");
            Vec::new()
        });
        println!("  {position}: {} players", ranked.len());
        players.extend(ranked);

        if index + 1 < DEFAULT_POSITION_LIMITS.len() {
            thread::sleep(delay);
        }
    }

    println!();
    println!("Total fantasy players scraped: {}", players.len());

    enrich_from_rosters(&mut players, &rosters);
    let with_team = players.iter().filter(|p| p.team.is_some()).count();
    println!("  {with_team}/{} players matched with team data", players.len());

    write_json(&output, &players)?;
    println!();
    println!("Saved fantasy player database to {}", output.display());

    println!();
    println!("Breakdown by position:");
    for &(position, _, _) in DEFAULT_POSITION_LIMITS {
        let pos_count = players.iter().filter(|p| p.position == position).count();
        let pos_with_team = players
            .iter()
            .filter(|p| p.position == position && p.team.is_some())
            .count();
        println!("  {position}: {pos_count} players ({pos_with_team} with team data)");
    }

    Ok(())
}

fn delay_from_env() -> Duration {
    let millis = std::env::var("FANTASY_DELAY_MS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(1000);
    Duration::from_millis(millis)
}
