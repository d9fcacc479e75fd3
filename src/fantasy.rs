//! FantasyPros per-position stats scraping and the fantasy player
//! database built from it.
//!
//! Separate from the main roster sync: ranks come from FantasyPros stats
//! pages (those list every player, bye weeks and playoffs included) and
//! are enriched with team data from an already-persisted `players.json`.

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::assemble::CanonicalPlayer;
use crate::http_client::fetch_text;
use crate::names::{normalize_name, surname};
use crate::teams::team_by_id;

const FANTASY_STATS_URL: &str = "https://www.fantasypros.com/nfl/stats";

/// Position groups FantasyPros publishes stats for, with the page slug
/// and how many ranked players to keep per group.
pub const DEFAULT_POSITION_LIMITS: &[(&str, &str, usize)] = &[
    ("QB", "qb", 50),
    ("RB", "rb", 75),
    ("WR", "wr", 100),
    ("TE", "te", 60),
    ("K", "k", 25),
    ("DL", "dl", 25),
    ("LB", "lb", 50),
    ("DB", "db", 45),
];

/// One fantasy-ranked player. Team fields stay null until enrichment
/// finds the player in the roster database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FantasyPlayer {
    pub rank: u32,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub number: Option<u32>,
}

pub fn fetch_position_stats(position: &str, slug: &str, top_n: usize) -> Result<Vec<FantasyPlayer>> {
    let url = format!("{FANTASY_STATS_URL}/{slug}.php");
    let body = fetch_text(&url).with_context(|| format!("{position} stats request failed"))?;
    parse_stats_table_html(&body, position, top_n)
}

/// Pulls ranked names out of a FantasyPros stats page. Rank is the row's
/// position within the table body, starting at 1; rows past `top_n` are
/// ignored.
pub fn parse_stats_table_html(
    html: &str,
    position: &str,
    top_n: usize,
) -> Result<Vec<FantasyPlayer>> {
    let table_selector = Selector::parse("table#data tbody tr, table.table tbody tr")
        .map_err(|e| anyhow::anyhow!("failed to create row selector: {e}"))?;
    let player_selector = Selector::parse("td.player-label, a.fp-player-link")
        .map_err(|e| anyhow::anyhow!("failed to create player selector: {e}"))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| anyhow::anyhow!("failed to create cell selector: {e}"))?;

    let document = Html::parse_document(html);
    let mut players = Vec::new();

    for row in document.select(&table_selector).take(top_n) {
        let cell = row
            .select(&player_selector)
            .next()
            .or_else(|| row.select(&cell_selector).next());
        let Some(cell) = cell else {
            continue;
        };
        let text = cell.text().collect::<String>();
        // Stats cells append the team in parentheses, "Josh Allen (BUF)".
        let name = text.split('(').next().unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }
        players.push(FantasyPlayer {
            rank: players.len() as u32 + 1,
            name,
            position: position.to_string(),
            team: None,
            conference: None,
            division: None,
            number: None,
        });
    }
    Ok(players)
}

/// Fills in team, conference, division, and jersey number from the roster
/// database: exact normalized-name match, or surname plus position-group
/// match for abbreviated spellings. Unmatched players keep null fields.
pub fn enrich_from_rosters(players: &mut [FantasyPlayer], rosters: &[CanonicalPlayer]) {
    for player in players.iter_mut() {
        let Some(found) = find_roster_match(&player.name, &player.position, rosters) else {
            continue;
        };
        player.team = team_by_id(found.team_id).map(|t| t.abbr.to_uppercase());
        player.conference = Some(found.conference.clone());
        player.division = Some(found.division.clone());
        player.number = Some(found.number);
    }
}

fn find_roster_match<'a>(
    name: &str,
    position: &str,
    rosters: &'a [CanonicalPlayer],
) -> Option<&'a CanonicalPlayer> {
    let needle = normalize_name(name);
    let needle_surname = surname(name);
    rosters.iter().find(|candidate| {
        if normalize_name(&candidate.name) == needle {
            return true;
        }
        needle_surname.is_some()
            && surname(&candidate.name) == needle_surname
            && candidate.position == position
    })
}
