//! Depth-chart acquisition and the id-or-name keyed lookup the
//! reconciliation core joins against.
//!
//! Two sources produce the same shape: the ESPN depth-chart API (entries
//! keyed by athlete id) and the scraped depth-chart page (entries keyed by
//! player name). The reconciliation core accepts either keying, so both
//! strategies stay interchangeable behind [`fetch_depth_chart`].

use std::collections::HashMap;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::http_client::fetch_text;
use crate::names::normalize_name;
use crate::positions::PositionTable;
use crate::roster_fetch::EspnId;
use crate::teams::TeamInfo;

const DEPTH_API_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams";
const DEPTH_PAGE_URL: &str = "https://www.espn.com/nfl/team/depth/_/name";

// ESPN reports a slot of 99 when an athlete has no real chart position.
const UNSLOTTED_RANK: u32 = 99;

/// One ranked slot observed in a depth-chart source. Exactly one of
/// `espn_id` and `name` is set, depending on which source produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepthEntry {
    #[serde(rename = "espnId", skip_serializing_if = "Option::is_none", default)]
    pub espn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub position: String,
    pub rank: u32,
}

/// Position and rank for one charted player; rank 1 is the starter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthSlot {
    pub position: String,
    pub rank: u32,
}

impl DepthSlot {
    /// Chart label in the `{position}{rank}` form, e.g. `"QB1"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.position, self.rank)
    }
}

/// Per-team depth chart keyed however the source identified players.
/// Lookups by athlete id take precedence over lookups by name.
#[derive(Debug, Clone, Default)]
pub struct DepthChart {
    by_id: HashMap<String, DepthSlot>,
    by_name: HashMap<String, DepthSlot>,
}

impl DepthChart {
    pub fn from_entries(entries: &[DepthEntry]) -> Self {
        let mut chart = DepthChart::default();
        for entry in entries {
            let slot = DepthSlot {
                position: entry.position.clone(),
                rank: entry.rank,
            };
            if let Some(id) = entry.espn_id.as_deref().filter(|id| !id.is_empty()) {
                chart.by_id.insert(id.to_string(), slot);
            } else if let Some(name) = entry.name.as_deref() {
                // First sighting wins when a name repeats across rows.
                chart.by_name.entry(normalize_name(name)).or_insert(slot);
            }
        }
        chart
    }

    pub fn len(&self) -> usize {
        self.by_id.len() + self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_name.is_empty()
    }

    /// Exact-key lookup, no partial matching: athlete id when the caller
    /// has one, otherwise the normalized display name.
    pub fn slot_for(&self, espn_id: Option<&str>, name: &str) -> Option<&DepthSlot> {
        if let Some(id) = espn_id.filter(|id| !id.is_empty())
            && let Some(slot) = self.by_id.get(id)
        {
            return Some(slot);
        }
        self.by_name.get(&normalize_name(name))
    }
}

/// Which depth-chart source to use for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthSource {
    #[default]
    Api,
    Page,
}

impl DepthSource {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "api" => Some(Self::Api),
            "page" => Some(Self::Page),
            _ => None,
        }
    }

    pub fn from_env() -> Self {
        std::env::var("DEPTH_SOURCE")
            .ok()
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }
}

pub fn fetch_depth_chart(
    team: &TeamInfo,
    source: DepthSource,
    positions: &PositionTable,
) -> Result<Vec<DepthEntry>> {
    match source {
        DepthSource::Api => fetch_api_depth_chart(team),
        DepthSource::Page => fetch_page_depth_chart(team, positions),
    }
}

// --- API strategy -----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DepthChartResponse {
    #[serde(default)]
    positions: Vec<DepthPositionGroup>,
}

#[derive(Debug, Deserialize)]
struct DepthPositionGroup {
    #[serde(default)]
    abbreviation: String,
    #[serde(default)]
    athletes: Vec<DepthSlotAthlete>,
}

#[derive(Debug, Deserialize)]
struct DepthSlotAthlete {
    #[serde(default)]
    athlete: Option<DepthAthleteRef>,
    #[serde(default)]
    slot: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct DepthAthleteRef {
    #[serde(default)]
    id: Option<EspnId>,
}

pub fn fetch_api_depth_chart(team: &TeamInfo) -> Result<Vec<DepthEntry>> {
    let url = format!("{DEPTH_API_URL}/{}/depthcharts", team.id);
    let body = fetch_text(&url).context("depth chart request failed")?;
    parse_api_depth_chart_json(&body)
}

pub fn parse_api_depth_chart_json(raw: &str) -> Result<Vec<DepthEntry>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty depth chart response"));
    }
    let parsed: DepthChartResponse =
        serde_json::from_str(trimmed).context("invalid depth chart json")?;

    let mut entries = Vec::new();
    for group in parsed.positions {
        for slotted in group.athletes {
            let Some(id) = slotted.athlete.and_then(|a| a.id).map(|id| id.into_string()) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            entries.push(DepthEntry {
                espn_id: Some(id),
                name: None,
                position: group.abbreviation.clone(),
                rank: slotted.slot.unwrap_or(UNSLOTTED_RANK),
            });
        }
    }
    Ok(entries)
}

// --- Page strategy ----------------------------------------------------------

pub fn fetch_page_depth_chart(team: &TeamInfo, positions: &PositionTable) -> Result<Vec<DepthEntry>> {
    let url = format!("{DEPTH_PAGE_URL}/{}/{}", team.abbr, team.slug);
    let body = fetch_text(&url).context("depth page request failed")?;
    parse_page_depth_chart_html(&body, positions)
}

/// Walks the depth page's table rows: a row whose first cell carries a
/// long-form position header ("QUARTERBACK", ...) opens a position group;
/// player links in following rows are ranked in document order within it.
pub fn parse_page_depth_chart_html(
    html: &str,
    positions: &PositionTable,
) -> Result<Vec<DepthEntry>> {
    let row_selector = Selector::parse("tr")
        .map_err(|e| anyhow::anyhow!("failed to create row selector: {e}"))?;
    let cell_selector = Selector::parse("td, th")
        .map_err(|e| anyhow::anyhow!("failed to create cell selector: {e}"))?;
    let player_selector = Selector::parse(r#"a[href*="/player/"]"#)
        .map_err(|e| anyhow::anyhow!("failed to create player selector: {e}"))?;

    let document = Html::parse_document(html);
    let mut entries = Vec::new();
    let mut current_position: Option<String> = None;
    let mut rank_in_group = 0u32;

    for row in document.select(&row_selector) {
        let first_cell_text = row
            .select(&cell_selector)
            .next()
            .map(|cell| cell.text().collect::<String>())
            .unwrap_or_default();
        let first_cell_text = first_cell_text.trim();

        if positions.is_long_label(first_cell_text) {
            current_position = Some(positions.canonicalize(first_cell_text).to_string());
            rank_in_group = 0;
            continue;
        }

        let Some(position) = current_position.as_ref() else {
            continue;
        };
        for link in row.select(&player_selector) {
            let name = link.text().collect::<String>().trim().to_string();
            // Short fragments are icon links, not names.
            if name.len() <= 2 {
                continue;
            }
            rank_in_group += 1;
            entries.push(DepthEntry {
                espn_id: None,
                name: Some(name),
                position: position.clone(),
                rank: rank_in_group,
            });
        }
    }
    Ok(entries)
}
