//! ESPN JSON roster API: the primary, structured candidate source.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_client::fetch_text;
use crate::reconcile::SourceCandidate;
use crate::teams::TeamInfo;

const ROSTER_API_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams";

const PRACTICE_SQUAD_GROUP: &str = "practiceSquad";

/// ESPN renders athlete ids and jersey numbers as either strings or bare
/// numbers depending on endpoint; accept both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum EspnId {
    Text(String),
    Number(u64),
}

impl EspnId {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(num) => num.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RosterResponse {
    #[serde(default)]
    athletes: Vec<AthleteGroup>,
}

/// The API groups athletes by roster section; the practice squad is its
/// own group with `position == "practiceSquad"`.
#[derive(Debug, Deserialize)]
struct AthleteGroup {
    #[serde(default)]
    position: String,
    #[serde(default)]
    items: Vec<RosterAthlete>,
}

#[derive(Debug, Deserialize)]
struct RosterAthlete {
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
    #[serde(rename = "fullName", default)]
    full_name: Option<String>,
    #[serde(default)]
    jersey: Option<EspnId>,
    #[serde(default)]
    position: Option<AthletePosition>,
    #[serde(default)]
    status: Option<AthleteStatus>,
    #[serde(default)]
    id: Option<EspnId>,
}

#[derive(Debug, Deserialize)]
struct AthletePosition {
    #[serde(default)]
    abbreviation: String,
}

#[derive(Debug, Deserialize)]
struct AthleteStatus {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

pub fn fetch_api_roster(team: &TeamInfo) -> Result<Vec<SourceCandidate>> {
    let url = format!("{ROSTER_API_URL}/{}/roster", team.id);
    let body = fetch_text(&url).context("roster api request failed")?;
    parse_api_roster_json(&body)
}

pub fn parse_api_roster_json(raw: &str) -> Result<Vec<SourceCandidate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty roster response"));
    }
    let parsed: RosterResponse = serde_json::from_str(trimmed).context("invalid roster json")?;

    let mut candidates = Vec::new();
    for group in parsed.athletes {
        let group_is_practice_squad = group.position == PRACTICE_SQUAD_GROUP;
        for athlete in group.items {
            let name = athlete
                .display_name
                .or(athlete.full_name)
                .unwrap_or_else(|| "Unknown".to_string());
            let practice_squad = group_is_practice_squad
                || athlete
                    .status
                    .and_then(|s| s.kind)
                    .is_some_and(|kind| kind == PRACTICE_SQUAD_GROUP);
            let number = athlete
                .jersey
                .map(EspnId::into_string)
                .and_then(|jersey| jersey.parse::<u32>().ok());
            candidates.push(SourceCandidate {
                name,
                position: athlete
                    .position
                    .map(|p| p.abbreviation)
                    .unwrap_or_default(),
                number,
                practice_squad,
                espn_id: athlete
                    .id
                    .map(EspnId::into_string)
                    .filter(|id| !id.is_empty()),
            });
        }
    }
    Ok(candidates)
}
