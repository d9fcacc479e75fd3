//! Final output records: team metadata attached, scores computed, and the
//! run-wide ordering applied.

use serde::{Deserialize, Serialize};

use crate::positions::PositionTable;
use crate::reconcile::RosterPlayer;
use crate::scoring::{classify, popularity_score, Difficulty};
use crate::teams::TeamInfo;

/// One persisted player record. Field names and presence rules are the
/// contract with the game's data layer; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalPlayer {
    #[serde(rename = "espnId")]
    pub espn_id: Option<String>,
    #[serde(rename = "teamId")]
    pub team_id: u32,
    pub name: String,
    pub conference: String,
    pub division: String,
    pub team: String,
    pub position: String,
    pub number: u32,
    #[serde(rename = "practiceSquad")]
    pub practice_squad: bool,
    pub popularity: i32,
    pub difficulty: Difficulty,
    #[serde(rename = "depthChart")]
    pub depth_chart: Option<String>,
}

/// Scores one team's reconciled roster and stamps the caller-supplied
/// team metadata onto each record.
pub fn assemble_team(
    team: &TeamInfo,
    players: Vec<RosterPlayer>,
    positions: &PositionTable,
) -> Vec<CanonicalPlayer> {
    players
        .into_iter()
        .map(|player| {
            let popularity = popularity_score(&player, positions);
            let difficulty = classify(popularity, player.practice_squad);
            CanonicalPlayer {
                espn_id: player.espn_id,
                team_id: team.id,
                name: player.name,
                conference: team.conference.to_string(),
                division: team.division.to_string(),
                team: team.name.to_string(),
                position: player.position,
                number: player.number,
                practice_squad: player.practice_squad,
                popularity,
                difficulty,
                depth_chart: player.depth_label,
            }
        })
        .collect()
}

/// Accumulates assembled teams across a run and produces the final
/// ordered sequence. The sort keys are the only ordering guarantee.
#[derive(Debug, Default)]
pub struct RosterAssembler {
    players: Vec<CanonicalPlayer>,
}

impl RosterAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_team(&mut self, players: Vec<CanonicalPlayer>) {
        self.players.extend(players);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Stable sort by (conference, division, team, name), all ascending,
    /// case-sensitive. Ties keep their accumulation order.
    pub fn finish(mut self) -> Vec<CanonicalPlayer> {
        self.players.sort_by(|a, b| {
            (&a.conference, &a.division, &a.team, &a.name)
                .cmp(&(&b.conference, &b.division, &b.team, &b.name))
        });
        self.players
    }
}
