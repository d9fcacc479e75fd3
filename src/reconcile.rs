//! The reconciliation core: merges per-source candidate observations into
//! one record per player identity and attaches depth-chart ranks.
//!
//! The core performs no I/O and never fails; malformed input degrades to
//! exclusion or absent fields, so a partial upstream still yields a
//! best-effort roster.

use std::collections::HashSet;

use crate::depth_chart::DepthChart;
use crate::names::{normalize_name, surname};

/// A player observation from one source, prior to merge. Ephemeral; lives
/// only for one team's reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidate {
    pub name: String,
    pub position: String,
    /// Parsed jersey number. Candidates without one cannot be reconciled
    /// reliably and are dropped during merge.
    pub number: Option<u32>,
    pub practice_squad: bool,
    pub espn_id: Option<String>,
}

/// One reconciled player on one team: the merge output, enriched with the
/// depth-chart rank when one matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPlayer {
    pub name: String,
    pub position: String,
    pub number: u32,
    pub practice_squad: bool,
    pub espn_id: Option<String>,
    /// `{position}{rank}` from the depth chart, e.g. `"QB1"`. Present iff
    /// `depth_rank` is present.
    pub depth_label: Option<String>,
    pub depth_rank: Option<u32>,
}

/// How candidate observations are recognized as the same player. Behind a
/// trait so the name heuristic can be swapped for a stronger key (athlete
/// id, say) without touching annotation or scoring.
pub trait IdentityStrategy {
    /// Exact identity key used for map insertion.
    fn key(&self, candidate: &SourceCandidate) -> String;

    /// Whether a later observation refers to an already-claimed identity
    /// even though its exact key differs.
    fn same_identity(&self, claimed: &SourceCandidate, later: &SourceCandidate) -> bool;
}

/// Default strategy: normalized display name, with a surname-plus-position
/// fallback for sources that abbreviate or re-spell first names.
///
/// Known limitation: two teammates sharing surname and position collide
/// under the fallback and the later source's observation is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameIdentity;

impl IdentityStrategy for NameIdentity {
    fn key(&self, candidate: &SourceCandidate) -> String {
        normalize_name(&candidate.name)
    }

    fn same_identity(&self, claimed: &SourceCandidate, later: &SourceCandidate) -> bool {
        let (Some(a), Some(b)) = (surname(&claimed.name), surname(&later.name)) else {
            return false;
        };
        a == b && !claimed.position.is_empty() && claimed.position == later.position
    }
}

/// Merges candidate sets, highest-priority source first. Once an identity
/// is claimed, later sources contribute nothing for it, field conflicts
/// included; the first source's values stand. Candidates without a jersey
/// number are dropped. Output preserves first-seen order across sources.
pub fn merge_sources<S: IdentityStrategy>(
    strategy: &S,
    sources: &[Vec<SourceCandidate>],
) -> Vec<RosterPlayer> {
    let mut claimed_keys: HashSet<String> = HashSet::new();
    let mut picked: Vec<SourceCandidate> = Vec::new();

    for source in sources {
        for candidate in source {
            if candidate.number.is_none() {
                continue;
            }
            let key = strategy.key(candidate);
            if claimed_keys.contains(&key) {
                continue;
            }
            if picked
                .iter()
                .any(|existing| strategy.same_identity(existing, candidate))
            {
                continue;
            }
            claimed_keys.insert(key);
            picked.push(candidate.clone());
        }
    }

    picked
        .into_iter()
        .filter_map(|candidate| {
            let number = candidate.number?;
            Some(RosterPlayer {
                name: candidate.name,
                position: candidate.position,
                number,
                practice_squad: candidate.practice_squad,
                espn_id: candidate.espn_id,
                depth_label: None,
                depth_rank: None,
            })
        })
        .collect()
}

/// Attaches depth-chart labels to resolved players. Exact-key joins only;
/// players without a matching entry keep both depth fields absent.
pub fn annotate_depth(players: &mut [RosterPlayer], chart: &DepthChart) {
    for player in players.iter_mut() {
        if let Some(slot) = chart.slot_for(player.espn_id.as_deref(), &player.name) {
            player.depth_label = Some(slot.label());
            player.depth_rank = Some(slot.rank);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth_chart::DepthEntry;

    fn candidate(name: &str, position: &str, number: Option<u32>) -> SourceCandidate {
        SourceCandidate {
            name: name.to_string(),
            position: position.to_string(),
            number,
            practice_squad: false,
            espn_id: None,
        }
    }

    #[test]
    fn first_source_wins_on_field_conflict() {
        let api = vec![candidate("Jane Doe", "WR", Some(11))];
        let html = vec![candidate("Jane Doe", "RB", Some(12))];
        let merged = merge_sources(&NameIdentity, &[api, html]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].position, "WR");
        assert_eq!(merged[0].number, 11);
    }

    #[test]
    fn candidates_without_jersey_are_dropped() {
        let api = vec![
            candidate("John Smith", "QB", None),
            candidate("Backup Kicker", "K", Some(4)),
        ];
        let merged = merge_sources(&NameIdentity, &[api]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Backup Kicker");
    }

    #[test]
    fn output_preserves_first_seen_order_across_sources() {
        let api = vec![
            candidate("Alpha One", "QB", Some(1)),
            candidate("Beta Two", "RB", Some(2)),
        ];
        let html = vec![
            candidate("Beta Two", "RB", Some(22)),
            candidate("Gamma Three", "WR", Some(3)),
        ];
        let merged = merge_sources(&NameIdentity, &[api, html]);
        let names: Vec<&str> = merged.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha One", "Beta Two", "Gamma Three"]);
        assert_eq!(merged[1].number, 2);
    }

    #[test]
    fn merge_is_idempotent_for_identical_input() {
        let api = vec![
            candidate("Alpha One", "QB", Some(1)),
            candidate("Beta Two", "RB", None),
        ];
        let html = vec![candidate("Gamma Three", "WR", Some(3))];
        let sources = [api, html];
        let first = merge_sources(&NameIdentity, &sources);
        let second = merge_sources(&NameIdentity, &sources);
        assert_eq!(first, second);
    }

    #[test]
    fn surname_and_position_claim_the_same_identity() {
        // The HTML page abbreviates the first name; the fallback treats it
        // as the player the API already supplied.
        let api = vec![candidate("Patrick Mahomes", "QB", Some(15))];
        let html = vec![candidate("P. Mahomes", "QB", Some(15))];
        let merged = merge_sources(&NameIdentity, &[api, html]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Patrick Mahomes");
    }

    #[test]
    fn surname_fallback_requires_position_equality() {
        let api = vec![candidate("Jason Kelce", "C", Some(62))];
        let html = vec![candidate("Travis Kelce", "TE", Some(87))];
        let merged = merge_sources(&NameIdentity, &[api, html]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn depth_fields_are_both_set_or_both_absent() {
        let mut players = merge_sources(
            &NameIdentity,
            &[vec![
                candidate("Starter Quarterback", "QB", Some(9)),
                candidate("Unlisted Lineman", "G", Some(66)),
            ]],
        );
        let chart = DepthChart::from_entries(&[DepthEntry {
            espn_id: None,
            name: Some("Starter Quarterback".to_string()),
            position: "QB".to_string(),
            rank: 1,
        }]);
        annotate_depth(&mut players, &chart);

        assert_eq!(players[0].depth_label.as_deref(), Some("QB1"));
        assert_eq!(players[0].depth_rank, Some(1));
        assert!(players[1].depth_label.is_none());
        assert!(players[1].depth_rank.is_none());
    }

    #[test]
    fn annotation_uses_depth_entry_position_not_roster_position() {
        // Rostered as WR but charted at punt returner; the label reflects
        // the chart.
        let mut players =
            merge_sources(&NameIdentity, &[vec![candidate("Return Man", "WR", Some(19))]]);
        let chart = DepthChart::from_entries(&[DepthEntry {
            espn_id: None,
            name: Some("Return Man".to_string()),
            position: "PR".to_string(),
            rank: 1,
        }]);
        annotate_depth(&mut players, &chart);
        assert_eq!(players[0].depth_label.as_deref(), Some("PR1"));
    }

    #[test]
    fn tied_depth_ranks_annotate_both_players() {
        let mut players = merge_sources(
            &NameIdentity,
            &[vec![
                SourceCandidate {
                    espn_id: Some("101".to_string()),
                    ..candidate("First Back", "RB", Some(20))
                },
                candidate("Second Back", "RB", Some(21)),
            ]],
        );
        let chart = DepthChart::from_entries(&[
            DepthEntry {
                espn_id: Some("101".to_string()),
                name: None,
                position: "RB".to_string(),
                rank: 1,
            },
            DepthEntry {
                espn_id: None,
                name: Some("Second Back".to_string()),
                position: "RB".to_string(),
                rank: 1,
            },
        ]);
        annotate_depth(&mut players, &chart);

        assert_eq!(players[0].depth_label.as_deref(), Some("RB1"));
        assert_eq!(players[1].depth_label.as_deref(), Some("RB1"));
        assert_eq!(players[0].depth_rank, Some(1));
        assert_eq!(players[1].depth_rank, Some(1));
    }

    #[test]
    fn empty_sources_yield_empty_roster() {
        let merged = merge_sources(&NameIdentity, &[Vec::new(), Vec::new()]);
        assert!(merged.is_empty());
    }
}
