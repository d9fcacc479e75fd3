//! Recognizability scoring and difficulty tiering.
//!
//! The score is a fixed linear heuristic, not a model; downstream data
//! depends on it bit-for-bit, so the terms and their order are frozen.

use serde::{Deserialize, Serialize};

use crate::positions::PositionTable;
use crate::reconcile::RosterPlayer;

const ESPN_ID_POINTS: i32 = 20;
const STARTER_POINTS: i32 = 30;
const SECOND_STRING_POINTS: i32 = 15;
const THIRD_STRING_POINTS: i32 = 5;
const PRACTICE_SQUAD_PENALTY: i32 = 20;

pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;

/// Question-difficulty buckets derived from the popularity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Popularity score in [0, 100]: position tier points, +20 for a tracked
/// espn id, a depth bonus for the top three strings, −20 for practice
/// squad, clamped last.
pub fn popularity_score(player: &RosterPlayer, positions: &PositionTable) -> i32 {
    let mut score = positions.tier_points(&player.position);

    if player.espn_id.as_deref().is_some_and(|id| !id.is_empty()) {
        score += ESPN_ID_POINTS;
    }

    score += match player.depth_rank {
        Some(1) => STARTER_POINTS,
        Some(2) => SECOND_STRING_POINTS,
        Some(3) => THIRD_STRING_POINTS,
        _ => 0,
    };

    if player.practice_squad {
        score -= PRACTICE_SQUAD_PENALTY;
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Practice squad forces `expert` regardless of score; otherwise strict
/// thresholds at 70 and 40 (a score of exactly 70 is `medium`).
pub fn classify(score: i32, practice_squad: bool) -> Difficulty {
    if practice_squad {
        Difficulty::Expert
    } else if score > 70 {
        Difficulty::Easy
    } else if score > 40 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}
