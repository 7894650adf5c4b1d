//! Position-aware multi-key ordering.
//!
//! - `Position(p)`: p's primary stat desc, then p's ability points desc
//! - `Squad`: position group (GK, DF, MF, FW), then each player's own primary
//!   stat desc, own ability points desc, then player name asc
//!
//! Sorting is stable; missing values sort after present ones, and rows
//! without a position sort after every position group.

use super::filter::FilterSet;
use crate::models::{Position, ScoutedPlayer, Stat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMode {
    /// Single-position view.
    Position(Position),
    /// Mixed-position view grouped by position.
    Squad,
}

impl RankMode {
    /// Mode implied by the active filters: one position selected → that
    /// position; a team scope → squad; otherwise keep input order.
    pub fn infer(filters: &FilterSet) -> Option<RankMode> {
        if let Some(position) = filters.single_position() {
            return Some(RankMode::Position(position));
        }
        filters.has_team_scope().then_some(RankMode::Squad)
    }
}

/// Descending on present values; `None` last. Equal values (including
/// `-0.0` against `0.0`) compare equal so the stable sort keeps input order.
fn desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_stats(a: &ScoutedPlayer, b: &ScoutedPlayer, primary: Stat, secondary: Stat) -> Ordering {
    desc(a.record.stat(primary), b.record.stat(primary))
        .then_with(|| desc(a.record.stat(secondary), b.record.stat(secondary)))
}

fn group(player: &ScoutedPlayer) -> u8 {
    player.position.map_or(u8::MAX, |p| p.rank())
}

pub fn compare(mode: RankMode, a: &ScoutedPlayer, b: &ScoutedPlayer) -> Ordering {
    match mode {
        RankMode::Position(position) => {
            by_stats(a, b, position.primary_stat(), position.secondary_stat())
        }
        RankMode::Squad => group(a)
            .cmp(&group(b))
            .then_with(|| desc(a.primary_value(), b.primary_value()))
            .then_with(|| desc(a.secondary_value(), b.secondary_value()))
            .then_with(|| a.record.player.cmp(&b.record.player)),
    }
}

/// Sort in place (stable).
pub fn rank_in_place(players: &mut [ScoutedPlayer], mode: RankMode) {
    players.sort_by(|a, b| compare(mode, a, b));
}

/// Ordered copy of `players`.
pub fn rank(players: &[ScoutedPlayer], mode: RankMode) -> Vec<ScoutedPlayer> {
    let mut ranked = players.to_vec();
    rank_in_place(&mut ranked, mode);
    ranked
}
