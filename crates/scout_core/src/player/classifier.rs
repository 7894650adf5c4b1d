//! Position classification.
//!
//! A player's position is the label of their highest primary attribute:
//! St → GK, Tk → DF, Ps → MF, Sh → FW. Equal maxima resolve to the first
//! label in GK, DF, MF, FW order.

use super::eligibility::is_youth_eligible;
use crate::error::{Result, ScoutError};
use crate::models::{PlayerRecord, Position, ScoutedPlayer};
use tracing::debug;

/// Derive the position from St, Tk, Ps and Sh.
pub fn classify(record: &PlayerRecord) -> Result<Position> {
    let primary = |position: Position| {
        let stat = position.primary_stat();
        record.stat(stat).ok_or_else(|| ScoutError::MissingAttribute {
            player: record.player.clone(),
            attribute: stat.column(),
        })
    };

    let mut best = Position::GK;
    let mut top = primary(Position::GK)?;
    for position in [Position::DF, Position::MF, Position::FW] {
        let value = primary(position)?;
        // strict comparison keeps the earliest label on ties
        if value > top {
            best = position;
            top = value;
        }
    }

    Ok(best)
}

/// Classify and flag a single record.
pub fn scout(record: PlayerRecord) -> Result<ScoutedPlayer> {
    let position = classify(&record)?;
    let youth_eligible = is_youth_eligible(&record, position);
    Ok(ScoutedPlayer {
        record,
        position: Some(position),
        youth_eligible,
    })
}

/// Outcome of classifying a whole record set.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Every record in input order. Rows missing a primary attribute carry no
    /// position and are kept out of position-dependent views.
    pub players: Vec<ScoutedPlayer>,
    /// Rows without a position.
    pub unclassified: usize,
}

impl Classification {
    pub fn total(&self) -> usize {
        self.players.len()
    }

    pub fn classified(&self) -> impl Iterator<Item = &ScoutedPlayer> {
        self.players.iter().filter(|p| p.is_classified())
    }

    /// Split off the classified rows, keeping input order.
    pub fn into_classified(self) -> Vec<ScoutedPlayer> {
        self.players
            .into_iter()
            .filter(ScoutedPlayer::is_classified)
            .collect()
    }
}

pub fn classify_all(records: &[PlayerRecord]) -> Classification {
    let mut out = Classification::default();

    for record in records {
        match scout(record.clone()) {
            Ok(player) => out.players.push(player),
            Err(err) => {
                debug!(error = %err, team = %record.team, "record left unclassified");
                out.players.push(ScoutedPlayer::unclassified(record.clone()));
                out.unclassified += 1;
            }
        }
    }

    debug!(
        total = out.players.len(),
        unclassified = out.unclassified,
        "classified player records"
    );
    out
}
