use super::record::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generic playing position derived from a player's strongest primary attribute.
///
/// Declaration order is the enumeration order used for tie-breaks and for
/// squad ordering (GK < DF < MF < FW).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DF,
    MF,
    FW,
}

impl Position {
    /// All positions in enumeration order.
    pub const ALL: [Position; 4] = [Position::GK, Position::DF, Position::MF, Position::FW];

    /// Squad ordering rank (0=GK ... 3=FW).
    pub fn rank(&self) -> u8 {
        match self {
            Position::GK => 0,
            Position::DF => 1,
            Position::MF => 2,
            Position::FW => 3,
        }
    }

    /// The skill attribute that decides this position.
    pub fn primary_stat(&self) -> Stat {
        match self {
            Position::GK => Stat::St,
            Position::DF => Stat::Tk,
            Position::MF => Stat::Ps,
            Position::FW => Stat::Sh,
        }
    }

    /// The ability-points column paired with the primary attribute.
    pub fn secondary_stat(&self) -> Stat {
        match self {
            Position::GK => Stat::KAb,
            Position::DF => Stat::TAb,
            Position::MF => Stat::PAb,
            Position::FW => Stat::SAb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GK" => Ok(Position::GK),
            "DF" => Ok(Position::DF),
            "MF" => Ok(Position::MF),
            "FW" => Ok(Position::FW),
            other => Err(format!("unknown position '{other}'")),
        }
    }
}
