use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the player-statistics export.
///
/// Column order in the source file: Team, Player, Age, Nat, St, Tk, Ps, Sh,
/// Ag, KAb, TAb, PAb, SAb. Numeric columns other than Age are `None` when the
/// source value was not a finite number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Nat")]
    pub nat: String,

    // Primary skill attributes
    #[serde(rename = "St")]
    pub st: Option<f64>,
    #[serde(rename = "Tk")]
    pub tk: Option<f64>,
    #[serde(rename = "Ps")]
    pub ps: Option<f64>,
    #[serde(rename = "Sh")]
    pub sh: Option<f64>,

    #[serde(rename = "Ag")]
    pub ag: Option<f64>,

    // Ability points, one per primary attribute
    #[serde(rename = "KAb")]
    pub kab: Option<f64>,
    #[serde(rename = "TAb")]
    pub tab: Option<f64>,
    #[serde(rename = "PAb")]
    pub pab: Option<f64>,
    #[serde(rename = "SAb")]
    pub sab: Option<f64>,
}

impl PlayerRecord {
    /// Value of a numeric column.
    pub fn stat(&self, stat: Stat) -> Option<f64> {
        stat.value(self)
    }
}

/// Numeric columns usable as filter and sort keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stat {
    St,
    Tk,
    Ps,
    Sh,
    Ag,
    KAb,
    TAb,
    PAb,
    SAb,
}

impl Stat {
    pub const ALL: [Stat; 9] = [
        Stat::St,
        Stat::Tk,
        Stat::Ps,
        Stat::Sh,
        Stat::Ag,
        Stat::KAb,
        Stat::TAb,
        Stat::PAb,
        Stat::SAb,
    ];

    pub fn value(&self, record: &PlayerRecord) -> Option<f64> {
        match self {
            Stat::St => record.st,
            Stat::Tk => record.tk,
            Stat::Ps => record.ps,
            Stat::Sh => record.sh,
            Stat::Ag => record.ag,
            Stat::KAb => record.kab,
            Stat::TAb => record.tab,
            Stat::PAb => record.pab,
            Stat::SAb => record.sab,
        }
    }

    /// Column heading as it appears in the scouting table.
    pub fn column(&self) -> &'static str {
        match self {
            Stat::St => "St",
            Stat::Tk => "Tk",
            Stat::Ps => "Ps",
            Stat::Sh => "Sh",
            Stat::Ag => "Ag",
            Stat::KAb => "KAb",
            Stat::TAb => "TAb",
            Stat::PAb => "PAb",
            Stat::SAb => "SAb",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.column().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown stat column '{wanted}'"))
    }
}

/// A table row: the untouched source record plus derived columns.
///
/// `position` is `None` when a primary attribute is missing; such rows are
/// never youth eligible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoutedPlayer {
    #[serde(flatten)]
    pub record: PlayerRecord,
    #[serde(rename = "Position")]
    pub position: Option<Position>,
    #[serde(rename = "YouthEligible")]
    pub youth_eligible: bool,
}

impl ScoutedPlayer {
    /// Row without derived position.
    pub fn unclassified(record: PlayerRecord) -> Self {
        Self {
            record,
            position: None,
            youth_eligible: false,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.position.is_some()
    }

    /// Value of this player's own primary attribute.
    pub fn primary_value(&self) -> Option<f64> {
        self.position
            .and_then(|position| self.record.stat(position.primary_stat()))
    }

    /// Value of this player's own ability-points column.
    pub fn secondary_value(&self) -> Option<f64> {
        self.position
            .and_then(|position| self.record.stat(position.secondary_stat()))
    }
}
