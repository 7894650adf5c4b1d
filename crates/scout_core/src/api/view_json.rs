//! JSON boundary for presentation layers.
//!
//! Request:
//! ```json
//! {
//!   "filters": [
//!     {"kind": "age", "min": 18, "max": "21"},
//!     {"kind": "club", "code": "ars", "include_youth": true},
//!     {"kind": "stat", "stat": "Ps", "min": "12"}
//!   ],
//!   "mode": "auto"
//! }
//! ```
//! Bounds may be numbers or strings; a bound that does not parse is ignored.
//! `mode` is `"auto"` (default), `"squad"`, `"none"` or a position label.

use crate::data::cache::LoadStats;
use crate::data::clubs::ClubDirectory;
use crate::error::{Result, ScoutError};
use crate::models::{Position, Stat};
use crate::query::{parse_bound, FilterSet, Predicate, RankMode, ScoutingView};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub filters: Vec<FilterClause>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterClause {
    Age {
        #[serde(default)]
        min: Option<Value>,
        #[serde(default)]
        max: Option<Value>,
    },
    Position {
        position: Position,
    },
    Team {
        code: String,
    },
    Teams {
        codes: Vec<String>,
    },
    Club {
        code: String,
        #[serde(default)]
        include_youth: bool,
    },
    YouthTeams,
    Nationality {
        code: String,
    },
    Stat {
        stat: Stat,
        #[serde(default)]
        min: Option<Value>,
        #[serde(default)]
        max: Option<Value>,
    },
    YouthEligible {
        value: bool,
    },
    Shortlist {
        players: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    pub schema_version: String,
    /// Records come from a last-known-good cache after a failed refresh.
    pub stale: bool,
    pub source: Option<LoadStats>,
    #[serde(flatten)]
    pub view: ScoutingView,
}

/// Lenient bound from a JSON value: numbers and numeric strings count, anything else is ignored.
fn json_bound(value: Option<&Value>, label: &str) -> Option<f64> {
    match value? {
        Value::Null => None,
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_bound(s, label),
        other => {
            warn!(bound = %other, filter = %label, "ignoring non-numeric filter bound");
            None
        }
    }
}

impl FilterClause {
    /// Predicate for this clause, or `None` when all its bounds were dropped.
    pub fn to_predicate(&self, clubs: &ClubDirectory) -> Option<Predicate> {
        match self {
            FilterClause::Age { min, max } => {
                let min = json_bound(min.as_ref(), "Age");
                let max = json_bound(max.as_ref(), "Age");
                (min.is_some() || max.is_some()).then_some(Predicate::AgeRange { min, max })
            }
            FilterClause::Position { position } => Some(Predicate::Position(*position)),
            FilterClause::Team { code } => Some(Predicate::team(code.clone())),
            FilterClause::Teams { codes } => Some(Predicate::teams(codes)),
            FilterClause::Club {
                code,
                include_youth,
            } => Some(Predicate::club(clubs, code, *include_youth)),
            FilterClause::YouthTeams => Some(Predicate::youth_teams(clubs)),
            FilterClause::Nationality { code } => Some(Predicate::Nationality(code.clone())),
            FilterClause::Stat { stat, min, max } => {
                let min = json_bound(min.as_ref(), stat.column());
                let max = json_bound(max.as_ref(), stat.column());
                (min.is_some() || max.is_some()).then_some(Predicate::stat_range(*stat, min, max))
            }
            FilterClause::YouthEligible { value } => Some(Predicate::YouthEligible(*value)),
            FilterClause::Shortlist { players } => Some(Predicate::shortlist(players.iter().cloned())),
        }
    }
}

impl ViewRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ScoutError::InvalidRequest(e.to_string()))
    }

    pub fn filter_set(&self, clubs: &ClubDirectory) -> FilterSet {
        self.filters
            .iter()
            .filter_map(|clause| clause.to_predicate(clubs))
            .collect()
    }

    /// Resolve the requested ordering against the active filters.
    pub fn rank_mode(&self, filters: &FilterSet) -> Result<Option<RankMode>> {
        let Some(raw) = self.mode.as_deref().map(str::trim) else {
            return Ok(RankMode::infer(filters));
        };
        match raw.to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(RankMode::infer(filters)),
            "squad" => Ok(Some(RankMode::Squad)),
            "none" => Ok(None),
            _ => raw
                .parse::<Position>()
                .map(|p| Some(RankMode::Position(p)))
                .map_err(ScoutError::InvalidRequest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clubs() -> ClubDirectory {
        ClubDirectory::from_yaml_str(
            "youth_prefix: y\nclubs:\n  - {code: ars, name: Arsenal, youth: [yars]}\n",
        )
        .unwrap()
    }

    #[test]
    fn parses_tagged_filters() {
        let request = ViewRequest::from_json(
            r#"{
                "filters": [
                    {"kind": "age", "min": 18, "max": "21"},
                    {"kind": "position", "position": "DF"},
                    {"kind": "club", "code": "ars", "include_youth": true},
                    {"kind": "youth_teams"},
                    {"kind": "stat", "stat": "Tk", "min": "12.5"},
                    {"kind": "youth_eligible", "value": true},
                    {"kind": "shortlist", "players": ["A", "B"]}
                ]
            }"#,
        )
        .unwrap();

        let filters = request.filter_set(&clubs());
        assert_eq!(filters.predicates().len(), 7);
        assert_eq!(
            filters.predicates()[0],
            Predicate::AgeRange {
                min: Some(18.0),
                max: Some(21.0)
            }
        );
        assert_eq!(
            filters.predicates()[4],
            Predicate::stat_range(Stat::Tk, Some(12.5), None)
        );
    }

    #[test]
    fn bad_bounds_drop_only_themselves() {
        let request = ViewRequest::from_json(
            r#"{"filters": [
                {"kind": "age", "min": "eighteen", "max": 25},
                {"kind": "stat", "stat": "Sh", "min": true, "max": "x"},
                {"kind": "team", "code": "ars"}
            ]}"#,
        )
        .unwrap();

        let filters = request.filter_set(&clubs());
        assert_eq!(
            filters.predicates(),
            &[
                Predicate::AgeRange {
                    min: None,
                    max: Some(25.0)
                },
                Predicate::team("ars"),
            ]
        );
    }

    #[test]
    fn mode_resolution() {
        let filters = FilterSet::new().with(Predicate::team("ars"));
        let mode = |m: Option<&str>| {
            ViewRequest {
                filters: vec![],
                mode: m.map(str::to_string),
            }
            .rank_mode(&filters)
        };

        assert_eq!(mode(None).unwrap(), Some(RankMode::Squad));
        assert_eq!(mode(Some("auto")).unwrap(), Some(RankMode::Squad));
        assert_eq!(mode(Some("none")).unwrap(), None);
        assert_eq!(mode(Some("fw")).unwrap(), Some(RankMode::Position(Position::FW)));
        assert!(matches!(mode(Some("striker")), Err(ScoutError::InvalidRequest(_))));
    }

    #[test]
    fn malformed_request_is_invalid() {
        assert!(matches!(
            ViewRequest::from_json(r#"{"filters": [{"kind": "position", "position": "ST"}]}"#),
            Err(ScoutError::InvalidRequest(_))
        ));
        assert!(ViewRequest::from_json("{}").unwrap().filters.is_empty());
    }
}
