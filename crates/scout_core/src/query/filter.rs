//! Filter combinator.
//!
//! A [`FilterSet`] is a plain conjunction of column predicates. Predicates are
//! independent of each other, so their order never changes the result.
//! Range bounds typed into a UI arrive as text; a bound that does not parse
//! is dropped on its own instead of rejecting the whole filter.

use crate::data::clubs::{has_youth_prefix, ClubDirectory};
use crate::data::parser::parse_number;
use crate::models::{Position, ScoutedPlayer, Stat};
use rustc_hash::FxHashSet;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Inclusive age window; `None` leaves that side open.
    AgeRange { min: Option<f64>, max: Option<f64> },
    Position(Position),
    /// Team code equality (case-insensitive).
    Team(String),
    /// Team code membership; codes stored lowercased.
    Teams(FxHashSet<String>),
    /// Team code carries the youth prefix.
    YouthTeam { prefix: String },
    /// Nationality code equality (case-insensitive).
    Nationality(String),
    /// Inclusive range on a numeric column. Missing values never match.
    StatRange {
        stat: Stat,
        min: Option<f64>,
        max: Option<f64>,
    },
    YouthEligible(bool),
    /// Player name membership.
    Shortlist(FxHashSet<String>),
}

/// Lenient numeric bound: blank means unset, garbage is ignored with a warning.
pub fn parse_bound(raw: &str, label: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_number(raw);
    if parsed.is_none() {
        warn!(bound = %raw, filter = %label, "ignoring unparseable filter bound");
    }
    parsed
}

fn in_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
}

impl Predicate {
    pub fn age_range(min: u32, max: u32) -> Self {
        Predicate::AgeRange {
            min: Some(min as f64),
            max: Some(max as f64),
        }
    }

    /// Age window from text bounds. `None` when neither bound survives.
    pub fn age_range_text(min: &str, max: &str) -> Option<Self> {
        let min = parse_bound(min, "Age");
        let max = parse_bound(max, "Age");
        (min.is_some() || max.is_some()).then_some(Predicate::AgeRange { min, max })
    }

    pub fn stat_range(stat: Stat, min: Option<f64>, max: Option<f64>) -> Self {
        Predicate::StatRange { stat, min, max }
    }

    /// Stat range from text bounds. `None` when neither bound survives.
    pub fn stat_range_text(stat: Stat, min: &str, max: &str) -> Option<Self> {
        let min = parse_bound(min, stat.column());
        let max = parse_bound(max, stat.column());
        (min.is_some() || max.is_some()).then_some(Predicate::StatRange { stat, min, max })
    }

    pub fn team(code: impl Into<String>) -> Self {
        Predicate::Team(code.into())
    }

    pub fn teams<I, T>(codes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Predicate::Teams(
            codes
                .into_iter()
                .map(|c| c.as_ref().trim().to_ascii_lowercase())
                .collect(),
        )
    }

    /// A club's senior team, plus its affiliated youth teams if asked.
    pub fn club(directory: &ClubDirectory, code: &str, include_youth: bool) -> Self {
        Predicate::Teams(directory.teams_for_club(code, include_youth))
    }

    /// Every team in the youth namespace.
    pub fn youth_teams(directory: &ClubDirectory) -> Self {
        Predicate::YouthTeam {
            prefix: directory.youth_prefix().to_string(),
        }
    }

    pub fn shortlist<I, T>(players: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Predicate::Shortlist(players.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, player: &ScoutedPlayer) -> bool {
        let record = &player.record;
        match self {
            Predicate::AgeRange { min, max } => in_range(record.age as f64, *min, *max),
            Predicate::Position(position) => player.position == Some(*position),
            Predicate::Team(code) => record.team.eq_ignore_ascii_case(code.trim()),
            Predicate::Teams(codes) => codes.contains(&record.team.to_ascii_lowercase()),
            Predicate::YouthTeam { prefix } => has_youth_prefix(&record.team, prefix),
            Predicate::Nationality(nat) => record.nat.eq_ignore_ascii_case(nat.trim()),
            Predicate::StatRange { stat, min, max } => record
                .stat(*stat)
                .is_some_and(|value| in_range(value, *min, *max)),
            Predicate::YouthEligible(wanted) => player.youth_eligible == *wanted,
            Predicate::Shortlist(names) => names.contains(&record.player),
        }
    }

    /// Only meaningful for rows with a derived position.
    pub fn needs_position(&self) -> bool {
        matches!(self, Predicate::Position(_) | Predicate::YouthEligible(_))
    }

    /// Age bounds pulled inside `[lo, hi]`; an open side becomes the limit.
    pub fn clamp_age(self, lo: u32, hi: u32) -> Self {
        match self {
            Predicate::AgeRange { min, max } => {
                let (lo, hi) = (lo as f64, hi as f64);
                let clamp = |v: f64| v.max(lo).min(hi);
                Predicate::AgeRange {
                    min: Some(min.map_or(lo, clamp)),
                    max: Some(max.map_or(hi, clamp)),
                }
            }
            other => other,
        }
    }

    fn is_team_scoped(&self) -> bool {
        matches!(
            self,
            Predicate::Team(_) | Predicate::Teams(_) | Predicate::YouthTeam { .. }
        )
    }
}

/// Conjunction of predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Add a predicate that may have been rejected by lenient parsing.
    pub fn push_opt(&mut self, predicate: Option<Predicate>) {
        if let Some(predicate) = predicate {
            self.push(predicate);
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, player: &ScoutedPlayer) -> bool {
        self.predicates.iter().all(|p| p.matches(player))
    }

    /// The position when exactly one distinct position-equality predicate is active.
    pub fn single_position(&self) -> Option<Position> {
        let mut found: Option<Position> = None;
        for predicate in &self.predicates {
            if let Predicate::Position(position) = predicate {
                match found {
                    Some(existing) if existing != *position => return None,
                    _ => found = Some(*position),
                }
            }
        }
        found
    }

    /// Any predicate that only applies to classified rows.
    pub fn needs_position(&self) -> bool {
        self.predicates.iter().any(Predicate::needs_position)
    }

    /// Every age range pulled inside the inclusive `[lo, hi]` window.
    pub fn clamp_age(self, lo: u32, hi: u32) -> Self {
        self.predicates
            .into_iter()
            .map(|p| p.clamp_age(lo, hi))
            .collect()
    }

    /// Any predicate narrows the view to particular teams.
    pub fn has_team_scope(&self) -> bool {
        self.predicates.iter().any(Predicate::is_team_scoped)
    }
}

impl FromIterator<Predicate> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

/// Keep the players matching every predicate, preserving input order.
pub fn apply_filters(players: &[ScoutedPlayer], filters: &FilterSet) -> Vec<ScoutedPlayer> {
    players
        .iter()
        .filter(|player| filters.matches(player))
        .cloned()
        .collect()
}
