//! Club directory: team code → full club name, plus youth-team affiliations.
//!
//! This is configuration data loaded from YAML (`data/clubs.yaml`), not
//! something derived from the player export. Youth teams are recognised by
//! the reserved code prefix; which senior club they belong to comes from the
//! `youth` lists in the file.

use crate::error::{Result, ScoutError};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default directory shipped with the crate.
pub const DEFAULT_CLUBS_YAML: &str = include_str!("../../../../data/clubs.yaml");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubEntry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub youth: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ClubFile {
    youth_prefix: String,
    #[serde(default)]
    clubs: Vec<ClubEntry>,
}

#[derive(Debug, Clone)]
pub struct ClubDirectory {
    youth_prefix: String,
    clubs: Vec<ClubEntry>,
    /// Lowercased senior code -> index into `clubs`
    by_code: FxHashMap<String, usize>,
    /// Lowercased youth code -> index of the senior club
    youth_to_senior: FxHashMap<String, usize>,
}

fn key(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

impl ClubDirectory {
    pub fn new(youth_prefix: impl Into<String>, clubs: Vec<ClubEntry>) -> Result<Self> {
        let youth_prefix = youth_prefix.into();
        if youth_prefix.trim().is_empty() {
            return Err(ScoutError::Config("youth_prefix must not be empty".to_string()));
        }

        let mut by_code = FxHashMap::default();
        let mut youth_to_senior = FxHashMap::default();
        for (idx, club) in clubs.iter().enumerate() {
            if by_code.insert(key(&club.code), idx).is_some() {
                return Err(ScoutError::Config(format!("duplicate club code '{}'", club.code)));
            }
            for youth in &club.youth {
                if !has_youth_prefix(youth, &youth_prefix) {
                    return Err(ScoutError::Config(format!(
                        "youth team '{}' of '{}' does not carry prefix '{}'",
                        youth, club.code, youth_prefix
                    )));
                }
                if youth_to_senior.insert(key(youth), idx).is_some() {
                    return Err(ScoutError::Config(format!(
                        "youth team '{youth}' is affiliated with more than one club"
                    )));
                }
            }
        }

        Ok(Self {
            youth_prefix,
            clubs,
            by_code,
            youth_to_senior,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ClubFile = serde_yaml::from_str(yaml)?;
        Self::new(file.youth_prefix, file.clubs)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            ScoutError::Config(format!("failed to read club directory '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Directory embedded from `data/clubs.yaml`.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_CLUBS_YAML)
    }

    pub fn youth_prefix(&self) -> &str {
        &self.youth_prefix
    }

    pub fn clubs(&self) -> &[ClubEntry] {
        &self.clubs
    }

    /// Full club name for a senior or youth team code.
    pub fn full_name(&self, code: &str) -> Option<&str> {
        self.club_for(code).map(|club| club.name.as_str())
    }

    /// Team code sits in the youth namespace.
    pub fn is_youth_team(&self, code: &str) -> bool {
        has_youth_prefix(code, &self.youth_prefix)
    }

    /// Senior club a youth team is affiliated with.
    pub fn senior_for(&self, youth_code: &str) -> Option<&ClubEntry> {
        self.youth_to_senior
            .get(&key(youth_code))
            .map(|&idx| &self.clubs[idx])
    }

    /// Team codes belonging to a club, lowercased. Unknown clubs yield just the code itself.
    pub fn teams_for_club(&self, code: &str, include_youth: bool) -> FxHashSet<String> {
        let mut teams = FxHashSet::default();
        match self.by_code.get(&key(code)) {
            Some(&idx) => {
                let club = &self.clubs[idx];
                teams.insert(key(&club.code));
                if include_youth {
                    teams.extend(club.youth.iter().map(|y| key(y)));
                }
            }
            None => {
                teams.insert(key(code));
            }
        }
        teams
    }

    fn club_for(&self, code: &str) -> Option<&ClubEntry> {
        let k = key(code);
        self.by_code
            .get(&k)
            .or_else(|| self.youth_to_senior.get(&k))
            .map(|&idx| &self.clubs[idx])
    }
}

/// Code sits in the youth namespace: it starts with `prefix` (case-insensitive)
/// and is longer than the bare prefix.
pub(crate) fn has_youth_prefix(code: &str, prefix: &str) -> bool {
    let code = code.trim();
    code.len() > prefix.len()
        && code
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
youth_prefix: "y"
clubs:
  - code: ars
    name: Arsenal
    youth: [yars]
  - code: che
    name: Chelsea
"#;

    #[test]
    fn resolves_names_and_affiliations() {
        let dir = ClubDirectory::from_yaml_str(YAML).unwrap();
        assert_eq!(dir.full_name("ARS"), Some("Arsenal"));
        assert_eq!(dir.full_name("yars"), Some("Arsenal"));
        assert_eq!(dir.full_name("mun"), None);
        assert_eq!(dir.senior_for("yars").map(|c| c.code.as_str()), Some("ars"));
        assert!(dir.senior_for("ars").is_none());
    }

    #[test]
    fn youth_namespace_is_prefix_based() {
        let dir = ClubDirectory::from_yaml_str(YAML).unwrap();
        assert!(dir.is_youth_team("yars"));
        assert!(dir.is_youth_team("Yche"));
        assert!(!dir.is_youth_team("ars"));
        // the bare prefix is not a team
        assert!(!dir.is_youth_team("y"));
        assert!(dir.is_youth_team(" yars "));
    }

    #[test]
    fn club_team_sets() {
        let dir = ClubDirectory::from_yaml_str(YAML).unwrap();
        let senior = dir.teams_for_club("ars", false);
        assert_eq!(senior.len(), 1);
        assert!(senior.contains("ars"));

        let with_youth = dir.teams_for_club("ars", true);
        assert!(with_youth.contains("yars"));
        assert_eq!(with_youth.len(), 2);

        let unknown = dir.teams_for_club("MUN", true);
        assert!(unknown.contains("mun"));
    }

    #[test]
    fn rejects_inconsistent_directories() {
        let bad_prefix = "youth_prefix: y\nclubs:\n  - {code: ars, name: Arsenal, youth: [rars]}\n";
        assert!(matches!(
            ClubDirectory::from_yaml_str(bad_prefix),
            Err(ScoutError::Config(_))
        ));

        let dup = "youth_prefix: y\nclubs:\n  - {code: ars, name: A}\n  - {code: ARS, name: B}\n";
        assert!(ClubDirectory::from_yaml_str(dup).is_err());

        assert!(ClubDirectory::from_yaml_str("clubs: []").is_err());
    }

    #[test]
    fn embedded_directory_parses() {
        let dir = ClubDirectory::embedded().unwrap();
        assert!(!dir.clubs().is_empty());
        for club in dir.clubs() {
            for youth in &club.youth {
                assert!(dir.is_youth_team(youth));
            }
        }
    }
}
