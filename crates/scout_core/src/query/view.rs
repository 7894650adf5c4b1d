//! One display refresh: classify the full record set, filter, rank.
//!
//! Nothing here is cached; the working set is recomputed from the loaded
//! records for every request. Rows without a position stay in views that
//! neither rank nor filter on position or youth eligibility.

use super::filter::{apply_filters, FilterSet};
use super::rank::{rank_in_place, RankMode};
use crate::models::{PlayerRecord, ScoutedPlayer};
use crate::player::classify_all;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoutingView {
    /// Records in the loaded working set.
    pub total_loaded: usize,
    /// Records with a missing primary attribute.
    pub unclassified: usize,
    /// Players left after filtering.
    pub matched: usize,
    /// Ordering applied; `None` keeps file order.
    pub mode: Option<RankMode>,
    pub players: Vec<ScoutedPlayer>,
}

pub fn build_view(
    records: &[PlayerRecord],
    filters: &FilterSet,
    mode: Option<RankMode>,
) -> ScoutingView {
    let classification = classify_all(records);
    let unclassified = classification.unclassified;
    let rows = if mode.is_some() || filters.needs_position() {
        classification.into_classified()
    } else {
        classification.players
    };
    let mut players = apply_filters(&rows, filters);
    if let Some(mode) = mode {
        rank_in_place(&mut players, mode);
    }

    debug!(
        total = records.len(),
        matched = players.len(),
        predicates = filters.predicates().len(),
        "built scouting view"
    );

    ScoutingView {
        total_loaded: records.len(),
        unclassified,
        matched: players.len(),
        mode,
        players,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse_records;
    use crate::models::Position;
    use crate::query::filter::Predicate;
    use proptest::prelude::*;

    const SAMPLE: &str = include_str!("../../../../data/sample_players.txt");

    fn names(view: &ScoutingView) -> Vec<&str> {
        view.players.iter().map(|p| p.record.player.as_str()).collect()
    }

    #[test]
    fn sample_counts() {
        let (records, stats) = parse_records(SAMPLE);
        assert_eq!(stats.parsed, 13);
        assert_eq!(stats.dropped(), 2);

        let view = build_view(&records, &FilterSet::new(), None);
        assert_eq!(view.total_loaded, 13);
        // J_Bowen has a non-numeric Sh
        assert_eq!(view.unclassified, 1);
        assert_eq!(view.matched, 13);
        assert_eq!(view.players[0].record.player, "D_Raya");

        let squad = build_view(&records, &FilterSet::new(), Some(RankMode::Squad));
        assert_eq!(squad.unclassified, 1);
        assert_eq!(squad.matched, 12);
    }

    #[test]
    fn age_only_view_keeps_unclassified_rows() {
        let (records, _) = parse_records(SAMPLE);
        let filters = FilterSet::new().with(Predicate::age_range(18, 30));
        let view = build_view(&records, &filters, RankMode::infer(&filters));
        assert_eq!(view.mode, None);
        assert_eq!(view.matched, 10);

        let bowen = view
            .players
            .iter()
            .find(|p| p.record.player == "J_Bowen")
            .unwrap();
        assert_eq!(bowen.position, None);
        assert!(!bowen.youth_eligible);
        assert_eq!(bowen.record.sh, None);
        // file order
        assert_eq!(names(&view).last(), Some(&"J_Bowen"));
    }

    #[test]
    fn position_dependent_views_drop_unclassified_rows() {
        let (records, _) = parse_records(SAMPLE);
        let eligible = FilterSet::new().with(Predicate::YouthEligible(false));
        let view = build_view(&records, &eligible, None);
        assert!(!names(&view).contains(&"J_Bowen"));

        let whu = FilterSet::new().with(Predicate::team("whu"));
        assert_eq!(build_view(&records, &whu, None).matched, 1);
        assert_eq!(build_view(&records, &whu, RankMode::infer(&whu)).matched, 0);
    }

    #[test]
    fn goalkeeper_view_is_ranked_by_strength_then_kab() {
        let (records, _) = parse_records(SAMPLE);
        let filters = FilterSet::new().with(Predicate::Position(Position::GK));
        let view = build_view(&records, &filters, RankMode::infer(&filters));
        assert_eq!(view.mode, Some(RankMode::Position(Position::GK)));
        assert_eq!(names(&view), vec!["J_Pickford", "D_Raya", "R_Sanchez"]);
    }

    #[test]
    fn club_squad_view() {
        let (records, _) = parse_records(SAMPLE);
        let filters = FilterSet::new().with(Predicate::teams(["ars", "yars"]));
        let view = build_view(&records, &filters, RankMode::infer(&filters));
        assert_eq!(view.mode, Some(RankMode::Squad));
        assert_eq!(
            names(&view),
            vec![
                "D_Raya",
                "W_Saliba",
                "L_Lewis-Skelly",
                "M_Odegaard",
                "E_Nwaneri",
                "B_Saka"
            ]
        );
    }

    #[test]
    fn youth_eligible_flags_on_sample() {
        let (records, _) = parse_records(SAMPLE);
        let filters = FilterSet::new().with(Predicate::YouthEligible(true));
        let view = build_view(&records, &filters, None);
        // Pickford (GK 20 at 30), Odegaard (MF 18 at 25) and Salah (FW 20 at 31) are over the cap
        assert_eq!(
            names(&view),
            vec![
                "D_Raya",
                "W_Saliba",
                "B_Saka",
                "E_Nwaneri",
                "L_Lewis-Skelly",
                "R_Sanchez",
                "C_Palmer",
                "J_Bynoe-Gittens",
                "J_Branthwaite"
            ]
        );
    }

    #[test]
    fn derived_columns_leave_source_columns_untouched() {
        let (records, _) = parse_records(SAMPLE);
        let filters = FilterSet::new().with(Predicate::age_range(15, 40));
        let view = build_view(&records, &filters, Some(RankMode::Squad));
        for player in &view.players {
            let source_row = records
                .iter()
                .find(|r| r.player == player.record.player)
                .unwrap();
            assert_eq!(&player.record, source_row);
        }
    }

    #[test]
    fn empty_record_set() {
        let view = build_view(&[], &FilterSet::new(), Some(RankMode::Squad));
        assert_eq!(view.total_loaded, 0);
        assert_eq!(view.matched, 0);
        assert!(view.players.is_empty());
    }

    fn arb_predicate() -> impl Strategy<Value = Predicate> {
        prop_oneof![
            (10u32..30, 18u32..45).prop_map(|(lo, hi)| Predicate::age_range(lo, hi)),
            (0usize..4).prop_map(|i| Predicate::Position(Position::ALL[i])),
            any::<bool>().prop_map(Predicate::YouthEligible),
            prop::sample::select(vec!["ars", "yars", "che", "eve"]).prop_map(Predicate::team),
            (0u8..20).prop_map(|lo| Predicate::stat_range(
                crate::models::Stat::Ps,
                Some(lo as f64),
                None
            )),
        ]
    }

    proptest! {
        /// Property: predicate order never changes the filtered set
        #[test]
        fn prop_filters_commute(a in arb_predicate(), b in arb_predicate()) {
            let (records, _) = parse_records(SAMPLE);
            let ab = FilterSet::new().with(a.clone()).with(b.clone());
            let ba = FilterSet::new().with(b).with(a);
            let left = build_view(&records, &ab, None);
            let right = build_view(&records, &ba, None);
            prop_assert_eq!(left.players, right.players);
        }
    }
}
