//! Filtering, ranking and per-request view assembly.

pub mod filter;
pub mod rank;
pub mod view;

pub use filter::{apply_filters, parse_bound, FilterSet, Predicate};
pub use rank::{compare, rank, rank_in_place, RankMode};
pub use view::{build_view, ScoutingView};
