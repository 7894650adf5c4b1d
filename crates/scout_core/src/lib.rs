//! # scout_core - TDE3 Player Scouting Core
//!
//! Turns the whitespace-delimited `all_plrs.txt` export into a scouting table:
//! every player gets a derived position and a youth-eligibility flag, and the
//! table can be filtered and ranked for display.
//!
//! ## Pipeline
//! - load (memoized per source checksum) → classify → filter → rank
//! - JSON request/response boundary for presentation layers (`api`)
//!
//! Rendering, widgets and network retrieval live outside this crate.

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod player;
pub mod query;

// Consumer interface
pub use api::{Scout, ViewRequest, ViewResponse};
pub use config::{ScoutConfig, StalePolicy};
pub use data::cache::{LoadStats, RecordCache};
pub use data::clubs::ClubDirectory;
pub use data::parser::parse_records;
pub use data::source::{FileSource, RecordSource, TextSource};
pub use error::{Result, ScoutError};
pub use models::{PlayerRecord, Position, ScoutedPlayer, Stat};
pub use player::{classify, classify_all, is_youth_eligible, youth_cap, Classification};
pub use query::{apply_filters, rank, FilterSet, Predicate, RankMode, ScoutingView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of significant whitespace-separated columns per input line.
pub const SIGNIFICANT_COLUMNS: usize = 13;
