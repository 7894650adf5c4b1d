//! Data loading: export parser, payload sources, memoized cache, club directory.

pub mod cache;
pub mod clubs;
pub mod parser;
pub mod source;

pub use cache::{checksum_hex, LoadStats, RecordCache};
pub use clubs::{ClubDirectory, ClubEntry, DEFAULT_CLUBS_YAML};
pub use parser::{parse_line, parse_number, parse_records, ParseStats};
pub use source::{FileSource, RecordSource, TextSource};
