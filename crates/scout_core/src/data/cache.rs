//! Memoized record loader.
//!
//! The source is fetched and parsed once; later `load()` calls return the same
//! records until `refresh()` is called. A refresh that yields a payload with
//! the same SHA-256 checksum keeps the parsed set as is.
//!
//! Failure policy (see [`StalePolicy`]):
//! - nothing loaded yet: the source error is always returned
//! - `ServeLastKnownGood`: a failed refresh keeps serving the previous set and
//!   marks the cache stale
//! - `Fail`: a failed refresh returns the error; the previous set stays cached

use crate::config::StalePolicy;
use crate::data::parser::{parse_records, ParseStats};
use crate::data::source::RecordSource;
use crate::error::Result;
use crate::models::PlayerRecord;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::cell::OnceCell;
use tracing::{info, warn};

/// Metadata describing the currently cached record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadStats {
    pub source: String,
    /// SHA-256 of the raw payload (hex).
    pub checksum: String,
    /// When the payload was parsed (RFC3339).
    pub loaded_at: String,
    pub parse: ParseStats,
}

#[derive(Debug)]
struct LoadedSet {
    records: Vec<PlayerRecord>,
    stats: LoadStats,
}

pub struct RecordCache<S: RecordSource> {
    source: S,
    policy: StalePolicy,
    loaded: OnceCell<LoadedSet>,
    stale: bool,
}

pub fn checksum_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl<S: RecordSource> RecordCache<S> {
    pub fn new(source: S, policy: StalePolicy) -> Self {
        Self {
            source,
            policy,
            loaded: OnceCell::new(),
            stale: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Records from the cache, fetching and parsing on first use.
    pub fn load(&self) -> Result<&[PlayerRecord]> {
        if let Some(set) = self.loaded.get() {
            return Ok(&set.records);
        }
        let set = self.fetch_and_parse()?;
        Ok(&self.loaded.get_or_init(|| set).records)
    }

    /// Re-fetch the source. Filter changes never call this.
    pub fn refresh(&mut self) -> Result<&[PlayerRecord]> {
        if self.loaded.get().is_none() {
            self.stale = false;
            return self.load();
        }

        match self.source.fetch() {
            Ok(text) => {
                let checksum = checksum_hex(&text);
                let unchanged = self
                    .loaded
                    .get()
                    .is_some_and(|set| set.stats.checksum == checksum);
                if unchanged {
                    info!(source = %self.source.name(), "source unchanged, keeping parsed records");
                } else {
                    self.loaded = OnceCell::from(self.parse_payload(&text, checksum));
                }
                self.stale = false;
            }
            Err(err) => match self.policy {
                StalePolicy::ServeLastKnownGood => {
                    warn!(
                        source = %self.source.name(),
                        error = %err,
                        recoverable = err.is_recoverable(),
                        "refresh failed, serving last known good records"
                    );
                    self.stale = true;
                }
                StalePolicy::Fail => {
                    warn!(source = %self.source.name(), error = %err, "refresh failed");
                    return Err(err);
                }
            },
        }

        self.load()
    }

    /// Stats for the cached set, if anything has been loaded.
    pub fn stats(&self) -> Option<&LoadStats> {
        self.loaded.get().map(|set| &set.stats)
    }

    /// True when the last refresh failed and older records are being served.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn fetch_and_parse(&self) -> Result<LoadedSet> {
        let text = self.source.fetch()?;
        let checksum = checksum_hex(&text);
        Ok(self.parse_payload(&text, checksum))
    }

    fn parse_payload(&self, text: &str, checksum: String) -> LoadedSet {
        let (records, parse) = parse_records(text);
        info!(
            source = %self.source.name(),
            parsed = parse.parsed,
            dropped = parse.dropped(),
            "loaded player records"
        );
        LoadedSet {
            records,
            stats: LoadStats {
                source: self.source.name(),
                checksum,
                loaded_at: Utc::now().to_rfc3339(),
                parse,
            },
        }
    }
}
