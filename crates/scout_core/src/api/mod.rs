//! Consumer interface for presentation layers.
//!
//! [`Scout`] owns the load cache and the club directory and answers view
//! requests, either with typed filters or through the JSON boundary.

pub mod view_json;

pub use view_json::{FilterClause, ViewRequest, ViewResponse, API_VERSION};

use crate::config::ScoutConfig;
use crate::data::cache::{LoadStats, RecordCache};
use crate::data::clubs::ClubDirectory;
use crate::data::source::{FileSource, RecordSource};
use crate::error::Result;
use crate::models::PlayerRecord;
use crate::query::{build_view, FilterSet, RankMode, ScoutingView};
use tracing::info;

pub struct Scout<S: RecordSource> {
    cache: RecordCache<S>,
    clubs: ClubDirectory,
    config: ScoutConfig,
}

impl Scout<FileSource> {
    /// File-backed scout built from configuration.
    pub fn from_config(config: ScoutConfig) -> Result<Self> {
        let clubs = config.clubs()?;
        let source = FileSource::new(config.data_path.clone());
        info!(source = %config.data_path.display(), "scout configured");
        Ok(Self::new(source, clubs, config))
    }
}

impl<S: RecordSource> Scout<S> {
    pub fn new(source: S, clubs: ClubDirectory, config: ScoutConfig) -> Self {
        Self {
            cache: RecordCache::new(source, config.stale_policy),
            clubs,
            config,
        }
    }

    /// Loaded records (memoized).
    pub fn load_records(&self) -> Result<&[PlayerRecord]> {
        self.cache.load()
    }

    /// Re-fetch the source; see [`RecordCache::refresh`] for the failure policy.
    pub fn refresh(&mut self) -> Result<&[PlayerRecord]> {
        self.cache.refresh()
    }

    pub fn clubs(&self) -> &ClubDirectory {
        &self.clubs
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    pub fn load_stats(&self) -> Option<&LoadStats> {
        self.cache.stats()
    }

    pub fn is_stale(&self) -> bool {
        self.cache.is_stale()
    }

    pub fn view(&self, filters: &FilterSet, mode: Option<RankMode>) -> Result<ScoutingView> {
        let records = self.load_records()?;
        Ok(build_view(records, filters, mode))
    }

    /// View a fresh session opens with: configured default age window, file order.
    pub fn default_view(&self) -> Result<ScoutingView> {
        self.view(&self.config.default_filters(), None)
    }

    /// Filters for a request, with age bounds held inside the configured limits.
    pub fn request_filters(&self, request: &ViewRequest) -> FilterSet {
        let limits = self.config.age_limits;
        request
            .filter_set(&self.clubs)
            .clamp_age(limits.min, limits.max)
    }

    pub fn respond(&self, request: &ViewRequest) -> Result<ViewResponse> {
        let filters = self.request_filters(request);
        let mode = request.rank_mode(&filters)?;
        let view = self.view(&filters, mode)?;
        Ok(ViewResponse {
            schema_version: API_VERSION.to_string(),
            stale: self.is_stale(),
            source: self.load_stats().cloned(),
            view,
        })
    }

    /// JSON in, JSON out.
    pub fn view_json(&self, request_json: &str) -> Result<String> {
        let request = ViewRequest::from_json(request_json)?;
        let response = self.respond(&request)?;
        Ok(serde_json::to_string(&response)?)
    }
}
