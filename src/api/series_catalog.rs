use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    ProjectionRequest, ReferenceRule, Series, ThresholdGeometry, Viewport, project_batch,
    project_threshold_geometry,
};
use crate::error::{ChartError, ChartResult};

/// Named series available to one dashboard view, e.g. every treasury tenor.
///
/// Which entry is shown is always an explicit argument; the catalog never
/// remembers a selection. `IndexMap` keeps insertion order so listings and
/// batch output are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesCatalog {
    entries: IndexMap<String, Series>,
}

impl SeriesCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, returning the previous series for `key`.
    pub fn insert(&mut self, key: impl Into<String>, series: Series) -> Option<Series> {
        self.entries.insert(key.into(), series)
    }

    /// Removes an entry while keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Series> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Series> {
        self.entries.get(key)
    }

    pub fn require(&self, key: &str) -> ChartResult<&Series> {
        self.entries.get(key).ok_or_else(|| {
            warn!(key, available = self.entries.len(), "unknown series key");
            ChartError::UnknownSeries(key.to_owned())
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects the entry selected by `key`.
    pub fn project_selected(
        &self,
        key: &str,
        rule: ReferenceRule,
        viewport: Viewport,
    ) -> ChartResult<ThresholdGeometry> {
        let series = self.require(key)?;
        Ok(project_threshold_geometry(series, rule, viewport))
    }

    /// Projects every entry with the same rule and viewport, keyed like the catalog.
    #[must_use]
    pub fn project_all(
        &self,
        rule: ReferenceRule,
        viewport: Viewport,
    ) -> IndexMap<String, ThresholdGeometry> {
        let requests: Vec<ProjectionRequest> = self
            .entries
            .values()
            .map(|series| ProjectionRequest::new(series.clone(), rule, viewport))
            .collect();
        self.entries
            .keys()
            .cloned()
            .zip(project_batch(&requests))
            .collect()
    }
}

impl FromIterator<(String, Series)> for SeriesCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Series)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
