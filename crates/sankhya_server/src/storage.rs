//! Key-value persistence of finished analyses.
//!
//! Stored analyses are opaque JSON blobs keyed by an assigned id; the only
//! secondary lookup is an exact birth-date match.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// An analysis ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub input_date: String,
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub analysis: serde_json::Value,
    pub created_at: String,
}

/// A stored analysis with its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: u64,
    pub input_date: String,
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub analysis: serde_json::Value,
    pub created_at: String,
}

/// Storage collaborator for analyses.
pub trait AnalysisStore: Send + Sync {
    /// Store `analysis`, assigning the next id.
    fn create(&self, analysis: NewAnalysis) -> StoredAnalysis;

    /// Fetch by id.
    fn get(&self, id: u64) -> Option<StoredAnalysis>;

    /// Every analysis for the given date, ascending by id.
    fn by_date(&self, day: u32, month: u32, year: u32) -> Vec<StoredAnalysis>;
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    analyses: BTreeMap<u64, StoredAnalysis>,
}

/// In-memory [`AnalysisStore`]. Ids start at 1 and never repeat.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                analyses: BTreeMap::new(),
            }),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored analyses.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .analyses
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalysisStore for MemoryStore {
    fn create(&self, analysis: NewAnalysis) -> StoredAnalysis {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        let stored = StoredAnalysis {
            id,
            input_date: analysis.input_date,
            day: analysis.day,
            month: analysis.month,
            year: analysis.year,
            analysis: analysis.analysis,
            created_at: analysis.created_at,
        };
        inner.analyses.insert(id, stored.clone());
        tracing::debug!(id, "analysis stored");
        stored
    }

    fn get(&self, id: u64) -> Option<StoredAnalysis> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .analyses
            .get(&id)
            .cloned()
    }

    fn by_date(&self, day: u32, month: u32, year: u32) -> Vec<StoredAnalysis> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .analyses
            .values()
            .filter(|a| a.day == day && a.month == month && a.year == year)
            .cloned()
            .collect()
    }
}
