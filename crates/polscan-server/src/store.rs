//! Transient storage for rendered reports

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Default number of reports kept before the oldest is evicted
pub const DEFAULT_MAX_REPORTS: usize = 64;

/// Bounded in-memory buffer of rendered reports, keyed by a random id.
///
/// Nothing is persisted. Inserting past capacity drops the oldest report.
#[derive(Clone)]
pub struct ReportStore {
    inner: Arc<RwLock<Inner>>,
    capacity: usize,
}

#[derive(Default)]
struct Inner {
    reports: HashMap<String, String>,
    order: VecDeque<String>,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPORTS)
    }
}

impl ReportStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            capacity: capacity.max(1),
        }
    }

    /// Store a report and return its download id
    pub async fn insert(&self, html: String) -> String {
        let id = Uuid::new_v4().simple().to_string();
        let mut inner = self.inner.write().await;

        while inner.order.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.reports.remove(&oldest);
                    tracing::debug!(id = %oldest, "evicted report");
                }
                None => break,
            }
        }

        inner.order.push_back(id.clone());
        inner.reports.insert(id.clone(), html);
        id
    }

    pub async fn get(&self, id: &str) -> Option<String> {
        self.inner.read().await.reports.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reports.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
