//! In-process counters for generated and served documents

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    documents_generated: AtomicU64,
    generation_failed: AtomicU64,
    downloads_served: AtomicU64,
    downloads_missing: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_generated(&self) {
        self.documents_generated.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "documents_generated", "Metric incremented");
    }

    pub fn generation_failed(&self) {
        self.generation_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "generation_failed", "Metric incremented");
    }

    pub fn download_served(&self) {
        self.downloads_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "downloads_served", "Metric incremented");
    }

    pub fn download_missing(&self) {
        self.downloads_missing.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "downloads_missing", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            documents_generated: self.documents_generated.load(Ordering::Relaxed),
            generation_failed: self.generation_failed.load(Ordering::Relaxed),
            downloads_served: self.downloads_served.load(Ordering::Relaxed),
            downloads_missing: self.downloads_missing.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub documents_generated: u64,
    pub generation_failed: u64,
    pub downloads_served: u64,
    pub downloads_missing: u64,
}
