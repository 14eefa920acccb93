use crate::models::lighthouse::resource::ResourceItem;
use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1_048_576.0;

// pub struct for the five Core Web Vitals display strings, kept verbatim
// as formatted by Lighthouse (e.g. "1.2 s")
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CoreWebVitals {
    pub first_contentful_paint: String,
    pub largest_contentful_paint: String,
    pub total_blocking_time: String,
    pub cumulative_layout_shift: String,
    pub speed_index: String,
}

// pub struct for aggregated transfer sizes in bytes
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ResourceTotals {
    pub total_bytes: u64,
    pub image_bytes: u64,
}

impl ResourceTotals {
    // Single pass over the resource-summary rows. total_bytes sums every
    // row; image_bytes is overwritten per image row, so the last image row
    // in input order wins. Callers depend on that exact output.
    pub fn from_items(items: &[ResourceItem]) -> Self {
        let mut totals = ResourceTotals::default();
        for item in items {
            let size = item.transferSize.unwrap_or(0);
            totals.total_bytes += size;
            if item.resourceType.as_deref() == Some("image") {
                totals.image_bytes = size;
            }
        }
        totals
    }

    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB
    }

    pub fn image_mb(&self) -> f64 {
        self.image_bytes as f64 / BYTES_PER_MB
    }
}

// pub struct for one failing image-optimization audit
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Opportunity {
    pub audit_id: String,
    pub label: String,
    pub savings: String,
}

// pub struct for the final summary, ready for rendering
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub performance_score: f64, // already scaled to 0-100
    pub vitals: CoreWebVitals,
    pub resources: ResourceTotals,
    pub opportunities: Vec<Opportunity>,
}
