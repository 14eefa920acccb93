pub mod lighthouse;

pub use lighthouse::{
    Audit, Categories, Category, CoreWebVitals, Opportunity, PerformanceSummary, ResourceItem,
    ResourceTotals, Root,
};
