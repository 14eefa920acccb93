pub mod audit;
pub mod category;
pub mod report;
pub mod resource;
pub mod summary;

pub use audit::Audit;
pub use category::{Categories, Category};
pub use report::Root;
pub use resource::ResourceItem;
pub use summary::{CoreWebVitals, Opportunity, PerformanceSummary, ResourceTotals};
