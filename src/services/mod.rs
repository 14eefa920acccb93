pub mod summary_service;

pub use summary_service::{render_summary, summarize};
