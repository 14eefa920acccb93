pub mod file_utils;
pub mod time_utils;

pub use file_utils::{load_report, save_summary};
pub use time_utils::report_age_days;
