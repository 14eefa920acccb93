use chrono::{DateTime, Utc};

// Age in whole days of an RFC 3339 fetch timestamp, or None when the
// timestamp does not parse
pub fn report_age_days(fetch_time: &str) -> Option<i64> {
    let fetched = DateTime::parse_from_rfc3339(fetch_time).ok()?;
    let age = Utc::now() - fetched.with_timezone(&Utc);
    Some(age.num_days())
}
