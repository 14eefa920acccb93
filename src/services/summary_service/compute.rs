use crate::error::MissingFieldError;
use crate::models::{
    Audit, CoreWebVitals, Opportunity, PerformanceSummary, ResourceItem, ResourceTotals, Root,
};
use serde_json::Value;
use std::collections::HashMap;

pub const RESOURCE_SUMMARY_AUDIT: &str = "resource-summary";

// Fallback savings string when a failing audit carries no displayValue
const NOT_AVAILABLE: &str = "N/A";

// Image audits reported as opportunities, in output order
const OPPORTUNITY_AUDITS: [(&str, &str); 4] = [
    ("modern-image-formats", "Use modern image formats"),
    ("uses-optimized-images", "Optimize images"),
    ("uses-responsive-images", "Properly size images"),
    ("offscreen-images", "Defer offscreen images"),
];

// Builds the full summary from a parsed report. Every required field is
// resolved up front, so a missing path aborts before any output exists.
pub fn summarize(report: &Root) -> Result<PerformanceSummary, MissingFieldError> {
    let performance_score = overall_performance_score(report)?;
    let vitals = core_web_vitals(&report.audits)?;
    let items = resource_summary_items(&report.audits)?;
    let resources = ResourceTotals::from_items(&items);
    let opportunities = image_opportunities(&report.audits);

    Ok(PerformanceSummary {
        performance_score,
        vitals,
        resources,
        opportunities,
    })
}

// Overall score scaled from the [0, 1] fraction to 0-100
fn overall_performance_score(report: &Root) -> Result<f64, MissingFieldError> {
    report
        .categories
        .performance
        .as_ref()
        .and_then(|category| category.score)
        .map(|score| score * 100.0)
        .ok_or_else(|| MissingFieldError::new("categories.performance.score"))
}

fn core_web_vitals(audits: &HashMap<String, Audit>) -> Result<CoreWebVitals, MissingFieldError> {
    Ok(CoreWebVitals {
        first_contentful_paint: required_display_value(audits, "first-contentful-paint")?,
        largest_contentful_paint: required_display_value(audits, "largest-contentful-paint")?,
        total_blocking_time: required_display_value(audits, "total-blocking-time")?,
        cumulative_layout_shift: required_display_value(audits, "cumulative-layout-shift")?,
        speed_index: required_display_value(audits, "speed-index")?,
    })
}

// Display values come back verbatim; Lighthouse already formatted them
fn required_display_value(
    audits: &HashMap<String, Audit>,
    audit_id: &str,
) -> Result<String, MissingFieldError> {
    audits
        .get(audit_id)
        .and_then(|audit| audit.displayValue.clone())
        .ok_or_else(|| MissingFieldError::new(format!("audits.{}.displayValue", audit_id)))
}

// Resolves audits.resource-summary.details.items into typed rows. The
// details payload stays untyped on the Audit model, so each path segment
// is checked here and reported with its full path on failure.
fn resource_summary_items(
    audits: &HashMap<String, Audit>,
) -> Result<Vec<ResourceItem>, MissingFieldError> {
    let audit = audits
        .get(RESOURCE_SUMMARY_AUDIT)
        .ok_or_else(|| MissingFieldError::new("audits.resource-summary"))?;
    let details = audit
        .details
        .as_ref()
        .ok_or_else(|| MissingFieldError::new("audits.resource-summary.details"))?;
    let items = details
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| MissingFieldError::new("audits.resource-summary.details.items"))?;

    Ok(items.iter().map(resource_item_from_value).collect())
}

// Per-row fields are optional: no transferSize counts as 0 bytes and no
// resourceType never matches a type filter
fn resource_item_from_value(value: &Value) -> ResourceItem {
    ResourceItem {
        resourceType: value
            .get("resourceType")
            .and_then(Value::as_str)
            .map(str::to_owned),
        transferSize: value.get("transferSize").and_then(Value::as_u64),
    }
}

// Collects failing image audits in fixed order. Absent audits are skipped,
// a missing score counts as a pass (1.0), and anything below 1.0 fails.
pub fn image_opportunities(audits: &HashMap<String, Audit>) -> Vec<Opportunity> {
    OPPORTUNITY_AUDITS
        .iter()
        .filter_map(|(audit_id, label)| {
            let audit = audits.get(*audit_id)?;
            if audit.score.unwrap_or(1.0) < 1.0 {
                Some(Opportunity {
                    audit_id: (*audit_id).to_string(),
                    label: (*label).to_string(),
                    savings: audit
                        .displayValue
                        .clone()
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                })
            } else {
                None
            }
        })
        .collect()
}
