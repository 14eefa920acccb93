use crate::models::PerformanceSummary;

// Renders the summary as the fixed line layout the report consumers expect:
// header, overall score, Core Web Vitals, resource totals, then one line per
// failing image audit. Sizes print as binary megabytes with two decimals.
pub fn render_summary(summary: &PerformanceSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("=== LIGHTHOUSE MOBILE PERFORMANCE AUDIT ===".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Overall Performance Score: {:.0}/100",
        summary.performance_score
    ));
    lines.push(String::new());

    lines.push("=== Core Web Vitals ===".to_string());
    lines.push(format!(
        "First Contentful Paint (FCP): {}",
        summary.vitals.first_contentful_paint
    ));
    lines.push(format!(
        "Largest Contentful Paint (LCP): {}",
        summary.vitals.largest_contentful_paint
    ));
    lines.push(format!(
        "Total Blocking Time (TBT): {}",
        summary.vitals.total_blocking_time
    ));
    lines.push(format!(
        "Cumulative Layout Shift (CLS): {}",
        summary.vitals.cumulative_layout_shift
    ));
    lines.push(format!("Speed Index: {}", summary.vitals.speed_index));
    lines.push(String::new());

    lines.push("=== Resource Summary ===".to_string());
    lines.push(format!(
        "Total Transfer Size: {:.2} MB",
        summary.resources.total_mb()
    ));
    lines.push(format!(
        "Image Transfer Size: {:.2} MB",
        summary.resources.image_mb()
    ));
    lines.push(String::new());

    lines.push("=== Image Optimization Opportunities ===".to_string());
    for opportunity in &summary.opportunities {
        lines.push(format!(
            "{}: Could save {}",
            opportunity.label, opportunity.savings
        ));
    }

    lines
}
