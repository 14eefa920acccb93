use anyhow::Result;
use dotenv::dotenv;
use lightsum::models::Root;
use lightsum::services::{render_summary, summarize};
use lightsum::utils::{load_report, report_age_days, save_summary};
use log::{info, warn};

// Results older than this are worth re-running the audit for
const STALE_REPORT_DAYS: i64 = 7;

const DEFAULT_REPORT_PATH: &str = "lighthouse-report.report.json";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let report_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("REPORT_PATH").ok())
        .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string());

    info!("Loading Lighthouse report from {}", report_path);
    let report = load_report(&report_path).await?;

    if let Some(url) = &report.requestedUrl {
        info!("Summarizing report for {}", url);
    }
    warn_if_stale(&report);

    let summary = summarize(&report)?;
    let lines = render_summary(&summary);
    for line in &lines {
        println!("{}", line);
    }

    if let Ok(output_path) = std::env::var("SUMMARY_OUTPUT") {
        save_summary(&output_path, &lines)?;
        info!("Summary saved to {}", output_path);
    }

    Ok(())
}

fn warn_if_stale(report: &Root) {
    if let Some(fetch_time) = &report.fetchTime {
        match report_age_days(fetch_time) {
            Some(age) if age > STALE_REPORT_DAYS => {
                warn!("Report is {} days old; consider re-running the audit", age);
            }
            None => warn!("Could not parse report fetch time: {}", fetch_time),
            _ => {}
        }
    }
}
