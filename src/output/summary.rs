//! Human-readable run summary

use crate::crawler::DiscountReport;
use crate::product::DiscountRecord;

/// Formats a pipeline report for the terminal
///
/// Product pages and discounts are always listed. The full link set of the
/// seed page is only included when `include_links` is set.
pub fn format_summary(report: &DiscountReport, include_links: bool) -> String {
    let mut out = String::new();

    out.push_str("=== Discount Scout Summary ===\n\n");
    out.push_str(&format!("Seed: {}\n", report.seed_url));
    out.push_str(&format!(
        "Page title: {}\n",
        report.seed_title.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!("Links found: {}\n", report.links_found));
    out.push_str(&format!("On-site links: {}\n", report.on_site_links));

    if include_links && !report.links.is_empty() {
        out.push_str("\nLinks:\n");
        out.push_str(&format_urls(&report.links));
    }

    out.push_str(&format!("\nProduct pages: {}\n", report.product_pages.len()));
    out.push_str(&format_urls(&report.product_pages));

    out.push_str(&format!("\nDiscounts: {}\n", report.discounts.len()));
    out.push_str(&format_records(&report.records()));

    out
}

/// Formats discount records as aligned lines, one per record
pub fn format_records(records: &[DiscountRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "  {:>10.2} -> {:>10.2}  {}\n",
                r.original_price, r.current_price, r.url
            )
        })
        .collect()
}

fn format_urls(urls: &[String]) -> String {
    urls.iter().map(|url| format!("  {}\n", url)).collect()
}

/// Prints the summary to stdout
pub fn print_summary(report: &DiscountReport, include_links: bool) {
    print!("{}", format_summary(report, include_links));
}
