use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::error::{ScanError, Severity};
use crate::scanner::ScanOutcome;

/// Print one recoverable scan failure to stderr.
pub fn print_issue(err: &ScanError) {
    match err.severity() {
        Severity::Warning => eprintln!("{} {}", "Warning:".yellow().bold(), err),
        Severity::Error => eprintln!("{} {}", "Error:".red().bold(), err),
    }
}

/// One `→ <ecosystem> <n> dependencies` line per ecosystem seen.
pub fn print_counts(outcome: &ScanOutcome) {
    for ecosystem in outcome.manifests.keys() {
        let count = outcome
            .records
            .iter()
            .filter(|r| r.ecosystem == *ecosystem)
            .count();
        eprintln!("  {} {} {} dependencies", "→".cyan(), ecosystem, count);
    }
}

/// Per-ecosystem table of manifests parsed and dependencies found.
pub fn render_summary(outcome: &ScanOutcome) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Ecosystem").add_attribute(Attribute::Bold),
            Cell::new("Manifests").add_attribute(Attribute::Bold),
            Cell::new("Dependencies").add_attribute(Attribute::Bold),
        ]);

    for (ecosystem, manifests) in &outcome.manifests {
        let deps = outcome
            .records
            .iter()
            .filter(|r| r.ecosystem == *ecosystem)
            .count();
        table.add_row(vec![
            Cell::new(ecosystem.to_string()),
            Cell::new(manifests.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(deps.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }

    if !outcome.issues.is_empty() {
        table.add_row(vec![
            Cell::new("skipped").add_attribute(Attribute::Italic),
            Cell::new(outcome.issues.len().to_string()).set_alignment(CellAlignment::Right),
            Cell::new(""),
        ]);
    }

    table
}
