//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, strong passwords
//! - Red: errors, weak passwords, findings
//! - Yellow: warnings, medium passwords, generated passwords
//! - Cyan: hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

use crate::core::strength::{Band, Report};

const RULE_WIDTH: usize = 56;

/// Number of cells in the strength bar.
const BAR_CELLS: usize = 10;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ password saved`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ storage unavailable`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ entry 3 could not be decrypted`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan) to stderr.
///
/// Example: `→ run: passforge keygen`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  password:  Zk9#mP2$vL8@qR4&`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no passwords saved yet`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Format a password for display (yellow).
pub fn password(p: &str) -> String {
    if colors_enabled() {
        style(p).yellow().to_string()
    } else {
        p.to_string()
    }
}

/// The bar, percentage and label for a score, uncolored.
///
/// Example: `███████░░░ 70% (Medium)`
pub fn strength_line(score: f64) -> String {
    let filled = ((score * BAR_CELLS as f64).round() as usize).min(BAR_CELLS);
    let percent = (score * 100.0).round() as u32;
    format!(
        "{}{} {}% ({})",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled),
        percent,
        Band::from_score(score)
    )
}

/// Print the strength bar colored by band.
///
/// Example: `Strength: ██████████ 100% (Strong)`
pub fn strength(report: &Report) {
    let line = strength_line(report.score);
    if colors_enabled() {
        let line = match report.band {
            Band::Weak => style(line).red(),
            Band::Medium => style(line).yellow(),
            Band::Strong => style(line).green(),
        };
        println!("{} {}", style("Strength:").bold(), line);
    } else {
        println!("Strength: {}", line);
    }
}

/// Print the recommendations for a report, or a confirmation when there are none.
pub fn findings(report: &Report) {
    if report.findings.is_empty() {
        success("Your password looks good!");
        return;
    }

    header("Recommendations:");
    for finding in &report.findings {
        if colors_enabled() {
            println!("  {}", style(format!("- {}", finding.message)).red());
        } else {
            println!("  - {}", finding.message);
        }
    }
}
