//! Text (terminal) reporter with colors and formatting

use crate::models::Severity;
use crate::pipeline::CheckReport;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity colors
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",   // Red
        Severity::Warning => "\x1b[33m", // Yellow
        Severity::Info => "\x1b[90m",    // Gray
    }
}

/// Render check reports as formatted terminal output
pub fn render(reports: &[CheckReport]) -> Result<String> {
    let mut out = String::new();
    let mut total = 0;

    for report in reports {
        if report.warnings.is_empty() {
            continue;
        }

        out.push_str(&format!("{BOLD}{}{RESET}\n", report.name));
        for warning in &report.warnings {
            let color = severity_color(&warning.severity);
            let place = warning
                .span
                .map(|span| span.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "  {DIM}{place}{RESET}  {color}{}{RESET}  {}",
                warning.severity, warning.message
            ));
            if let Some(label) = &warning.confidence_label {
                out.push_str(&format!("  {DIM}[{label}]{RESET}"));
            }
            out.push('\n');
        }
        out.push('\n');
        total += report.warnings.len();
    }

    if total == 0 {
        out.push_str(&format!(
            "{BOLD}✓{RESET} no warnings in {} file{}\n",
            reports.len(),
            if reports.len() == 1 { "" } else { "s" }
        ));
    } else {
        out.push_str(&format!(
            "{BOLD}{total}{RESET} warning{} in {} file{}\n",
            if total == 1 { "" } else { "s" },
            reports.len(),
            if reports.len() == 1 { "" } else { "s" }
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_reports;

    #[test]
    fn test_text_render_lists_warnings() {
        let rendered = render(&test_reports()).expect("render");
        assert!(rendered.contains("hard.txt"));
        assert!(rendered.contains("1:1-3:32"));
        assert!(rendered.contains("[4/7]"));
        assert!(rendered.contains("1 warning in 2 files"));
    }

    #[test]
    fn test_text_render_clean_run() {
        let rendered = render(&[]).expect("render");
        assert!(rendered.contains("no warnings"));
    }
}
