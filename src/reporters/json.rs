//! JSON reporter
//!
//! Outputs the full check reports as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::pipeline::CheckReport;
use anyhow::Result;

/// Render reports as JSON
pub fn render(reports: &[CheckReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Render reports as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(reports: &[CheckReport]) -> Result<String> {
    Ok(serde_json::to_string(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_reports;

    #[test]
    fn test_json_render_valid() {
        let reports = test_reports();
        let json_str = render(&reports).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");

        let first = &parsed[0];
        assert_eq!(first["name"], "hard.txt");
        let warnings = first["warnings"].as_array().expect("warnings array");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["rule_id"], "readability");
        assert_eq!(warnings[0]["confidence_label"], "4/7");
        assert_eq!(warnings[0]["span"]["start"]["line"], 1);
        assert_eq!(warnings[0]["span"]["end"]["column"], 32);
        assert!(warnings[0]["expected"].as_array().expect("expected").is_empty());

        let second = &parsed[1];
        assert_eq!(second["summary"]["total"], 0);
    }

    #[test]
    fn test_json_render_compact() {
        let reports = test_reports();
        let json_str = render_compact(&reports).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }
}
