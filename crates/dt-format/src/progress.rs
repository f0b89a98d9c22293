//! Progress math and progress-bar HTML fragments.

use std::fmt::Write as _;

use dt_core::Severity;
use serde::{Deserialize, Serialize};

/// Round to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Percentage of `total` that is `completed`, rounded to one decimal.
///
/// No work (`0`, `0`) is reported as 0, not as complete. A `completed`
/// count above `total` (work that was finished before it was counted,
/// e.g. suppressed findings) is capped at 100.
#[must_use]
pub fn calc_progress_percent(total: u64, completed: u64) -> f64 {
    if completed > total {
        return 100.0;
    }
    if total == 0 || completed == 0 {
        return 0.0;
    }
    round_tenth(percent_of(completed, total))
}

/// [`calc_progress_percent`] followed by a `%` sign.
#[must_use]
pub fn calc_progress_percent_label(total: u64, completed: u64) -> String {
    format!("{}%", calc_progress_percent(total, completed))
}

/// Single-colour informational bar showing `count` of `total`.
#[must_use]
pub fn generate_progress_bar(count: u64, total: u64) -> String {
    let percent = percent_of(count, total);
    format!(
        r#"<span class="progress"><div class="progress-bar severity-info-bg" data-toggle="tooltip" data-placement="top" title="{count}" style="width:{percent}%">{count}</div></span>"#
    )
}

/// Finding counts per severity bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub unassigned: u64,
}

impl SeverityCounts {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.critical
            .saturating_add(self.high)
            .saturating_add(self.medium)
            .saturating_add(self.low)
            .saturating_add(self.unassigned)
    }

    /// Buckets in display order, most severe first.
    #[must_use]
    pub const fn buckets(&self) -> [(Severity, u64); 5] {
        [
            (Severity::Critical, self.critical),
            (Severity::High, self.high),
            (Severity::Medium, self.medium),
            (Severity::Low, self.low),
            (Severity::Unassigned, self.unassigned),
        ]
    }
}

/// Multi-colour bar with one segment per non-empty severity bucket.
///
/// Each segment's width is its share of the total; the tooltip carries the
/// count and the share rounded to one decimal. With no findings at all a
/// single full-width "No Vulnerabilities Detected" segment is rendered.
#[must_use]
pub fn generate_severity_progress_bar(counts: SeverityCounts) -> String {
    let total = counts.total();
    let mut block = String::from(r#"<span class="progress">"#);

    if total == 0 {
        block.push_str(
            r#"<div class="progress-bar severity-info-bg" data-toggle="tooltip" data-placement="top" title="No Vulnerabilities Detected" style="width:100%">0</div>"#,
        );
    } else {
        for (severity, count) in counts.buckets() {
            if count == 0 {
                continue;
            }
            let percent = percent_of(count, total);
            let _ = write!(
                block,
                r#"<div class="progress-bar {class}" data-toggle="tooltip" data-placement="top" title="{title}: {count} ({rounded}%)" style="width:{percent}%">{count}</div>"#,
                class = severity.css_class(),
                title = severity.title(),
                rounded = round_tenth(percent),
            );
        }
    }

    block.push_str("</span>");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_work_is_zero_percent() {
        assert!(calc_progress_percent(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn overshoot_is_capped() {
        assert!((calc_progress_percent(10, 20) - 100.0).abs() < f64::EPSILON);
        assert!((calc_progress_percent(0, 3) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn half_done() {
        assert!((calc_progress_percent(10, 5) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert!((calc_progress_percent(3, 1) - 33.3).abs() < 1e-9);
        assert!((calc_progress_percent(3, 2) - 66.7).abs() < 1e-9);
    }

    #[test]
    fn nothing_completed_is_zero() {
        assert!(calc_progress_percent(7, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn label_appends_percent_sign() {
        assert_eq!(calc_progress_percent_label(10, 5), "50%");
        assert_eq!(calc_progress_percent_label(3, 1), "33.3%");
    }

    #[test]
    fn single_bar_with_zero_total_does_not_divide() {
        let html = generate_progress_bar(0, 0);
        assert!(html.contains("width:0%"));
    }

    #[test]
    fn single_bar_width() {
        let html = generate_progress_bar(1, 4);
        assert!(html.contains(r#"title="1""#));
        assert!(html.contains("width:25%"));
    }

    #[test]
    fn severity_bar_omits_empty_segments() {
        let html = generate_severity_progress_bar(SeverityCounts {
            critical: 1,
            high: 0,
            medium: 3,
            low: 0,
            unassigned: 0,
        });
        assert!(html.contains("severity-critical-bg"));
        assert!(html.contains("severity-medium-bg"));
        assert!(!html.contains("severity-high-bg"));
        assert!(!html.contains("severity-low-bg"));
        assert!(!html.contains("severity-unassigned-bg"));
        assert!(html.contains(r#"title="Critical: 1 (25%)""#));
        assert!(html.contains(r#"title="Medium: 3 (75%)""#));
        assert!(html.contains("width:75%"));
    }

    #[test]
    fn severity_bar_with_no_findings() {
        let html = generate_severity_progress_bar(SeverityCounts::default());
        assert_eq!(html.matches("progress-bar").count(), 1);
        assert!(html.contains("No Vulnerabilities Detected"));
        assert!(html.contains("width:100%"));
        assert!(html.starts_with(r#"<span class="progress">"#));
        assert!(html.ends_with("</span>"));
    }

    #[test]
    fn severity_bar_rounds_tooltip_share() {
        let html = generate_severity_progress_bar(SeverityCounts {
            high: 1,
            low: 2,
            ..SeverityCounts::default()
        });
        assert!(html.contains("High: 1 (33.3%)"));
        assert!(html.contains("Low: 2 (66.7%)"));
    }

    #[test]
    fn severity_bar_total_saturates() {
        let counts = SeverityCounts {
            critical: u64::MAX,
            high: 1,
            ..SeverityCounts::default()
        };
        assert_eq!(counts.total(), u64::MAX);

        let html = generate_severity_progress_bar(counts);
        assert!(!html.contains("No Vulnerabilities Detected"));
        assert!(html.contains(&format!("Critical: {} (100%)", u64::MAX)));
        assert!(html.contains("High: 1 (0%)"));
    }
}
