//! Severity and vulnerability-source labels.

use crate::text::{capitalize, to_html};

/// Badge for a vulnerability source (NVD, NPM, GITHUB, OSSINDEX, ...).
#[must_use]
pub fn format_source_label(source: &str) -> String {
    let class = to_html(&format!("label-source-{}", source.to_lowercase()));
    format!(r#"<span class="label {class}">{}</span>"#, to_html(source))
}

/// Icon plus capitalised name for a severity; empty input renders nothing.
#[must_use]
pub fn format_severity_label(severity: &str) -> String {
    if severity.is_empty() {
        return String::new();
    }
    let label = to_html(&capitalize(severity));
    let class = to_html(&format!("severity-{}-bg", severity.to_lowercase()));
    format!(
        r##"
     <div style="height:24px;margin:-4px;">
        <div class="{class} text-center pull-left" style="width:24px; height:24px; color:#ffffff">
            <i class="fa fa-bug" style="font-size:12px; padding:6px" aria-hidden="true"></i>
         </div>
         <div class="text-center pull-left" style="height:24px;">
             <div style="font-size:12px; padding:4px"><span class="severity-value">{label}</span></div>
         </div>
     </div>"##
    )
}
