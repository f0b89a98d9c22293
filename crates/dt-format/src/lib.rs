//! # dt-format
//!
//! Pure, deterministic formatting helpers for the dashboard:
//!
//! - HTML escaping and small string helpers ([`text`])
//! - Date display ([`timestamp`])
//! - Progress math and progress-bar fragments ([`progress`])
//! - Severity and source labels ([`labels`])
//!
//! Every value interpolated into an HTML fragment goes through [`to_html`].

pub mod labels;
pub mod progress;
pub mod text;
pub mod timestamp;

pub use labels::{format_severity_label, format_source_label};
pub use progress::{
    SeverityCounts, calc_progress_percent, calc_progress_percent_label, generate_progress_bar,
    generate_severity_progress_bar,
};
pub use text::{
    NamedEntry, capitalize, csv_to_names, is_blank, non_empty_or, query_params, to_html,
};
pub use timestamp::{format_timestamp, format_timestamp_in};
