use dt_format::{
    SeverityCounts, calc_progress_percent, calc_progress_percent_label, format_severity_label,
    format_source_label, format_timestamp, generate_progress_bar, generate_severity_progress_bar,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RenderCommands;
use crate::output::{output, output_fragment};

#[derive(Serialize)]
struct ProgressResponse {
    percent: f64,
    label: String,
}

#[derive(Serialize)]
struct TimestampResponse {
    millis: i64,
    formatted: String,
}

/// Handle `dtc render <fragment>`. Needs no server or session.
pub fn handle(action: &RenderCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RenderCommands::SeverityBar(args) => {
            let counts = SeverityCounts {
                critical: args.critical,
                high: args.high,
                medium: args.medium,
                low: args.low,
                unassigned: args.unassigned,
            };
            output_fragment(&generate_severity_progress_bar(counts), flags.format)
        }
        RenderCommands::Progress(args) if args.bar => {
            output_fragment(&generate_progress_bar(args.completed, args.total), flags.format)
        }
        RenderCommands::Progress(args) => output(
            &ProgressResponse {
                percent: calc_progress_percent(args.total, args.completed),
                label: calc_progress_percent_label(args.total, args.completed),
            },
            flags.format,
        ),
        RenderCommands::Timestamp(args) => {
            let formatted = format_timestamp(args.millis, args.time).ok_or_else(|| {
                anyhow::anyhow!("timestamp {} is out of range", args.millis)
            })?;
            output(
                &TimestampResponse {
                    millis: args.millis,
                    formatted,
                },
                flags.format,
            )
        }
        RenderCommands::SeverityLabel(args) => {
            output_fragment(&format_severity_label(&args.value), flags.format)
        }
        RenderCommands::SourceLabel(args) => {
            output_fragment(&format_source_label(&args.value), flags.format)
        }
    }
}
