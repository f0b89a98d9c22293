use clap::{Args, Subcommand};

/// Offline rendering of dashboard fragments.
#[derive(Clone, Debug, Subcommand)]
pub enum RenderCommands {
    /// Segmented severity bar from per-severity counts.
    SeverityBar(SeverityBarArgs),
    /// Completion percentage, or a progress bar with --bar.
    Progress(ProgressArgs),
    /// Epoch milliseconds as a display date.
    Timestamp(TimestampArgs),
    /// Severity badge.
    SeverityLabel(LabelArgs),
    /// Vulnerability source badge.
    SourceLabel(LabelArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SeverityBarArgs {
    #[arg(long, default_value_t = 0)]
    pub critical: u64,
    #[arg(long, default_value_t = 0)]
    pub high: u64,
    #[arg(long, default_value_t = 0)]
    pub medium: u64,
    #[arg(long, default_value_t = 0)]
    pub low: u64,
    #[arg(long, default_value_t = 0)]
    pub unassigned: u64,
}

#[derive(Clone, Debug, Args)]
pub struct ProgressArgs {
    #[arg(long)]
    pub total: u64,
    #[arg(long)]
    pub completed: u64,
    /// Render a progress bar instead of the percentage.
    #[arg(long)]
    pub bar: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TimestampArgs {
    /// Milliseconds since the Unix epoch.
    pub millis: i64,
    /// Include the time of day.
    #[arg(long)]
    pub time: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LabelArgs {
    pub value: String,
}
