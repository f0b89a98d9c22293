use dt_dashboard::{SearchSection, smart_search};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Table-friendly view: one row per suggestion.
#[derive(Serialize)]
struct SuggestionRow<'a> {
    section: &'a str,
    display: &'a str,
    html: &'a str,
}

pub async fn handle(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = ctx.session.token();
    let spinner = Progress::spinner("Searching...");
    let sections = smart_search(&ctx.client, token.as_deref(), &ctx.context_path, &args.query).await;
    drop(spinner);

    if flags.format == OutputFormat::Table {
        return output(&rows(&sections), flags.format);
    }
    output(&sections, flags.format)
}

fn rows(sections: &[SearchSection]) -> Vec<SuggestionRow<'_>> {
    sections
        .iter()
        .flat_map(|section| {
            section.suggestions.iter().map(|suggestion| SuggestionRow {
                section: section.kind.as_str(),
                display: &suggestion.display,
                html: &suggestion.html,
            })
        })
        .collect()
}
