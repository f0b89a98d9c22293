//! Plain aligned tables for `--format table`.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

/// Render `rows` under `headers`, left-aligned text and right-aligned numbers.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(title, &width)| pad(&clip(title, width), width, false))
        .collect::<Vec<_>>()
        .join(GAP);

    let mut lines = vec![header.clone(), "-".repeat(header.chars().count())];
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let text = clip(row.get(index).map_or("-", String::as_str), width);
                let numeric = is_numeric(&text);
                let padded = pad(&text, width, numeric);
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(GAP));
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect()
}

/// Narrow the widest column one character at a time until the table fits
/// or every column is at its floor.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

/// Severity names and boolean flags get a colour; padding stays outside the
/// escape codes so alignment is unaffected.
fn colorize(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "critical" | "false" | "login_required" => "31",
        "high" => "91",
        "medium" => "33",
        "low" | "info" => "36",
        "true" | "ready" => "32",
        _ => return padded,
    };
    // Coloured words are never numeric, so the text leads the padding.
    format!("\u{1b}[{code}m{text}\u{1b}[0m{}", &padded[text.len()..])
}
