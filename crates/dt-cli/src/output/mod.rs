use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[derive(Serialize)]
struct Fragment<'a> {
    html: &'a str,
}

/// Print an HTML fragment: bare with `--format raw`, wrapped otherwise.
pub fn output_fragment(html: &str, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Raw {
        println!("{html}");
        return Ok(());
    }
    output(&Fragment { html }, format)
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            Ok(render_rows(items))
        }
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Object(_) => {
            let mut rows = Vec::new();
            flatten("", value, &mut rows);
            Ok(table::render_table(&["key", "value"], &rows, options()))
        }
        other => Ok(table::render_table(
            &["value"],
            &[vec![cell(other)]],
            options(),
        )),
    }
}

/// One row per object, one column per key seen in any of them.
fn render_rows(items: &[Value]) -> String {
    let mut headers: Vec<&str> = Vec::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect::<Vec<Vec<String>>>();
    table::render_table(&headers, &rows, options())
}

/// Nested objects become dotted keys so a dashboard reads as one table.
fn flatten(prefix: &str, value: &Value, rows: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, nested, rows);
            }
        }
        other => rows.push(vec![prefix.to_string(), cell(other)]),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
