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

/// Print a human sentence; JSON output wraps it as `{"message": ...}`.
pub fn message(text: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => output(&serde_json::json!({ "message": text }), format),
        OutputFormat::Table | OutputFormat::Raw => {
            println!("{text}");
            Ok(())
        }
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_rows(&["field", "value"], &rows, table_options()))
        }
        Value::Null => Ok(String::from("(none)")),
        scalar => Ok(value_to_cell(scalar)),
    }
}

/// Arrays of objects become one row per object; columns keep first-seen order.
fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_rows(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Pet {
        name: &'static str,
        species: &'static str,
    }

    #[test]
    fn json_render_is_pretty() {
        let out = render(&Pet { name: "Tom", species: "cat" }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["name"], "Tom");
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Pet { name: "Tom", species: "cat" }, OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"name":"Tom","species":"cat"}"#);
    }

    #[test]
    fn object_renders_field_value_rows() {
        let out = render(&Pet { name: "Tom", species: "cat" }, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(out.contains("species"));
        assert!(out.contains("cat"));
    }

    #[test]
    fn array_columns_keep_field_order() {
        let pets = vec![
            Pet { name: "Tom", species: "cat" },
            Pet { name: "Rex", species: "dog" },
        ];
        let out = render(&pets, OutputFormat::Table).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.find("name").unwrap() < header.find("species").unwrap());
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_array_and_none() {
        let empty: Vec<Pet> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(no rows)");
        assert_eq!(render(&None::<Pet>, OutputFormat::Table).unwrap(), "(none)");
    }
}
