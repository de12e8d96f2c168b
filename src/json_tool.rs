use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

/// Input that is not well-formed JSON.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for FormatError {
    fn from(e: serde_json::Error) -> Self {
        FormatError {
            message: format!("JSON parse error: {e}"),
            line: e.line(),
            column: e.column(),
        }
    }
}

fn parse(input: &str) -> Result<Value, FormatError> {
    Ok(serde_json::from_str(input)?)
}

fn to_indented(v: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(pad.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    // writing a Value into a Vec cannot fail
    if v.serialize(&mut ser).is_err() {
        return v.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| v.to_string())
}

pub fn validate_json(input: &str) -> Result<(), FormatError> {
    parse(input).map(|_| ())
}

/// Pretty-print with `indent` spaces per level. Key order is kept as written.
pub fn format_json(input: &str, indent: usize) -> Result<String, FormatError> {
    Ok(to_indented(&parse(input)?, indent))
}

pub fn minify_json(input: &str) -> Result<String, FormatError> {
    Ok(parse(input)?.to_string())
}

fn sort_value(v: &mut Value) {
    match v {
        Value::Object(map) => {
            for child in map.values_mut() {
                sort_value(child);
            }
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            map.extend(entries);
        }
        Value::Array(items) => items.iter_mut().for_each(sort_value),
        _ => {}
    }
}

/// Pretty-print with object keys sorted at every level.
pub fn sort_keys(input: &str, indent: usize) -> Result<String, FormatError> {
    let mut v = parse(input)?;
    sort_value(&mut v);
    Ok(to_indented(&v, indent))
}
