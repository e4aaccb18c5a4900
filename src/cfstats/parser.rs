// src/cfstats/parser.rs
//! State machine over the cfstats line stream.

use eyre::Result;
use serde_json::{Map, Value};
use std::io::{BufRead, Lines};

/// Number of summary lines nodetool prints under each `Keyspace:` header.
/// Tied to the cfstats output format; a nodetool from another Cassandra
/// release may print a different count.
pub const KEYSPACE_SUMMARY_LINES: usize = 5;

/// Function to parse cfstats output into a nested stat tree.
///
/// The tree maps keyspace name -> { "global" -> {metric: value},
/// column family -> {metric: value} }, with every value kept as the
/// string nodetool printed. Lines that carry no usable metric are
/// skipped rather than rejected.
pub fn parse(reader: impl BufRead) -> Result<Value> {
    let mut lines = reader.lines();
    let mut values = Map::new();
    let mut keyspace: Option<String> = None;

    while let Some(line) = lines.next() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            continue;
        };
        if first.starts_with("Keyspace") {
            if let Some(name) = tokens.get(1) {
                keyspace = Some(name.to_string());
                parse_keyspace(&mut lines, &mut values, name)?;
            }
        }
        if first.starts_with("Column") {
            // A column family block outside any keyspace has nowhere to go.
            if let (Some(ks), Some(name)) = (keyspace.as_deref(), tokens.get(2)) {
                parse_column_family(&mut lines, &mut values, ks, name)?;
            }
        }
    }

    Ok(Value::Object(values))
}

/// Function to consume the global summary block of a keyspace.
fn parse_keyspace<R: BufRead>(
    lines: &mut Lines<R>,
    values: &mut Map<String, Value>,
    keyspace: &str,
) -> Result<()> {
    let mut global = Map::new();
    for _ in 0..KEYSPACE_SUMMARY_LINES {
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        add_value(&tokens, &mut global);
    }

    let mut sections = Map::new();
    sections.insert("global".to_string(), Value::Object(global));
    values.insert(keyspace.to_string(), Value::Object(sections));
    Ok(())
}

/// Function to consume a column family block until a blank line.
fn parse_column_family<R: BufRead>(
    lines: &mut Lines<R>,
    values: &mut Map<String, Value>,
    keyspace: &str,
    cf: &str,
) -> Result<()> {
    let mut stats = Map::new();
    while let Some(line) = lines.next() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            break;
        }
        add_value(&tokens, &mut stats);
    }

    if let Some(Value::Object(sections)) = values.get_mut(keyspace) {
        sections.insert(cf.to_string(), Value::Object(stats));
    }
    Ok(())
}

/// Function to extract one metric from a tokenized stats line.
///
/// Parentheses are stripped from every token and a trailing "ms." unit
/// token is dropped. A trailing "NaN" becomes "0". The key is every token
/// but the last joined with underscores, colons removed; the value is the
/// last token, kept in string form. Lines whose last token is not numeric
/// carry no usable metric and are skipped.
pub fn add_value(tokens: &[&str], values: &mut Map<String, Value>) {
    let mut tokens: Vec<String> = tokens.iter().map(|t| t.replace(['(', ')'], "")).collect();

    if tokens.last().map(String::as_str) == Some("ms.") {
        tokens.pop();
    }
    if let Some(last) = tokens.last_mut() {
        if *last == "NaN" {
            *last = "0".to_string();
        }
    }

    let Some((value, keys)) = tokens.split_last() else {
        return;
    };
    if value.parse::<f64>().is_ok() {
        let key = keys.join("_").replace(':', "");
        values.insert(key, Value::String(value.clone()));
    }
}
