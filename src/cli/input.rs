use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, Read};

/// Read one input per line.
///
/// An interactive reader would block with no prompt, so it is refused.
pub fn read_lines<R: BufRead>(reader: R, interactive: bool) -> Result<Vec<String>> {
    if interactive {
        anyhow::bail!("No inputs specified. Pass text as arguments or pipe it on stdin; see --help.");
    }

    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read stdin")
}

/// Read a JSON document holding a single value or an array of values.
pub fn read_json_values<R: Read>(mut reader: R, interactive: bool) -> Result<Vec<Value>> {
    if interactive {
        anyhow::bail!("--json expects a JSON document piped on stdin; see --help.");
    }

    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read stdin")?;

    let parsed: Value = serde_json::from_str(&raw).context("Failed to parse JSON input")?;
    Ok(match parsed {
        Value::Array(values) => values,
        value => vec![value],
    })
}
