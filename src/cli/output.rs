use crate::converter::{Conversion, FileConversion};
use anyhow::{Context, Result};
use colored::*;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_conversions(
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in render_text(conversions, colored_output) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", render_json(conversions)?),
    }
    Ok(())
}

/// One line per conversion so output stays aligned with input
fn render_text(conversions: &[Conversion], colored_output: bool) -> Vec<String> {
    conversions
        .iter()
        .map(|conversion| {
            if colored_output {
                conversion.output.green().to_string()
            } else {
                conversion.output.clone()
            }
        })
        .collect()
}

fn render_json(conversions: &[Conversion]) -> Result<String> {
    serde_json::to_string_pretty(conversions).context("Failed to serialize conversions")
}

pub fn print_file_conversion(result: &FileConversion, colored_output: bool) {
    let file_name = result.path.display().to_string();

    if colored_output {
        eprintln!("\n{}", file_name.bold().underline());
    } else {
        eprintln!("\n{}", file_name);
    }

    print!("{}", result.output);
}

pub fn print_files_summary(
    total_changed: usize,
    files: &[impl AsRef<Path>],
    in_place: bool,
    colored: bool,
) {
    let file_word = if files.len() == 1 { "file" } else { "files" };

    if total_changed == 0 {
        if colored {
            eprintln!("\n{}", "✓ Nothing to convert!".green().bold());
        } else {
            eprintln!("\n✓ Nothing to convert!");
        }
        return;
    }

    let line_word = if total_changed == 1 { "line" } else { "lines" };
    let verb = if in_place { "rewritten" } else { "would change" };

    if colored {
        eprintln!(
            "\n{} {} {} {} in {} {}",
            "✓".green().bold(),
            total_changed.to_string().green().bold(),
            line_word,
            verb,
            files.len(),
            file_word
        );
    } else {
        eprintln!(
            "\n✓ {} {} {} in {} {}",
            total_changed,
            line_word,
            verb,
            files.len(),
            file_word
        );
    }
}
