use crate::person::Person;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write;

/// How parsed homeowners are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One display name per line
    #[default]
    Text,
    /// Indexed listing of every field
    Debug,
    /// JSON array of records
    Json,
}

/// Render people in the requested format
pub fn render(people: &[Person], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(people.iter().map(|p| format!("{}\n", p)).collect()),
        OutputFormat::Debug => Ok(render_debug(people)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(people).context("Failed to serialize homeowners")?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn write_people<W: Write>(writer: &mut W, people: &[Person], format: OutputFormat) -> Result<()> {
    let rendered = render(people, format)?;
    writer.write_all(rendered.as_bytes()).context("Failed to write output")?;
    writer.flush()?;
    Ok(())
}

fn render_debug(people: &[Person]) -> String {
    let mut out = String::from("[\n");
    for (i, person) in people.iter().enumerate() {
        let _ = writeln!(out, "    [{}] => Person", i);
        let _ = writeln!(out, "        (");
        let _ = writeln!(out, "            [title] => {}", field(person.title()));
        let _ = writeln!(out, "            [forename] => {}", field(person.forename()));
        let _ = writeln!(out, "            [surname] => {}", field(person.surname()));
        let initial = person.initial().map(String::from);
        let _ = writeln!(out, "            [initial] => {}", field(initial.as_deref()));
        let _ = writeln!(out, "        )");
    }
    out.push_str("]\n");
    out
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}
