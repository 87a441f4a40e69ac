//! Report serialization and writing.

use std::fs;
use std::path::Path;

use crate::{cli::types::format::OutputFormat, opendota::types::Team, Result};

/// Render ranked teams as a YAML or JSON document.
pub fn render_report(teams: &[Team], format: OutputFormat) -> Result<String> {
    let doc = match format {
        OutputFormat::Yaml => serde_yaml::to_string(teams)?,
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(teams)?;
            s.push('\n');
            s
        }
    };
    Ok(doc)
}

/// Render and write the report to `path`, replacing any existing file.
pub fn write_report(teams: &[Team], path: &Path, format: OutputFormat) -> Result<()> {
    let doc = render_report(teams, format)?;
    fs::write(path, doc)?;
    Ok(())
}
