use std::fmt::Write;

use serde::Serialize;

use crate::analysis::{lens_view, AnalysisResult, Lens, LensView};

/// Format styles supported in default reporter implementations.
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render the requested lens views for a result using the desired format.
pub fn render_lenses(
    result: &AnalysisResult,
    lenses: &[Lens],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let views: Vec<LensView> = lenses.iter().map(|&lens| lens_view(lens, result)).collect();
    match format {
        OutputFormat::Human => render_human(result, &views),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonDashboard {
            score: result.score,
            lenses: &views,
        })?),
    }
}

fn render_human(result: &AnalysisResult, views: &[LensView]) -> anyhow::Result<String> {
    let mut out = String::new();
    match result.score {
        Some(score) => writeln!(out, "Score: {score}/100")?,
        None => writeln!(out, "Score: unreported")?,
    }

    for view in views {
        writeln!(out)?;
        writeln!(out, "[{}]", view.lens)?;
        if view.entries.is_empty() {
            writeln!(out, "  No findings for this lens.")?;
            continue;
        }
        for entry in &view.entries {
            writeln!(out, "  - {}", entry.text)?;
            writeln!(out, "    {}", entry.explanation)?;
        }
    }
    Ok(out)
}

#[derive(Debug, Serialize)]
struct JsonDashboard<'a> {
    score: Option<u8>,
    lenses: &'a [LensView],
}
