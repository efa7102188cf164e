// src/report.rs
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use std::io::Write;

use crate::models::{AggregateResult, FileResult, Method};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

const RATIO_HEADERS: [&str; 5] = [
    "Name of the file",
    "Similarity (Ratio)",
    "Difference (Ratio)",
    "Lines of code",
    "Lines Difference",
];

const DISTANCE_HEADERS: [&str; 5] = [
    "Name of the file",
    "Distance",
    "Length",
    "Lines of code",
    "Lines Difference",
];

/// Writes `result` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails or the result cannot be serialised.
pub fn render<W: Write>(result: &AggregateResult, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Table => render_table(result, out),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, result).context("Failed to serialise result")?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn cells(row: &FileResult, method: Method) -> [String; 5] {
    let (first, second) = match method {
        Method::Ratio => (
            format!("{:.2}", row.similarity_percentage()),
            format!("{:.2}", row.difference_percentage()),
        ),
        Method::Distance => (row.distance.to_string(), row.length.to_string()),
    };
    [
        row.path.clone(),
        first,
        second,
        row.lines.to_string(),
        row.lines_delta.to_string(),
    ]
}

fn render_table<W: Write>(result: &AggregateResult, out: &mut W) -> Result<()> {
    if result.is_empty() {
        writeln!(out, "No matching files found.")?;
    }

    let headers = match result.method {
        Method::Ratio => RATIO_HEADERS,
        Method::Distance => DISTANCE_HEADERS,
    };
    let body: Vec<[String; 5]> = result
        .rows
        .iter()
        .map(|row| cells(row, result.method))
        .collect();
    let footer = cells(&result.total, result.method);

    let mut widths = headers.map(str::len);
    for line in body.iter().chain(std::iter::once(&footer)) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let separator = widths.map(|width| "-".repeat(width));

    write_line(out, &headers, &widths)?;
    write_line(out, &separator, &widths)?;
    for line in &body {
        write_line(out, line, &widths)?;
    }
    write_line(out, &separator, &widths)?;
    write_line(out, &footer, &widths)?;
    Ok(())
}

/// First column left-aligned, the rest right-aligned.
fn write_line<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S; 5], widths: &[usize; 5]) -> Result<()> {
    let mut line = String::new();
    for (index, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        let cell = cell.as_ref();
        if index == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    writeln!(out, "{line}")?;
    Ok(())
}
