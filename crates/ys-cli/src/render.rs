//! Text rendering of comparison and merge reports.
//!
//! Every section renderer returns `None` when it has no rows, so an empty
//! section is left out rather than printed as an empty table.

use colored::{ColoredString, Colorize};
use ys_diff::ComparisonResult;
use ys_merge::MergeState;
use ys_types::display_value;

use crate::config::ReportConfig;

/// Line between duplicate blocks.
pub const SEPARATOR: &str = "#######################################";

/// Narrowest a table column is shrunk to.
const MIN_COLUMN: usize = 4;

pub(crate) fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// All sections of a comparison, in order: duplicates, differences,
/// additional keys.
pub fn render_comparison(result: &ComparisonResult, config: &ReportConfig) -> String {
    if result.is_empty() {
        return String::new();
    }
    [
        render_duplicates(result, config),
        render_differences(result, config),
        render_additional(result, config),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_duplicates(result: &ComparisonResult, config: &ReportConfig) -> Option<String> {
    if result.duplicates.is_empty() {
        return None;
    }
    let mut out = format!("{SEPARATOR}\n");
    for duplicate in &result.duplicates {
        out.push_str(&format!(
            "{} is the same in both files:\n",
            paint(&duplicate.key, config.color, |s| s.yellow().bold())
        ));
        out.push_str(&display_value(&duplicate.value));
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    Some(out)
}

/// Differences as a `Key | <a> | <b>` table no wider than `config.max_width`.
pub fn render_differences(result: &ComparisonResult, config: &ReportConfig) -> Option<String> {
    if result.differences.is_empty() {
        return None;
    }
    let header = [
        "Key".to_string(),
        result.origin_a.clone(),
        result.origin_b.clone(),
    ];
    let rows: Vec<[String; 3]> = result
        .differences
        .iter()
        .map(|d| [d.key.clone(), d.value_in_a.clone(), d.value_in_b.clone()])
        .collect();
    Some(render_table(&header, &rows, config))
}

pub fn render_additional(result: &ComparisonResult, config: &ReportConfig) -> Option<String> {
    let sides = [
        (&result.origin_a, &result.additional.only_in_a),
        (&result.origin_b, &result.additional.only_in_b),
    ];
    let mut out = String::new();
    for (origin, keys) in sides {
        if keys.is_empty() {
            continue;
        }
        out.push_str(&format!("Only in {}:\n", paint(origin, config.color, |s| s.cyan())));
        for key in keys {
            out.push_str(&format!("  {}\n", paint(key, config.color, |s| s.green())));
        }
    }
    (!out.is_empty()).then_some(out)
}

/// One line per key whose value was repeated during a merge.
pub fn render_duplications(state: &MergeState, config: &ReportConfig) -> Option<String> {
    let mut out = String::new();
    for (key, pairs) in state.duplications() {
        let pairs: Vec<String> = pairs.iter().map(ToString::to_string).collect();
        out.push_str(&format!(
            "{}: {}\n",
            paint(key, config.color, |s| s.yellow()),
            pairs.join(", ")
        ));
    }
    if out.is_empty() {
        return None;
    }
    Some(format!("Duplicated values:\n{out}"))
}

fn render_table(header: &[String; 3], rows: &[[String; 3]], config: &ReportConfig) -> String {
    let natural: Vec<usize> = (0..3)
        .map(|col| {
            std::iter::once(&header[col])
                .chain(rows.iter().map(|r| &r[col]))
                .flat_map(|cell| cell.lines())
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();
    let widths = fit_widths(&natural, config.max_width);

    let rule = {
        let mut rule = String::from("+");
        for w in &widths {
            rule.push_str(&"-".repeat(w + 2));
            rule.push('+');
        }
        rule
    };

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    push_row(&mut out, header, &widths, config.color, true);
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        push_row(&mut out, row, &widths, config.color, false);
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize], color: bool, header: bool) {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| wrap(cell, w))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    for line in 0..height {
        out.push('|');
        for (col, lines) in wrapped.iter().enumerate() {
            let text = lines.get(line).map(String::as_str).unwrap_or("");
            let padded = format!("{text:<width$}", width = widths[col]);
            let shown = if header {
                paint(&padded, color, |s| s.bold())
            } else {
                padded
            };
            out.push(' ');
            out.push_str(&shown);
            out.push_str(" |");
        }
        out.push('\n');
    }
}

/// Shrink the widest column one character at a time until the table fits.
fn fit_widths(natural: &[usize], max_width: usize) -> Vec<usize> {
    // "| " + " | " between cells + " |"
    let overhead = natural.len() * 3 + 1;
    let budget = max_width.saturating_sub(overhead);
    let mut widths = natural.to_vec();
    while widths.iter().sum::<usize>() > budget {
        let widest = widths
            .iter()
            .enumerate()
            .max_by_key(|(_, w)| **w)
            .map(|(i, w)| (i, *w));
        match widest {
            Some((i, w)) if w > MIN_COLUMN => widths[i] = w - 1,
            _ => break,
        }
    }
    widths
}

/// Split `text` into lines of at most `width` characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
