//! Comparison and breakdown tables
//!
//! Formatted string rows ready for tabular display, plus a plain-text renderer.

use commission_engine::format::{
    format_currency, format_currency_whole, format_optional_percent, format_rate,
};
use commission_engine::ModelComparison;
use serde::{Deserialize, Serialize};
use types::bracket::BracketBreakdownEntry;

/// One row of the model comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub model: String,
    pub value: String,
}

/// New model, legacy model, and their difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

/// One row of the bracket breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub from: String,
    pub to: String,
    pub rate: String,
    pub base: String,
    pub commission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownTable {
    pub rows: Vec<BreakdownRow>,
}

/// Build the comparison table from a computed comparison.
pub fn comparison_table(comparison: &ModelComparison) -> ComparisonTable {
    let difference = format!(
        "{} ({})",
        format_currency(comparison.difference),
        format_optional_percent(comparison.percent_difference)
    );

    ComparisonTable {
        rows: vec![
            ComparisonRow {
                model: "New model".to_string(),
                value: format_currency(comparison.tiered_total),
            },
            ComparisonRow {
                model: "Legacy model".to_string(),
                value: format_currency(comparison.legacy_total),
            },
            ComparisonRow {
                model: "Difference".to_string(),
                value: difference,
            },
        ],
    }
}

/// Build the breakdown table from tiered entries.
pub fn breakdown_table(entries: &[BracketBreakdownEntry]) -> BreakdownTable {
    let rows = entries
        .iter()
        .map(|entry| BreakdownRow {
            label: format!("Bracket {}", entry.index),
            from: format_currency_whole(entry.from),
            to: format_currency_whole(entry.to),
            rate: format_rate(entry.rate),
            base: format_currency(entry.amount_in_bracket),
            commission: format_currency(entry.commission_in_bracket),
        })
        .collect();

    BreakdownTable { rows }
}

impl ComparisonTable {
    pub fn render_text(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| vec![r.model.clone(), r.value.clone()])
            .collect();
        render_grid(&["Model", "Value"], &cells)
    }
}

impl BreakdownTable {
    pub fn render_text(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.label.clone(),
                    r.from.clone(),
                    r.to.clone(),
                    r.rate.clone(),
                    r.base.clone(),
                    r.commission.clone(),
                ]
            })
            .collect();
        render_grid(&["Bracket", "From", "To", "%", "Base", "Commission"], &cells)
    }
}

/// Left-aligned columns separated by two spaces, header underlined with dashes.
fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.to_vec()));
    out.push(line(rule.iter().map(String::as_str).collect()));
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}
