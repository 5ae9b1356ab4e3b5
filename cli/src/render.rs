//! Plain-text rendering for terminal output.
//!
//! Every renderer reuses the `inventory` view models so the terminal shows
//! the same placeholders and number formats as the browser.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use inventory::dashboard::DashboardView;
use inventory::detail::{AssetDetail, DetailSummary, HistoryRow};
use inventory::model::{Asset, Category};
use inventory::table::{ASSET_COLUMNS, CategoryRow, EMPTY_TABLE_MESSAGE, asset_row};

const COLUMN_GAP: &str = "  ";

/// Left-aligned table with a dashed rule under the header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn assets_table(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return format!("{EMPTY_TABLE_MESSAGE}\n");
    }
    let mut headers = vec!["ID"];
    headers.extend(ASSET_COLUMNS.iter().map(|c| c.label));
    let rows: Vec<Vec<String>> = assets
        .iter()
        .map(|asset| {
            let row = asset_row(asset);
            std::iter::once(row.id.to_string()).chain(row.cells.iter().map(inventory::table::Cell::plain)).collect()
        })
        .collect();
    table(&headers, &rows)
}

pub fn categories_table(categories: &[Category]) -> String {
    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(CategoryRow::from_category)
        .map(|row| vec![row.id.to_string(), row.name, row.description, row.created])
        .collect();
    table(&["ID", "Name", "Description", "Created"], &rows)
}

pub fn history_lines(rows: &[HistoryRow]) -> String {
    if rows.is_empty() {
        return "No history\n".to_owned();
    }
    let rows: Vec<Vec<String>> =
        rows.iter().map(|row| vec![row.time.clone(), row.action.clone(), row.details.clone()]).collect();
    table(&["Time", "Action", "Details"], &rows)
}

/// Full drawer contents as labelled lines followed by the history table.
pub fn asset_detail(detail: &AssetDetail) -> String {
    let summary = DetailSummary::from_asset(&detail.asset);
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", detail.asset.name, detail.asset.id);
    let _ = writeln!(out, "{}", summary.serial);
    let fields = [
        ("Status", &summary.status),
        ("Purchase Price", &summary.purchase_price),
        ("Current Value", &summary.current_value),
        ("Purchase Date", &summary.purchase_date),
        ("Category", &summary.category),
        ("Description", &summary.description),
        ("Location", &summary.location),
        ("Assigned To", &summary.assigned_to),
    ];
    for (label, value) in fields {
        let _ = writeln!(out, "{label:<15} {value}");
    }
    if let Some(image) = detail.asset.image_path.as_deref() {
        let _ = writeln!(out, "{:<15} {image}", "Image");
    }
    out.push('\n');
    let history: Vec<HistoryRow> = detail.history.iter().map(HistoryRow::from_entry).collect();
    out.push_str(&history_lines(&history));
    out
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    for kpi in &view.kpis {
        let _ = writeln!(out, "{:<16} {}", kpi.label, kpi.value);
    }
    if !view.categories.is_empty() {
        out.push_str("\nAssets by Category\n");
        for datum in &view.categories {
            let _ = writeln!(out, "  {:<20} {}", datum.label, datum.count);
        }
    }
    if !view.statuses.is_empty() {
        out.push_str("\nAssets by Status\n");
        for datum in &view.statuses {
            let _ = writeln!(out, "  {:<20} {}", datum.label, datum.count);
        }
    }
    out.push_str("\nRecent Activity\n");
    if view.recent.is_empty() {
        out.push_str("  (none)\n");
    }
    for row in &view.recent {
        let _ = writeln!(out, "  {}  {}  {}", row.time, row.details, row.asset_label);
    }
    out
}
