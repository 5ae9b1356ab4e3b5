use super::*;
use crate::model::{AssetStatus, CategoryCount, StatusCount};
use crate::testing::history;

fn kpi_value<'a>(view: &'a DashboardView, label: &str) -> &'a str {
    &view.kpis.iter().find(|k| k.label == label).unwrap().value
}

#[test]
fn zero_total_renders_zero_not_blank() {
    let summary = DashboardSummary { total_assets: 0, ..DashboardSummary::default() };
    let view = DashboardView::from_summary(Some(&summary));
    assert_eq!(kpi_value(&view, "Total Assets"), "0");
    assert_eq!(kpi_value(&view, "Total Value"), "$0");
}

#[test]
fn missing_summary_renders_zeros() {
    let view = DashboardView::from_summary(None);
    assert_eq!(view.kpis.len(), 4);
    assert!(view.kpis.iter().filter(|k| k.label != "Total Value").all(|k| k.value == "0"));
    assert!(view.categories.is_empty());
    assert!(view.recent.is_empty());
}

#[test]
fn kpis_format_values_and_variants() {
    let summary = DashboardSummary {
        total_assets: 1200,
        total_value: 2_500_000.5,
        active_assets: 900,
        maintenance_due: 12,
        ..DashboardSummary::default()
    };
    let view = DashboardView::from_summary(Some(&summary));
    assert_eq!(kpi_value(&view, "Total Assets"), "1200");
    assert_eq!(kpi_value(&view, "Total Value"), "$2,500,000.5");
    assert_eq!(view.kpis[3].variant, KpiVariant::Warning);
    assert_eq!(view.kpis[3].variant.class(), "warning");
}

#[test]
fn category_colors_cycle_through_palette() {
    let summary = DashboardSummary {
        category_distribution: (0..7).map(|i| CategoryCount { name: format!("c{i}"), count: i }).collect(),
        ..DashboardSummary::default()
    };
    let view = DashboardView::from_summary(Some(&summary));
    assert_eq!(view.categories[0].color, "#FF5C5C");
    assert_eq!(view.categories[5].color, "#FF5C5C");
    assert_eq!(view.categories[6].color, "#7C5CFF");
}

#[test]
fn status_series_uses_status_labels() {
    let summary = DashboardSummary {
        status_distribution: vec![
            StatusCount { status: AssetStatus::Active, count: 3 },
            StatusCount { status: AssetStatus::Retired, count: 1 },
        ],
        ..DashboardSummary::default()
    };
    let view = DashboardView::from_summary(Some(&summary));
    let labels: Vec<&str> = view.statuses.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["Active", "Retired"]);
}

#[test]
fn recent_activity_is_capped_at_five() {
    let summary = DashboardSummary {
        recent_activities: (1..=10).map(|i| history(i, i * 10, "CREATE")).collect(),
        ..DashboardSummary::default()
    };
    let view = DashboardView::from_summary(Some(&summary));
    assert_eq!(view.recent.len(), 5);
    assert_eq!(view.recent[0].asset_label, "Asset ID: 10");
    assert_eq!(view.recent[0].action_class, "create");
    assert_eq!(view.recent[0].time, "Mar 05, 14:07");
}
