//! Dashboard view model: KPI cards, chart series, and recent activity.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::format::{format_money, format_timestamp};
use crate::model::DashboardSummary;

/// Pie slice colors, cycled by index.
pub const CHART_PALETTE: [&str; 5] = ["#FF5C5C", "#7C5CFF", "#22B8A7", "#F59E0B", "#3B82F6"];
/// Bar fill for the status chart.
pub const STATUS_BAR_COLOR: &str = "#7C5CFF";
/// Number of activities shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Accent style of a KPI card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KpiVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Info,
}

impl KpiVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One KPI card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    pub subtext: Option<&'static str>,
    pub variant: KpiVariant,
}

/// A labelled count with its chart color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartDatum {
    pub label: String,
    pub count: i64,
    pub color: &'static str,
}

/// One row of the recent activity list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRow {
    pub id: i64,
    pub action_class: String,
    pub details: String,
    pub asset_label: String,
    pub time: String,
}

/// Everything the dashboard page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub kpis: Vec<Kpi>,
    pub categories: Vec<ChartDatum>,
    pub statuses: Vec<ChartDatum>,
    pub recent: Vec<ActivityRow>,
}

impl DashboardView {
    /// Build the view; a missing summary renders as all zeros.
    #[must_use]
    pub fn from_summary(summary: Option<&DashboardSummary>) -> Self {
        let fallback = DashboardSummary::default();
        let summary = summary.unwrap_or(&fallback);

        let kpis = vec![
            Kpi {
                label: "Total Assets",
                value: summary.total_assets.to_string(),
                subtext: Some("All registered assets"),
                variant: KpiVariant::Primary,
            },
            Kpi {
                label: "Total Value",
                value: format_money(summary.total_value),
                subtext: Some("Current asset value"),
                variant: KpiVariant::Success,
            },
            Kpi {
                label: "Active Assets",
                value: summary.active_assets.to_string(),
                subtext: Some("Currently in use"),
                variant: KpiVariant::Info,
            },
            Kpi {
                label: "Maintenance Due",
                value: summary.maintenance_due.to_string(),
                subtext: Some("Requires attention"),
                variant: KpiVariant::Warning,
            },
        ];

        let categories = summary
            .category_distribution
            .iter()
            .enumerate()
            .map(|(index, entry)| ChartDatum {
                label: entry.name.clone(),
                count: entry.count,
                color: CHART_PALETTE[index % CHART_PALETTE.len()],
            })
            .collect();

        let statuses = summary
            .status_distribution
            .iter()
            .map(|entry| ChartDatum { label: entry.status.to_string(), count: entry.count, color: STATUS_BAR_COLOR })
            .collect();

        let recent = summary
            .recent_activities
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(|activity| ActivityRow {
                id: activity.id,
                action_class: activity.action.to_lowercase(),
                details: activity.details.clone().unwrap_or_default(),
                asset_label: format!("Asset ID: {}", activity.asset_id),
                time: format_timestamp(&activity.timestamp).unwrap_or_default(),
            })
            .collect();

        Self { kpis, categories, statuses, recent }
    }
}
