//! Dashboard page: KPI cards, distribution charts, and recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the summary once on mount; until
//! that resolves the page shows a loading line. A failed fetch is logged
//! and the page renders zeros rather than an error.

use inventory::AssetApi;
use inventory::dashboard::{DashboardView, Kpi};
use inventory::model::DashboardSummary;
use inventory::request::{Request, RequestState};
use leptos::prelude::*;

use crate::components::chart::{BarChart, PieChart};
use crate::components::kpi_card::KpiCard;
use crate::net::api::HttpApi;
use crate::util::alert::log_failure;

const KPI_ICONS: [&str; 4] = ["▣", "$", "↗", "⚠"];

fn kpi_card(kpi: Kpi, icon: &'static str) -> impl IntoView {
    match kpi.subtext {
        Some(subtext) => view! {
            <KpiCard label=kpi.label value=kpi.value subtext=subtext icon=icon variant=kpi.variant/>
        }
        .into_any(),
        None => view! { <KpiCard label=kpi.label value=kpi.value icon=icon variant=kpi.variant/> }.into_any(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let summary = RwSignal::new(Request::<DashboardSummary>::new());

    Effect::new(move || {
        let api = api.clone();
        let Some(ticket) = summary.try_update(Request::start) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.dashboard_summary().await;
            if let Err(err) = &result {
                log_failure("Error loading dashboard", err);
            }
            summary.update(|request| {
                request.finish(ticket, result);
            });
        });
    });

    let is_loading = Memo::new(move |_| {
        summary.with(|request| matches!(request.state(), RequestState::Idle | RequestState::Loading))
    });
    let view_model = Memo::new(move |_| summary.with(|request| DashboardView::from_summary(request.value())));
    let categories = Signal::derive(move || view_model.with(|v| v.categories.clone()));
    let statuses = Signal::derive(move || view_model.with(|v| v.statuses.clone()));

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! { <div class="page__loading">"Loading dashboard..."</div> }
        >
            <div class="page">
                <div class="page__header">
                    <div class="page__title">
                        <h1>"Dashboard"</h1>
                        <p>"Overview of your asset management system"</p>
                    </div>
                </div>

                <div class="dashboard__kpis">
                    {move || {
                        view_model
                            .with(|v| v.kpis.clone())
                            .into_iter()
                            .zip(KPI_ICONS)
                            .map(|(kpi, icon)| kpi_card(kpi, icon))
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="dashboard__charts">
                    <div class="chart-card">
                        <div class="chart-card__header">
                            <h3>"Assets by Category"</h3>
                            <p>"Distribution across categories"</p>
                        </div>
                        <PieChart data=categories/>
                    </div>
                    <div class="chart-card">
                        <div class="chart-card__header">
                            <h3>"Assets by Status"</h3>
                            <p>"Current status breakdown"</p>
                        </div>
                        <BarChart data=statuses/>
                    </div>
                </div>

                <div class="activity">
                    <div class="activity__header">
                        <h3>"Recent Activity"</h3>
                    </div>
                    <div class="activity__list">
                        {move || {
                            view_model
                                .with(|v| v.recent.clone())
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <div class="activity__item">
                                            <div class=format!(
                                                "activity__icon activity__icon--{}",
                                                row.action_class,
                                            )>"▣"</div>
                                            <div class="activity__content">
                                                <h4>{row.details}</h4>
                                                <p>{row.asset_label}</p>
                                            </div>
                                            <span class="activity__time">{row.time}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
