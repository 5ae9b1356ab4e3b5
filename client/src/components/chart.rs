//! Inline SVG pie and bar charts for the dashboard.

use inventory::dashboard::ChartDatum;
use leptos::prelude::*;

use crate::util::chart_math::{bar_layout, pie_slices};

const PIE_RADIUS: f64 = 90.0;
const BAR_PLOT_WIDTH: f64 = 360.0;
const BAR_PLOT_HEIGHT: f64 = 200.0;
const BAR_LABEL_BAND: f64 = 24.0;

/// Pie chart with a legend.
#[component]
pub fn PieChart(#[prop(into)] data: Signal<Vec<ChartDatum>>) -> impl IntoView {
    let size = PIE_RADIUS * 2.0;

    view! {
        <div class="chart chart--pie">
            <svg class="chart__svg" viewBox=format!("0 0 {size} {size}") role="img">
                {move || {
                    pie_slices(&data.get(), PIE_RADIUS)
                        .into_iter()
                        .map(|slice| {
                            view! {
                                <path d=slice.path fill=slice.color>
                                    <title>{format!("{}: {} ({:.0}%)", slice.label, slice.count, slice.percent)}</title>
                                </path>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </svg>
            <ul class="chart__legend">
                {move || {
                    data.get()
                        .into_iter()
                        .map(|datum| {
                            view! {
                                <li class="chart__legend-item">
                                    <span class="chart__swatch" style=format!("background:{}", datum.color)></span>
                                    <span>{datum.label}</span>
                                    <span class="chart__legend-count">{datum.count}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

/// Vertical bar chart with labels under each bar.
#[component]
pub fn BarChart(#[prop(into)] data: Signal<Vec<ChartDatum>>) -> impl IntoView {
    let total_height = BAR_PLOT_HEIGHT + BAR_LABEL_BAND;

    view! {
        <div class="chart chart--bar">
            <svg class="chart__svg" viewBox=format!("0 0 {BAR_PLOT_WIDTH} {total_height}") role="img">
                {move || {
                    bar_layout(&data.get(), BAR_PLOT_WIDTH, BAR_PLOT_HEIGHT)
                        .into_iter()
                        .map(|bar| {
                            let label_x = bar.x + bar.width / 2.0;
                            let tip = format!("{}: {}", bar.label, bar.count);
                            view! {
                                <g>
                                    <rect
                                        x=format!("{:.2}", bar.x)
                                        y=format!("{:.2}", bar.y)
                                        width=format!("{:.2}", bar.width)
                                        height=format!("{:.2}", bar.height)
                                        fill=bar.color
                                        rx="4"
                                    >
                                        <title>{tip}</title>
                                    </rect>
                                    <text
                                        x=format!("{label_x:.2}")
                                        y=format!("{:.2}", total_height - 6.0)
                                        text-anchor="middle"
                                        class="chart__label"
                                    >
                                        {bar.label}
                                    </text>
                                </g>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </svg>
        </div>
    }
}
