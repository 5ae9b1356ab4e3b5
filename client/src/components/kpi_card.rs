//! Dashboard metric card.

use inventory::dashboard::KpiVariant;
use leptos::prelude::*;

#[component]
pub fn KpiCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] subtext: Option<&'static str>,
    icon: &'static str,
    #[prop(optional)] variant: KpiVariant,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-card__content">
                <div class="kpi-card__label">{label}</div>
                <h2 class="kpi-card__value">{value}</h2>
                {subtext.map(|text| view! { <p class="kpi-card__subtext">{text}</p> })}
            </div>
            <div class=format!("kpi-card__icon kpi-card__icon--{}", variant.class()) aria-hidden="true">
                {icon}
            </div>
        </div>
    }
}
