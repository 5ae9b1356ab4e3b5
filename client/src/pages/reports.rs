//! Reports placeholder page.

use leptos::prelude::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__title">
                    <h1>"Reports"</h1>
                    <p>"Generate and view asset reports"</p>
                </div>
            </div>
            <div class="placeholder-card">
                <h3>"Reports Coming Soon"</h3>
                <p>"Advanced reporting features will be available in the next update."</p>
            </div>
        </div>
    }
}
