//! Searchable, filterable table card.
//!
//! DESIGN
//! ======
//! The card never filters: it renders the rows it is given and reports
//! search and status changes upward, so the owning page decides what is
//! visible.

use inventory::table::{ALL_STATUS_LABEL, Cell, Column, EMPTY_TABLE_MESSAGE, SEARCH_PLACEHOLDER, StatusOption, TableRow};
use leptos::prelude::*;

fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
        Cell::Identity { avatar, title, subtitle } => view! {
            <div class="entity-table__identity">
                <span class="entity-table__avatar">{avatar}</span>
                <div>
                    <div class="entity-table__title">{title}</div>
                    <div class="entity-table__subtitle">{subtitle}</div>
                </div>
            </div>
        }
        .into_any(),
        Cell::Badge { text, class } => {
            view! { <span class=format!("status-badge status-badge--{class}")>{text}</span> }.into_any()
        }
        Cell::Money(text) => view! { <span class="entity-table__money">{text}</span> }.into_any(),
    }
}

#[component]
pub fn EntityTableCard(
    columns: &'static [Column],
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    #[prop(into)] search_value: Signal<String>,
    on_search_change: Callback<String>,
    #[prop(into)] status_filter: Signal<String>,
    on_status_filter_change: Callback<String>,
    #[prop(optional)] on_row_click: Option<Callback<i64>>,
    #[prop(optional)] status_options: Vec<StatusOption>,
) -> impl IntoView {
    let column_count = columns.len();

    view! {
        <div class="entity-table">
            <div class="entity-table__toolbar">
                <div class="entity-table__search">
                    <span class="entity-table__search-icon" aria-hidden="true">"⌕"</span>
                    <input
                        type="text"
                        class="entity-table__search-input"
                        placeholder=SEARCH_PLACEHOLDER
                        prop:value=move || search_value.get()
                        on:input=move |ev| on_search_change.run(event_target_value(&ev))
                    />
                </div>
                <div class="entity-table__filters">
                    <select
                        class="entity-table__filter"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| on_status_filter_change.run(event_target_value(&ev))
                    >
                        <option value="">{ALL_STATUS_LABEL}</option>
                        {status_options
                            .into_iter()
                            .map(|option| view! { <option value=option.value>{option.label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </div>

            <div class="entity-table__wrapper">
                <table class="entity-table__table">
                    <thead>
                        <tr>
                            {columns.iter().map(|column| view! { <th>{column.label}</th> }).collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !rows.with(Vec::is_empty)
                            fallback=move || {
                                view! {
                                    <tr>
                                        <td colspan=column_count class="entity-table__empty">
                                            {EMPTY_TABLE_MESSAGE}
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.id;
                                        view! {
                                            <tr
                                                class="entity-table__row"
                                                on:click=move |_| {
                                                    if let Some(on_row_click) = on_row_click {
                                                        on_row_click.run(id);
                                                    }
                                                }
                                            >
                                                {row
                                                    .cells
                                                    .into_iter()
                                                    .map(|cell| view! { <td>{render_cell(cell)}</td> })
                                                    .collect::<Vec<_>>()}
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
