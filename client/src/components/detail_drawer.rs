//! Side drawer showing one asset, its history, and its image.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drawer owns its data: it loads the asset and its history together
//! whenever `asset_id` changes, and re-loads after a successful image
//! upload. Nothing renders until the first load succeeds; a failed load is
//! only logged.
//!
//! ERROR HANDLING
//! ==============
//! Upload failures surface as a blocking alert and leave the shown detail
//! untouched. Late responses for a previous asset are dropped by the
//! ticket check in `DetailView::finish_load`.

use inventory::detail::{AssetDetail, DetailSummary, DetailView, HistoryRow, load_detail};
use inventory::model::Asset;
use inventory::request::Ticket;
use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::net::api::HttpApi;
use crate::util::alert::log_failure;

fn spawn_detail_load(api: HttpApi, drawer: RwSignal<DetailView>, asset_id: i64, ticket: Ticket) {
    leptos::task::spawn_local(async move {
        let result = load_detail(&api, asset_id).await;
        if let Err(err) = &result {
            log_failure("Error loading asset details", err);
        }
        drawer.update(|view| {
            view.finish_load(ticket, result);
        });
    });
}

#[cfg(feature = "hydrate")]
fn spawn_upload(api: HttpApi, drawer: RwSignal<DetailView>, input: web_sys::HtmlInputElement) {
    use inventory::detail::{NOT_AN_IMAGE_ALERT, upload_image};

    use crate::net::api::read_picked_file;
    use crate::util::alert::alert;

    leptos::task::spawn_local(async move {
        let Some(file) = read_picked_file(&input).await else {
            return;
        };
        input.set_value("");
        if !file.is_image() {
            alert(NOT_AN_IMAGE_ALERT);
            return;
        }
        let Some(asset) = drawer.with_untracked(|view| view.detail().map(|d| d.asset.clone())) else {
            return;
        };

        drawer.update(|view| view.set_uploading(true));
        let outcome = upload_image(&api, &asset, &file).await;
        drawer.update(|view| view.set_uploading(false));

        match outcome {
            Ok(_) => {
                if let Some((ticket, current_id)) = drawer.try_update(DetailView::refresh) {
                    spawn_detail_load(api, drawer, current_id, ticket);
                }
            }
            Err(err) => {
                log_failure("Error uploading image", &err);
                alert(err.alert_message());
            }
        }
    });
}

#[component]
pub fn DetailDrawer(
    #[prop(into)] asset_id: Signal<i64>,
    on_close: Callback<()>,
    #[prop(optional)] on_edit: Option<Callback<Asset>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let drawer = RwSignal::new(DetailView::new(asset_id.get_untracked()));
    let file_input = NodeRef::<leptos::html::Input>::new();

    let load_api = api.clone();
    Effect::new(move || {
        let id = asset_id.get();
        if let Some(ticket) = drawer.try_update(|view| view.open(id)) {
            spawn_detail_load(load_api.clone(), drawer, id, ticket);
        }
    });

    let upload_api = api.clone();
    let on_file_change = move |_: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get_untracked() {
                spawn_upload(upload_api.clone(), drawer, input);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &upload_api;
        }
    };

    let pick_file = Callback::new(move |()| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    });

    let render = move |detail: AssetDetail| {
        let asset = detail.asset;
        let summary = DetailSummary::from_asset(&asset);
        let image_src = asset.image_path.as_deref().map(|path| api.image_src(path));
        let history: Vec<HistoryRow> = detail.history.iter().map(HistoryRow::from_entry).collect();
        let asset_id = asset.id;
        let name = asset.name.clone();
        let edit_target = asset.clone();

        let on_edit_click = Callback::new(move |()| {
            if let Some(on_edit) = on_edit {
                on_edit.run(edit_target.clone());
            }
        });
        let on_delete_click = Callback::new(move |()| {
            if let Some(on_delete) = on_delete {
                on_delete.run(asset_id);
            }
        });

        view! {
            <div class="drawer__backdrop" on:click=move |_| on_close.run(())></div>
            <div class="drawer">
                <div class="drawer__header">
                    <div class="drawer__header-left">
                        <div class="drawer__avatar">
                            {match image_src.clone() {
                                Some(src) => view! { <img src=src alt=name.clone()/> }.into_any(),
                                None => view! { <span aria-hidden="true">"▣"</span> }.into_any(),
                            }}
                        </div>
                        <div class="drawer__header-info">
                            <h2>{name.clone()}</h2>
                            <p>{summary.serial.clone()}</p>
                            <span class=format!("status-badge status-badge--{}", summary.status_class)>
                                {summary.status.clone()}
                            </span>
                        </div>
                    </div>
                    <button class="drawer__close" on:click=move |_| on_close.run(()) aria-label="Close">
                        "✕"
                    </button>
                </div>

                <div class="drawer__body">
                    <div class="drawer__section">
                        <h3 class="drawer__section-title">"Asset Image"</h3>
                        <div class="drawer__image">
                            {match image_src {
                                Some(src) => {
                                    view! {
                                        <div class="drawer__image-preview">
                                            <img src=src alt=name.clone()/>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <div class="drawer__image-placeholder">
                                            <p>"No image uploaded"</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }}
                            <input
                                node_ref=file_input
                                type="file"
                                accept="image/*"
                                style="display: none"
                                on:change=on_file_change.clone()
                            />
                            <Button
                                variant=ButtonVariant::Outlined
                                size=ButtonSize::Small
                                disabled=Signal::derive(move || drawer.with(DetailView::is_uploading))
                                on_click=pick_file
                            >
                                {move || drawer.with(DetailView::upload_label)}
                            </Button>
                        </div>
                    </div>

                    <div class="drawer__summary">
                        <div class="drawer__summary-item">
                            <h4>"Purchase Price"</h4>
                            <p>{summary.purchase_price}</p>
                        </div>
                        <div class="drawer__summary-item">
                            <h4>"Current Value"</h4>
                            <p>{summary.current_value}</p>
                        </div>
                        <div class="drawer__summary-item">
                            <h4>"Purchase Date"</h4>
                            <p>{summary.purchase_date}</p>
                        </div>
                        <div class="drawer__summary-item">
                            <h4>"Category"</h4>
                            <p>{summary.category}</p>
                        </div>
                    </div>

                    <div class="drawer__actions">
                        <Button variant=ButtonVariant::Outlined icon="✎" on_click=on_edit_click>
                            "Edit Asset"
                        </Button>
                        <Button variant=ButtonVariant::Outlined icon="🗑" on_click=on_delete_click>
                            "Delete"
                        </Button>
                        <Button variant=ButtonVariant::Primary>"Update Status"</Button>
                    </div>

                    <div class="drawer__section">
                        <h3 class="drawer__section-title">"Asset Information"</h3>
                        <div class="drawer__info">
                            <div class="drawer__info-item">
                                <h4>"Description"</h4>
                                <p>{summary.description}</p>
                            </div>
                            <div class="drawer__info-item">
                                <h4>"Location"</h4>
                                <p>{summary.location}</p>
                            </div>
                            <div class="drawer__info-item">
                                <h4>"Assigned To"</h4>
                                <p>{summary.assigned_to}</p>
                            </div>
                        </div>
                    </div>

                    <div class="drawer__section">
                        <h3 class="drawer__section-title">"Activity History"</h3>
                        <div class="drawer__history">
                            {history
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <div class="drawer__history-item">
                                            <div class=format!(
                                                "drawer__history-icon drawer__history-icon--{}",
                                                row.action_class,
                                            )></div>
                                            <div class="drawer__history-content">
                                                <h4>{row.action}</h4>
                                                <p>{row.details}</p>
                                            </div>
                                            <span class="drawer__history-time">{row.time}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    let detail = Memo::new(move |_| drawer.with(|view| view.detail().cloned()));
    view! { {move || detail.get().map(render.clone())} }
}
