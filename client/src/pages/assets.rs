//! Assets page: filterable table, detail drawer, and create/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! All page state lives in one `RwSignal<AssetsPage>`. The table shows
//! `AssetsPage::visible_rows`, so search and status filtering are pure
//! recomputation over the last loaded list. Every list load takes a ticket
//! from the page model; a late response from an older load is dropped.
//!
//! ERROR HANDLING
//! ==============
//! List loads fail silently (console only). Save and delete failures raise
//! a blocking alert and keep the form or drawer open.

use inventory::AssetApi;
use inventory::form::AssetForm as AssetFormState;
use inventory::model::Asset;
use inventory::pages::{
    AssetsPage as AssetsPageState, DELETE_ASSET_CONFIRM, DELETE_ASSET_FAILED_ALERT, SaveError, asset_save_alert,
    load_assets, save_asset,
};
use inventory::table::{ASSET_COLUMNS, status_options};
use leptos::prelude::*;

use crate::components::asset_form::AssetForm;
use crate::components::button::{Button, ButtonVariant};
use crate::components::detail_drawer::DetailDrawer;
use crate::components::entity_table_card::EntityTableCard;
use crate::net::api::HttpApi;
use crate::util::alert::{alert, confirm, log_failure};

fn spawn_assets_load(api: HttpApi, page: RwSignal<AssetsPageState>) {
    let Some(ticket) = page.try_update(AssetsPageState::start_load) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = load_assets(&api).await;
        if let Err(err) = &result {
            log_failure("Error loading assets", err);
        }
        page.update(|state| {
            state.finish_load(ticket, result);
        });
    });
}

fn spawn_save(api: HttpApi, page: RwSignal<AssetsPageState>, form: AssetFormState) {
    leptos::task::spawn_local(async move {
        match save_asset(&api, &form).await {
            Ok(_) => {
                page.update(AssetsPageState::close_form);
                spawn_assets_load(api, page);
            }
            Err(SaveError::Invalid(err)) => alert(&err.to_string()),
            Err(err) => {
                log_failure("Error saving asset", &err);
                alert(asset_save_alert(form.is_editing()));
            }
        }
    });
}

fn spawn_delete(api: HttpApi, page: RwSignal<AssetsPageState>, asset_id: i64) {
    leptos::task::spawn_local(async move {
        match api.delete_asset(asset_id).await {
            Ok(()) => {
                page.update(|state| state.forget(asset_id));
                spawn_assets_load(api, page);
            }
            Err(err) => {
                log_failure("Error deleting asset", &err);
                alert(DELETE_ASSET_FAILED_ALERT);
            }
        }
    });
}

#[component]
pub fn AssetsPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let page = RwSignal::new(AssetsPageState::new());

    let load_api = api.clone();
    Effect::new(move || spawn_assets_load(load_api.clone(), page));

    let rows = Memo::new(move |_| page.with(AssetsPageState::visible_rows));
    let search = Signal::derive(move || page.with(|state| state.filter().search.clone()));
    let status = Signal::derive(move || page.with(|state| state.filter().status.clone()));
    let selected = Memo::new(move |_| page.with(AssetsPageState::selected));
    let form_seed = Memo::new(move |_| page.with(|state| state.form().cloned()));

    let on_search_change = Callback::new(move |value: String| page.update(|state| state.set_search(value)));
    let on_status_change = Callback::new(move |value: String| page.update(|state| state.set_status_filter(value)));
    let on_row_click = Callback::new(move |id: i64| page.update(|state| state.select(id)));
    let open_create = Callback::new(move |()| page.update(AssetsPageState::open_create_form));
    let close_form = Callback::new(move |()| page.update(AssetsPageState::close_form));
    let close_detail = Callback::new(move |()| page.update(AssetsPageState::close_detail));
    let on_edit = Callback::new(move |asset: Asset| page.update(|state| state.open_edit_form(&asset)));

    let delete_api = api.clone();
    let on_delete = Callback::new(move |asset_id: i64| {
        if confirm(DELETE_ASSET_CONFIRM) {
            spawn_delete(delete_api.clone(), page, asset_id);
        }
    });

    let on_submit = Callback::new(move |form: AssetFormState| spawn_save(api.clone(), page, form));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__title">
                    <h1>"Assets"</h1>
                    <p>"Manage your organization's assets"</p>
                </div>
                <div class="page__actions">
                    <Button variant=ButtonVariant::Primary icon="+" on_click=open_create>
                        "Add Asset"
                    </Button>
                </div>
            </div>

            <EntityTableCard
                columns=&ASSET_COLUMNS
                rows=rows
                search_value=search
                on_search_change=on_search_change
                status_filter=status
                on_status_filter_change=on_status_change
                on_row_click=on_row_click
                status_options=status_options()
            />

            <Show when=move || selected.get().is_some()>
                <DetailDrawer
                    asset_id=Signal::derive(move || selected.get().unwrap_or_default())
                    on_close=close_detail
                    on_edit=on_edit
                    on_delete=on_delete
                />
            </Show>

            {move || {
                form_seed
                    .get()
                    .map(|seed| view! { <AssetForm initial=seed on_close=close_form on_submit=on_submit/> })
            }}
        </div>
    }
}
