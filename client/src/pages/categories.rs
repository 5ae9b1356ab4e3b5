//! Categories page: table with an inline create/edit form.

use inventory::AssetApi;
use inventory::form::CategoryForm;
use inventory::pages::{
    CategoriesPage as CategoriesPageState, DELETE_CATEGORY_CONFIRM, DELETE_CATEGORY_FAILED_ALERT,
    SAVE_CATEGORY_FAILED_ALERT, SaveError, save_category,
};
use leptos::prelude::*;

use crate::components::button::{Button, ButtonType, ButtonVariant};
use crate::net::api::HttpApi;
use crate::util::alert::{alert, confirm, log_failure};

fn spawn_categories_load(api: HttpApi, page: RwSignal<CategoriesPageState>) {
    let Some(ticket) = page.try_update(CategoriesPageState::start_load) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api.list_categories().await;
        if let Err(err) = &result {
            log_failure("Error loading categories", err);
        }
        page.update(|state| {
            state.finish_load(ticket, result);
        });
    });
}

fn spawn_save(api: HttpApi, page: RwSignal<CategoriesPageState>, form: CategoryForm) {
    leptos::task::spawn_local(async move {
        match save_category(&api, &form).await {
            Ok(_) => {
                page.update(CategoriesPageState::close_form);
                spawn_categories_load(api, page);
            }
            Err(SaveError::Invalid(err)) => alert(&err.to_string()),
            Err(err) => {
                log_failure("Error saving category", &err);
                alert(SAVE_CATEGORY_FAILED_ALERT);
            }
        }
    });
}

fn spawn_delete(api: HttpApi, page: RwSignal<CategoriesPageState>, id: i64) {
    leptos::task::spawn_local(async move {
        match api.delete_category(id).await {
            Ok(()) => spawn_categories_load(api, page),
            Err(err) => {
                log_failure("Error deleting category", &err);
                alert(DELETE_CATEGORY_FAILED_ALERT);
            }
        }
    });
}

fn edit_form(page: RwSignal<CategoriesPageState>, update: impl FnOnce(&mut CategoryForm)) {
    page.update(|state| {
        if let Some(form) = state.form_mut() {
            update(form);
        }
    });
}

#[component]
fn CategoryFormCard(page: RwSignal<CategoriesPageState>, on_save: Callback<CategoryForm>) -> impl IntoView {
    let heading = move || page.with(|state| state.form().map_or("", CategoryForm::heading));
    let submit_label = move || page.with(|state| state.form().map_or("", CategoryForm::submit_label));
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = page.with_untracked(|state| state.form().cloned()) {
            on_save.run(form);
        }
    };

    view! {
        <div class="category-form">
            <h3 class="category-form__heading">{heading}</h3>
            <form on:submit=submit>
                <div class="category-form__field">
                    <label>"Name"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || page.with(|state| state.form().map(|f| f.name.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(page, |form| form.name = value);
                        }
                    />
                </div>
                <div class="category-form__field">
                    <label>"Description"</label>
                    <textarea
                        rows="3"
                        prop:value=move || {
                            page.with(|state| state.form().map(|f| f.description.clone()).unwrap_or_default())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(page, |form| form.description = value);
                        }
                    ></textarea>
                </div>
                <div class="category-form__actions">
                    <Button variant=ButtonVariant::Primary kind=ButtonType::Submit>
                        {submit_label}
                    </Button>
                    <Button
                        variant=ButtonVariant::Outlined
                        on_click=Callback::new(move |()| page.update(CategoriesPageState::close_form))
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let page = RwSignal::new(CategoriesPageState::new());

    let load_api = api.clone();
    Effect::new(move || spawn_categories_load(load_api.clone(), page));

    let rows = Memo::new(move |_| page.with(CategoriesPageState::rows));
    let form_open = Memo::new(move |_| page.with(|state| state.form().is_some()));

    let save_api = api.clone();
    let on_save = Callback::new(move |form: CategoryForm| spawn_save(save_api.clone(), page, form));
    let on_delete = Callback::new(move |id: i64| {
        if confirm(DELETE_CATEGORY_CONFIRM) {
            spawn_delete(api.clone(), page, id);
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__title">
                    <h1>"Categories"</h1>
                    <p>"Organize your assets by category"</p>
                </div>
                <div class="page__actions">
                    <Button
                        variant=ButtonVariant::Primary
                        icon="+"
                        on_click=Callback::new(move |()| page.update(CategoriesPageState::open_create))
                    >
                        "Add Category"
                    </Button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <CategoryFormCard page=page on_save=on_save/>
            </Show>

            <div class="entity-table">
                <div class="entity-table__wrapper">
                    <table class="entity-table__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Created"</th>
                                <th class="entity-table__actions-col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.id;
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="entity-table__title">{row.name}</div>
                                                </td>
                                                <td>{row.description}</td>
                                                <td>{row.created}</td>
                                                <td>
                                                    <div class="entity-table__row-actions">
                                                        <button
                                                            class="icon-button icon-button--primary"
                                                            aria-label="Edit"
                                                            on:click=move |_| page.update(|state| state.open_edit(id))
                                                        >
                                                            "✎"
                                                        </button>
                                                        <button
                                                            class="icon-button icon-button--danger"
                                                            aria-label="Delete"
                                                            on:click=move |_| on_delete.run(id)
                                                        >
                                                            "🗑"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
