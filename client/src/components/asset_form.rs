//! Create/edit asset side panel.
//!
//! DESIGN
//! ======
//! The panel edits a private copy of the seed form and holds raw input
//! strings only. Normalization (numeric parsing, required checks) happens
//! when the owning page calls `inventory::pages::save_asset` with the
//! submitted form.

use inventory::AssetApi;
use inventory::form::{AssetField, AssetForm as AssetFormState};
use inventory::model::{AssetStatus, Category};
use leptos::prelude::*;

use crate::components::button::{Button, ButtonType, ButtonVariant};
use crate::net::api::HttpApi;
use crate::util::alert::log_failure;

fn input_field(
    form: RwSignal<AssetFormState>,
    field: AssetField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let required = field == AssetField::Name;
    let step = (input_type == "number").then_some("0.01");
    view! {
        <div class="asset-form__field">
            <label>{label}</label>
            <input
                type=input_type
                name=field.key()
                step=step
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|f| f.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn AssetForm(
    initial: AssetFormState,
    on_close: Callback<()>,
    on_submit: Callback<AssetFormState>,
) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let form = RwSignal::new(initial);
    let categories = RwSignal::new(Vec::<Category>::new());

    Effect::new(move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_categories().await {
                Ok(list) => {
                    form.update(|f| f.apply_categories(&list));
                    categories.set(list);
                }
                Err(err) => log_failure("Error loading categories", &err),
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get_untracked());
    };

    view! {
        <div class="asset-form__backdrop" on:click=move |_| on_close.run(())></div>
        <div class="asset-form">
            <div class="asset-form__header">
                <h2>{move || form.with(AssetFormState::title)}</h2>
                <button class="asset-form__close" on:click=move |_| on_close.run(()) aria-label="Close">
                    "✕"
                </button>
            </div>

            <form class="asset-form__body" on:submit=submit>
                <div class="asset-form__grid">
                    {input_field(form, AssetField::Name, "Asset Name *", "text", "Enter asset name")}
                    {input_field(form, AssetField::SerialNumber, "Serial Number", "text", "Enter serial number")}

                    <div class="asset-form__field">
                        <label>"Category *"</label>
                        <select
                            name=AssetField::CategoryId.key()
                            required=true
                            prop:value=move || form.with(|f| f.category_id.clone())
                            on:change=move |ev| form.update(|f| f.set(AssetField::CategoryId, event_target_value(&ev)))
                        >
                            <option value="">"Select category"</option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|category| {
                                        view! { <option value=category.id.to_string()>{category.name}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </div>

                    <div class="asset-form__field">
                        <label>"Status *"</label>
                        <select
                            name=AssetField::Status.key()
                            required=true
                            prop:value=move || form.with(|f| f.status.clone())
                            on:change=move |ev| form.update(|f| f.set(AssetField::Status, event_target_value(&ev)))
                        >
                            {AssetStatus::SELECTABLE
                                .iter()
                                .map(|status| {
                                    let value = status.as_str().to_owned();
                                    view! { <option value=value.clone()>{value.clone()}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    {input_field(form, AssetField::PurchaseDate, "Purchase Date", "date", "")}
                    {input_field(form, AssetField::PurchasePrice, "Purchase Price", "number", "0.00")}
                    {input_field(form, AssetField::CurrentValue, "Current Value", "number", "0.00")}
                    {input_field(form, AssetField::Location, "Location", "text", "Enter location")}
                    {input_field(form, AssetField::AssignedTo, "Assigned To", "text", "Enter assignee name")}

                    <div class="asset-form__field asset-form__field--full">
                        <label>"Description"</label>
                        <textarea
                            name=AssetField::Description.key()
                            rows="4"
                            placeholder="Enter asset description"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.set(AssetField::Description, event_target_value(&ev)))
                        ></textarea>
                    </div>
                </div>

                <div class="asset-form__actions">
                    <Button variant=ButtonVariant::Outlined on_click=Callback::new(move |()| on_close.run(()))>
                        "Cancel"
                    </Button>
                    <Button variant=ButtonVariant::Primary kind=ButtonType::Submit>
                        {move || form.with(AssetFormState::submit_label)}
                    </Button>
                </div>
            </form>
        </div>
    }
}
