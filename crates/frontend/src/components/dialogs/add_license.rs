use super::{failure_toast, Modal};
use crate::services::LicenseService;
use crate::toast::use_toast;
use fiscamoto_core::models::LICENSE_CATEGORIES;
use fiscamoto_core::{EntityId, LicenseField, LicenseForm, Toast};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddLicenseDialogProps {
    pub conductor_id: EntityId,
    pub on_close: Callback<()>,
    pub on_created: Callback<()>,
}

/// Form registering a new license for one driver
#[function_component(AddLicenseDialog)]
pub fn add_license_dialog(props: &AddLicenseDialogProps) -> Html {
    let form = use_state(LicenseForm::default);
    let invalid = use_state(Vec::<LicenseField>::new);
    let error = use_state(|| Option::<String>::None);
    let is_pending = use_state(|| false);
    let notify = use_toast();

    let on_field = |field: LicenseField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(LicenseField::Category, select.value());
            form.set(next);
        })
    };

    let on_restrictions = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LicenseForm {
                restrictions: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let invalid = invalid.clone();
        let error = error.clone();
        let is_pending = is_pending.clone();
        let conductor_id = props.conductor_id.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_pending {
                return;
            }

            if let Err(e) = form.validate() {
                invalid.set(form.missing_fields());
                error.set(Some(e.to_string()));
                return;
            }
            invalid.set(Vec::new());
            error.set(None);
            is_pending.set(true);

            let form = (*form).clone();
            let conductor_id = conductor_id.clone();
            let is_pending = is_pending.clone();
            let on_created = on_created.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match LicenseService::new().create_license(conductor_id, form).await {
                    Ok(message) => {
                        let toast = Toast::success("Licencia registrada");
                        notify.emit(match message {
                            Some(message) => toast.description(message),
                            None => toast,
                        });
                        on_created.emit(());
                    }
                    Err(e) => {
                        if let Some(toast) = failure_toast("No se pudo registrar la licencia", &e) {
                            notify.emit(toast);
                        }
                    }
                }
                is_pending.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let input_class = |field: LicenseField| {
        classes!(
            "w-full", "px-3", "py-2", "border", "rounded-md", "text-sm",
            if invalid.contains(&field) { "border-red-500" } else { "border-gray-300" }
        )
    };
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    html! {
        <Modal title="Registrar licencia" on_close={props.on_close.clone()} busy={*is_pending}>
            <form onsubmit={on_submit} class="space-y-4" novalidate=true>
                <div>
                    <label class={label_class} for="license-number">{LicenseField::LicenseNumber.label()}</label>
                    <input
                        id="license-number"
                        type="text"
                        class={input_class(LicenseField::LicenseNumber)}
                        value={form.license_number.clone()}
                        oninput={on_field(LicenseField::LicenseNumber)}
                    />
                </div>
                <div>
                    <label class={label_class} for="license-category">{LicenseField::Category.label()}</label>
                    <select
                        id="license-category"
                        class={input_class(LicenseField::Category)}
                        onchange={on_category}
                    >
                        <option value="" selected={form.category.is_empty()}>{"Selecciona una categoría"}</option>
                        {LICENSE_CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={form.category == *category}>{*category}</option>
                        }).collect::<Html>()}
                    </select>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class={label_class} for="license-issue">{LicenseField::IssueDate.label()}</label>
                        <input
                            id="license-issue"
                            type="date"
                            class={input_class(LicenseField::IssueDate)}
                            value={form.issue_date.clone()}
                            oninput={on_field(LicenseField::IssueDate)}
                        />
                    </div>
                    <div>
                        <label class={label_class} for="license-expiry">{LicenseField::ExpiryDate.label()}</label>
                        <input
                            id="license-expiry"
                            type="date"
                            class={input_class(LicenseField::ExpiryDate)}
                            value={form.expiry_date.clone()}
                            oninput={on_field(LicenseField::ExpiryDate)}
                        />
                    </div>
                </div>
                <div>
                    <label class={label_class} for="license-restrictions">{"Restricciones"}</label>
                    <input
                        id="license-restrictions"
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        value={form.restrictions.clone()}
                        oninput={on_restrictions}
                    />
                </div>

                if let Some(error) = &*error {
                    <p class="text-sm text-red-600">{error}</p>
                }

                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={*is_pending}
                        class="px-4 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-100"
                    >
                        {"Cancelar"}
                    </button>
                    <button
                        type="submit"
                        disabled={*is_pending}
                        class="px-4 py-2 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        if *is_pending { {"Guardando..."} } else { {"Guardar"} }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
