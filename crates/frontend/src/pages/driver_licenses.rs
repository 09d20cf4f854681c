//! Licenses held by one driver

use crate::components::dialogs::{AddLicenseDialog, DeleteLicenseDialog};
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::services::DriverService;
use crate::toast::use_toast;
use fiscamoto_core::{EntityId, License, ScheduledTask, Toast};
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DriverLicensesPageProps {
    pub driver_id: EntityId,
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Add,
    Delete(License),
}

#[function_component(DriverLicensesPage)]
pub fn driver_licenses_page(props: &DriverLicensesPageProps) -> Html {
    let licenses = use_state(Vec::<License>::new);
    let is_loading = use_state(|| true);
    let reload = use_state(|| 0_u32);
    let dialog = use_state(|| Option::<Dialog>::None);
    let notify = use_toast();

    {
        let licenses = licenses.clone();
        let is_loading = is_loading.clone();
        use_effect_with((props.driver_id.clone(), *reload), move |(driver_id, _)| {
            is_loading.set(true);
            let driver_id = driver_id.clone();
            let (task, load) = ScheduledTask::new(async move {
                match DriverService::new().licenses(&driver_id).await {
                    Ok(list) => licenses.set(list),
                    Err(e) => {
                        warn!("Failed to load licenses of driver {driver_id}: {e}");
                        if !e.is_auth_expired() {
                            notify.emit(
                                Toast::error("No se pudieron cargar las licencias")
                                    .description(e.user_message("Intenta nuevamente más tarde.")),
                            );
                        }
                    }
                }
                is_loading.set(false);
            });
            wasm_bindgen_futures::spawn_local(load);

            move || drop(task)
        });
    }

    let on_add = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(Dialog::Add)))
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |()| dialog.set(None))
    };

    let on_changed = {
        let dialog = dialog.clone();
        let reload = reload.clone();
        Callback::from(move |()| {
            dialog.set(None);
            reload.set(reload.wrapping_add(1));
        })
    };

    let today = chrono::Local::now().date_naive();

    let body = if *is_loading && licenses.is_empty() {
        html! { <LoadingSpinner text={Some("Cargando licencias...".to_string())} /> }
    } else if licenses.is_empty() {
        html! {
            <p class="p-10 text-center text-sm text-gray-500">
                {"Este conductor no tiene licencias registradas."}
            </p>
        }
    } else {
        html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Número"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Categoría"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Emisión"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Vencimiento"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Restricciones"}</th>
                        <th class="relative px-6 py-3"><span class="sr-only">{"Acciones"}</span></th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {licenses.iter().map(|license| {
                        let on_delete = {
                            let dialog = dialog.clone();
                            let license = license.clone();
                            Callback::from(move |_: MouseEvent| dialog.set(Some(Dialog::Delete(license.clone()))))
                        };
                        let expired = license.is_expired(today);
                        html! {
                            <tr key={license.id.to_string()}>
                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{&license.license_number}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{&license.category}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{license.issue_date.format("%d/%m/%Y").to_string()}</td>
                                <td class={classes!("px-6", "py-4", "text-sm", if expired { "text-red-600 font-semibold" } else { "text-gray-600" })}>
                                    {license.expiry_date.format("%d/%m/%Y").to_string()}
                                    if expired { {" (vencida)"} }
                                </td>
                                <td class="px-6 py-4 text-sm text-gray-600">
                                    {license.restrictions.clone().unwrap_or_else(|| "—".to_string())}
                                </td>
                                <td class="px-6 py-4 text-right text-sm">
                                    <button onclick={on_delete} class="text-red-600 hover:underline">{"Eliminar"}</button>
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()}
                </tbody>
            </table>
        }
    };

    let dialog_view = match &*dialog {
        Some(Dialog::Add) => html! {
            <AddLicenseDialog
                conductor_id={props.driver_id.clone()}
                on_close={on_close.clone()}
                on_created={on_changed.clone()}
            />
        },
        Some(Dialog::Delete(license)) => html! {
            <DeleteLicenseDialog
                license={license.clone()}
                on_close={on_close.clone()}
                on_deleted={on_changed.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <div class="max-w-6xl">
            <Link<Route> to={Route::Drivers} classes="text-sm text-blue-600 hover:underline">
                {"← Volver a conductores"}
            </Link<Route>>
            <div class="flex items-center justify-between mt-2 mb-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Licencias del conductor"}</h1>
                <button
                    onclick={on_add}
                    class="px-4 py-2 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700"
                >
                    {"Registrar licencia"}
                </button>
            </div>

            <div class="bg-white shadow rounded-lg overflow-hidden">
                {body}
            </div>

            {dialog_view}
        </div>
    }
}
