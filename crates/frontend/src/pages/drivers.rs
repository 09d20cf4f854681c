//! Paginated driver list with search

use crate::client::config;
use crate::components::dialogs::DeleteDriverDialog;
use crate::components::{LoadingSpinner, Pagination};
use crate::hooks::{use_debounce, use_paginated, ListRequest};
use crate::routes::Route;
use crate::services::DriverService;
use fiscamoto_core::Driver;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DriversPage)]
pub fn drivers_page() -> Html {
    let settings = config();
    let request = use_state(|| ListRequest::new(settings.default_page_size));
    let search_input = use_state(String::new);
    let search = use_debounce((*search_input).clone(), settings.search_debounce_ms);
    let reload = use_state(|| 0_u32);
    let deleting = use_state(|| Option::<Driver>::None);

    // A new search term starts over from the first page
    {
        let request = request.clone();
        use_effect_with(search, move |search| {
            if request.search != *search {
                request.set(ListRequest {
                    page: 1,
                    search: search.clone(),
                    ..(*request).clone()
                });
            }
        });
    }

    let list = use_paginated(
        (*request).clone(),
        *reload,
        "No se pudieron cargar los conductores",
        |req: ListRequest| async move {
            DriverService::new()
                .list_drivers(req.page, req.limit, &req.search)
                .await
        },
    );

    let on_search = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_input.set(input.value());
        })
    };

    let on_page_change = {
        let request = request.clone();
        Callback::from(move |page: u32| {
            request.set(ListRequest {
                page,
                ..(*request).clone()
            });
        })
    };

    let on_limit_change = {
        let request = request.clone();
        Callback::from(move |limit: u32| {
            request.set(ListRequest {
                page: 1,
                limit,
                ..(*request).clone()
            });
        })
    };

    let on_close_dialog = {
        let deleting = deleting.clone();
        Callback::from(move |()| deleting.set(None))
    };

    let on_deleted = {
        let deleting = deleting.clone();
        let reload = reload.clone();
        Callback::from(move |()| {
            deleting.set(None);
            reload.set(reload.wrapping_add(1));
        })
    };

    let body = if list.is_loading && list.items.is_empty() {
        html! { <LoadingSpinner text={Some("Cargando conductores...".to_string())} /> }
    } else if list.items.is_empty() {
        html! {
            <p class="p-10 text-center text-sm text-gray-500">
                {empty_message(&request.search)}
            </p>
        }
    } else {
        html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Conductor"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"DNI"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Contacto"}</th>
                        <th class="relative px-6 py-3"><span class="sr-only">{"Acciones"}</span></th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {list.items.iter().map(|driver| {
                        let on_delete = {
                            let deleting = deleting.clone();
                            let driver = driver.clone();
                            Callback::from(move |_: MouseEvent| deleting.set(Some(driver.clone())))
                        };
                        let contact = driver
                            .phone
                            .clone()
                            .or_else(|| driver.email.clone())
                            .unwrap_or_else(|| "—".to_string());
                        html! {
                            <tr key={driver.id.to_string()}>
                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{driver.full_name()}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{&driver.document_number}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{contact}</td>
                                <td class="px-6 py-4 text-right text-sm space-x-3">
                                    <Link<Route>
                                        to={Route::DriverLicenses { id: driver.id.to_string() }}
                                        classes="text-blue-600 hover:underline"
                                    >
                                        {"Licencias"}
                                    </Link<Route>>
                                    <button onclick={on_delete} class="text-red-600 hover:underline">
                                        {"Eliminar"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="max-w-6xl">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Conductores"}</h1>
                <input
                    type="search"
                    placeholder="Buscar por nombre o DNI..."
                    class="w-72 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*search_input).clone()}
                    oninput={on_search}
                />
            </div>

            <div class="bg-white shadow rounded-lg overflow-hidden">
                {body}
            </div>

            <Pagination
                pagination={list.pagination.clone()}
                {on_page_change}
                {on_limit_change}
            />

            if let Some(driver) = &*deleting {
                <DeleteDriverDialog
                    driver={driver.clone()}
                    on_close={on_close_dialog}
                    {on_deleted}
                />
            }
        </div>
    }
}

/// Empty-list text for the search that produced the current page
fn empty_message(search: &str) -> String {
    let search = search.trim();
    if search.is_empty() {
        "No hay conductores registrados.".to_string()
    } else {
        format!("Ningún conductor coincide con \"{search}\".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_without_search() {
        assert_eq!(empty_message("  "), "No hay conductores registrados.");
    }

    #[test]
    fn test_empty_message_names_applied_search() {
        assert_eq!(
            empty_message(" Quispe "),
            "Ningún conductor coincide con \"Quispe\"."
        );
    }
}
