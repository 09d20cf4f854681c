//! Paginated list of issued TUCs

use crate::client::config;
use crate::components::{LoadingSpinner, Pagination};
use crate::hooks::{use_paginated, ListRequest};
use crate::services::TucService;
use yew::prelude::*;

#[function_component(TucsPage)]
pub fn tucs_page() -> Html {
    let request = use_state(|| ListRequest::new(config().default_page_size));

    let list = use_paginated(
        (*request).clone(),
        0,
        "No se pudieron cargar las TUC",
        |req: ListRequest| async move {
            TucService::new()
                .list_tucs(req.page, req.limit, &req.search)
                .await
        },
    );

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

    let dash = || "—".to_string();

    let body = if list.is_loading && list.items.is_empty() {
        html! { <LoadingSpinner text={Some("Cargando TUC...".to_string())} /> }
    } else if list.items.is_empty() {
        html! { <p class="p-10 text-center text-sm text-gray-500">{"No hay TUC registradas."}</p> }
    } else {
        html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"N° TUC"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Placa"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Emisión"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Vencimiento"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Estado"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {list.items.iter().map(|tuc| html! {
                        <tr key={tuc.id.to_string()}>
                            <td class="px-6 py-4 text-sm font-medium text-gray-900">{&tuc.tuc_number}</td>
                            <td class="px-6 py-4 text-sm text-gray-600">{&tuc.plate}</td>
                            <td class="px-6 py-4 text-sm text-gray-600">
                                {tuc.issue_date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_else(dash)}
                            </td>
                            <td class="px-6 py-4 text-sm text-gray-600">
                                {tuc.expiry_date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_else(dash)}
                            </td>
                            <td class="px-6 py-4 text-sm text-gray-600">{tuc.status.clone().unwrap_or_else(dash)}</td>
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="max-w-6xl">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Tarjetas únicas de circulación"}</h1>
            <div class="bg-white shadow rounded-lg overflow-hidden">
                {body}
            </div>
            <Pagination pagination={list.pagination.clone()} {on_page_change} {on_limit_change} />
        </div>
    }
}
