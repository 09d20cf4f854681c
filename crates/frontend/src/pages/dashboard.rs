//! Landing page after sign-in

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let card = |route: Route, title: &'static str, description: &'static str| {
        html! {
            <Link<Route> to={route} classes="block bg-white rounded-lg shadow p-6 hover:shadow-md transition-shadow">
                <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                <p class="mt-1 text-sm text-gray-600">{description}</p>
            </Link<Route>>
        }
    };

    html! {
        <div class="max-w-5xl">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Panel de fiscalización"}</h1>
            <div class="grid gap-4 sm:grid-cols-2">
                {card(Route::Drivers, "Conductores", "Registro de conductores y sus licencias de conducir.")}
                {card(Route::Tucs, "TUC", "Tarjetas únicas de circulación emitidas.")}
            </div>
        </div>
    }
}
