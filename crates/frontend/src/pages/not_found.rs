use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-100">
            <h1 class="text-4xl font-bold text-slate-900">{"404"}</h1>
            <p class="text-gray-600">{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
