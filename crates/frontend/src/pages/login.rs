//! Sign-in page at the entry route

use crate::auth::use_auth;
use crate::routes::Route;
use crate::services::AuthService;
use crate::toast::use_toast;
use fiscamoto_core::Toast;
use tracing::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let notify = use_toast();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let is_pending = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let is_pending = is_pending.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_pending {
                return;
            }
            if username.trim().is_empty() || password.is_empty() {
                notify.emit(
                    Toast::error("Datos incompletos").description("Ingresa tu usuario y contraseña."),
                );
                return;
            }
            is_pending.set(true);

            let username = (*username).clone();
            let password = (*password).clone();
            let is_pending = is_pending.clone();
            let login = login.clone();
            let navigator = navigator.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthService::new().signin(&username, &password).await {
                    Ok(response) => {
                        let welcome = response
                            .message
                            .clone()
                            .unwrap_or_else(|| format!("Bienvenido, {}", response.user.username));
                        login.emit(response);
                        notify.emit(Toast::success("Inicio de sesión exitoso").description(welcome));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        warn!("Sign-in failed: {e}");
                        notify.emit(
                            Toast::error("No se pudo iniciar sesión")
                                .description(e.signin_message("Usuario o contraseña incorrectos.")),
                        );
                    }
                }
                is_pending.set(false);
            });
        })
    };

    if auth.is_authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100 px-4">
            <form onsubmit={on_submit} class="w-full max-w-sm bg-white rounded-lg shadow-lg p-8 space-y-5">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-slate-900">{"FISCAMOTO"}</h1>
                    <p class="text-sm text-gray-500 mt-1">{"Panel administrativo"}</p>
                </div>
                <div>
                    <label for="username" class="block text-sm font-medium text-gray-700 mb-1">{"Usuario"}</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        value={(*username).clone()}
                        oninput={on_username}
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{"Contraseña"}</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                </div>
                <button
                    type="submit"
                    disabled={*is_pending}
                    class="w-full py-2 rounded-md bg-blue-600 text-white text-sm font-semibold hover:bg-blue-700 disabled:opacity-50"
                >
                    if *is_pending { {"Ingresando..."} } else { {"Ingresar"} }
                </button>
            </form>
        </div>
    }
}
