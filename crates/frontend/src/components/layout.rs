//! Shell around the authenticated pages

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::hooks::{use_current_user, use_token_refresh};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Sidebar, header and content area. Unauthenticated visitors are sent to
/// the login route.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();
    use_token_refresh(auth.is_authenticated);

    if auth.is_loading {
        return html! { <LoadingSpinner text={Some("Cargando sesión...".to_string())} /> };
    }

    if !auth.is_authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <Header />
                <main class="flex-1 p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

const NAV_ITEMS: [(Route, &str); 3] = [
    (Route::Dashboard, "Inicio"),
    (Route::Drivers, "Conductores"),
    (Route::Tucs, "TUC"),
];

#[function_component(Sidebar)]
fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <aside class="w-60 shrink-0 bg-slate-900 text-slate-100 flex flex-col">
            <div class="px-6 py-5 text-lg font-bold tracking-wide">{"FISCAMOTO"}</div>
            <nav class="flex-1 px-3 space-y-1">
                {NAV_ITEMS.iter().map(|(route, label)| {
                    let active = match (route, &current) {
                        (Route::Drivers, Some(Route::DriverLicenses { .. })) => true,
                        (route, Some(current)) => route == current,
                        (_, None) => false,
                    };
                    html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!(
                                "block", "px-3", "py-2", "rounded-md", "text-sm",
                                if active { "bg-slate-700 font-semibold" } else { "hover:bg-slate-800" }
                            )}
                        >
                            {*label}
                        </Link<Route>>
                    }
                }).collect::<Html>()}
            </nav>
        </aside>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let auth = use_auth();
    let current_user = use_current_user();

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let user = if current_user.is_loading {
        Some(html! { <span class="w-32 h-4 rounded bg-gray-200 animate-pulse"></span> })
    } else {
        current_user.user.as_ref().map(|user| html! {
            <div class="flex items-center gap-2">
                <span class="w-8 h-8 rounded-full bg-blue-600 text-white flex items-center justify-center text-sm font-semibold">
                    {user.initial()}
                </span>
                <span class="text-sm text-gray-700">{user.display_name()}</span>
            </div>
        })
    };

    html! {
        <header class="h-16 bg-white border-b border-gray-200 flex items-center justify-end gap-4 px-6">
            {user}
            <button
                onclick={on_logout}
                class="px-3 py-1.5 text-sm rounded-md border border-gray-300 hover:bg-gray-100"
            >
                {"Cerrar sesión"}
            </button>
        </header>
    }
}
