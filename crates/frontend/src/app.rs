use crate::auth::AuthProvider;
use crate::routes::{switch, Route};
use crate::toast::{ToastProvider, Toaster};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <Switch<Route> render={switch} />
                </AuthProvider>
                <Toaster />
            </ToastProvider>
        </BrowserRouter>
    }
}
