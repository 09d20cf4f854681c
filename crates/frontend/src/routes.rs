//! Application routes

use crate::components::Layout;
use crate::pages::{
    DashboardPage, DriverLicensesPage, DriversPage, LoginPage, NotFoundPage, TucsPage,
};
use fiscamoto_core::EntityId;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/conductores")]
    Drivers,
    #[at("/conductores/:id/licencias")]
    DriverLicenses { id: String },
    #[at("/tucs")]
    Tucs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <Layout><DashboardPage /></Layout> },
        Route::Drivers => html! { <Layout><DriversPage /></Layout> },
        Route::DriverLicenses { id } => html! {
            <Layout><DriverLicensesPage driver_id={EntityId::from(id)} /></Layout>
        },
        Route::Tucs => html! { <Layout><TucsPage /></Layout> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
