//! Profile of the signed-in user for the layout header

use crate::services::AuthService;
use crate::storage::BrowserStore;
use fiscamoto_core::{load_current_user, CurrentUser, ScheduledTask};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUserState {
    pub user: Option<CurrentUser>,
    pub is_loading: bool,
}

/// Fetch `GET /users/me` once on mount, falling back to cached fields
#[hook]
pub fn use_current_user() -> CurrentUserState {
    let state = use_state(|| CurrentUserState {
        user: None,
        is_loading: true,
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let (task, load) = ScheduledTask::new(async move {
                let service = AuthService::new();
                let user = load_current_user(&BrowserStore, || service.fetch_profile()).await;
                state.set(CurrentUserState {
                    user,
                    is_loading: false,
                });
            });
            wasm_bindgen_futures::spawn_local(load);

            move || drop(task)
        });
    }

    (*state).clone()
}
