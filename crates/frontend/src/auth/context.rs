//! Global authentication context and provider

use crate::client::{subscribe_session_events, unsubscribe_session_events};
use crate::routes::Route;
use crate::storage::BrowserStore;
use crate::toast::use_toast;
use fiscamoto_core::{EndReason, ScheduledTask, Session, SessionEffects, SessionState, Toast};
use fiscamoto_http::types::SigninResponse;
use futures::StreamExt;
use std::rc::Rc;
use tracing::error;
use yew::prelude::*;
use yew_router::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContextData {
    pub state: SessionState,
}

/// Authentication context actions
pub enum AuthAction {
    Set(SessionState),
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Set(state) if state == self.state => self,
            AuthAction::Set(state) => Rc::new(Self { state }),
        }
    }
}

/// Authentication state and actions exposed to components
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub is_authenticated: bool,
    pub is_loading: bool,
    /// Store the credentials of a successful sign-in
    pub login: Callback<SigninResponse>,
    /// End the session at the user's request
    pub logout: Callback<()>,
    /// End the session after the backend rejected the token
    pub handle_session_expired: Callback<()>,
}

/// Notifications and navigation for session transitions
struct UiEffects {
    navigator: Option<Navigator>,
    notify: Callback<Toast>,
}

impl SessionEffects for UiEffects {
    fn notify(&self, toast: Toast) {
        self.notify.emit(toast);
    }

    fn navigate(&self, path: &str) {
        if let Some(navigator) = &self.navigator {
            navigator.push(&Route::recognize(path).unwrap_or(Route::Login));
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let data = use_reducer(AuthContextData::default);
    let navigator = use_navigator();
    let notify = use_toast();

    let effects = Rc::new(UiEffects { navigator, notify: notify.clone() });

    let end_session = {
        let data = data.clone();
        let effects = effects.clone();
        use_callback((), move |reason: EndReason, _| {
            let mut session = Session::restored(BrowserStore);
            let state = match reason {
                EndReason::Logout => session.logout(effects.as_ref()),
                EndReason::Expired => session.handle_session_expired(effects.as_ref()),
            };
            data.dispatch(AuthAction::Set(state));
        })
    };

    // Load the session from storage on mount
    {
        let data = data.clone();
        use_effect_with((), move |_| {
            let session = Session::restored(BrowserStore);
            data.dispatch(AuthAction::Set(session.state()));
        });
    }

    // Expire the session when the HTTP client reports a rejected or missing token
    {
        let data = data.clone();
        use_effect_with((), move |_| {
            let mut events = subscribe_session_events();
            let (task, listener) = ScheduledTask::new(async move {
                while let Some(event) = events.next().await {
                    let mut session = Session::new(BrowserStore);
                    if session.on_event(event, effects.as_ref()) {
                        data.dispatch(AuthAction::Set(session.state()));
                    }
                }
            });
            wasm_bindgen_futures::spawn_local(listener);

            move || {
                unsubscribe_session_events();
                drop(task);
            }
        });
    }

    let login = {
        let data = data.clone();
        let notify = notify.clone();
        use_callback((), move |response: SigninResponse, _| {
            let mut session = Session::new(BrowserStore);
            match session.login(&response.token, Some(&response.user.username)) {
                Ok(state) => data.dispatch(AuthAction::Set(state)),
                Err(e) => {
                    error!("Failed to persist session: {e}");
                    notify.emit(Toast::error("No se pudo iniciar sesión").description(e.to_string()));
                }
            }
        })
    };

    let context = AuthContext {
        is_authenticated: data.state.is_authenticated,
        is_loading: data.state.is_loading,
        login,
        logout: end_session.reform(|()| EndReason::Logout),
        handle_session_expired: end_session.reform(|()| EndReason::Expired),
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_state_keeps_handle() {
        let data = Rc::new(AuthContextData {
            state: SessionState::authenticated(),
        });
        let next = data.clone().reduce(AuthAction::Set(SessionState::authenticated()));
        assert!(Rc::ptr_eq(&data, &next));
    }

    #[test]
    fn test_logout_state_replaces_handle() {
        let data = Rc::new(AuthContextData::default());
        assert!(data.state.is_loading);

        let next = data.reduce(AuthAction::Set(SessionState::unauthenticated()));
        assert!(!next.state.is_authenticated);
        assert!(!next.state.is_loading);
    }
}
