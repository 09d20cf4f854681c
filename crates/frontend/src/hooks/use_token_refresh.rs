//! Periodic re-validation of the stored token

use crate::client::config;
use crate::services::AuthService;
use crate::storage::BrowserStore;
use async_trait::async_trait;
use fiscamoto_core::{run_refresh_probe, CoreError, ScheduledTask, TokenStore, TokenVerifier};
use tracing::debug;
use yew::prelude::*;

/// Verifies the token against `GET /auth/verify`
struct ClientVerifier(AuthService);

#[async_trait(?Send)]
impl TokenVerifier for ClientVerifier {
    async fn verify(&self) -> Result<(), CoreError> {
        self.0
            .verify()
            .await
            .map_err(|e| CoreError::verification(e.to_string()))
    }
}

/// Probe the backend while `active` is set and a token is stored.
///
/// A 401 from the probe reaches the session through the client's event
/// channel; any failure stops the probe for the lifetime of the component.
#[hook]
pub fn use_token_refresh(active: bool) {
    use_effect_with(active, move |active| {
        let task = (*active && BrowserStore.token().is_some()).then(|| {
            let interval = config().refresh_interval();
            let (task, probe) = ScheduledTask::new(async move {
                let verifier = ClientVerifier(AuthService::new());
                let stopped = run_refresh_probe(&verifier, interval, |d| {
                    gloo_timers::future::sleep(d)
                })
                .await;
                debug!(
                    successful_checks = stopped.successful_checks,
                    "Refresh probe stopped"
                );
            });
            wasm_bindgen_futures::spawn_local(probe);
            task
        });

        move || drop(task)
    });
}
