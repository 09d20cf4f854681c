//! Fetching one page of a list endpoint

use super::use_scroll_restore;
use crate::toast::use_toast;
use fiscamoto_core::{Paginated, PaginationState, ScheduledTask, Toast};
use fiscamoto_http::ClientError;
use std::future::Future;
use tracing::warn;
use yew::prelude::*;

/// Page, page size and search term requested by a list view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl ListRequest {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            search: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
    pub is_loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationState::default(),
            is_loading: true,
        }
    }
}

/// Load `request` through `fetch` whenever it or `reload` changes.
///
/// A fetch still in flight when the request changes or the component unmounts
/// is aborted. Failures other than an expired session are reported with a
/// toast titled `error_title`; expired sessions are handled by the auth
/// provider.
#[hook]
pub fn use_paginated<T, F, Fut>(
    request: ListRequest,
    reload: u32,
    error_title: &'static str,
    fetch: F,
) -> ListState<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ListRequest) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, ClientError>> + 'static,
{
    let state = use_state(ListState::<T>::default);
    let scroll = use_scroll_restore();
    let notify = use_toast();

    {
        let state = state.clone();
        use_effect_with((request, reload), move |(request, _)| {
            scroll.save();
            state.set(ListState {
                is_loading: true,
                ..(*state).clone()
            });

            let fut = fetch(request.clone());
            let (task, load) = ScheduledTask::new(async move {
                match fut.await {
                    Ok(page) => {
                        state.set(ListState {
                            items: page.data,
                            pagination: page.pagination,
                            is_loading: false,
                        });
                        scroll.restore();
                    }
                    Err(e) => {
                        warn!("List fetch failed: {e}");
                        state.set(ListState {
                            is_loading: false,
                            ..(*state).clone()
                        });
                        if !e.is_auth_expired() {
                            notify.emit(
                                Toast::error(error_title)
                                    .description(e.user_message("Intenta nuevamente más tarde.")),
                            );
                        }
                    }
                }
            });
            wasm_bindgen_futures::spawn_local(load);

            move || drop(task)
        });
    }

    (*state).clone()
}
