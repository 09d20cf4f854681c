//! Toast notifications

use fiscamoto_core::{Toast, ToastVariant};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
struct ToastEntry {
    id: u32,
    toast: Toast,
}

/// Toasts currently on screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    entries: Vec<ToastEntry>,
    next_id: u32,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                state.entries.push(ToastEntry {
                    id: state.next_id,
                    toast,
                });
                state.next_id = state.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => state.entries.retain(|entry| entry.id != id),
        }
        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Hook to push notifications
#[hook]
pub fn use_toast() -> Callback<Toast> {
    let toasts = use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider");
    Callback::from(move |toast: Toast| toasts.dispatch(ToastAction::Push(toast)))
}

/// Renders the toast stack in the corner of the screen
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let Some(toasts) = use_context::<ToastContext>() else {
        return html! {};
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            {toasts.entries.iter().map(|entry| html! {
                <ToastItem
                    key={entry.id}
                    id={entry.id}
                    toast={entry.toast.clone()}
                    on_dismiss={on_dismiss.clone()}
                />
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let class = match props.toast.variant {
        ToastVariant::Default => "bg-white border-gray-200 text-gray-900",
        ToastVariant::Success => "bg-green-50 border-green-200 text-green-900",
        ToastVariant::Destructive => "bg-red-50 border-red-200 text-red-900",
    };

    let on_close = {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("border", "rounded-lg", "shadow-lg", "p-4", "flex", "items-start", "gap-3", class)}>
            <div class="flex-1">
                <p class="text-sm font-semibold">{&props.toast.title}</p>
                if let Some(description) = &props.toast.description {
                    <p class="text-sm mt-1 opacity-80">{description}</p>
                }
            </div>
            <button onclick={on_close} class="text-sm opacity-60 hover:opacity-100">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Push(Toast::new("uno")))
            .reduce(ToastAction::Push(Toast::success("dos")));

        let ids: Vec<u32> = state.entries.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Push(Toast::new("uno")))
            .reduce(ToastAction::Push(Toast::error("dos")))
            .reduce(ToastAction::Dismiss(0));

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].toast.title, "dos");
    }
}
