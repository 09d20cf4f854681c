//! Modal dialogs for creating and deleting records

pub mod add_license;
pub mod delete_driver;
pub mod delete_license;

pub use add_license::AddLicenseDialog;
pub use delete_driver::DeleteDriverDialog;
pub use delete_license::DeleteLicenseDialog;

use fiscamoto_core::Toast;
use fiscamoto_http::ClientError;
use yew::prelude::*;

/// Toast for a failed dialog submission, or `None` when the session expired
/// and the auth provider already reports it
pub(crate) fn failure_toast(title: &str, error: &ClientError) -> Option<Toast> {
    (!error.is_auth_expired())
        .then(|| Toast::error(title).description(error.user_message("Intenta nuevamente más tarde.")))
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Closing is blocked while a submission is in flight
    #[prop_or_default]
    pub busy: bool,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        let busy = props.busy;
        Callback::from(move |_: MouseEvent| {
            if !busy {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-40">
            <div class="bg-white rounded-lg p-6 max-w-lg w-full mx-4 shadow-xl" role="dialog" aria-modal="true">
                <div class="flex items-start justify-between mb-4">
                    <h2 class="text-lg font-semibold text-gray-900">{props.title.to_string()}</h2>
                    <button
                        onclick={on_close}
                        disabled={props.busy}
                        class="text-gray-400 hover:text-gray-600"
                        aria-label="Cerrar"
                    >
                        {"✕"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_label: AttrValue,
    pub is_pending: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Destructive confirmation with cancel and confirm buttons
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal title={props.title.clone()} on_close={props.on_cancel.clone()} busy={props.is_pending}>
            <p class="text-sm text-gray-600 mb-6">{props.message.to_string()}</p>
            <div class="flex justify-end gap-2">
                <button
                    onclick={on_cancel}
                    disabled={props.is_pending}
                    class="px-4 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-100"
                >
                    {"Cancelar"}
                </button>
                <button
                    onclick={on_confirm}
                    disabled={props.is_pending}
                    class="px-4 py-2 text-sm rounded-md bg-red-600 text-white hover:bg-red-700 disabled:opacity-50"
                >
                    if props.is_pending { {"Eliminando..."} } else { {props.confirm_label.to_string()} }
                </button>
            </div>
        </Modal>
    }
}
