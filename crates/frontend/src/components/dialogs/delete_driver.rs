use super::{failure_toast, ConfirmDialog};
use crate::services::DriverService;
use crate::toast::use_toast;
use fiscamoto_core::{Driver, Toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteDriverDialogProps {
    pub driver: Driver,
    pub on_close: Callback<()>,
    pub on_deleted: Callback<()>,
}

#[function_component(DeleteDriverDialog)]
pub fn delete_driver_dialog(props: &DeleteDriverDialogProps) -> Html {
    let is_pending = use_state(|| false);
    let notify = use_toast();

    let on_confirm = {
        let is_pending = is_pending.clone();
        let id = props.driver.id.clone();
        let on_deleted = props.on_deleted.clone();
        Callback::from(move |()| {
            if *is_pending {
                return;
            }
            is_pending.set(true);

            let is_pending = is_pending.clone();
            let id = id.clone();
            let on_deleted = on_deleted.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match DriverService::new().delete_driver(&id).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Conductor eliminado"));
                        on_deleted.emit(());
                    }
                    Err(e) => {
                        if let Some(toast) = failure_toast("No se pudo eliminar el conductor", &e) {
                            notify.emit(toast);
                        }
                    }
                }
                is_pending.set(false);
            });
        })
    };

    html! {
        <ConfirmDialog
            title="Eliminar conductor"
            message={format!(
                "¿Eliminar a {} (DNI {})? También se eliminarán sus licencias.",
                props.driver.full_name(),
                props.driver.document_number
            )}
            confirm_label="Eliminar"
            is_pending={*is_pending}
            {on_confirm}
            on_cancel={props.on_close.clone()}
        />
    }
}
