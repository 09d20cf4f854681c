use super::{failure_toast, ConfirmDialog};
use crate::services::LicenseService;
use crate::toast::use_toast;
use fiscamoto_core::{License, Toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteLicenseDialogProps {
    pub license: License,
    pub on_close: Callback<()>,
    pub on_deleted: Callback<()>,
}

#[function_component(DeleteLicenseDialog)]
pub fn delete_license_dialog(props: &DeleteLicenseDialogProps) -> Html {
    let is_pending = use_state(|| false);
    let notify = use_toast();

    let on_confirm = {
        let is_pending = is_pending.clone();
        let id = props.license.id.clone();
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
                match LicenseService::new().delete_license(&id).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Licencia eliminada"));
                        on_deleted.emit(());
                    }
                    Err(e) => {
                        if let Some(toast) = failure_toast("No se pudo eliminar la licencia", &e) {
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
            title="Eliminar licencia"
            message={format!("¿Eliminar la licencia {}?", props.license.license_number)}
            confirm_label="Eliminar"
            is_pending={*is_pending}
            {on_confirm}
            on_cancel={props.on_close.clone()}
        />
    }
}
