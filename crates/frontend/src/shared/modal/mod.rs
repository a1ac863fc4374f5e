//! Нативные `<dialog>` серверной разметки

use super::bindings::ToolbarBindings;
use super::dom::listen;
use super::error::UiResult;
use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlDialogElement, HtmlElement};

pub fn open_dialog(dialog: &HtmlDialogElement) {
    if dialog.open() {
        return;
    }
    if let Err(e) = dialog.show_modal() {
        error!("Не удалось открыть диалог {}: {:?}", dialog.id(), e);
    }
}

pub fn close_dialog(dialog: &HtmlDialogElement) {
    if dialog.open() {
        dialog.close();
    }
}

/// Click on the backdrop lands on the dialog element itself
fn is_backdrop_click(event: &Event, dialog: &HtmlDialogElement) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlDialogElement>().ok())
        .is_some_and(|target| &target == dialog)
}

fn bind_dialog(button: &HtmlElement, dialog: HtmlDialogElement) -> UiResult<()> {
    let opener = dialog.clone();
    listen(button, "click", move |_| open_dialog(&opener))?;

    let backdrop = dialog.clone();
    listen(&dialog, "click", move |event| {
        if is_backdrop_click(&event, &backdrop) {
            close_dialog(&backdrop);
        }
    })
}

/// Кнопки «Аналитика» и «Создать запрос»
pub fn wire_toolbar(toolbar: &ToolbarBindings) -> UiResult<()> {
    if let (Some(button), Some(dialog)) = (&toolbar.analytics_button, &toolbar.analytics_modal) {
        bind_dialog(button, dialog.clone())?;
    }
    if let (Some(button), Some(dialog)) = (&toolbar.create_button, &toolbar.create_modal) {
        bind_dialog(button, dialog.clone())?;
    }
    log!("Диалоги панели инструментов подключены");
    Ok(())
}
