//! Создание запроса на оплату из модального окна

pub mod state;

use super::file_uploader::FileUploader;
use super::status_toggle::StatusToggle;
use crate::dashboards::d001_payments::table_refresher::TableRefresher;
use crate::shared::api_utils;
use crate::shared::bindings::CreatePaymentBindings;
use crate::shared::dom::{listen, window};
use crate::shared::error::UiResult;
use crate::shared::form_data::{form_entries, to_form_data};
use crate::shared::modal::close_dialog;
use contracts::domain::a001_payment_request::create_form::{
    refresh_url_after_create, serialize_create_form, CREATE_FAILED_MESSAGE, SUBMIT_BUSY_LABEL,
    SUBMIT_IDLE_LABEL,
};
use contracts::domain::a001_payment_request::ModalStatus;
use contracts::shared::client_config::ClientConfig;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::CreatePaymentState;
use std::rc::Rc;

pub struct CreatePaymentFlow {
    bindings: CreatePaymentBindings,
    state: CreatePaymentState,
    status_toggle: StatusToggle,
    uploaders: Vec<Rc<FileUploader>>,
    refresher: Option<Rc<TableRefresher>>,
    config: Rc<ClientConfig>,
}

impl CreatePaymentFlow {
    pub fn new(
        bindings: CreatePaymentBindings,
        refresher: Option<Rc<TableRefresher>>,
        config: Rc<ClientConfig>,
    ) -> Self {
        let state = CreatePaymentState::new();
        let status_toggle = StatusToggle::new(bindings.date_fields.clone());

        // счёт не меняет статус, платёжка переводит запрос в «Оплачено»
        let uploaders: Vec<Rc<FileUploader>> = [
            (bindings.invoice.clone(), None),
            (bindings.payment.clone(), Some(ModalStatus::Paid)),
        ]
        .into_iter()
        .filter_map(|(slot, forced)| {
            slot.map(|slot| {
                Rc::new(FileUploader::new(
                    slot,
                    forced,
                    state,
                    config.upload_url.clone(),
                ))
            })
        })
        .collect();

        Self {
            bindings,
            state,
            status_toggle,
            uploaders,
            refresher,
            config,
        }
    }

    pub fn wire(self) -> UiResult<()> {
        let flow = Rc::new(self);
        flow.sync_status_control();

        if let Some(select) = &flow.bindings.status_select {
            let state = flow.state;
            let source = select.clone();
            listen(select, "change", move |_| {
                state.choose(ModalStatus::parse(&source.value()).unwrap_or_default());
            })?;
        }

        for uploader in &flow.uploaders {
            uploader.wire()?;
        }

        let form = flow.bindings.form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let flow = flow.clone();
            spawn_local(async move {
                flow.submit().await;
            });
        })?;

        log!("Форма создания запроса подключена");
        Ok(())
    }

    /// Keeps the selector and the date fields in step with the modal state
    fn sync_status_control(&self) {
        let state = self.state;
        let select = self.bindings.status_select.clone();
        let toggle = self.status_toggle.clone();
        Effect::new(move |_| {
            let status = state.status.get();
            let locked = state.locked.get();
            if let Some(select) = &select {
                select.set_value(status.as_str());
                select.set_disabled(locked);
            }
            toggle.apply_status_visibility(status.as_str());
        });
    }

    fn set_busy(&self, busy: bool) {
        if let Some(button) = &self.bindings.submit_button {
            button.set_disabled(busy);
            button.set_text_content(Some(if busy {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_IDLE_LABEL
            }));
        }
    }

    async fn send(&self) -> UiResult<()> {
        let entries = form_entries(&self.bindings.form)?;
        let body = serialize_create_form(entries, self.state.locked_status());
        api_utils::post_form(&self.config.create_payment_url, to_form_data(&body)?).await
    }

    fn reset_after_success(&self) {
        close_dialog(&self.bindings.modal);
        self.bindings.form.reset();
        for uploader in &self.uploaders {
            uploader.clear();
        }
        self.state.reset();
    }

    /// Same filters as the address bar, so the new record shows up in place
    async fn refresh_table(&self) -> UiResult<()> {
        let Some(refresher) = &self.refresher else {
            return Ok(());
        };
        let search = window()?.location().search()?;
        refresher
            .refresh(&refresh_url_after_create(&self.config.dashboard_url, &search))
            .await;
        Ok(())
    }

    pub async fn submit(&self) {
        self.set_busy(true);

        match self.send().await {
            Ok(()) => {
                self.reset_after_success();
                if let Err(e) = self.refresh_table().await {
                    error!("Ошибка при обновлении таблицы: {}", e);
                }
            }
            Err(e) => {
                error!("Ошибка: {}", e);
                if let Err(e) = show_alert(CREATE_FAILED_MESSAGE) {
                    error!("alert failed: {}", e);
                }
            }
        }

        self.set_busy(false);
    }
}

fn show_alert(message: &str) -> UiResult<()> {
    window()?.alert_with_message(message)?;
    Ok(())
}
