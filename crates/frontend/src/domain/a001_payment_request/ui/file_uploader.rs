//! Асинхронная загрузка файлов счёта и платёжки

use super::create_form::state::CreatePaymentState;
use crate::shared::api_utils;
use crate::shared::bindings::UploadSlotBindings;
use crate::shared::dom::listen;
use crate::shared::error::UiResult;
use contracts::domain::a001_payment_request::{
    ModalStatus, UploadCompletion, UploadFileResponse, UploadOutcome, UploadStatusLine,
};
use leptos::logging::error;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::File;

pub struct FileUploader {
    slot: UploadSlotBindings,
    forced_status: Option<ModalStatus>,
    state: CreatePaymentState,
    upload_url: String,
}

impl FileUploader {
    pub fn new(
        slot: UploadSlotBindings,
        forced_status: Option<ModalStatus>,
        state: CreatePaymentState,
        upload_url: impl Into<String>,
    ) -> Self {
        Self {
            slot,
            forced_status,
            state,
            upload_url: upload_url.into(),
        }
    }

    /// Upload starts as soon as a file is picked
    pub fn wire(self: &Rc<Self>) -> UiResult<()> {
        let uploader = self.clone();
        let input = self.slot.file_input.clone();
        listen(&input, "change", move |_| {
            let Some(file) = uploader.slot.file_input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let uploader = uploader.clone();
            spawn_local(async move {
                uploader.upload_file(Some(file)).await;
            });
        })
    }

    fn show(&self, line: UploadStatusLine) {
        self.slot.status_label.set_text_content(Some(&line.text));
        self.slot.status_label.set_class_name(line.class);
    }

    /// Clears the status line and the stored file id
    pub fn clear(&self) {
        self.slot.file_id_input.set_value("");
        self.show(UploadStatusLine::idle());
    }

    pub async fn upload_file(&self, file: Option<File>) {
        let Some(file) = file else {
            error!("upload_file: missing file for #{}", self.slot.file_input.id());
            return;
        };

        self.show(UploadStatusLine::uploading());
        log::debug!("Uploading file: {} size: {}", file.name(), file.size());

        let outcome = match api_utils::upload_file::<UploadFileResponse>(&self.upload_url, &file).await {
            Ok(response) => {
                log::debug!("Upload result: {:?}", response);
                Some(UploadOutcome::from(response))
            }
            Err(e) => {
                error!("Error uploading file: {}", e);
                None
            }
        };
        if let Some(UploadOutcome::Rejected { error }) = &outcome {
            error!("Upload failed: {:?}", error);
        }

        self.complete(UploadCompletion::resolve(outcome.as_ref(), self.forced_status));
    }

    fn complete(&self, done: UploadCompletion) {
        if let Some(file_id) = &done.file_id {
            self.slot.file_id_input.set_value(file_id);
        }
        if let Some(status) = done.lock_status {
            self.state.force_status(status);
        }
        self.show(done.status_line);
        if done.clear_input {
            self.slot.file_input.set_value("");
        }
    }
}
