//! Результат загрузки файла через `POST /api/upload`

use super::status::ModalStatus;
use serde::Deserialize;

pub const UPLOADING_TEXT: &str = "Загрузка...";
pub const TRANSPORT_ERROR_TEXT: &str = "✗ Ошибка загрузки";
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

pub const CLASS_IDLE: &str = "text-sm";
pub const CLASS_PROGRESS: &str = "text-sm text-blue-500";
pub const CLASS_SUCCESS: &str = "text-sm text-green-600";
pub const CLASS_ERROR: &str = "text-sm text-red-600";

/// JSON-ответ сервера на загрузку
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadFileResponse {
    pub success: bool,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { file_id: String, filename: String },
    Rejected { error: Option<String> },
}

impl From<UploadFileResponse> for UploadOutcome {
    fn from(response: UploadFileResponse) -> Self {
        if response.success {
            UploadOutcome::Uploaded {
                file_id: response.file_id.unwrap_or_default(),
                filename: response.filename.unwrap_or_default(),
            }
        } else {
            UploadOutcome::Rejected {
                error: response.error.filter(|e| !e.trim().is_empty()),
            }
        }
    }
}

/// Текст и CSS-класс строки статуса рядом с полем файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatusLine {
    pub text: String,
    pub class: &'static str,
}

impl UploadStatusLine {
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            class: CLASS_IDLE,
        }
    }

    pub fn uploading() -> Self {
        Self {
            text: UPLOADING_TEXT.to_string(),
            class: CLASS_PROGRESS,
        }
    }

    pub fn transport_error() -> Self {
        Self {
            text: TRANSPORT_ERROR_TEXT.to_string(),
            class: CLASS_ERROR,
        }
    }

    pub fn for_outcome(outcome: &UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Uploaded { filename, .. } => Self {
                text: format!("✓ {}", filename),
                class: CLASS_SUCCESS,
            },
            UploadOutcome::Rejected { error } => Self {
                text: format!("✗ Ошибка: {}", error.as_deref().unwrap_or(UNKNOWN_ERROR)),
                class: CLASS_ERROR,
            },
        }
    }
}

/// Изменения слота загрузки после завершения запроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCompletion {
    /// Value for the hidden file-id field, only after a successful upload
    pub file_id: Option<String>,
    /// Status to force and lock in the create dialog
    pub lock_status: Option<ModalStatus>,
    pub status_line: UploadStatusLine,
    /// The file input is emptied on every path so the same file can be picked again
    pub clear_input: bool,
}

impl UploadCompletion {
    /// `outcome` is `None` when the request itself failed (network or HTTP status)
    pub fn resolve(outcome: Option<&UploadOutcome>, forced_status: Option<ModalStatus>) -> Self {
        let Some(outcome) = outcome else {
            return Self {
                file_id: None,
                lock_status: None,
                status_line: UploadStatusLine::transport_error(),
                clear_input: true,
            };
        };
        let (file_id, lock_status) = match outcome {
            UploadOutcome::Uploaded { file_id, .. } => (Some(file_id.clone()), forced_status),
            UploadOutcome::Rejected { .. } => (None, None),
        };
        Self {
            file_id,
            lock_status,
            status_line: UploadStatusLine::for_outcome(outcome),
            clear_input: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_successful_response() {
        let response: UploadFileResponse = serde_json::from_str(
            r#"{"success": true, "file_id": "BQACAgIAAx", "filename": "invoice.pdf"}"#,
        )
        .unwrap();
        let outcome = UploadOutcome::from(response);
        assert_matches!(
            &outcome,
            UploadOutcome::Uploaded { file_id, filename }
                if file_id == "BQACAgIAAx" && filename == "invoice.pdf"
        );
        let line = UploadStatusLine::for_outcome(&outcome);
        assert_eq!(line.text, "✓ invoice.pdf");
        assert_eq!(line.class, CLASS_SUCCESS);
    }

    #[test]
    fn test_rejected_response_shows_server_message() {
        let response: UploadFileResponse =
            serde_json::from_str(r#"{"success": false, "error": "too large"}"#).unwrap();
        let line = UploadStatusLine::for_outcome(&response.into());
        assert_eq!(line.text, "✗ Ошибка: too large");
        assert_eq!(line.class, CLASS_ERROR);
    }

    #[test]
    fn test_rejected_without_message_uses_generic_text() {
        let response: UploadFileResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let outcome = UploadOutcome::from(response);
        assert_matches!(outcome, UploadOutcome::Rejected { error: None });
        assert_eq!(
            UploadStatusLine::for_outcome(&outcome).text,
            "✗ Ошибка: Неизвестная ошибка"
        );
    }

    #[test]
    fn test_fixed_lines() {
        assert_eq!(UploadStatusLine::uploading().class, CLASS_PROGRESS);
        assert_eq!(UploadStatusLine::transport_error().text, "✗ Ошибка загрузки");
        assert!(UploadStatusLine::idle().text.is_empty());
    }

    #[test]
    fn test_payment_order_upload_locks_paid() {
        let outcome = UploadOutcome::Uploaded {
            file_id: "AgAD".to_string(),
            filename: "order.pdf".to_string(),
        };
        let done = UploadCompletion::resolve(Some(&outcome), Some(ModalStatus::Paid));
        assert_eq!(done.file_id.as_deref(), Some("AgAD"));
        assert_eq!(done.lock_status, Some(ModalStatus::Paid));
        assert_eq!(done.status_line.text, "✓ order.pdf");
        assert!(done.clear_input);
    }

    #[test]
    fn test_rejected_upload_clears_input_and_keeps_status_free() {
        let outcome = UploadOutcome::Rejected {
            error: Some("too large".to_string()),
        };
        let done = UploadCompletion::resolve(Some(&outcome), Some(ModalStatus::Paid));
        assert!(done.clear_input);
        assert_eq!(done.file_id, None);
        assert_eq!(done.lock_status, None);
        assert_eq!(done.status_line.text, "✗ Ошибка: too large");
    }

    #[test]
    fn test_failed_request_clears_input() {
        let done = UploadCompletion::resolve(None, Some(ModalStatus::Paid));
        assert!(done.clear_input);
        assert_eq!(done.file_id, None);
        assert_eq!(done.lock_status, None);
        assert_eq!(done.status_line, UploadStatusLine::transport_error());
    }
}
