use thiserror::Error;
use wasm_bindgen::JsValue;

/// Ошибки клиентской части дашборда
#[derive(Debug, Error)]
pub enum UiError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    #[error("element #{0} has unexpected type")]
    WrongElementType(&'static str),

    #[error("browser API error: {0}")]
    Js(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("fragment #{0} missing in response")]
    FragmentNotFound(&'static str),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(format!("{:?}", value))
    }
}

impl From<gloo_net::Error> for UiError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => UiError::Parse(e.to_string()),
            other => UiError::Network(other.to_string()),
        }
    }
}

pub type UiResult<T> = Result<T, UiError>;
