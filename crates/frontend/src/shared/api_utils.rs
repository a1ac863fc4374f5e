//! HTTP helpers for talking to the dashboard server
//!
//! All endpoints are same-origin and relative; non-2xx statuses are turned
//! into `UiError::Http` before any body is read.

use super::error::{UiError, UiResult};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

fn ensure_ok(response: Response) -> UiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(UiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

/// GET a server-rendered page as text
pub async fn fetch_html(url: &str) -> UiResult<String> {
    let response = ensure_ok(Request::get(url).send().await?)?;
    Ok(response.text().await?)
}

/// POST multipart form data, ignoring the response body
pub async fn post_form(url: &str, body: FormData) -> UiResult<()> {
    ensure_ok(Request::post(url).body(body)?.send().await?)?;
    Ok(())
}

/// POST a single file as the multipart field `file` and decode the JSON reply
pub async fn upload_file<T: DeserializeOwned>(url: &str, file: &File) -> UiResult<T> {
    let body = FormData::new()?;
    body.append_with_blob_and_filename("file", file, &file.name())?;
    let response = ensure_ok(Request::post(url).body(body)?.send().await?)?;
    Ok(response.json::<T>().await?)
}
