//! Чтение и построение `FormData`

use super::error::UiResult;
use contracts::shared::query_params::QueryParams;
use web_sys::{FormData, HtmlFormElement};

/// Text entries of the form in DOM order. File entries are skipped; disabled
/// and unchecked controls are excluded by the browser.
pub fn form_entries(form: &HtmlFormElement) -> UiResult<QueryParams> {
    let form_data = FormData::new_with_form(form)?;
    let mut params = QueryParams::new();
    let Some(entries) = js_sys::try_iter(&form_data)? else {
        return Ok(params);
    };
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            params.append(name, value);
        }
    }
    Ok(params)
}

pub fn to_form_data(params: &QueryParams) -> UiResult<FormData> {
    let form_data = FormData::new()?;
    for (name, value) in params.iter() {
        form_data.append_with_str(name, value)?;
    }
    Ok(form_data)
}
