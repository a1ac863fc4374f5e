//! Выгрузка в Excel с текущими фильтрами

use super::dom::window;
use super::error::UiResult;
use super::form_data::form_entries;
use contracts::dashboards::d001_payments::export_params;
use contracts::shared::endpoints::with_query;
use web_sys::HtmlFormElement;

/// URL выгрузки для текущего состояния формы фильтров
pub fn export_url(form: &HtmlFormElement, export_path: &str) -> UiResult<String> {
    let params = export_params(form_entries(form)?.iter());
    Ok(with_query(export_path, &params.to_query_string()))
}

/// Переходит по ссылке выгрузки; файл скачивается браузером
pub fn export_to_excel(form: &HtmlFormElement, export_path: &str) -> UiResult<()> {
    let url = export_url(form, export_path)?;
    log::info!("Excel export: {}", url);
    window()?.location().set_href(&url)?;
    Ok(())
}
