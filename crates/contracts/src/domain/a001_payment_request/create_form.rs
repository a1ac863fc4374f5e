//! Сериализация формы создания запроса на оплату

use super::status::ModalStatus;
use crate::shared::endpoints::with_query;
use crate::shared::query_params::QueryParams;

pub const SUBMIT_IDLE_LABEL: &str = "Создать";
pub const SUBMIT_BUSY_LABEL: &str = "Создание...";
pub const CREATE_FAILED_MESSAGE: &str = "Ошибка при создании запроса";

/// Собирает тело запроса из полей формы.
///
/// Заблокированный селектор статуса не попадает в данные формы, поэтому
/// зафиксированный статус записывается явно и ровно один раз.
pub fn serialize_create_form(entries: QueryParams, locked_status: Option<ModalStatus>) -> QueryParams {
    let mut body = entries;
    if let Some(status) = locked_status {
        body.set("status", status.as_str());
    }
    body
}

/// После создания таблица обновляется с теми же фильтрами, что в адресной строке
pub fn refresh_url_after_create(dashboard_url: &str, location_search: &str) -> String {
    with_query(dashboard_url, location_search)
}
