//! Типизированная таблица привязок к серверной разметке.
//!
//! Все идентификаторы элементов собраны здесь и проверяются один раз при
//! старте. Компоненты получают готовые дескрипторы, а не ищут элементы по
//! строкам. Элементы, которые сервер рендерит не для всех ролей, хранятся
//! как `Option`.

use super::dom::{element_by_id, optional_element};
use super::error::UiResult;
use web_sys::{
    Document, HtmlButtonElement, HtmlDetailsElement, HtmlDialogElement, HtmlElement,
    HtmlFormElement, HtmlInputElement, HtmlSelectElement,
};

pub mod ids {
    pub const FILTERS_FORM: &str = "filters-form";
    pub const TABLE_CONTAINER: &str = "table-container";
    pub const PER_PAGE_INPUT: &str = "per-page-input";
    /// Rendered inside the table fragment, so it is looked up after every swap
    pub const PER_PAGE_SELECTOR: &str = "per-page-selector";
    pub const DATE_TYPE_INPUT: &str = "date-type-input";
    pub const RESET_BUTTON: &str = "reset-filters-btn";
    pub const EXPORT_BUTTON: &str = "export-btn";
    pub const ANALYTICS_BUTTON: &str = "analytics-btn";
    pub const CREATE_BUTTON: &str = "create-request-btn";
    pub const ANALYTICS_MODAL: &str = "analytics-modal";

    pub const STATUS_DROPDOWN: &str = "status-dropdown";
    pub const STATUS_ARROW: &str = "status-arrow";
    pub const STATUS_SUMMARY: &str = "status-summary-text";
    pub const CREATOR_DROPDOWN: &str = "creator-dropdown";
    pub const CREATOR_ARROW: &str = "creator-arrow";
    pub const CREATOR_SUMMARY: &str = "creator-summary-text";

    pub const CREATE_MODAL: &str = "create-payment-modal";
    pub const CREATE_FORM: &str = "create-payment-form";
    pub const MODAL_STATUS: &str = "modal-status";
    pub const PAID_DATE_CONTAINER: &str = "modal-paid-date-container";
    pub const SCHEDULED_DATE_CONTAINER: &str = "modal-scheduled-date-container";

    pub const INVOICE_FILE: &str = "modal-invoice-file";
    pub const INVOICE_FILE_ID: &str = "modal-invoice-file-id";
    pub const INVOICE_STATUS: &str = "modal-invoice-status";
    pub const PAYMENT_FILE: &str = "modal-payment-file";
    pub const PAYMENT_FILE_ID: &str = "modal-payment-file-id";
    pub const PAYMENT_STATUS: &str = "modal-payment-status";
}

/// Форма фильтров и контейнер таблицы
#[derive(Clone)]
pub struct FilterBindings {
    pub form: HtmlFormElement,
    /// Stable ancestor of the swapped fragment; delegated listeners live here
    pub table_container: HtmlElement,
    pub per_page_input: HtmlInputElement,
    pub date_type_input: Option<HtmlInputElement>,
    pub reset_button: Option<HtmlElement>,
    pub export_button: Option<HtmlElement>,
    pub status_summary: Option<HtmlElement>,
    pub creator_summary: Option<HtmlElement>,
}

impl FilterBindings {
    pub fn bind(document: &Document) -> UiResult<Self> {
        Ok(Self {
            form: element_by_id(document, ids::FILTERS_FORM)?,
            table_container: element_by_id(document, ids::TABLE_CONTAINER)?,
            per_page_input: element_by_id(document, ids::PER_PAGE_INPUT)?,
            date_type_input: optional_element(document, ids::DATE_TYPE_INPUT),
            reset_button: optional_element(document, ids::RESET_BUTTON),
            export_button: optional_element(document, ids::EXPORT_BUTTON),
            status_summary: optional_element(document, ids::STATUS_SUMMARY),
            creator_summary: optional_element(document, ids::CREATOR_SUMMARY),
        })
    }
}

/// Выпадающий список на `<details>` со стрелкой в заголовке
#[derive(Clone)]
pub struct DropdownBinding {
    pub details: HtmlDetailsElement,
    pub arrow: Option<HtmlElement>,
}

impl DropdownBinding {
    fn bind(document: &Document, details_id: &'static str, arrow_id: &'static str) -> Option<Self> {
        Some(Self {
            details: optional_element(document, details_id)?,
            arrow: optional_element(document, arrow_id),
        })
    }
}

#[derive(Clone)]
pub struct DropdownBindings {
    pub status: Option<DropdownBinding>,
    pub creator: Option<DropdownBinding>,
}

impl DropdownBindings {
    pub fn bind(document: &Document) -> Self {
        Self {
            status: DropdownBinding::bind(document, ids::STATUS_DROPDOWN, ids::STATUS_ARROW),
            creator: DropdownBinding::bind(document, ids::CREATOR_DROPDOWN, ids::CREATOR_ARROW),
        }
    }
}

/// Кнопки панели инструментов, открывающие диалоги
#[derive(Clone)]
pub struct ToolbarBindings {
    pub analytics_button: Option<HtmlElement>,
    pub analytics_modal: Option<HtmlDialogElement>,
    pub create_button: Option<HtmlElement>,
    pub create_modal: Option<HtmlDialogElement>,
}

impl ToolbarBindings {
    pub fn bind(document: &Document) -> Self {
        Self {
            analytics_button: optional_element(document, ids::ANALYTICS_BUTTON),
            analytics_modal: optional_element(document, ids::ANALYTICS_MODAL),
            create_button: optional_element(document, ids::CREATE_BUTTON),
            create_modal: optional_element(document, ids::CREATE_MODAL),
        }
    }
}

/// Поле файла, скрытое поле с его идентификатором и строка статуса
#[derive(Clone)]
pub struct UploadSlotBindings {
    pub file_input: HtmlInputElement,
    pub file_id_input: HtmlInputElement,
    pub status_label: HtmlElement,
}

impl UploadSlotBindings {
    /// `Ok(None)` when the file input is not rendered for this role; an error
    /// when it is rendered without its companions.
    pub fn bind(
        document: &Document,
        file_input_id: &'static str,
        file_id_input_id: &'static str,
        status_id: &'static str,
    ) -> UiResult<Option<Self>> {
        let Some(file_input) = optional_element(document, file_input_id) else {
            return Ok(None);
        };
        Ok(Some(Self {
            file_input,
            file_id_input: element_by_id(document, file_id_input_id)?,
            status_label: element_by_id(document, status_id)?,
        }))
    }
}

#[derive(Clone)]
pub struct DateFieldBindings {
    pub paid_container: HtmlElement,
    pub scheduled_container: HtmlElement,
}

/// Модальное окно создания запроса на оплату
#[derive(Clone)]
pub struct CreatePaymentBindings {
    pub modal: HtmlDialogElement,
    pub form: HtmlFormElement,
    pub submit_button: Option<HtmlButtonElement>,
    pub status_select: Option<HtmlSelectElement>,
    pub date_fields: Option<DateFieldBindings>,
    pub invoice: Option<UploadSlotBindings>,
    pub payment: Option<UploadSlotBindings>,
}

impl CreatePaymentBindings {
    pub fn bind(document: &Document) -> UiResult<Self> {
        let form: HtmlFormElement = element_by_id(document, ids::CREATE_FORM)?;
        let submit_button = form
            .query_selector("button[type=\"submit\"]")?
            .and_then(|el| wasm_bindgen::JsCast::dyn_into::<HtmlButtonElement>(el).ok());

        let date_fields = match (
            optional_element(document, ids::PAID_DATE_CONTAINER),
            optional_element(document, ids::SCHEDULED_DATE_CONTAINER),
        ) {
            (Some(paid_container), Some(scheduled_container)) => Some(DateFieldBindings {
                paid_container,
                scheduled_container,
            }),
            _ => None,
        };

        Ok(Self {
            modal: element_by_id(document, ids::CREATE_MODAL)?,
            form,
            submit_button,
            status_select: optional_element(document, ids::MODAL_STATUS),
            date_fields,
            invoice: UploadSlotBindings::bind(
                document,
                ids::INVOICE_FILE,
                ids::INVOICE_FILE_ID,
                ids::INVOICE_STATUS,
            )?,
            payment: UploadSlotBindings::bind(
                document,
                ids::PAYMENT_FILE,
                ids::PAYMENT_FILE_ID,
                ids::PAYMENT_STATUS,
            )?,
        })
    }
}
