//! Мелкие элементы панели фильтров: стрелки выпадающих списков, подписи,
//! вкладки типа даты.

use crate::shared::bindings::{DropdownBinding, DropdownBindings};
use crate::shared::dom::{listen, toggle_class};
use crate::shared::error::UiResult;
use contracts::dashboards::d001_payments::filter_state::{
    creator_summary_label, status_summary_label,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlDetailsElement, HtmlElement, HtmlFormElement, HtmlInputElement, Node,
    NodeList,
};

const ARROW_OPEN: &str = "▲";
const ARROW_CLOSED: &str = "▼";
const ARROW_ACTIVE_CLASS: &str = "text-primary";

pub const DATE_TAB_SELECTOR: &str = ".date-type-tab";
const DATE_TAB_ACTIVE: &str = "btn-primary";
const DATE_TAB_IDLE: &str = "btn-ghost";

fn elements<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn sync_arrow(dropdown: &DropdownBinding) {
    let Some(arrow) = &dropdown.arrow else {
        return;
    };
    let open = dropdown.details.open();
    arrow.set_text_content(Some(if open { ARROW_OPEN } else { ARROW_CLOSED }));
    toggle_class(arrow, ARROW_ACTIVE_CLASS, open);
}

/// Closes every open `<details>` that does not contain the click target
fn close_dropdowns_outside(document: &Document, target: &Node) -> UiResult<()> {
    for details in elements::<HtmlDetailsElement>(document.query_selector_all("details[open]")?) {
        if !details.contains(Some(target)) {
            details.set_open(false);
        }
    }
    Ok(())
}

pub fn wire_dropdowns(document: &Document, dropdowns: DropdownBindings) -> UiResult<()> {
    for dropdown in [&dropdowns.status, &dropdowns.creator].into_iter().flatten() {
        let binding = dropdown.clone();
        listen(&dropdown.details, "toggle", move |_| sync_arrow(&binding))?;
    }

    let owner_document = document.clone();
    listen(document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        if let Err(e) = close_dropdowns_outside(&owner_document, &target) {
            log::warn!("dropdown close failed: {}", e);
        }
        for dropdown in [&dropdowns.status, &dropdowns.creator].into_iter().flatten() {
            sync_arrow(dropdown);
        }
    })
}

/// «N Selected» / «Статусы» по числу отмеченных статусов
pub fn update_status_count(form: &HtmlFormElement, summary: Option<&HtmlElement>) -> UiResult<()> {
    let Some(summary) = summary else {
        return Ok(());
    };
    let checked = form
        .query_selector_all("input[name=\"status\"]:checked")?
        .length() as usize;
    summary.set_text_content(Some(&status_summary_label(checked)));
    Ok(())
}

pub fn uncheck_statuses(form: &HtmlFormElement) -> UiResult<()> {
    for checkbox in elements::<HtmlInputElement>(form.query_selector_all("input[name=\"status\"]")?) {
        checkbox.set_checked(false);
    }
    Ok(())
}

/// Имя создателя берётся из `<span>` внутри `<label>` выбранной радиокнопки
fn creator_display_name(radio: &HtmlInputElement) -> String {
    radio
        .closest("label")
        .ok()
        .flatten()
        .and_then(|label| label.query_selector("span").ok().flatten())
        .and_then(|span| span.text_content())
        .unwrap_or_default()
}

pub fn update_creator_label(summary: Option<&HtmlElement>, radio: Option<&HtmlInputElement>) {
    let Some(summary) = summary else {
        return;
    };
    let name = radio
        .filter(|r| !r.value().is_empty())
        .map(creator_display_name);
    summary.set_text_content(Some(&creator_summary_label(name.as_deref())));
}

/// Переключает вкладку «Дата создания» / «Дата оплаты»
pub fn switch_date_type(
    form: &HtmlFormElement,
    date_type_input: Option<&HtmlInputElement>,
    date_type: &str,
) -> UiResult<()> {
    if let Some(input) = date_type_input {
        input.set_value(date_type);
    }
    for tab in elements::<Element>(form.query_selector_all(DATE_TAB_SELECTOR)?) {
        let active = tab.get_attribute("data-date-type").as_deref() == Some(date_type);
        toggle_class(&tab, DATE_TAB_ACTIVE, active);
        toggle_class(&tab, DATE_TAB_IDLE, !active);
    }
    Ok(())
}
