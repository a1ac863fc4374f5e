//! Подключение клиентской логики к серверной странице дашборда

use crate::dashboards::d001_payments::filter_controller::FilterController;
use crate::dashboards::d001_payments::filter_widgets::wire_dropdowns;
use crate::dashboards::d001_payments::table_refresher::TableRefresher;
use crate::domain::a001_payment_request::ui::create_form::CreatePaymentFlow;
use crate::shared::bindings::{
    CreatePaymentBindings, DropdownBindings, FilterBindings, ToolbarBindings,
};
use crate::shared::dom::{document, listen};
use crate::shared::error::UiResult;
use crate::shared::modal::wire_toolbar;
use contracts::shared::client_config::ClientConfig;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Настройки из `<script type="application/json" id="dashboard-config">`
fn load_config(document: &Document) -> ClientConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ClientConfig::default();
    };
    ClientConfig::from_json(&raw).unwrap_or_else(|e| {
        warn!("Некорректный #{}: {}, используются значения по умолчанию", CONFIG_ELEMENT_ID, e);
        ClientConfig::default()
    })
}

fn wire_dashboard() -> UiResult<()> {
    let document = document()?;
    let config = Rc::new(load_config(&document));

    wire_toolbar(&ToolbarBindings::bind(&document))?;
    wire_dropdowns(&document, DropdownBindings::bind(&document))?;

    let refresher = match FilterBindings::bind(&document) {
        Ok(bindings) => {
            let refresher = Rc::new(TableRefresher::new(
                &bindings,
                config.default_per_page_str(),
            ));
            FilterController::new(bindings, refresher.clone(), config.clone()).wire()?;
            Some(refresher)
        }
        Err(e) => {
            warn!("Фильтры таблицы не подключены: {}", e);
            None
        }
    };

    match CreatePaymentBindings::bind(&document) {
        Ok(bindings) => CreatePaymentFlow::new(bindings, refresher, config).wire()?,
        Err(e) => warn!("Форма создания запроса не подключена: {}", e),
    }

    Ok(())
}

/// Wires every component under one reactive owner that lives as long as the page
fn mount() {
    let owner = Owner::new();
    owner.with(|| {
        if let Err(e) = wire_dashboard() {
            error!("Dashboard init failed: {}", e);
        } else {
            log!("Dashboard client ready");
        }
    });
    std::mem::forget(owner);
}

/// Mounts immediately, or after `DOMContentLoaded` while the page is still parsing
pub fn mount_when_ready() {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            error!("Dashboard init failed: {}", e);
            return;
        }
    };
    if document.ready_state() != "loading" {
        mount();
        return;
    }
    if let Err(e) = listen(&document, "DOMContentLoaded", |_| mount()) {
        error!("Dashboard init failed: {}", e);
    }
}
