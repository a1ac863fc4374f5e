//! Обработчики панели фильтров и пагинации
//!
//! Пагинация и выбор размера страницы приходят внутри заменяемого фрагмента,
//! поэтому их слушатели висят на стабильном `#table-container`.

use super::filter_widgets::{
    switch_date_type, uncheck_statuses, update_creator_label, update_status_count,
    DATE_TAB_SELECTOR,
};
use super::table_refresher::TableRefresher;
use crate::shared::bindings::{ids, FilterBindings};
use crate::shared::debounce::{BrowserTimers, Debouncer};
use crate::shared::dom::{closest_from_event, listen};
use crate::shared::error::UiResult;
use crate::shared::export::export_to_excel;
use crate::shared::form_data::form_entries;
use contracts::dashboards::d001_payments::filter_state::{PARAM_CREATOR, PARAM_STATUS};
use contracts::dashboards::d001_payments::FilterQueryBuilder;
use contracts::shared::client_config::ClientConfig;
use contracts::shared::endpoints::with_query;
use contracts::shared::query_params::QueryParams;
use leptos::logging::{error, log};
use leptos::task::spawn_local;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};

const PAGINATION_LINK: &str = ".pagination-link";
const DISABLED_LINK_CLASS: &str = "btn-disabled";

/// Поля, изменения которых применяются после паузы во вводе
const DEBOUNCED_FIELDS: [&str; 3] = ["search", "amount_min", "amount_max"];
/// Поля дат применяются сразу
const DATE_FIELDS: [&str; 2] = ["date_from", "date_to"];

pub struct FilterController {
    bindings: FilterBindings,
    refresher: Rc<TableRefresher>,
    debouncer: Debouncer<BrowserTimers>,
    config: Rc<ClientConfig>,
}

impl FilterController {
    pub fn new(
        bindings: FilterBindings,
        refresher: Rc<TableRefresher>,
        config: Rc<ClientConfig>,
    ) -> Self {
        Self {
            bindings,
            refresher,
            debouncer: Debouncer::new(BrowserTimers, config.search_debounce_ms),
            config,
        }
    }

    fn query_builder(&self) -> FilterQueryBuilder {
        FilterQueryBuilder::new(self.config.default_per_page_str())
            .with_per_page_fallback(Some(self.bindings.per_page_input.value()))
    }

    fn refresh(&self, params: QueryParams) {
        let url = with_query(&self.config.dashboard_url, &params.to_query_string());
        log::debug!("Table refresh: {}", url);
        let refresher = self.refresher.clone();
        spawn_local(async move {
            refresher.refresh(&url).await;
        });
    }

    fn entries(&self) -> Option<QueryParams> {
        match form_entries(&self.bindings.form) {
            Ok(entries) => Some(entries),
            Err(e) => {
                error!("Не удалось прочитать форму фильтров: {}", e);
                None
            }
        }
    }

    /// Submit and checkbox/radio/date changes; a pending debounced search is dropped
    pub fn apply_filters(&self) {
        self.debouncer.cancel();
        self.apply_debounced();
    }

    fn apply_debounced(&self) {
        if let Some(entries) = self.entries() {
            self.refresh(self.query_builder().filter_change(entries.iter()));
        }
    }

    pub fn reset_filters(&self) -> UiResult<()> {
        self.debouncer.cancel();
        let per_page = self.bindings.per_page_input.value();
        self.bindings.form.reset();
        uncheck_statuses(&self.bindings.form)?;
        update_status_count(&self.bindings.form, self.bindings.status_summary.as_ref())?;
        update_creator_label(self.bindings.creator_summary.as_ref(), None);
        self.refresh(self.query_builder().reset(Some(&per_page)));
        Ok(())
    }

    pub fn go_to_page(&self, page: u32) {
        self.debouncer.cancel();
        if let Some(entries) = self.entries() {
            self.refresh(self.query_builder().page(entries.iter(), page));
        }
    }

    pub fn change_page_size(&self, per_page: &str) {
        self.debouncer.cancel();
        self.bindings.per_page_input.set_value(per_page);
        if let Some(entries) = self.entries() {
            self.refresh(self.query_builder().page_size(entries.iter(), per_page));
        }
    }

    fn on_pagination_click(&self, event: &Event) {
        let Some(link) = closest_from_event(event, PAGINATION_LINK) else {
            return;
        };
        event.prevent_default();
        if link.class_list().contains(DISABLED_LINK_CLASS) {
            return;
        }
        let Some(page) = link
            .get_attribute("data-page")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
        else {
            return;
        };
        self.go_to_page(page);
    }

    fn on_table_change(&self, event: &Event) {
        let Some(selector) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .filter(|s| s.id() == ids::PER_PAGE_SELECTOR)
        else {
            return;
        };
        self.change_page_size(&selector.value());
    }

    fn on_form_change(&self, event: &Event) {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let name = input.name();
        if name == PARAM_STATUS {
            if let Err(e) =
                update_status_count(&self.bindings.form, self.bindings.status_summary.as_ref())
            {
                log::warn!("status counter: {}", e);
            }
            self.apply_filters();
        } else if name == PARAM_CREATOR {
            update_creator_label(self.bindings.creator_summary.as_ref(), Some(&input));
            self.apply_filters();
        } else if DATE_FIELDS.contains(&name.as_str()) {
            self.apply_filters();
        }
    }

    fn on_date_tab_click(&self, event: &Event) {
        let Some(tab) = closest_from_event(event, DATE_TAB_SELECTOR) else {
            return;
        };
        let Some(date_type) = tab.get_attribute("data-date-type") else {
            return;
        };
        if let Err(e) = switch_date_type(
            &self.bindings.form,
            self.bindings.date_type_input.as_ref(),
            &date_type,
        ) {
            log::warn!("date type switch: {}", e);
        }
    }

    pub fn wire(self) -> UiResult<()> {
        let controller = Rc::new(self);
        let form = controller.bindings.form.clone();
        let container = controller.bindings.table_container.clone();

        let c = controller.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            c.apply_filters();
        })?;

        let c = controller.clone();
        listen(&form, "change", move |event| c.on_form_change(&event))?;

        // каждое нажатие перезапускает таймер; запрос уйдёт после паузы
        let weak: Weak<FilterController> = Rc::downgrade(&controller);
        listen(&form, "input", move |event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if !DEBOUNCED_FIELDS.contains(&input.name().as_str()) {
                return;
            }
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let pending = weak.clone();
            controller.debouncer.trigger(move || {
                if let Some(controller) = pending.upgrade() {
                    controller.apply_debounced();
                }
            });
        })?;

        let c = controller.clone();
        listen(&form, "click", move |event| c.on_date_tab_click(&event))?;

        let c = controller.clone();
        listen(&container, "click", move |event| c.on_pagination_click(&event))?;

        let c = controller.clone();
        listen(&container, "change", move |event| c.on_table_change(&event))?;

        if let Some(button) = &controller.bindings.reset_button {
            let c = controller.clone();
            listen(button, "click", move |event| {
                event.prevent_default();
                if let Err(e) = c.reset_filters() {
                    error!("Сброс фильтров: {}", e);
                }
            })?;
        }

        if let Some(button) = &controller.bindings.export_button {
            let c = controller.clone();
            listen(button, "click", move |event| {
                event.prevent_default();
                if let Err(e) = export_to_excel(&c.bindings.form, &c.config.export_url) {
                    error!("Экспорт в Excel: {}", e);
                }
            })?;
        }

        log!(
            "Фильтры подключены, задержка поиска {} мс",
            controller.debouncer.delay_ms()
        );
        Ok(())
    }
}
