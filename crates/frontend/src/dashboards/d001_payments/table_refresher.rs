//! Частичное обновление таблицы без перезагрузки страницы
//!
//! Сервер остаётся единственным источником разметки строк: страница
//! запрашивается целиком, из неё вырезается `#table-container` и подменяет
//! содержимое живого контейнера.

use crate::shared::api_utils::fetch_html;
use crate::shared::bindings::{ids, FilterBindings};
use crate::shared::dom::{document, optional_element, window};
use crate::shared::error::{UiError, UiResult};
use crate::shared::request_sequence::RequestSequencer;
use contracts::dashboards::d001_payments::filter_state::per_page_from_url;
use leptos::logging::error;
use wasm_bindgen::JsValue;
use web_sys::{DomParser, HtmlElement, HtmlInputElement, HtmlSelectElement, SupportedType};

const DIMMED_OPACITY: &str = "0.5";
const FULL_OPACITY: &str = "1";

pub struct TableRefresher {
    container: HtmlElement,
    per_page_input: HtmlInputElement,
    default_per_page: String,
    sequencer: RequestSequencer,
}

impl TableRefresher {
    pub fn new(bindings: &FilterBindings, default_per_page: impl Into<String>) -> Self {
        Self {
            container: bindings.table_container.clone(),
            per_page_input: bindings.per_page_input.clone(),
            default_per_page: default_per_page.into(),
            sequencer: RequestSequencer::new(),
        }
    }

    fn set_opacity(&self, value: &str) {
        if let Err(e) = self.container.style().set_property("opacity", value) {
            log::warn!("opacity update failed: {:?}", e);
        }
    }

    /// Fetch `url`, swap the table fragment and push `url` to history.
    ///
    /// Responses to superseded requests are dropped. On failure the current
    /// table and address bar stay as they are.
    pub async fn refresh(&self, url: &str) {
        let ticket = self.sequencer.issue();
        self.set_opacity(DIMMED_OPACITY);

        let fragment = load_fragment(url).await;

        match plan_refresh(
            self.sequencer.is_current(ticket),
            fragment,
            url,
            &self.default_per_page,
        ) {
            RefreshStep::Stale => {
                log::debug!("Ответ для {} устарел, пропускаем", url);
            }
            RefreshStep::Swap { html, page_size } => {
                self.container.set_inner_html(&html);
                self.sync_page_size(&page_size);
                self.set_opacity(FULL_OPACITY);
                if let Err(e) = push_history(url) {
                    error!("Не удалось обновить адресную строку: {}", e);
                }
            }
            RefreshStep::Failed(e) => {
                error!("Ошибка при обновлении таблицы: {}", e);
                self.set_opacity(FULL_OPACITY);
            }
        }
    }

    /// The swapped markup carries a freshly rendered selector, so it is
    /// looked up again rather than kept from binding time.
    fn sync_page_size(&self, page_size: &PageSizeSync) {
        if let Some(value) = &page_size.hidden_input {
            self.per_page_input.set_value(value);
        }

        let selector = document()
            .ok()
            .and_then(|doc| optional_element::<HtmlSelectElement>(&doc, ids::PER_PAGE_SELECTOR));
        if let Some(selector) = selector {
            selector.set_value(&page_size.selector);
            log::debug!("Updated per_page selector to: {}", page_size.selector);
        }
    }
}

/// Значения размера страницы после подмены фрагмента
#[derive(Debug, Clone, PartialEq, Eq)]
struct PageSizeSync {
    /// Hidden field is only touched when the URL carries `per_page`
    hidden_input: Option<String>,
    selector: String,
}

impl PageSizeSync {
    fn for_url(url: &str, default_per_page: &str) -> Self {
        let per_page = per_page_from_url(url);
        Self {
            selector: per_page
                .clone()
                .unwrap_or_else(|| default_per_page.to_string()),
            hidden_input: per_page,
        }
    }
}

#[derive(Debug)]
enum RefreshStep {
    /// A newer request was dispatched; DOM and history stay untouched
    Stale,
    Swap { html: String, page_size: PageSizeSync },
    Failed(UiError),
}

fn plan_refresh(
    is_current: bool,
    fragment: UiResult<String>,
    url: &str,
    default_per_page: &str,
) -> RefreshStep {
    if !is_current {
        return RefreshStep::Stale;
    }
    match fragment {
        Ok(html) => RefreshStep::Swap {
            html,
            page_size: PageSizeSync::for_url(url, default_per_page),
        },
        Err(e) => RefreshStep::Failed(e),
    }
}

async fn load_fragment(url: &str) -> UiResult<String> {
    let html = fetch_html(url).await?;
    extract_fragment(&html)
}

fn extract_fragment(html: &str) -> UiResult<String> {
    let parsed = DomParser::new()?.parse_from_string(html, SupportedType::TextHtml)?;
    parsed
        .get_element_by_id(ids::TABLE_CONTAINER)
        .map(|container| container.inner_html())
        .ok_or(UiError::FragmentNotFound(ids::TABLE_CONTAINER))
}

fn push_history(url: &str) -> UiResult<()> {
    window()?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(url))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const PAGE_URL: &str = "/dashboard?search=acme&per_page=50&page=2";

    #[test]
    fn test_superseded_response_is_dropped() {
        let sequencer = RequestSequencer::new();
        let search = sequencer.issue();
        let pagination = sequencer.issue();

        // медленный ответ на поиск приходит после ответа на пагинацию
        let late = plan_refresh(
            sequencer.is_current(search),
            Ok("<tr>old</tr>".to_string()),
            "/dashboard?search=a&per_page=20&page=1",
            "20",
        );
        assert_matches!(late, RefreshStep::Stale);

        let fresh = plan_refresh(
            sequencer.is_current(pagination),
            Ok("<tr>new</tr>".to_string()),
            PAGE_URL,
            "20",
        );
        assert_matches!(fresh, RefreshStep::Swap { html, .. } if html == "<tr>new</tr>");
    }

    #[test]
    fn test_superseded_failure_is_dropped_too() {
        let step = plan_refresh(
            false,
            Err(UiError::Network("aborted".to_string())),
            PAGE_URL,
            "20",
        );
        assert_matches!(step, RefreshStep::Stale);
    }

    #[test]
    fn test_missing_fragment_fails() {
        let step = plan_refresh(
            true,
            Err(UiError::FragmentNotFound(ids::TABLE_CONTAINER)),
            PAGE_URL,
            "20",
        );
        assert_matches!(step, RefreshStep::Failed(UiError::FragmentNotFound(_)));
    }

    #[test]
    fn test_page_size_follows_url() {
        let step = plan_refresh(true, Ok(String::new()), PAGE_URL, "20");
        assert_matches!(
            step,
            RefreshStep::Swap { page_size, .. } if page_size == PageSizeSync {
                hidden_input: Some("50".to_string()),
                selector: "50".to_string(),
            }
        );
    }

    #[test]
    fn test_url_without_page_size_keeps_hidden_field() {
        let sync = PageSizeSync::for_url("/dashboard?page=3", "20");
        assert_eq!(sync.hidden_input, None);
        assert_eq!(sync.selector, "20");
    }
}
