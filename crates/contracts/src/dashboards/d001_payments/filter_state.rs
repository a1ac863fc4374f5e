//! Параметры фильтрации таблицы запросов на оплату
//!
//! Состояние фильтров не хранится: каждый запуск собирает его заново из
//! полей формы. Пустые значения отбрасываются, `page` и `per_page`
//! присутствуют всегда.

use crate::shared::query_params::QueryParams;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_PER_PAGE: &str = "per_page";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_CREATOR: &str = "creator_id";

/// Параметры, которые понимает выгрузка в Excel
pub const EXPORT_PARAMS: [&str; 8] = [
    "search",
    "status",
    "date_from",
    "date_to",
    "date_type",
    "amount_min",
    "amount_max",
    "creator_id",
];

/// Keep only entries whose value is not blank, in their original order
pub fn collect_filter_params<I, K, V>(entries: I) -> QueryParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(_, v)| !v.trim().is_empty())
        .collect()
}

/// Builds the query for each kind of table refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQueryBuilder {
    default_per_page: String,
    per_page_fallback: Option<String>,
}

impl FilterQueryBuilder {
    pub fn new(default_per_page: impl Into<String>) -> Self {
        Self {
            default_per_page: default_per_page.into(),
            per_page_fallback: None,
        }
    }

    /// Value of the hidden page-size field, used when the form entries lack one
    pub fn with_per_page_fallback(mut self, fallback: Option<String>) -> Self {
        self.per_page_fallback = fallback.filter(|v| !v.trim().is_empty());
        self
    }

    fn resolved_per_page(&self) -> &str {
        self.per_page_fallback
            .as_deref()
            .unwrap_or(&self.default_per_page)
    }

    fn ensure_per_page(&self, params: &mut QueryParams) {
        if !params.contains(PARAM_PER_PAGE) {
            params.set(PARAM_PER_PAGE, self.resolved_per_page());
        }
    }

    /// Submit, auto-apply and debounced search: back to the first page
    pub fn filter_change<I, K, V>(&self, entries: I) -> QueryParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = collect_filter_params(entries);
        self.ensure_per_page(&mut params);
        params.set(PARAM_PAGE, "1");
        params
    }

    /// Pagination click: same filters, explicit page
    pub fn page<I, K, V>(&self, entries: I, page: u32) -> QueryParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = collect_filter_params(entries);
        self.ensure_per_page(&mut params);
        params.set(PARAM_PAGE, page.to_string());
        params
    }

    /// Page-size change: any stale `per_page` from the form is replaced
    pub fn page_size<I, K, V>(&self, entries: I, per_page: &str) -> QueryParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = collect_filter_params(entries);
        params.remove(PARAM_PER_PAGE);
        let per_page = if per_page.trim().is_empty() {
            self.resolved_per_page()
        } else {
            per_page
        };
        params.set(PARAM_PER_PAGE, per_page);
        params.set(PARAM_PAGE, "1");
        params
    }

    /// Reset button: drop every filter, keep only the page size
    pub fn reset(&self, current_per_page: Option<&str>) -> QueryParams {
        let mut params = QueryParams::new();
        let per_page = current_per_page
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.resolved_per_page());
        params.set(PARAM_PER_PAGE, per_page);
        params.set(PARAM_PAGE, "1");
        params
    }
}

/// Filters for the Excel export; pagination is irrelevant there
pub fn export_params<I, K, V>(entries: I) -> QueryParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    collect_filter_params(entries)
        .iter()
        .filter(|(k, _)| EXPORT_PARAMS.contains(k))
        .collect()
}

/// `per_page` carried by the query part of `url`
pub fn per_page_from_url(url: &str) -> Option<String> {
    QueryParams::from_url(url)
        .get(PARAM_PER_PAGE)
        .map(str::to_string)
}

/// Надпись на кнопке выпадающего списка статусов
pub fn status_summary_label(selected: usize) -> String {
    if selected > 0 {
        format!("{} Selected", selected)
    } else {
        "Статусы".to_string()
    }
}

/// Надпись на кнопке выпадающего списка создателей
pub fn creator_summary_label(creator_name: Option<&str>) -> String {
    match creator_name.map(str::trim) {
        None => "👤 Все создатели".to_string(),
        Some("") => "👤 Создатель".to_string(),
        Some(name) => format!("👤 {}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> FilterQueryBuilder {
        FilterQueryBuilder::new("20")
    }

    fn form(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let params = collect_filter_params(form(&[
            ("search", "   "),
            ("date_from", ""),
            ("amount_min", "\t"),
            ("status", "paid"),
        ]));
        assert_eq!(params.to_query_string(), "status=paid");
    }

    #[test]
    fn test_repeated_checkboxes_keep_dom_order() {
        let params = collect_filter_params(form(&[
            ("status", "pending"),
            ("search", "acme"),
            ("status", "paid"),
        ]));
        assert_eq!(params.get_all("status"), vec!["pending", "paid"]);
    }

    #[test]
    fn test_submit_builds_expected_query() {
        let entries = form(&[
            ("search", "acme"),
            ("status", "paid"),
            ("creator_id", ""),
            ("date_from", ""),
            ("date_to", ""),
            ("date_type", ""),
            ("amount_min", ""),
            ("amount_max", ""),
        ]);
        let params = builder().filter_change(entries);
        assert_eq!(
            params.to_query_string(),
            "search=acme&status=paid&per_page=20&page=1"
        );
    }

    #[test]
    fn test_per_page_from_form_wins_over_fallback() {
        let builder = builder().with_per_page_fallback(Some("100".to_string()));
        let params = builder.filter_change(form(&[("per_page", "50"), ("page", "4")]));
        assert_eq!(params.get("per_page"), Some("50"));
        assert_eq!(params.get("page"), Some("1"));
    }

    #[test]
    fn test_per_page_fallback_field_used_when_missing() {
        let builder = builder().with_per_page_fallback(Some("25".to_string()));
        let params = builder.filter_change(form(&[("search", "acme")]));
        assert_eq!(params.get("per_page"), Some("25"));
    }

    #[test]
    fn test_blank_fallback_uses_default() {
        let builder = builder().with_per_page_fallback(Some(" ".to_string()));
        let params = builder.filter_change(Vec::<(String, String)>::new());
        assert_eq!(params.to_query_string(), "per_page=20&page=1");
    }

    #[test]
    fn test_pagination_uses_clicked_page() {
        let params = builder().page(form(&[("search", "acme"), ("per_page", "50")]), 3);
        assert_eq!(params.to_query_string(), "search=acme&per_page=50&page=3");
    }

    #[test]
    fn test_page_size_change_replaces_stale_value() {
        let params = builder().page_size(
            form(&[("per_page", "20"), ("status", "paid"), ("page", "7")]),
            "100",
        );
        assert_eq!(params.get_all("per_page"), vec!["100"]);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("status"), Some("paid"));
    }

    #[test]
    fn test_reset_keeps_only_page_size() {
        let params = builder().reset(Some("50"));
        assert_eq!(params.to_query_string(), "per_page=50&page=1");
        let params = builder().reset(None);
        assert_eq!(params.to_query_string(), "per_page=20&page=1");
    }

    #[test]
    fn test_every_builder_emits_page_and_per_page() {
        let builder = builder();
        let entries = form(&[("search", "x")]);
        for params in [
            builder.filter_change(entries.clone()),
            builder.page(entries.clone(), 2),
            builder.page_size(entries.clone(), ""),
            builder.reset(None),
        ] {
            assert!(params.contains("page"));
            assert!(params.contains("per_page"));
            assert!(params.iter().all(|(_, v)| !v.trim().is_empty()));
        }
    }

    #[test]
    fn test_export_drops_pagination() {
        let params = export_params(form(&[
            ("search", "acme"),
            ("per_page", "50"),
            ("page", "2"),
            ("status", "paid"),
            ("status", "pending"),
        ]));
        assert_eq!(
            params.to_query_string(),
            "search=acme&status=paid&status=pending"
        );
    }

    #[test]
    fn test_per_page_from_url() {
        assert_eq!(
            per_page_from_url("/dashboard?per_page=50&page=1").as_deref(),
            Some("50")
        );
        assert_eq!(per_page_from_url("/dashboard?page=1"), None);
    }

    #[test]
    fn test_summary_labels() {
        assert_eq!(status_summary_label(0), "Статусы");
        assert_eq!(status_summary_label(2), "2 Selected");
        assert_eq!(creator_summary_label(None), "👤 Все создатели");
        assert_eq!(creator_summary_label(Some(" Иван ")), "👤 Иван");
        assert_eq!(creator_summary_label(Some("")), "👤 Создатель");
    }
}
