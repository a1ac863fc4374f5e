use serde::Deserialize;

use super::endpoints;

/// Настройки клиента дашборда.
///
/// Страница может переопределить любое поле через JSON-блок
/// `<script type="application/json" id="dashboard-config">`; отсутствующие
/// поля берутся из значений по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub upload_url: String,
    pub dashboard_url: String,
    pub export_url: String,
    pub create_payment_url: String,
    pub default_per_page: u32,
    pub search_debounce_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            upload_url: endpoints::UPLOAD.to_string(),
            dashboard_url: endpoints::DASHBOARD.to_string(),
            export_url: endpoints::EXPORT_EXCEL.to_string(),
            create_payment_url: endpoints::PAYMENT_CREATE.to_string(),
            default_per_page: 20,
            search_debounce_ms: 500,
        }
    }
}

impl ClientConfig {
    /// Parse overrides from the page's JSON config block
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn default_per_page_str(&self) -> String {
        self.default_per_page.to_string()
    }
}
