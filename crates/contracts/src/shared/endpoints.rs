//! Server endpoints consumed by the dashboard client

/// Multipart upload of a single file (field `file`)
pub const UPLOAD: &str = "/api/upload";

/// Dashboard page; the response contains the `#table-container` fragment
pub const DASHBOARD: &str = "/dashboard";

/// Excel export, downloaded through full navigation
pub const EXPORT_EXCEL: &str = "/export/excel";

/// Multipart creation of a payment request
pub const PAYMENT_CREATE: &str = "/payment/create";

/// Join a path and query parameters, omitting `?` when there are none
pub fn with_query(path: &str, query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
