use crate::shared::bindings::DateFieldBindings;
use crate::shared::dom::set_hidden;
use contracts::domain::a001_payment_request::DateFieldVisibility;

/// Переключает видимость полей «Дата оплаты» и «Дата планирования»
#[derive(Clone)]
pub struct StatusToggle {
    fields: Option<DateFieldBindings>,
}

impl StatusToggle {
    /// Without date fields (worker role) every call is a no-op
    pub fn new(fields: Option<DateFieldBindings>) -> Self {
        Self { fields }
    }

    pub fn apply_status_visibility(&self, status: &str) {
        let Some(fields) = &self.fields else {
            return;
        };
        let visibility = DateFieldVisibility::for_status(status);
        set_hidden(&fields.paid_container, !visibility.paid_date);
        set_hidden(&fields.scheduled_container, !visibility.scheduled_date);
    }
}
