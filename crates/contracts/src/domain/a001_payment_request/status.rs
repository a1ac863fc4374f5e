/// Статус, выбираемый в модальном окне создания запроса
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModalStatus {
    #[default]
    Pending,
    Paid,
    Scheduled,
}

impl ModalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalStatus::Pending => "pending",
            ModalStatus::Paid => "paid",
            ModalStatus::Scheduled => "scheduled",
        }
    }

    /// Unknown values yield `None`; callers treat them like `Pending`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ModalStatus::Pending),
            "paid" => Some(ModalStatus::Paid),
            "scheduled" => Some(ModalStatus::Scheduled),
            _ => None,
        }
    }
}

/// Какие поля дат видны при данном статусе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFieldVisibility {
    pub paid_date: bool,
    pub scheduled_date: bool,
}

impl DateFieldVisibility {
    pub fn for_status(status: &str) -> Self {
        match ModalStatus::parse(status) {
            Some(ModalStatus::Paid) => Self {
                paid_date: true,
                scheduled_date: false,
            },
            Some(ModalStatus::Scheduled) => Self {
                paid_date: false,
                scheduled_date: true,
            },
            _ => Self {
                paid_date: false,
                scheduled_date: false,
            },
        }
    }
}
