use contracts::domain::a001_payment_request::ModalStatus;
use leptos::prelude::*;

/// Реактивное состояние модального окна создания запроса.
///
/// `locked` выставляется, когда статус навязан загрузкой платёжки: селектор
/// блокируется, а значение уходит в тело запроса явно.
#[derive(Clone, Copy)]
pub struct CreatePaymentState {
    pub status: RwSignal<ModalStatus>,
    pub locked: RwSignal<bool>,
}

impl CreatePaymentState {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(ModalStatus::default()),
            locked: RwSignal::new(false),
        }
    }

    /// User picked a value in the selector; ignored while locked
    pub fn choose(&self, status: ModalStatus) {
        if !self.locked.get_untracked() {
            self.status.set(status);
        }
    }

    pub fn force_status(&self, status: ModalStatus) {
        self.status.set(status);
        self.locked.set(true);
    }

    pub fn reset(&self) {
        self.status.set(ModalStatus::default());
        self.locked.set(false);
    }

    /// Status that must be written into the request body explicitly
    pub fn locked_status(&self) -> Option<ModalStatus> {
        self.locked
            .get_untracked()
            .then(|| self.status.get_untracked())
    }
}

impl Default for CreatePaymentState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_status_locks_selector() {
        let state = CreatePaymentState::new();
        state.force_status(ModalStatus::Paid);
        assert_eq!(state.locked_status(), Some(ModalStatus::Paid));

        state.choose(ModalStatus::Scheduled);
        assert_eq!(state.status.get_untracked(), ModalStatus::Paid);
    }

    #[test]
    fn test_repeated_forced_uploads_stay_single() {
        let state = CreatePaymentState::new();
        state.force_status(ModalStatus::Paid);
        state.force_status(ModalStatus::Paid);
        assert_eq!(state.locked_status(), Some(ModalStatus::Paid));
    }

    #[test]
    fn test_unlocked_choice_is_not_forced() {
        let state = CreatePaymentState::new();
        state.choose(ModalStatus::Scheduled);
        assert_eq!(state.status.get_untracked(), ModalStatus::Scheduled);
        assert_eq!(state.locked_status(), None);
    }

    #[test]
    fn test_reset_unlocks_and_restores_pending() {
        let state = CreatePaymentState::new();
        state.force_status(ModalStatus::Paid);
        state.reset();
        assert_eq!(state.locked_status(), None);
        assert_eq!(state.status.get_untracked(), ModalStatus::Pending);
    }
}
