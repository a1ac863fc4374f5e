use std::cell::Cell;

/// Монотонные номера запросов обновления таблицы.
///
/// Ответ применяется, только если его номер всё ещё последний выданный:
/// побеждает самый поздний отправленный запрос, а не самый поздний ответ.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));
    }

    #[test]
    fn test_older_ticket_becomes_stale() {
        let sequencer = RequestSequencer::new();
        let search = sequencer.issue();
        let pagination = sequencer.issue();
        // the slower search response arrives last and must be ignored
        assert!(sequencer.is_current(pagination));
        assert!(!sequencer.is_current(search));
    }
}
