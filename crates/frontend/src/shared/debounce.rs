//! Отложенный запуск действия до паузы во вводе

use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Source of cancellable one-shot timers. Dropping a handle cancels its timer.
pub trait TimerScheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` through gloo
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerScheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        Timeout::new(delay_ms, callback)
    }
}

/// Each `trigger` cancels the pending action and restarts the delay.
pub struct Debouncer<S: TimerScheduler = BrowserTimers> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: TimerScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn trigger(&self, action: impl FnOnce() + 'static) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(action));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    type Callback = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct ClockState {
        now: u32,
        next_id: u64,
        timers: Vec<(u64, u32, Callback)>,
    }

    #[derive(Clone, Default)]
    struct ManualClock(Rc<RefCell<ClockState>>);

    struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<ClockState>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.clock.borrow_mut().timers.retain(|(id, _, _)| *id != self.id);
        }
    }

    impl TimerScheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut state = self.0.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            let due = state.now + delay_ms;
            state.timers.push((id, due, callback));
            ManualHandle {
                id,
                clock: self.0.clone(),
            }
        }
    }

    impl ManualClock {
        fn advance(&self, ms: u32) {
            let due: Vec<Callback> = {
                let mut state = self.0.borrow_mut();
                state.now += ms;
                let now = state.now;
                let (ready, waiting): (Vec<_>, Vec<_>) =
                    state.timers.drain(..).partition(|(_, at, _)| *at <= now);
                state.timers = waiting;
                ready.into_iter().map(|(_, _, cb)| cb).collect()
            };
            for callback in due {
                callback();
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let make = move |value: &str| -> Box<dyn FnOnce()> {
            let sink = sink.clone();
            let value = value.to_string();
            Box::new(move || sink.borrow_mut().push(value))
        };
        (calls, make)
    }

    #[test]
    fn test_rapid_events_collapse_into_one_call() {
        let clock = ManualClock::default();
        let debouncer = Debouncer::new(clock.clone(), 500);
        let (calls, make) = recorder();

        for value in ["a", "ac", "acm", "acme"] {
            debouncer.trigger(make(value));
            clock.advance(100);
        }
        assert!(calls.borrow().is_empty());

        clock.advance(500);
        assert_eq!(*calls.borrow(), vec!["acme".to_string()]);
    }

    #[test]
    fn test_quiet_period_restarts_on_each_event() {
        let clock = ManualClock::default();
        let debouncer = Debouncer::new(clock.clone(), 500);
        let (calls, make) = recorder();

        debouncer.trigger(make("1"));
        clock.advance(499);
        debouncer.trigger(make("12"));
        clock.advance(499);
        assert!(calls.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*calls.borrow(), vec!["12".to_string()]);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let clock = ManualClock::default();
        let debouncer = Debouncer::new(clock.clone(), 500);
        let (calls, make) = recorder();

        debouncer.trigger(make("first"));
        clock.advance(600);
        debouncer.trigger(make("second"));
        clock.advance(600);
        assert_eq!(
            *calls.borrow(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_cancel_drops_pending_action() {
        let clock = ManualClock::default();
        let debouncer = Debouncer::new(clock.clone(), 500);
        let (calls, make) = recorder();

        debouncer.trigger(make("x"));
        debouncer.cancel();
        clock.advance(1000);
        assert!(calls.borrow().is_empty());
    }
}
