//! One-shot render trigger
//!
//! The render pass runs exactly once per page load: immediately when the
//! document is already parsed at startup, otherwise when the one-time ready
//! callback fires. The trigger moves through two phases, `Pending` then
//! `Fired`, and never goes back.

use std::cell::Cell;
use std::rc::Rc;

/// Document readiness capability.
pub trait ReadySignal {
    /// Whether initial structural parsing has completed.
    fn is_parsed(&self) -> bool;

    /// Register a callback that fires at most once, after parsing completes.
    /// Registration is permanent; the callback cannot be removed.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);
}

/// Where a [`RenderTrigger`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Waiting for the ready signal.
    Pending,
    /// The job has been attempted.
    Fired,
}

/// A job scheduled to run once against a [`ReadySignal`].
pub struct RenderTrigger {
    phase: Rc<Cell<TriggerPhase>>,
}

impl RenderTrigger {
    /// Schedule `job`, running it synchronously if the signal already
    /// reports the document as parsed.
    pub fn install<S: ReadySignal>(signal: &S, job: impl FnOnce() + 'static) -> Self {
        let phase = Rc::new(Cell::new(TriggerPhase::Pending));

        let marker = Rc::clone(&phase);
        let fire = move || {
            marker.set(TriggerPhase::Fired);
            job();
        };

        if signal.is_parsed() {
            fire();
        } else {
            signal.on_ready(Box::new(fire));
        }

        Self { phase }
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase.get()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeSignal {
        parsed: bool,
        slot: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    impl FakeSignal {
        fn new(parsed: bool) -> Self {
            Self {
                parsed,
                slot: RefCell::new(None),
            }
        }

        fn fire(&self) {
            if let Some(callback) = self.slot.borrow_mut().take() {
                callback();
            }
        }

        fn has_registration(&self) -> bool {
            self.slot.borrow().is_some()
        }
    }

    impl ReadySignal for FakeSignal {
        fn is_parsed(&self) -> bool {
            self.parsed
        }

        fn on_ready(&self, callback: Box<dyn FnOnce()>) {
            *self.slot.borrow_mut() = Some(callback);
        }
    }

    #[test]
    fn fires_immediately_when_already_parsed() {
        let signal = FakeSignal::new(true);
        let runs = Rc::new(Cell::new(0));

        let counter = Rc::clone(&runs);
        let trigger = RenderTrigger::install(&signal, move || counter.set(counter.get() + 1));

        assert_eq!(runs.get(), 1);
        assert_eq!(trigger.phase(), TriggerPhase::Fired);
        assert!(!signal.has_registration());
    }

    #[test]
    fn defers_until_the_ready_signal_fires() {
        let signal = FakeSignal::new(false);
        let runs = Rc::new(Cell::new(0));

        let counter = Rc::clone(&runs);
        let trigger = RenderTrigger::install(&signal, move || counter.set(counter.get() + 1));

        assert_eq!(runs.get(), 0);
        assert_eq!(trigger.phase(), TriggerPhase::Pending);

        signal.fire();
        assert_eq!(runs.get(), 1);
        assert_eq!(trigger.phase(), TriggerPhase::Fired);

        // the one-shot callback is consumed
        signal.fire();
        assert_eq!(runs.get(), 1);
    }
}
