use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use expected_rail::hook::{Abort, Minimal, Traced};
use expected_rail::Expected;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Counts events per level; spans are ignored.
#[derive(Default)]
struct Counter {
    trace: AtomicUsize,
    warn: AtomicUsize,
    error: AtomicUsize,
}

struct CountingSubscriber(Arc<Counter>);

impl Subscriber for CountingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let level = *event.metadata().level();
        let slot = if level == Level::TRACE {
            &self.0.trace
        } else if level == Level::WARN {
            &self.0.warn
        } else if level == Level::ERROR {
            &self.0.error
        } else {
            return;
        };
        slot.fetch_add(1, Ordering::Relaxed);
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn counted<R>(f: impl FnOnce() -> R) -> (R, Arc<Counter>) {
    let counter = Arc::new(Counter::default());
    let subscriber = CountingSubscriber(Arc::clone(&counter));
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counter)
}

#[test]
fn set_events_are_traced() {
    let (value, counter) = counted(|| {
        let ok = Expected::<u16, String, Traced<Abort>>::from_value(8080);
        let failed = Expected::<u16, String, Traced<Abort>>::from_error("down".to_string());
        assert!(failed.has_error());
        ok.value()
    });
    assert_eq!(value, 8080);
    assert_eq!(counter.trace.load(Ordering::Relaxed), 2);
    assert_eq!(counter.error.load(Ordering::Relaxed), 0);
}

#[test]
fn wrong_side_access_is_logged_before_delegating() {
    let (value, counter) = counted(|| {
        Expected::<u16, String, Traced<Minimal>>::from_error("down".to_string()).value()
    });
    assert_eq!(value, 0);
    assert_eq!(counter.error.load(Ordering::Relaxed), 1);
}

#[test]
fn flags_follow_the_wrapped_policy() {
    assert_eq!(
        Expected::<u16, String, Traced<Minimal>>::POLICY,
        Expected::<u16, String, Minimal>::POLICY
    );
    let mut slot = Expected::<u16, String, Traced<Minimal>>::empty();
    slot.assign_value(1);
    assert_eq!(slot.value(), 1);
}
