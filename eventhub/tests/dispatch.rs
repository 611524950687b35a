//! End-to-end dispatch scenarios exercising the public API surface.

use std::sync::Arc;

use parking_lot::Mutex;

use eventhub::{DispatchError, Event, EventHub, HandlerError, Subscribable};

struct Tick {
    count: u64,
}

impl Event for Tick {
    const NAME: &'static str = "tick";
}

struct Reset;

impl Event for Reset {
    const NAME: &'static str = "reset";
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn two_handlers_receive_the_payload_in_order() {
    init_tracing();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut hub = EventHub::new();

    let h1 = Arc::clone(&calls);
    let h2 = Arc::clone(&calls);
    hub.on(move |tick: &Tick| {
        h1.lock().push(("h1", tick.count));
        Ok(())
    })
    .on(move |tick: &Tick| {
        h2.lock().push(("h2", tick.count));
        Ok(())
    });

    let delivered = hub.emit(&Tick { count: 42 }).unwrap();

    assert!(delivered);
    assert_eq!(*calls.lock(), vec![("h1", 42), ("h2", 42)]);
}

#[test]
fn emitting_with_no_subscribers_delivers_nothing() {
    init_tracing();
    let mut hub = EventHub::new();
    assert!(!hub.emit(&Tick { count: 42 }).unwrap());
}

#[test]
fn a_faulting_handler_stops_the_pass() {
    init_tracing();
    let reached_second = Arc::new(Mutex::new(false));
    let mut hub = EventHub::new();

    let flag = Arc::clone(&reached_second);
    hub.on(|_tick: &Tick| Err(HandlerError::new("boom")))
        .on(move |_tick: &Tick| {
            *flag.lock() = true;
            Ok(())
        });

    let err = hub.emit(&Tick { count: 1 }).unwrap_err();

    assert!(matches!(err, DispatchError::Handler { event: "tick", .. }));
    assert!(!*reached_second.lock());
}

#[test]
fn chained_subscriptions_across_channels_stay_isolated() {
    init_tracing();
    let ticks = Arc::new(Mutex::new(0_u32));
    let resets = Arc::new(Mutex::new(0_u32));
    let mut hub = EventHub::new();

    let tick_count = Arc::clone(&ticks);
    let reset_count = Arc::clone(&resets);
    hub.on(move |_tick: &Tick| {
        *tick_count.lock() += 1;
        Ok(())
    })
    .on(move |_reset: &Reset| {
        *reset_count.lock() += 1;
        Ok(())
    });

    hub.emit(&Tick { count: 1 }).unwrap();
    hub.emit(&Tick { count: 2 }).unwrap();
    hub.emit(&Reset).unwrap();

    assert_eq!(*ticks.lock(), 2);
    assert_eq!(*resets.lock(), 1);
}

// A clock that exposes only its subscribe surface; ticking is internal.
struct Clock {
    count: u64,
    events: EventHub,
}

impl Clock {
    fn new() -> Self {
        Self {
            count: 0,
            events: EventHub::new(),
        }
    }

    fn tick(&mut self) -> eventhub::DispatchResult<bool> {
        self.count += 1;
        self.events.emit(&Tick { count: self.count })
    }
}

impl Subscribable for Clock {
    fn subscriber(&mut self) -> eventhub::Subscriber<'_> {
        self.events.subscriber()
    }
}

#[test]
fn subscribable_types_expose_listening_but_not_publishing() {
    init_tracing();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut clock = Clock::new();

    let sink = Arc::clone(&seen);
    clock.subscriber().on(move |tick: &Tick| {
        sink.lock().push(tick.count);
        Ok(())
    });

    assert!(clock.tick().unwrap());
    assert!(clock.tick().unwrap());

    assert_eq!(*seen.lock(), vec![1, 2]);
}
