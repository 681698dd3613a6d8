//! Test helper that records `tracing` events emitted on the current thread.

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

struct Capture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Run `f` and return every `(level, message)` it logged.
pub(crate) fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let capture = Capture {
        events: Arc::clone(&events),
    };
    {
        let _guard = tracing_subscriber::registry().with(capture).set_default();
        f();
    }
    let captured = events.lock().unwrap().clone();
    captured
}
