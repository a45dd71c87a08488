//! Shared helpers for the integration suites: logging init, phase macros,
//! and instrumented sources for ordering verification.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, Once};
use std::task::{Context, Poll};

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging with trace-level output.
///
/// Safe to call multiple times; only initializes once.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

/// Log a test phase transition with a visual separator.
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(phase = %$name, "========================================");
        tracing::info!(phase = %$name, "TEST PHASE: {}", $name);
    };
}

/// Log test completion with summary.
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = %$name, "test completed successfully: {}", $name);
    };
}

/// Shared event log recording poll and settle order across sources.
pub type PollLog = Arc<Mutex<Vec<String>>>;

/// Creates an empty shared event log.
pub fn poll_log() -> PollLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Source that records when it is first polled and when it settles.
///
/// Stays pending for a configurable number of polls before settling, so a
/// suite can verify that one source fully settles before the next is ever
/// polled.
pub struct OrderedSource {
    id: usize,
    remaining: u32,
    outcome: Option<Result<i32, String>>,
    started: bool,
    log: PollLog,
}

impl OrderedSource {
    pub fn new(id: usize, polls: u32, outcome: Result<i32, String>, log: &PollLog) -> Self {
        Self {
            id,
            remaining: polls,
            outcome: Some(outcome),
            started: false,
            log: Arc::clone(log),
        }
    }
}

impl Future for OrderedSource {
    type Output = Result<i32, String>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if !this.started {
            this.started = true;
            this.log.lock().unwrap().push(format!("start:{}", this.id));
        }
        if this.remaining > 0 {
            this.remaining -= 1;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        this.log.lock().unwrap().push(format!("settle:{}", this.id));
        Poll::Ready(this.outcome.take().expect("polled after completion"))
    }
}

/// Snapshot of the event log as plain strings.
pub fn events(log: &PollLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
