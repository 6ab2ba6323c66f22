#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the tracing filter, e.g. `diffmatch=debug`.
pub const LOG_ENV: &str = "DIFFMATCH_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Backtrace frames that say nothing about the failing test.
const NOISE_PREFIXES: &[&str] = &[
    // test harness
    "test::run_test",
    "test::__rust_begin_short_backtrace",
    // unwinding
    "std::panicking::",
    "std::panic::",
    "core::panicking::",
    "std::sys::backtrace::",
    "core::ops::function::FnOnce::call_once",
    // assertion internals; the caller's frame is the useful one
    "diffmatch_assert::matching::",
];

fn is_noise(name: &str) -> bool {
    NOISE_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Parse a `Targets` filter from `directives`, falling back to everything at TRACE.
fn log_filter(directives: Option<&str>) -> Targets {
    directives
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

/// Installs the backtrace printer and the tracing subscriber, once per process.
static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    // Uptime is measured from the first test that calls `setup`.
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Medium)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| frame.name.as_deref().is_none_or(|name| !is_noise(name)))
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::AlwaysAnsi,
        )));

    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());

    // Another subscriber may already be installed by the host; keep it.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(Uptime)
                .with_target(false)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_test_writer()
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Set up tracing and backtraces for a test.
///
/// Safe to call from every test: initialization happens once per process,
/// under both `cargo test` and `cargo nextest run`.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

/// An error type that panics when it's built (such as when you use `?`
/// to coerce to it)
#[derive(Debug)]
pub struct IPanic;

impl<E> From<E> for IPanic
where
    E: core::error::Error + Send + Sync,
{
    #[track_caller]
    fn from(value: E) -> Self {
        panic!("from: {}: {value}", core::panic::Location::caller())
    }
}

/// The text a reader sees in a rendered report: ANSI escape sequences and
/// HTML tags removed, HTML entities decoded.
pub fn visible_text(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut chars = rendered.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\x1b' => {
                // CSI: ESC [ params... final byte in @..=~
                if chars.next_if_eq(&'[').is_some() {
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
            }
            '<' => {
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                }
            }
            c => out.push(c),
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
