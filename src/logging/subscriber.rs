//! Tracing subscriber setup: key=value console formatter and initialisation.
use std::fmt::Write as _;
use std::io::IsTerminal as _;

/// Environment variable that overrides the console filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "DOTLINK_LOG";

/// Target used for dry-run events.
pub(super) const DRY_RUN_TARGET: &str = "dotlink::dry_run";

/// Collects the `message` and every other field of a [`tracing::Event`].
#[derive(Debug, Default)]
pub(crate) struct FieldCollector {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl tracing::field::Visit for FieldCollector {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

/// Quote a field value when it would otherwise be ambiguous in `key=value` form.
fn quote(value: &str) -> String {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"' || c == '=') {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

/// Render one event as `LEVEL message key=value ...`.
pub(crate) fn render_line(
    level: tracing::Level,
    target: &str,
    fields: &FieldCollector,
    ansi: bool,
) -> String {
    let (tag, color) = match level {
        tracing::Level::ERROR => ("ERROR", "\x1b[31m"),
        tracing::Level::WARN => ("WARN ", "\x1b[33m"),
        tracing::Level::INFO => ("INFO ", "\x1b[32m"),
        _ => ("DEBUG", "\x1b[2m"),
    };
    let mut line = if ansi {
        format!("{color}{tag}\x1b[0m ")
    } else {
        format!("{tag} ")
    };
    if target == DRY_RUN_TARGET {
        line.push_str("[dry run] ");
    }
    line.push_str(&fields.message);
    for (key, value) in &fields.fields {
        let _ = write!(line, " {key}={}", quote(value));
    }
    line
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits one `key=value`
/// line per event.
struct LinkFormatter {
    ansi: bool,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for LinkFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        writeln!(
            writer,
            "{}",
            render_line(*metadata.level(), metadata.target(), &fields, self.ansi)
        )
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Everything goes to stderr. The console shows warnings and errors by
/// default and everything down to `debug` when `verbose` is set;
/// [`LOG_ENV`] overrides both.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let console_layer = fmt::layer()
        .event_format(LinkFormatter {
            ansi: std::io::stderr().is_terminal(),
        })
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
