//! Tracing-backed [`Log`] implementation.
use super::subscriber::DRY_RUN_TARGET;
use super::types::{Level, LinkEvent, Log};

/// Forwards link events to the global [`tracing`] subscriber.
///
/// Each event becomes one `tracing` event at the event's [`Level`](super::Level),
/// carrying its paths as structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Look up a field of [`LinkEvent::fields`] by name.
fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

/// Emit `event` at a fixed level and target. Every field name an event can
/// carry is declared; absent ones are `None` and not recorded.
macro_rules! emit {
    ($target:expr, $level:expr, $event:expr) => {{
        let fields = $event.fields();
        tracing::event!(
            target: $target,
            $level,
            dotsPath = field(&fields, "dotsPath"),
            homePath = field(&fields, "homePath"),
            linkedTarget = field(&fields, "linkedTarget"),
            path = field(&fields, "path"),
            file = field(&fields, "file"),
            error = field(&fields, "error"),
            "{}",
            $event.message()
        )
    }};
}

impl Log for Logger {
    fn record(&self, event: &LinkEvent) {
        if matches!(event, LinkEvent::WouldLink { .. }) {
            emit!(DRY_RUN_TARGET, tracing::Level::INFO, event);
            return;
        }
        match event.level() {
            Level::Debug => emit!(module_path!(), tracing::Level::DEBUG, event),
            Level::Info => emit!(module_path!(), tracing::Level::INFO, event),
            Level::Warn => emit!(module_path!(), tracing::Level::WARN, event),
            Level::Error => emit!(module_path!(), tracing::Level::ERROR, event),
        }
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}
