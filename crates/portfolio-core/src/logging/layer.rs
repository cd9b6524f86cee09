//! Subscriber assembly and the in-memory recording layer.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};

use super::entry::LogRecord;
use crate::error::{PortfolioError, PortfolioResult};

/// Shared, cloneable store of captured events.
#[derive(Clone, Default)]
pub struct LogBuffer {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: LogRecord) {
        self.records.lock().push(record);
    }

    /// Snapshot of every captured event, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn warnings(&self) -> Vec<LogRecord> {
        self.records.lock().iter().filter(|r| r.is_warning()).cloned().collect()
    }

    pub fn errors(&self) -> Vec<LogRecord> {
        self.records.lock().iter().filter(|r| r.is_error()).cloned().collect()
    }

    /// Whether any event at `level` has a message containing `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        let level = level.as_str().to_lowercase();
        self.records
            .lock()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

/// A tracing Layer that keeps events in a [`LogBuffer`].
pub struct RecordingLayer {
    buffer: LogBuffer,
}

impl RecordingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let mut record = LogRecord::new(
            metadata.level().as_str().to_lowercase(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        record.fields = visitor.fields;
        self.buffer.push(record);
    }
}

/// Visitor that extracts fields from tracing events.
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for RecordVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::String(value.to_string()));
    }
}

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    level: Level,
    ansi: bool,
    timestamps: bool,
    recorder: Option<LogBuffer>,
}

impl LoggingBuilder {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ansi: true,
            timestamps: true,
            recorder: None,
        }
    }

    /// Plain output, for sinks that do not understand escape codes.
    pub fn without_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Omit timestamps (no system clock on wasm32-unknown-unknown).
    pub fn without_time(mut self) -> Self {
        self.timestamps = false;
        self
    }

    /// Also capture events into `buffer`.
    pub fn with_recorder(mut self, buffer: LogBuffer) -> Self {
        self.recorder = Some(buffer);
        self
    }

    /// Build the subscriber without installing it.
    pub fn build<W>(self, writer: W) -> impl Subscriber + Send + Sync
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let fmt = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(self.ansi);
        let fmt: Box<dyn Layer<Registry> + Send + Sync> = if self.timestamps {
            Box::new(fmt)
        } else {
            Box::new(fmt.without_time())
        };

        tracing_subscriber::registry()
            .with(fmt)
            .with(self.recorder.map(RecordingLayer::new))
            .with(LevelFilter::from_level(self.level))
    }

    /// Install as the global default.
    pub fn init<W>(self, writer: W) -> PortfolioResult<()>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        tracing::subscriber::set_global_default(self.build(writer))
            .map_err(|e| PortfolioError::Config(format!("logging already initialized: {}", e)))
    }
}
