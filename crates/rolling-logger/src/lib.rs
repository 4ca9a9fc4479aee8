//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a bounded
//! circular buffer and forwards each line to an optional sink (for the
//! browser this is the devtools console).

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

pub use tracing_subscriber::filter::LevelFilter;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Callback receiving every formatted line
pub type Sink = Arc<dyn Fn(&LogLine) + Send + Sync>;

// ========================
// Errors
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum LoggerError {
    /// A global subscriber was already installed
    AlreadyInitialized(String),
    /// Level name could not be parsed
    InvalidLevel(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
            LoggerError::InvalidLevel(level) => write!(f, "Invalid log level: {}", level),
        }
    }
}

impl std::error::Error for LoggerError {}

// ========================
// Log Lines and Buffer
// ========================

/// One captured event
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer of recent lines, cheap to clone and share
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            // Grows on demand; `capacity` may come from user config
            lines: Arc::new(Mutex::new(VecDeque::new())),
            capacity,
        }
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<LogLine>> {
        // A panic while holding the lock leaves the deque intact
        match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: LogLine) {
        let mut lines = self.guard();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.guard().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

// ========================
// Tracing Layer
// ========================

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Layer writing every event into a [`LogBuffer`]
pub struct RollingLayer {
    buffer: LogBuffer,
    sink: Option<Sink>,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, sink: None }
    }

    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = LogLine {
            timestamp: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: format!("{}{}", visitor.message, visitor.fields),
        };

        if let Some(sink) = &self.sink {
            sink(&line);
        }
        self.buffer.push(line);
    }
}

// ========================
// Global Installation
// ========================

/// Parse a level name such as `"info"` or `"debug"`
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    name.trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggerError::InvalidLevel(name.to_string()))
}

/// Builder for the global rolling logger
pub struct RollingLogger {
    capacity: usize,
    max_level: LevelFilter,
    sink: Option<Sink>,
}

impl Default for RollingLogger {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_level: LevelFilter::INFO,
            sink: None,
        }
    }
}

impl RollingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }

    pub fn sink(mut self, sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Build the layer without installing it
    pub fn layer(self) -> (RollingLayer, LogBuffer) {
        let buffer = LogBuffer::new(self.capacity);
        let mut layer = RollingLayer::new(buffer.clone());
        if let Some(sink) = self.sink {
            layer = layer.with_sink(sink);
        }
        (layer, buffer)
    }

    /// Install as the global default subscriber
    pub fn init(self) -> Result<LogBuffer, LoggerError> {
        let max_level = self.max_level;
        let (layer, buffer) = self.layer();
        tracing_subscriber::registry()
            .with(max_level)
            .with(layer)
            .try_init()
            .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push(line("one"));
        buffer.push(line("two"));
        buffer.push(line("three"));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].message, "two");
        assert_eq!(lines[1].message, "three");
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = LogBuffer::new(0);
        buffer.push(line("a"));
        buffer.push(line("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines()[0].message, "b");
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let buffer = LogBuffer::new(usize::MAX);
        buffer.push(line("only"));
        assert_eq!(buffer.capacity(), usize::MAX);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let (layer, buffer) = RollingLogger::new()
            .capacity(8)
            .sink(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .layer();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 3, "saved list");
            tracing::warn!("quota exceeded");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, Level::INFO);
        assert_eq!(lines[0].message, "saved list count=3");
        assert_eq!(lines[1].level, Level::WARN);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_line_display() {
        let text = line("hello").to_string();
        assert!(text.contains(" INFO test: hello"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Ok(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN "), Ok(LevelFilter::WARN));
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidLevel(_))));
    }
}
