use log::Level;

/// Target used for records forwarded to the `log` facade.
pub const LOG_TARGET: &str = "mogi";

/// Receives diagnostics emitted by the render context.
///
/// Load failures, ignored resizes, skipped degenerate draws and backend errors
/// are reported here. The default sink forwards to `log`.
pub trait DiagnosticSink {
    fn record(&mut self, level: Level, message: &str);
}

/// Forwards every record to the `log` facade under [`LOG_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{message}");
    }
}

/// A single captured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Keeps records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<Record>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records at `level` or more severe.
    pub fn at_least(&self, level: Level) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.level <= level)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, level: Level, message: &str) {
        self.records.push(Record {
            level,
            message: message.to_owned(),
        });
    }
}

/// Lets a caller keep a handle to a sink that the context also writes to.
impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn record(&mut self, level: Level, message: &str) {
        self.borrow_mut().record(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.record(Level::Warn, "first");
        sink.record(Level::Debug, "second");
        let msgs: Vec<_> = sink.records().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(msgs, ["first", "second"]);
    }

    #[test]
    fn at_least_filters_by_severity() {
        let mut sink = MemorySink::new();
        sink.record(Level::Error, "boom");
        sink.record(Level::Warn, "hmm");
        sink.record(Level::Trace, "noise");
        assert_eq!(sink.at_least(Level::Warn).count(), 2);
    }

    #[test]
    fn shared_sink_sees_writes() {
        let shared = Rc::new(RefCell::new(MemorySink::new()));
        let mut handle = shared.clone();
        handle.record(Level::Info, "hello");
        assert_eq!(shared.borrow().records().len(), 1);
    }

    #[test]
    fn log_sink_does_not_panic_without_logger() {
        LogSink.record(Level::Info, "no logger installed");
    }
}
