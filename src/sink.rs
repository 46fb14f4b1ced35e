use std::sync::Mutex;

/// Line-oriented sink for progress and diagnostic messages.
///
/// In a pipeline this is the build log. The orchestrator treats the sink as
/// optional; when none is attached, messages drop to the internal debug log
/// and never raise an error.
pub trait ProgressSink: Send + Sync {
    fn line(&self, message: &str);
}

/// Sink that writes progress lines to stdout, for CLI runs.
pub struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn line(&self, message: &str) {
        println!("{}", message);
    }
}

/// Sink that records lines in memory, for tests.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl ProgressSink for MemorySink {
    fn line(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}
