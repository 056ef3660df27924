//! Injected logging capability for service diagnostics.
//!
//! Handlers and the server lifecycle report through [`Logger`] rather than
//! writing to the console, so tests can observe what was logged.

use std::sync::Mutex;

/// Sink for human-readable diagnostic messages.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards messages to the global `tracing` subscriber at `INFO` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the messages logged so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
