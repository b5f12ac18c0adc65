//! Transient user-visible notifications
//!
//! Every operation converts its failures into a single notification instead
//! of letting errors escape to a global handler. The capability is a trait so
//! the browser and composer receive it as an explicit dependency; tests
//! inject [`CapturingNotifier`] and assert on what was emitted.

use std::sync::Mutex;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Icon used by console output
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Success => "Success",
            Severity::Info => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        f.write_str(label)
    }
}

/// Fire-and-forget notification capability
pub trait Notifier: Send + Sync {
    /// Emit a transient, dismissible message
    fn notify(&self, severity: Severity, message: &str);
}

/// Console notifier used by the CLI
///
/// Prints to stdout and mirrors the event into tracing.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        println!("{} {}", severity.icon(), message);
        match severity {
            Severity::Error => tracing::error!(message, "notification"),
            Severity::Warning => tracing::warn!(message, "notification"),
            _ => tracing::info!(message, "notification"),
        }
    }
}

/// Test double that records every emitted notification
#[derive(Debug, Default)]
pub struct CapturingNotifier {
    events: Mutex<Vec<(Severity, String)>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().expect("notifier lock").clone()
    }

    /// Messages emitted at a given severity
    pub fn messages_with(&self, severity: Severity) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .expect("notifier lock")
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capturing_notifier_records_in_order() {
        let notifier = CapturingNotifier::new();
        notifier.notify(Severity::Info, "first");
        notifier.notify(Severity::Error, "second");

        let events = notifier.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], (Severity::Info, "first".to_string()));
        assert_eq!(events[1], (Severity::Error, "second".to_string()));
    }

    #[test]
    fn test_messages_with_filters_by_severity() {
        let notifier = CapturingNotifier::new();
        notifier.notify(Severity::Warning, "w1");
        notifier.notify(Severity::Error, "e1");
        notifier.notify(Severity::Warning, "w2");

        assert_eq!(notifier.messages_with(Severity::Warning), vec!["w1", "w2"]);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "Error");
        assert_eq!(Severity::Info.to_string(), "Information");
    }
}
