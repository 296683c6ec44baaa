//! Toast-style notifications. Every rejection surfaces as a `Notice` through
//! a `Notifier` seam so the terminal front-end can print it and tests can
//! capture it.

use std::sync::Mutex;

use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Info,
            title: title.into(),
            description: description.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal with severity coloring.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        let title = match notice.severity {
            Severity::Info => style(notice.title).cyan().bold(),
            Severity::Success => style(notice.title).green().bold(),
            Severity::Destructive => style(notice.title).red().bold(),
        };
        println!("\n  {title}\n  {}\n", notice.description);
    }
}

/// Captures notices in memory. Used by tests to assert that a rejection's
/// only observable effect was the notification.
#[derive(Default)]
pub struct CapturingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notice> {
        let mut guard = self.notices.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *guard)
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capturing_notifier_records_in_order() {
        let notifier = CapturingNotifier::new();
        notifier.notify(Notice::info("first", "a"));
        notifier.notify(Notice::success("second", "b"));

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "first");
        assert_eq!(notices[1].title, "second");
        assert!(notifier.drain().is_empty(), "drain should empty the buffer");
    }
}
