use crate::ports::outbound::Notifier;

/// StderrNotifier adapter for user notices
///
/// This adapter implements the Notifier port, writing notices to stderr
/// so they don't interfere with the rendered tree on stdout.
pub struct StderrNotifier;

impl StderrNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StderrNotifier {
    fn info(&self, message: &str) {
        eprintln!("💬 {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
