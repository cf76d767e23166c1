/// Notifier port for user-facing notices
///
/// The core emits informational and error notices as plain text and never
/// renders them itself; a host decides how to display them.
pub trait Notifier {
    /// Reports an informational notice (e.g. "no build file found")
    fn info(&self, message: &str);

    /// Reports an error notice (e.g. "error parsing build file")
    fn error(&self, message: &str);
}
