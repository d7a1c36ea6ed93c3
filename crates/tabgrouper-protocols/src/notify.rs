//! User notification hook.

use async_trait::async_trait;

/// Fire-and-forget notification sink.
///
/// Presentation is the host's concern; failures are swallowed by
/// implementations.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, message: &str);
}

/// Notifier that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _title: &str, _message: &str) {}
}
