use async_trait::async_trait;

/// Boxed clipboard provider.
pub type ClipboardProvider<E> =
    Box<dyn ClipboardSink<Error = E> + Send + Sync + 'static>;

/// Write-only access to a clipboard.
#[async_trait]
pub trait ClipboardSink {
    /// Error type.
    type Error: std::error::Error + std::fmt::Debug + Send + 'static;

    /// Place text onto the clipboard.
    async fn set_text(&self, text: &str) -> Result<(), Self::Error>;
}
