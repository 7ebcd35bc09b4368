use async_trait::async_trait;
use passgen_core::ClipboardSink;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory clipboard double.
///
/// Clones share the same contents so a test can keep a handle
/// after handing the clipboard to a session controller.
pub struct MemoryClipboard<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    contents: Arc<Mutex<Option<String>>>,
    marker: std::marker::PhantomData<E>,
}

impl<E> Clone for MemoryClipboard<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            contents: Arc::clone(&self.contents),
            marker: std::marker::PhantomData,
        }
    }
}

impl<E> Default for MemoryClipboard<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MemoryClipboard<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    /// Create an empty memory clipboard.
    pub fn new() -> Self {
        Self {
            contents: Arc::new(Mutex::new(None)),
            marker: std::marker::PhantomData,
        }
    }

    /// Last text written to the clipboard.
    pub async fn last_text(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl<E> ClipboardSink for MemoryClipboard<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    type Error = E;

    async fn set_text(&self, text: &str) -> Result<(), E> {
        let mut contents = self.contents.lock().await;
        *contents = Some(text.to_owned());
        Ok(())
    }
}
