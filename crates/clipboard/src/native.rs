use crate::{Error, Result};
use async_trait::async_trait;
use passgen_core::ClipboardSink;

/// Native system clipboard.
pub struct NativeClipboard<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    marker: std::marker::PhantomData<E>,
}

impl<E> NativeClipboard<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    /// Create a native clipboard.
    pub fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

impl<E> Default for NativeClipboard<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> ClipboardSink for NativeClipboard<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    type Error = E;

    async fn set_text(&self, text: &str) -> std::result::Result<(), E> {
        self.write_text(text)?;
        tracing::debug!("clipboard::set_text");
        Ok(())
    }
}
