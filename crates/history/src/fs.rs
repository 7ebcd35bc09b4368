use crate::{Error, HistoryList, HistoryStorage, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Store the password history in a file as JSON.
///
/// The document is read once and overwritten wholesale on every
/// save; there is no schema version.
pub struct JsonHistoryProvider<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    path: PathBuf,
    marker: std::marker::PhantomData<E>,
}

impl<E> JsonHistoryProvider<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    /// Create a new history file provider.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            marker: std::marker::PhantomData,
        }
    }

    /// Path to the history document.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_document(&self) -> Result<HistoryList> {
        if tokio::fs::try_exists(&self.path).await? {
            let content = tokio::fs::read(&self.path).await?;
            match serde_json::from_slice::<HistoryList>(&content) {
                Ok(history) => Ok(history),
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        "history::malformed_document");
                    Ok(Default::default())
                }
            }
        } else {
            Ok(Default::default())
        }
    }

    async fn write_document(&self, history: &HistoryList) -> Result<()> {
        let buf = serde_json::to_vec_pretty(history)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, buf).await?;
        Ok(())
    }
}

#[async_trait]
impl<E> HistoryStorage for JsonHistoryProvider<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    type Error = E;

    async fn load_history(&self) -> std::result::Result<HistoryList, E> {
        Ok(self.read_document().await?)
    }

    async fn save_history(
        &self,
        history: &HistoryList,
    ) -> std::result::Result<(), E> {
        Ok(self.write_document(history).await?)
    }
}
