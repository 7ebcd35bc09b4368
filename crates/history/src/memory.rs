use crate::{HistoryList, HistoryStorage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store the password history in memory.
///
/// Backs tests and headless use; contents are lost on drop.
/// Clones share the same underlying list.
pub struct MemoryHistoryProvider<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    history: Arc<Mutex<HistoryList>>,
    marker: std::marker::PhantomData<E>,
}

impl<E> Clone for MemoryHistoryProvider<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            history: Arc::clone(&self.history),
            marker: std::marker::PhantomData,
        }
    }
}

impl<E> Default for MemoryHistoryProvider<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            history: Arc::new(Mutex::new(Default::default())),
            marker: std::marker::PhantomData,
        }
    }
}

impl<E> MemoryHistoryProvider<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    /// Create a memory provider seeded with a history.
    pub fn new(history: HistoryList) -> Self {
        Self {
            history: Arc::new(Mutex::new(history)),
            marker: std::marker::PhantomData,
        }
    }

    /// Snapshot of the stored history.
    pub async fn stored(&self) -> HistoryList {
        self.history.lock().await.clone()
    }
}

#[async_trait]
impl<E> HistoryStorage for MemoryHistoryProvider<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    type Error = E;

    async fn load_history(&self) -> Result<HistoryList, E> {
        Ok(self.history.lock().await.clone())
    }

    async fn save_history(&self, history: &HistoryList) -> Result<(), E> {
        let mut stored = self.history.lock().await;
        *stored = history.clone();
        Ok(())
    }
}
