use async_trait::async_trait;
use passgen_core::constants::HISTORY_LIMIT;
use serde::{Deserialize, Serialize};

/// Boxed storage provider.
pub type HistoryStorageProvider<E> =
    Box<dyn HistoryStorage<Error = E> + Send + Sync + 'static>;

/// Storage for the password history.
#[async_trait]
pub trait HistoryStorage {
    /// Error type.
    type Error: std::error::Error + std::fmt::Debug + Send + 'static;

    /// Load the history document from storage.
    ///
    /// Absent or malformed storage yields an empty history.
    async fn load_history(&self) -> Result<HistoryList, Self::Error>;

    /// Overwrite the history document in storage.
    async fn save_history(
        &self,
        history: &HistoryList,
    ) -> Result<(), Self::Error>;
}

/// Bounded list of generated passwords, most recent first.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList(Vec<String>);

impl HistoryList {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterator over the entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Most recently recorded password.
    pub fn most_recent(&self) -> Option<&str> {
        self.0.first().map(|s| s.as_str())
    }

    /// Record a newly generated password.
    ///
    /// The password is prepended and the list truncated to
    /// [HISTORY_LIMIT] entries.
    pub fn record(&mut self, password: String) {
        self.0.insert(0, password);
        self.0.truncate(HISTORY_LIMIT);
    }
}

impl From<Vec<String>> for HistoryList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}
