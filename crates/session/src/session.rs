use crate::{Error, Notice};
use passgen_core::{
    constants::{MIN_PASSWORD_LENGTH, NOTICE_TIMEOUT_MILLIS},
    rng, ClipboardProvider, Config,
};
use passgen_generator::PasswordGen;
use passgen_history::{HistoryList, HistoryStorageProvider};
use rand::Rng;
use std::sync::Arc;
use tokio::{
    sync::{broadcast, Mutex},
    time::{sleep, Duration},
};

/// Validate a generation configuration.
///
/// All-classes-disabled is reported before a bad length, and an
/// invalid length fails validation rather than being clamped.
pub fn validate(config: &Config) -> Result<(), Error> {
    if !config.has_charset() {
        return Err(Error::NoCharsetSelected);
    }
    match config.length {
        Some(length) if length >= MIN_PASSWORD_LENGTH => Ok(()),
        _ => Err(Error::LengthTooShort),
    }
}

struct NoticeState {
    seq: u64,
    current: Option<Notice>,
}

fn notice_channel() -> broadcast::Sender<Option<Notice>> {
    let (stream, _) = broadcast::channel(8);
    stream
}

/// Session controller for the password generator.
pub struct SessionController<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    config: Config,
    current: Option<String>,
    history: HistoryList,
    storage: HistoryStorageProvider<E>,
    clipboard: ClipboardProvider<E>,
    notice: Arc<Mutex<NoticeState>>,
    channel: broadcast::Sender<Option<Notice>>,
    timeout: Duration,
}

impl<E> SessionController<E>
where
    E: std::error::Error + std::fmt::Debug + Send + Sync + 'static,
{
    /// Create a session controller with the default configuration.
    pub fn new(
        storage: HistoryStorageProvider<E>,
        clipboard: ClipboardProvider<E>,
    ) -> Self {
        Self {
            config: Default::default(),
            current: None,
            history: Default::default(),
            storage,
            clipboard,
            notice: Arc::new(Mutex::new(NoticeState {
                seq: 0,
                current: None,
            })),
            channel: notice_channel(),
            timeout: Duration::from_millis(NOTICE_TIMEOUT_MILLIS),
        }
    }

    /// Load the persisted history.
    ///
    /// Invoked once at session start.
    pub async fn load_history(&mut self) -> Result<(), E> {
        self.history = self.storage.load_history().await?;
        Ok(())
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Current password, if one has been generated.
    pub fn current_password(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Generated password history, most recent first.
    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    /// Validate the current configuration.
    pub fn validate(&self) -> Result<(), Error> {
        validate(&self.config)
    }

    /// Generate a password using the default RNG.
    pub async fn generate(&mut self) -> Result<Option<String>, E> {
        self.generate_with(&mut rng()).await
    }

    /// Generate a password using the given source of randomness.
    ///
    /// On validation failure the matching notice is surfaced, the
    /// generator is not invoked and `None` is returned. On success
    /// the password becomes the current password, is prepended to
    /// the history and the history is persisted.
    pub async fn generate_with<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<String>, E> {
        if let Err(error) = self.validate() {
            self.post_notice((&error).into()).await;
            return Ok(None);
        }

        let password = PasswordGen::from(&self.config).one(rng);
        tracing::debug!(length = %password.len(), "session::generate");
        self.current = Some(password.clone());
        self.history.record(password.clone());
        self.storage.save_history(&self.history).await?;
        Ok(Some(password))
    }

    /// Copy the current password to the clipboard.
    ///
    /// With no current password nothing is written and a
    /// [Notice::NothingToCopy] notice is surfaced instead.
    pub async fn copy_current_password(&self) -> Result<(), E> {
        match self.current.as_deref() {
            Some(password) if !password.is_empty() => {
                self.clipboard.set_text(password).await?;
                tracing::debug!("session::copy");
                self.post_notice(Notice::PasswordCopied).await;
            }
            _ => self.post_notice(Notice::NothingToCopy).await,
        }
        Ok(())
    }

    /// Current transient notice, if any.
    pub async fn notice(&self) -> Option<Notice> {
        self.notice.lock().await.current
    }

    /// Subscribe to notice changes.
    ///
    /// Subscribers receive the notice when it is surfaced and
    /// `None` when it clears.
    pub fn subscribe(&self) -> broadcast::Receiver<Option<Notice>> {
        self.channel.subscribe()
    }

    /// Surface a transient notice and schedule its removal.
    ///
    /// The timer task is fire and forget; the sequence number
    /// ensures a stale timer never clears a newer notice.
    async fn post_notice(&self, notice: Notice) {
        let seq = {
            let mut state = self.notice.lock().await;
            state.seq += 1;
            state.current = Some(notice);
            state.seq
        };
        let _ = self.channel.send(Some(notice));

        let state = Arc::clone(&self.notice);
        let channel = self.channel.clone();
        let timeout = self.timeout;
        tokio::spawn(async move {
            sleep(timeout).await;
            let mut state = state.lock().await;
            if state.seq == seq && state.current.is_some() {
                state.current = None;
                let _ = channel.send(None);
            }
        });
    }
}
