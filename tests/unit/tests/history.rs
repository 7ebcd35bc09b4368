use anyhow::Result;
use passgen_history::{
    HistoryList, HistoryStorage, JsonHistoryProvider, MemoryHistoryProvider,
};
use passgen_unit_tests::{memory_session, Error};

#[tokio::test]
async fn history_six_generations_keep_five() -> Result<()> {
    let (mut session, storage, _) = memory_session();
    session.load_history().await?;

    let mut generated = Vec::new();
    for _ in 0..6 {
        let password = session.generate().await?.expect("valid config");
        generated.push(password);
    }

    assert_eq!(5, session.history().len());

    // Most recent first, equal to the last five generated.
    generated.reverse();
    let expected: Vec<_> =
        generated.iter().take(5).map(|s| s.as_str()).collect();
    let entries: Vec<_> = session.history().iter().collect();
    assert_eq!(expected, entries);

    // Persisted wholesale on every mutation.
    assert_eq!(session.history(), &storage.stored().await);
    Ok(())
}

#[tokio::test]
async fn history_json_round_trip() -> Result<()> {
    let mut history = HistoryList::default();
    for index in 0..3 {
        history.record(format!("pass-{}", index));
    }

    let buffer = serde_json::to_vec(&history)?;
    let restored: HistoryList = serde_json::from_slice(&buffer)?;
    assert_eq!(history, restored);
    Ok(())
}

#[tokio::test]
async fn history_file_provider_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("history.json");
    let provider = JsonHistoryProvider::<Error>::new(&path);

    let mut history = HistoryList::default();
    history.record("xK9!mQ2p".to_owned());
    history.record("7hT$wZ4n".to_owned());

    provider.save_history(&history).await?;
    let restored = provider.load_history().await?;
    assert_eq!(history, restored);
    Ok(())
}

#[tokio::test]
async fn history_file_provider_absent_is_empty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let provider =
        JsonHistoryProvider::<Error>::new(dir.path().join("missing.json"));
    let history = provider.load_history().await?;
    assert!(history.is_empty());
    Ok(())
}

#[tokio::test]
async fn history_file_provider_malformed_is_empty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("history.json");
    tokio::fs::write(&path, b"not json {").await?;

    let provider = JsonHistoryProvider::<Error>::new(&path);
    let history = provider.load_history().await?;
    assert!(history.is_empty());
    Ok(())
}

#[tokio::test]
async fn history_memory_provider_round_trip() -> Result<()> {
    let provider = MemoryHistoryProvider::<Error>::default();
    let mut history = HistoryList::default();
    history.record("fR2&bN8c".to_owned());

    provider.save_history(&history).await?;
    assert_eq!(history, provider.load_history().await?);
    Ok(())
}
