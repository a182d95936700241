use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::StoredSession;
use crate::domain::ports::TokenStore;

// In-memory token store adapter. Clones share the same session.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    pub session: Arc<Mutex<StoredSession>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn save_token(&self, token: &str) -> Result<(), String> {
        self.session.lock().await.token = Some(token.to_string());
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>, String> {
        Ok(self.session.lock().await.token.clone())
    }

    async fn clear_token(&self) -> Result<(), String> {
        self.session.lock().await.token = None;
        Ok(())
    }

    async fn save_refresh_token(&self, token: &str) -> Result<(), String> {
        self.session.lock().await.refresh_token = Some(token.to_string());
        Ok(())
    }

    async fn get_refresh_token(&self) -> Result<Option<String>, String> {
        Ok(self.session.lock().await.refresh_token.clone())
    }

    async fn clear_refresh_token(&self) -> Result<(), String> {
        self.session.lock().await.refresh_token = None;
        Ok(())
    }
}

// JSON-file token store that survives process restarts.
// A missing file reads as an empty session.
#[derive(Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_bytes(&self) -> Result<Option<Vec<u8>>, String> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("failed to read {}: {err}", self.path.display())),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<StoredSession, String> {
        serde_json::from_slice(bytes)
            .map_err(|err| format!("corrupt token file {}: {err}", self.path.display()))
    }

    async fn read(&self) -> Result<StoredSession, String> {
        match self.read_bytes().await? {
            Some(bytes) => self.decode(&bytes),
            None => Ok(StoredSession::default()),
        }
    }

    // Writes a sibling temp file, then renames it over the target so a
    // crash mid-write never leaves a half-written session behind.
    async fn write(&self, session: &StoredSession) -> Result<(), String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| format!("failed to create {}: {err}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(session)
            .map_err(|err| format!("failed to encode token file: {err}"))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|err| format!("failed to write {}: {err}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| format!("failed to replace {}: {err}", self.path.display()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    // Writes always succeed over an unreadable file: it is replaced by an
    // empty session before the change is applied.
    async fn update(&self, apply: impl FnOnce(&mut StoredSession) + Send) -> Result<(), String> {
        let _guard = self.lock.lock().await;
        let mut session = match self.read_bytes().await? {
            Some(bytes) => self.decode(&bytes).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "discarding unreadable token file");
                StoredSession::default()
            }),
            None => StoredSession::default(),
        };
        apply(&mut session);
        self.write(&session).await
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save_token(&self, token: &str) -> Result<(), String> {
        let token = token.to_string();
        self.update(move |session| session.token = Some(token)).await
    }

    async fn get_token(&self) -> Result<Option<String>, String> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.token)
    }

    async fn clear_token(&self) -> Result<(), String> {
        self.update(|session| session.token = None).await
    }

    async fn save_refresh_token(&self, token: &str) -> Result<(), String> {
        let token = token.to_string();
        self.update(move |session| session.refresh_token = Some(token))
            .await
    }

    async fn get_refresh_token(&self) -> Result<Option<String>, String> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.refresh_token)
    }

    async fn clear_refresh_token(&self) -> Result<(), String> {
        self.update(|session| session.refresh_token = None).await
    }
}
