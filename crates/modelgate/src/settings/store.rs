//! File-backed persistence for the provider selection.
//!
//! The selection is stored as a small JSON document. Writes go to a temp
//! file that is fsynced and then renamed over the target.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::error::{SettingsError, SettingsResult};
use super::selection::ProviderSelection;

/// Confirmation shown after a successful save.
pub const SAVED_MESSAGE: &str = "Settings have been saved.";

/// On-disk layout. The provider is kept as a string so that a hand-edited
/// file with an unknown name still loads.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSettings {
    provider: String,
    #[serde(default)]
    model: String,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved selection, or the defaults when nothing was saved yet.
    pub async fn load(&self) -> SettingsResult<ProviderSelection> {
        Ok(self.load_saved().await?.unwrap_or_default())
    }

    /// Load the saved selection; `None` when no settings file exists.
    pub async fn load_saved(&self) -> SettingsResult<Option<ProviderSelection>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved settings");
                return Ok(None);
            }
            Err(e) => return Err(SettingsError::io(&self.path, e)),
        };
        let stored: StoredSettings = serde_json::from_str(&contents)?;
        Ok(Some(ProviderSelection::restore(
            Some(stored.provider.as_str()),
            Some(stored.model.as_str()),
        )))
    }

    pub async fn save(&self, selection: &ProviderSelection) -> SettingsResult<()> {
        let stored = StoredSettings {
            provider: selection.provider.to_string(),
            model: selection.model.clone(),
            updated_at: Utc::now(),
        };
        let data = serde_json::to_vec_pretty(&stored)?;

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::io(parent, e))?;
        }
        atomic_write_file(&self.path, &data).await?;

        info!(
            provider = %selection.provider,
            model = %selection.model,
            "Saved LLM provider settings"
        );
        Ok(())
    }
}

/// Write data to a temp file, fsync it, then atomically rename to the final path.
async fn atomic_write_file(final_path: &Path, data: &[u8]) -> SettingsResult<()> {
    let file_name = final_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("settings");
    let temp_path = final_path.with_file_name(format!("{}.{}.tmp", file_name, ulid::Ulid::new()));

    let mut file = fs::File::create(&temp_path)
        .await
        .map_err(|e| SettingsError::io(&temp_path, e))?;
    file.write_all(data)
        .await
        .map_err(|e| SettingsError::io(&temp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| SettingsError::io(&temp_path, e))?;
    fs::rename(&temp_path, final_path)
        .await
        .map_err(|e| SettingsError::io(final_path, e))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Provider;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().await.unwrap(), ProviderSelection::default());
    }

    #[tokio::test]
    async fn load_saved_distinguishes_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load_saved().await.unwrap(), None);

        store.save(&ProviderSelection::default()).await.unwrap();
        assert_eq!(
            store.load_saved().await.unwrap(),
            Some(ProviderSelection::default())
        );
    }

    #[tokio::test]
    async fn restored_openrouter_selection_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let selection = ProviderSelection::restore(Some("openrouter"), Some(""));
        store.save(&selection).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, selection);
        assert_eq!(loaded.model, "deepseek-r1-disitill-qwen-32b");
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("nested/dir/settings.json"));

        let mut selection = ProviderSelection::default();
        selection.select_provider(Provider::Anthropic);
        selection.set_model("claude-2");
        store.save(&selection).await.unwrap();

        assert_eq!(store.load().await.unwrap(), selection);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        store.save(&ProviderSelection::default()).await.unwrap();
        store.save(&ProviderSelection::default()).await.unwrap();

        let mut entries = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        entries.sort();
        assert_eq!(entries, vec!["settings.json".to_string()]);
    }

    #[tokio::test]
    async fn load_openrouter_without_model_applies_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"provider":"openrouter","model":"","updated_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let selection = SettingsStore::new(&path).load().await.unwrap();
        assert_eq!(selection.provider, Provider::OpenRouter);
        assert_eq!(selection.model, "deepseek-r1-disitill-qwen-32b");
    }

    #[tokio::test]
    async fn load_unknown_provider_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"provider":"mystery","updated_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let selection = SettingsStore::new(&path).load().await.unwrap();
        assert_eq!(selection.provider, Provider::OpenAI);
        assert!(selection.model.is_empty());
    }

    #[tokio::test]
    async fn load_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = SettingsStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
