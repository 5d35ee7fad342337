use crate::error::{AppError, Result};
use crate::history::{HistoryStore, LoadReport, SavedScript};

/// Managed Tauri state owning the history store. `None` only when the home
/// directory cannot be resolved.
pub struct HistoryState {
    store: Option<HistoryStore>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            store: HistoryStore::default_path().map(HistoryStore::new),
        }
    }
}

impl HistoryState {
    fn store(&self) -> Result<&HistoryStore> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::Custom("Cannot find home directory".into()))
    }
}

/// Rehydrates saved scripts from disk. Called once by the frontend on startup;
/// `recovered` tells it to show a one-time warning about discarded data.
#[tauri::command]
pub async fn load_history(state: tauri::State<'_, HistoryState>) -> Result<LoadReport> {
    Ok(state.store()?.load().await)
}

/// Saves a script snapshot. Returns `None` (and changes nothing) for
/// whitespace-only content.
#[tauri::command]
pub async fn save_script(
    content: String,
    state: tauri::State<'_, HistoryState>,
) -> Result<Option<SavedScript>> {
    state.store()?.save(&content).await
}

/// Current history, most-recent-first. Loading an entry back into the preview
/// is just the frontend reading `entry.content` — the store is not mutated.
#[tauri::command]
pub async fn get_history(state: tauri::State<'_, HistoryState>) -> Result<Vec<SavedScript>> {
    Ok(state.store()?.entries().await)
}
