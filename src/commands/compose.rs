use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tauri::ipc::Channel;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::composer;
use crate::error::{AppError, Result};
use crate::templates;

/// Cosmetic delay that stands in for "AI processing". Callers may pass their
/// own value, including zero.
pub const DEFAULT_DELAY_MS: u64 = 1000;

// ── Events ──────────────────────────────────────────────────────────────────

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum ComposeEvent {
    Started,
    #[serde(rename_all = "camelCase")]
    Completed { script: String },
}

// ── State ───────────────────────────────────────────────────────────────────

pub struct GeneratorState {
    task: Mutex<Option<JoinHandle<()>>>,
    generating: Arc<AtomicBool>,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            task: Mutex::new(None),
            generating: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl GeneratorState {
    /// Abort any in-flight generation synchronously (for window close handler).
    pub fn kill_sync(&self) {
        self.generating.store(false, Ordering::SeqCst);
        if let Ok(mut guard) = self.task.try_lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

// ── Commands ────────────────────────────────────────────────────────────────

/// Generates a script from the selected template and optional description.
///
/// Lookup failure is returned immediately and leaves all state untouched.
/// Otherwise the composition runs as a cancellable task: invoking the command
/// again while one is pending aborts the pending run, so only the latest
/// request ever reaches the preview.
#[tauri::command]
pub async fn generate_script(
    template_id: String,
    description: String,
    delay_ms: Option<u64>,
    on_event: Channel<ComposeEvent>,
    state: tauri::State<'_, GeneratorState>,
) -> Result<()> {
    let Some(script) = templates::find_script(&template_id) else {
        return Err(AppError::TemplateNotFound(template_id));
    };

    // Only the latest request wins
    if let Some(pending) = state.task.lock().await.take() {
        pending.abort();
    }

    state.generating.store(true, Ordering::SeqCst);
    let generating = state.generating.clone();
    let template = script.template.clone();
    let delay = delay_ms.unwrap_or(DEFAULT_DELAY_MS);

    let handle = tokio::spawn(async move {
        let _ = on_event.send(ComposeEvent::Started);

        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let script = composer::compose(&template, &description);
        generating.store(false, Ordering::SeqCst);
        let _ = on_event.send(ComposeEvent::Completed { script });
    });

    *state.task.lock().await = Some(handle);
    Ok(())
}

#[tauri::command]
pub async fn get_generator_status(state: tauri::State<'_, GeneratorState>) -> Result<bool> {
    Ok(state.generating.load(Ordering::SeqCst))
}
