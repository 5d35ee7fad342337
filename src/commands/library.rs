use tokio::sync::Mutex;

use crate::error::Result;
use crate::library::{self, LibraryBrowser};
use crate::templates::{catalog, BoilerplateScript, ScriptCategory};

/// Managed Tauri state holding the library browsing session.
pub struct LibraryState {
    browser: Mutex<LibraryBrowser>,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            browser: Mutex::new(LibraryBrowser::default()),
        }
    }
}

/// The full, unfiltered catalog.
#[tauri::command]
pub async fn get_catalog() -> Vec<ScriptCategory> {
    catalog().to_vec()
}

/// Updates the search query and returns the filtered catalog view.
#[tauri::command]
pub async fn search_scripts(
    query: String,
    state: tauri::State<'_, LibraryState>,
) -> Result<Vec<ScriptCategory>> {
    let mut browser = state.browser.lock().await;
    browser.set_search_query(&query);
    Ok(browser.filtered_categories())
}

/// Flips a category's expanded state and returns the expanded set.
#[tauri::command]
pub async fn toggle_category(
    category_id: String,
    state: tauri::State<'_, LibraryState>,
) -> Result<Vec<String>> {
    let mut browser = state.browser.lock().await;
    browser.toggle_category(&category_id);
    Ok(browser.expanded_categories().to_vec())
}

/// Validates a drag-and-drop payload and returns the script record it holds.
/// The dropped script's template is shown verbatim — no templating applied.
#[tauri::command]
pub async fn resolve_drop_payload(payload: String) -> Result<BoilerplateScript> {
    library::parse_drag_payload(&payload)
}
