use crate::highlight::{self, HighlightedLine};
use crate::history;

/// Line-by-line cosmetic highlighting for the preview pane.
#[tauri::command]
pub async fn highlight_script(script: String) -> Vec<HighlightedLine> {
    highlight::highlight(&script)
}

/// Compact one-line summary used by the history list.
#[tauri::command]
pub async fn preview_snippet(content: String) -> String {
    history::preview(&content)
}
