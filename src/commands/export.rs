use crate::error::{AppError, Result};

/// Pushes the script text to the system clipboard.
#[tauri::command]
pub async fn copy_script(script: String) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(script)
        .map_err(|e| AppError::Clipboard(e.to_string()))?;
    Ok(())
}

/// Writes the exact script bytes to `script.sh` in the user's Downloads
/// directory (home directory as fallback) and returns the written path.
#[tauri::command]
pub async fn download_script(script: String) -> Result<String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| AppError::Custom("Cannot find a downloads directory".into()))?;

    let path = dir.join("script.sh");
    std::fs::write(&path, script.as_bytes())?;
    Ok(path.to_string_lossy().to_string())
}
