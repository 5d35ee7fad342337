use serde::Serialize;

/// All errors that can surface through the IPC command layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid script payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Custom(String),
}

// Tauri requires error types to implement Serialize for IPC transport.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
