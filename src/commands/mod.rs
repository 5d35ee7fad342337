pub mod compose;
pub mod export;
pub mod history;
pub mod library;
pub mod preview;
