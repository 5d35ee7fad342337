use tauri::Manager;
use tracing_subscriber::EnvFilter;

mod commands;
pub mod composer;
pub mod error;
pub mod highlight;
pub mod history;
pub mod library;
pub mod templates;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .manage(commands::library::LibraryState::default())
        .manage(commands::compose::GeneratorState::default())
        .manage(commands::history::HistoryState::default())
        .invoke_handler(tauri::generate_handler![
            commands::library::get_catalog,
            commands::library::search_scripts,
            commands::library::toggle_category,
            commands::library::resolve_drop_payload,
            commands::compose::generate_script,
            commands::compose::get_generator_status,
            commands::history::load_history,
            commands::history::save_script,
            commands::history::get_history,
            commands::preview::highlight_script,
            commands::preview::preview_snippet,
            commands::export::copy_script,
            commands::export::download_script,
        ])
        .on_window_event(|_window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                // Abort any in-flight generation when the window is closed
                if let Some(state) = _window.try_state::<commands::compose::GeneratorState>() {
                    state.inner().kill_sync();
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("failed to run Bash Buddy Builder");
}
