//! Application State: zentrale Datenhaltung.

mod app_state;
mod ui;
mod view;

pub use app_state::AppState;
pub use ui::UiState;
pub use view::ViewState;
