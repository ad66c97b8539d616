/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung
/// (Layer, Auswahl, Status, View).
mod app_state;
mod selection;
mod status;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use status::{StatusSnapshot, StatusState};
pub use view::{ViewState, ZoomRequest};
