use chrono::Local;

use super::{SelectionState, StatusState, ViewState};
use crate::app::CommandLog;
use crate::core::{visible_station_count, LayerVisibility};
use crate::shared::DashboardOptions;

/// Hauptzustand der Anwendung.
///
/// Einziger Besitzer von Layer-Sichtbarkeit, Auswahl und Status;
/// Mutation ausschließlich über Commands im `AppController`.
pub struct AppState {
    /// Sichtbarkeit der sechs Karten-Layer
    pub layers: LayerVisibility,
    /// Selection-State
    pub selection: SelectionState,
    /// Status-State (Konnektivität, letzter Tick)
    pub status: StatusState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Karte, Netz)
    pub options: DashboardOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand des Dashboards.
    pub fn new() -> Self {
        Self {
            layers: LayerVisibility::new(),
            selection: SelectionState::new(),
            status: StatusState::new(Local::now()),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options: DashboardOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl der aktuell sichtbaren Bahnhöfe (für UI-Anzeige).
    pub fn visible_station_count(&self) -> usize {
        visible_station_count(&self.layers)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
