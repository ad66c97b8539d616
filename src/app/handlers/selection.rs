//! Handler für die Stations-Auswahl.

use crate::app::AppState;
use crate::core::Station;

/// Wählt eine Station aus. Eine bestehende Auswahl wird vollständig
/// ersetzt, nie zusammengeführt.
pub fn select_station(state: &mut AppState, station: &'static Station) {
    state.selection.selected = Some(station);
    log::info!("Station ausgewaehlt: {} ({})", station.name, station.id);
}

/// Hebt die aktuelle Auswahl auf.
pub fn clear(state: &mut AppState) {
    if state.selection.selected.take().is_some() {
        log::info!("Auswahl aufgehoben");
    }
}
