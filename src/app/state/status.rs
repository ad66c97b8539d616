//! Status-Zustand und abgeleiteter Status-Schnappschuss.

use chrono::{DateTime, Local};

use super::AppState;
use crate::core::visible_station_count;

/// Gespeicherter Status-Zustand: Konnektivität und letzter
/// Aktualisierungszeitpunkt. Alles Weitere wird abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusState {
    /// Letztes Ergebnis der Erreichbarkeits-Probe.
    /// Start: offline, bis der Monitor das erste Mal meldet.
    pub online: bool,
    /// Zeitpunkt des letzten Aktualisierungs-Ticks
    pub last_updated: DateTime<Local>,
}

impl StatusState {
    /// Startzustand zum angegebenen Zeitpunkt.
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            online: false,
            last_updated: now,
        }
    }
}

/// Abgeleiteter Schnappschuss für die Status-Leiste. Wird bei jedem
/// Frame neu berechnet und nie gespeichert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSnapshot {
    /// Konnektivität laut Probe
    pub online: bool,
    /// Zeitpunkt des letzten Aktualisierungs-Ticks
    pub last_updated: DateTime<Local>,
    /// Anzahl der aktuell sichtbaren Bahnhöfe
    pub visible_stations: usize,
    /// Anzahl der Züge auf der Karte (Zug-Layer hat noch keine Daten)
    pub trains: usize,
    /// Aktuelle Zoomstufe der Karte
    pub zoom: f64,
}

impl StatusSnapshot {
    /// Leitet den Schnappschuss aus dem aktuellen App-Zustand ab.
    pub fn capture(state: &AppState) -> Self {
        Self {
            online: state.status.online,
            last_updated: state.status.last_updated,
            visible_stations: visible_station_count(&state.layers),
            trains: 0,
            zoom: state.view.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerKey;

    #[test]
    fn test_snapshot_count_follows_layer_visibility() {
        let mut state = AppState::new();
        assert_eq!(StatusSnapshot::capture(&state).visible_stations, 15);

        state.layers.set(LayerKey::JunctionStations, false);
        assert_eq!(StatusSnapshot::capture(&state).visible_stations, 10);

        state.layers.set(LayerKey::MajorStations, false);
        assert_eq!(StatusSnapshot::capture(&state).visible_stations, 0);
    }

    #[test]
    fn test_snapshot_train_count_is_zero_without_train_data() {
        let mut state = AppState::new();
        state.layers.set(LayerKey::Trains, true);
        assert_eq!(StatusSnapshot::capture(&state).trains, 0);
    }

    #[test]
    fn test_snapshot_starts_offline() {
        let state = AppState::new();
        assert!(!StatusSnapshot::capture(&state).online);
    }
}
