//! Handler für Status-Zustand: Konnektivität und Aktualisierungs-Tick.

use chrono::{DateTime, Local};

use crate::app::AppState;

/// Übernimmt das Ergebnis der Erreichbarkeits-Probe.
pub fn set_connectivity(state: &mut AppState, online: bool) {
    if state.status.online != online {
        log::info!(
            "Konnektivitaet: {}",
            if online { "online" } else { "offline" }
        );
    }
    state.status.online = online;
}

/// Setzt den Zeitpunkt des letzten Aktualisierungs-Ticks.
pub fn update_last_refresh(state: &mut AppState, at: DateTime<Local>) {
    state.status.last_updated = at;
}
