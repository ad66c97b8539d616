use chrono::{DateTime, Local};

use crate::app::state::ZoomRequest;
use crate::core::{LayerKey, Station};
use crate::shared::DashboardOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Sichtbarkeit genau eines Layers setzen
    SetLayerVisible { key: LayerKey, visible: bool },
    /// Station auswählen (ersetzt eine bestehende Auswahl)
    SelectStation { station: &'static Station },
    /// Auswahl aufheben
    ClearSelection,
    /// Zeitpunkt des letzten Aktualisierungs-Ticks setzen
    UpdateLastRefresh { at: DateTime<Local> },
    /// Konnektivitäts-Zustand übernehmen
    SetConnectivity { online: bool },
    /// Gespiegelte Zoomstufe aktualisieren
    SetZoomLevel { zoom: f64 },
    /// Zoom-Änderung für das Karten-Widget vormerken
    RequestZoom { request: ZoomRequest },
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen und persistieren
    ApplyOptions { options: DashboardOptions },
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
}
