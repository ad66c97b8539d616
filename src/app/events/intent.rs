use chrono::{DateTime, Local};

use crate::core::{LayerKey, Station};
use crate::shared::DashboardOptions;

/// App-Intent-Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Layer-Toggle im Control-Panel umgeschaltet
    LayerToggled { key: LayerKey, visible: bool },
    /// Marker auf der Karte angeklickt
    StationPicked { station: &'static Station },
    /// Auswahl explizit aufgehoben (✕-Button oder Escape)
    SelectionCleared,
    /// Aktualisierungs-Tick ist abgelaufen
    RefreshTicked { at: DateTime<Local> },
    /// Erreichbarkeits-Probe meldet neuen Zustand
    ConnectivityChanged { online: bool },
    /// Karten-Widget meldet geänderte Zoomstufe
    MapViewChanged { zoom: f64 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Karte auf Startposition und Start-Zoom zurücksetzen
    ResetViewRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: DashboardOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
